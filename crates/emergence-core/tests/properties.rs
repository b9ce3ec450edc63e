//! Behavioral tests for the emergence operators.
//!
//! The reference scenarios pin the observable results of each operator.
//! The sweeps drive randomly generated (but seeded, so reproducible) states
//! and stimuli through the operators and check the invariants that must hold
//! for every valid input.

#![allow(clippy::unwrap_used)]

use emergence_core::{
    EmergenceEngine, EmergenceError, Operation, coherence, collapse, infuse, merge,
};
use emergence_types::{Context, Dimension, EmergenceState, GenesisType, Phase, Stimulus};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const SWEEP_SEEDS: u64 = 64;
const STEPS_PER_CHAIN: usize = 40;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// A value inside `dimension`'s bound with three decimal places.
fn random_value(rng: &mut SmallRng, dimension: Dimension) -> Decimal {
    match dimension {
        Dimension::Valence => Decimal::new(rng.random_range(-1000..=1000), 3),
        Dimension::Persistence | Dimension::Grounding | Dimension::Clarity => {
            Decimal::new(rng.random_range(0..=1000), 3)
        }
        Dimension::Source => Decimal::new(rng.random_range(0..=3000), 3),
        Dimension::Associations => Decimal::from(rng.random_range(0..=12_i64)),
    }
}

fn random_context(rng: &mut SmallRng) -> Context {
    Context::new(
        random_value(rng, Dimension::Valence),
        random_value(rng, Dimension::Persistence),
        random_value(rng, Dimension::Grounding),
        random_value(rng, Dimension::Source),
        random_value(rng, Dimension::Clarity),
        random_value(rng, Dimension::Associations),
    )
    .unwrap()
}

fn random_state(rng: &mut SmallRng, phase: Phase) -> EmergenceState {
    EmergenceState::seed(phase, random_context(rng))
}

/// A stimulus with a random subset of dimensions present.
fn random_stimulus(rng: &mut SmallRng) -> Stimulus {
    let mut stimulus = Stimulus::new();
    for dimension in Dimension::ALL {
        if rng.random_bool(0.5) {
            let value = random_value(rng, dimension);
            stimulus = stimulus.with(dimension, value).unwrap();
        }
    }
    stimulus
}

fn assert_in_bounds(state: &EmergenceState) {
    for (dimension, value) in state.context().iter() {
        assert!(
            dimension.contains(value),
            "{dimension} = {value} escaped its bound in {state:?}"
        );
    }
}

fn dec(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn infuse_transforms_potential_into_presence() {
    let initial = EmergenceState::new(
        0,
        Context::new(dec(0, 0), dec(1, 1), dec(2, 1), dec(0, 0), dec(5, 1), dec(0, 0)).unwrap(),
    )
    .unwrap();
    let stimulus = Stimulus::from_entries([
        (Dimension::Valence, dec(8, 1)),
        (Dimension::Grounding, dec(5, 1)),
    ])
    .unwrap();

    let result = infuse(&initial, &stimulus).unwrap();

    assert_eq!(result.value(), 1);
    assert_eq!(result.genesis_type(), GenesisType::Infusion);
    assert!(result.context().valence() > dec(4, 1));
}

#[test]
fn collapse_returns_presence_to_potential() {
    let active = EmergenceState::new(
        1,
        Context::new(dec(8, 1), dec(8, 1), dec(5, 1), dec(10, 1), dec(8, 1), dec(5, 0)).unwrap(),
    )
    .unwrap();

    let result = collapse(&active, &Stimulus::valence_only(dec(-5, 1)).unwrap()).unwrap();

    assert_eq!(result.value(), 0);
    assert_eq!(result.genesis_type(), GenesisType::Collapse);
    assert!(result.context().persistence() < dec(8, 1));
}

#[test]
fn merge_amplifies_coherent_presences() {
    let a = EmergenceState::new(
        1,
        Context::new(dec(7, 1), dec(6, 1), dec(3, 1), dec(10, 1), dec(6, 1), dec(2, 0)).unwrap(),
    )
    .unwrap();
    let b = EmergenceState::new(
        1,
        Context::new(dec(8, 1), dec(6, 1), dec(4, 1), dec(10, 1), dec(6, 1), dec(3, 0)).unwrap(),
    )
    .unwrap();

    let result = merge(&a, &b).unwrap();

    assert_eq!(result.value(), 1);
    assert_eq!(result.genesis_type(), GenesisType::Merge);
    assert!(result.context().associations() > dec(5, 0));
}

#[test]
fn seeding_rejects_invalid_input() {
    assert!(EmergenceState::new(2, Context::default()).is_err());
    assert!(
        Context::new(dec(0, 0), dec(15, 1), dec(2, 1), dec(0, 0), dec(5, 1), dec(0, 0)).is_err()
    );
}

// ---------------------------------------------------------------------------
// Invariants over random inputs
// ---------------------------------------------------------------------------

#[test]
fn infuse_always_yields_presence() {
    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = random_state(&mut rng, Phase::Potential);
        let stimulus = random_stimulus(&mut rng);

        let result = infuse(&state, &stimulus).unwrap();
        assert_eq!(result.value(), 1);
        assert_eq!(result.genesis_type(), GenesisType::Infusion);
        assert_in_bounds(&result);
    }
}

#[test]
fn collapse_always_yields_potential() {
    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = random_state(&mut rng, Phase::Presence);
        let stimulus = random_stimulus(&mut rng);

        let result = collapse(&state, &stimulus).unwrap();
        assert_eq!(result.value(), 0);
        assert_eq!(result.genesis_type(), GenesisType::Collapse);
        assert_eq!(result.context().associations(), state.context().associations());
        assert_in_bounds(&result);
    }
}

#[test]
fn negative_valence_collapse_strictly_lowers_persistence() {
    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = random_state(&mut rng, Phase::Presence);
        if state.context().persistence() == Decimal::ZERO {
            continue;
        }
        let valence = dec(rng.random_range(-1000..=-1), 3);
        let stimulus = Stimulus::valence_only(valence).unwrap();

        let result = collapse(&state, &stimulus).unwrap();
        assert!(
            result.context().persistence() < state.context().persistence(),
            "persistence did not drop for valence {valence} from {state:?}"
        );
    }
}

#[test]
fn collapse_lowers_persistence_at_full_decimal_precision() {
    // The smallest representable magnitude, on either side of the product.
    let tiny = dec(1, 28);
    let faint = dec(-1, 28);
    let cases = [
        (dec(8, 1), faint),
        (tiny, dec(-5, 1)),
        (Decimal::ONE, faint),
        (tiny, faint),
    ];

    for (persistence, valence) in cases {
        let context = Context::default().with(Dimension::Persistence, persistence).unwrap();
        let state = EmergenceState::seed(Phase::Presence, context);
        let stimulus = Stimulus::valence_only(valence).unwrap();

        let result = collapse(&state, &stimulus).unwrap();
        assert!(
            result.context().persistence() < persistence,
            "persistence {persistence} did not drop under valence {valence}"
        );
        assert_in_bounds(&result);
    }
}

#[test]
fn unbounded_dimensions_at_their_limit_never_fail() {
    let huge = Context::default()
        .with(Dimension::Source, Decimal::MAX)
        .unwrap()
        .with(Dimension::Associations, Decimal::MAX)
        .unwrap();
    let potential = EmergenceState::seed(Phase::Potential, huge);
    let presence = EmergenceState::seed(Phase::Presence, huge);
    let stimulus = Stimulus::from_entries([
        (Dimension::Valence, dec(-5, 1)),
        (Dimension::Source, Decimal::MAX),
    ])
    .unwrap();

    let infused = infuse(&potential, &stimulus).unwrap();
    assert_eq!(infused.context().associations(), Decimal::MAX);
    assert_in_bounds(&infused);

    let merged = merge(&presence, &presence).unwrap();
    assert_eq!(merged.context().associations(), Decimal::MAX);
    assert!(merged.context().source() > Decimal::ZERO);
    assert_in_bounds(&merged);

    let collapsed = collapse(&presence, &stimulus).unwrap();
    assert_eq!(collapsed.context().associations(), Decimal::MAX);
    assert_in_bounds(&collapsed);
}

#[test]
fn merge_never_loses_associations() {
    let engine = EmergenceEngine::default();
    let threshold = engine.config().merge.coherence_threshold;

    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let a = random_state(&mut rng, Phase::Presence);
        let b = random_state(&mut rng, Phase::Presence);
        let sum = a
            .context()
            .associations()
            .checked_add(b.context().associations())
            .unwrap();

        let result = engine.merge(&a, &b).unwrap();
        assert_eq!(result.value(), 1);
        assert_eq!(result.genesis_type(), GenesisType::Merge);
        assert_in_bounds(&result);

        let score = coherence(a.context(), b.context());
        if score > threshold {
            assert!(result.context().associations() > sum);
        } else {
            assert_eq!(result.context().associations(), sum);
        }
    }
}

#[test]
fn infuse_then_collapse_round_trips_the_indicator() {
    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = random_state(&mut rng, Phase::Potential);
        let lifted = infuse(&state, &random_stimulus(&mut rng)).unwrap();
        let neutral = Stimulus::valence_only(Decimal::ZERO).unwrap();

        let returned = collapse(&lifted, &neutral).unwrap();
        assert_eq!(returned.value(), state.value());
    }
}

#[test]
fn bounds_hold_across_long_operator_chains() {
    let engine = EmergenceEngine::default();

    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = random_state(&mut rng, Phase::Potential);

        for _ in 0..STEPS_PER_CHAIN {
            let operation = match state.phase() {
                Phase::Potential => Operation::Infuse {
                    stimulus: random_stimulus(&mut rng),
                },
                Phase::Presence if rng.random_bool(0.5) => Operation::Merge {
                    other: random_state(&mut rng, Phase::Presence),
                },
                Phase::Presence => Operation::Collapse {
                    stimulus: random_stimulus(&mut rng),
                },
            };
            state = engine.apply(&state, &operation).unwrap();
            assert_in_bounds(&state);
        }
    }
}

#[test]
fn wrong_super_state_is_always_rejected() {
    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let potential = random_state(&mut rng, Phase::Potential);
        let presence = random_state(&mut rng, Phase::Presence);
        let stimulus = random_stimulus(&mut rng);

        assert!(matches!(
            infuse(&presence, &stimulus),
            Err(EmergenceError::InvalidTransition { .. })
        ));
        assert!(matches!(
            collapse(&potential, &stimulus),
            Err(EmergenceError::InvalidTransition { .. })
        ));
        assert!(matches!(
            merge(&potential, &presence),
            Err(EmergenceError::InvalidTransition { .. })
        ));
        assert!(matches!(
            merge(&presence, &potential),
            Err(EmergenceError::InvalidTransition { .. })
        ));
        assert!(matches!(
            merge(&potential, &potential),
            Err(EmergenceError::InvalidTransition { .. })
        ));
    }
}

#[test]
fn operators_are_referentially_transparent() {
    for seed in 0..SWEEP_SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let potential = random_state(&mut rng, Phase::Potential);
        let presence = random_state(&mut rng, Phase::Presence);
        let other = random_state(&mut rng, Phase::Presence);
        let stimulus = random_stimulus(&mut rng);

        assert_eq!(infuse(&potential, &stimulus), infuse(&potential, &stimulus));
        assert_eq!(collapse(&presence, &stimulus), collapse(&presence, &stimulus));
        assert_eq!(merge(&presence, &other), merge(&presence, &other));
    }
}

#[test]
fn persisted_results_rehydrate_identically() {
    let mut rng = SmallRng::seed_from_u64(7);
    let state = random_state(&mut rng, Phase::Potential);
    let lifted = infuse(&state, &random_stimulus(&mut rng)).unwrap();

    let json = serde_json::to_string(&lifted).unwrap();
    let back: EmergenceState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lifted);
    assert_eq!(back.genesis_type(), GenesisType::Infusion);
}
