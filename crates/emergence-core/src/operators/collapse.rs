//! Collapse: the bleed-out from presence back to potential.

use emergence_types::{Dimension, EmergenceState, GenesisType, Phase, Stimulus};
use rust_decimal::Decimal;
use tracing::debug;

use crate::arith;
use crate::config::CollapseConfig;
use crate::error::{EmergenceError, require_phase};

/// Collapse `state` under `stimulus` using the default [`CollapseConfig`].
pub fn collapse(
    state: &EmergenceState,
    stimulus: &Stimulus,
) -> Result<EmergenceState, EmergenceError> {
    collapse_with(&CollapseConfig::default(), state, stimulus)
}

/// Collapse `state` under `stimulus`.
///
/// Requires `state` to be in [`Phase::Presence`]. With `m` the magnitude of
/// the stimulus valence (zero when absent):
///
/// ```text
/// persistence' = persistence * (1 - persistence_decay * m)
/// clarity'     = clarity     * (1 - clarity_decay * m)
/// source'      = source      * (1 - source_decay)
/// valence'     = blend(valence, stimulus.valence, weight)      if present
/// grounding'   = blend(grounding, stimulus.grounding, weight)  if present
/// ```
///
/// Any nonzero `m` strictly lowers a positive persistence, even when the
/// product rounds back to the prior value at full decimal precision.
/// `associations` is unchanged and other stimulus entries are ignored. The
/// result is clamped, in [`Phase::Potential`], tagged
/// [`GenesisType::Collapse`].
pub fn collapse_with(
    config: &CollapseConfig,
    state: &EmergenceState,
    stimulus: &Stimulus,
) -> Result<EmergenceState, EmergenceError> {
    require_phase("collapse", "state", state, Phase::Presence)?;

    let prior = *state.context();
    let magnitude = stimulus
        .get(Dimension::Valence)
        .map_or(Decimal::ZERO, |valence| valence.abs());

    let persistence = arith::strict_decay(prior.persistence(), config.persistence_decay, magnitude);
    let clarity = arith::decay(prior.clarity(), config.clarity_decay, magnitude);
    let source = arith::decay(prior.source(), config.source_decay, Decimal::ONE);

    let mut next = prior
        .with_clamped(Dimension::Persistence, persistence)
        .with_clamped(Dimension::Clarity, clarity)
        .with_clamped(Dimension::Source, source);

    for dimension in [Dimension::Valence, Dimension::Grounding] {
        if let Some(target) = stimulus.get(dimension) {
            let blended = arith::blend(prior.get(dimension), target, config.weight);
            next = next.with_clamped(dimension, blended);
        }
    }

    debug!(
        %magnitude,
        persistence = %next.persistence(),
        clarity = %next.clarity(),
        source = %next.source(),
        "Collapsed presence into potential"
    );

    Ok(EmergenceState::from_parts(Phase::Potential, next, GenesisType::Collapse))
}
