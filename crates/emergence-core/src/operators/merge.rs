//! Merge: two presences combine into one, amplified when coherent.

use emergence_types::{Dimension, EmergenceState, GenesisType, Phase};
use tracing::debug;

use crate::arith;
use crate::coherence::coherence;
use crate::config::MergeConfig;
use crate::error::{EmergenceError, require_phase};

/// Dimensions combined as a plain midpoint.
const AVERAGED_DIMENSIONS: [Dimension; 5] = [
    Dimension::Valence,
    Dimension::Persistence,
    Dimension::Grounding,
    Dimension::Source,
    Dimension::Clarity,
];

/// Merge two presences using the default [`MergeConfig`].
pub fn merge(left: &EmergenceState, right: &EmergenceState) -> Result<EmergenceState, EmergenceError> {
    merge_with(&MergeConfig::default(), left, right)
}

/// Merge two presences.
///
/// Both inputs must be in [`Phase::Presence`]. Valence, persistence,
/// grounding, source, and clarity become the midpoint of the inputs.
/// Associations become the sum of both counts, plus `amplification_bonus`
/// when the inputs' [`coherence`] strictly exceeds `coherence_threshold`.
/// The result is clamped, in [`Phase::Presence`], tagged
/// [`GenesisType::Merge`].
pub fn merge_with(
    config: &MergeConfig,
    left: &EmergenceState,
    right: &EmergenceState,
) -> Result<EmergenceState, EmergenceError> {
    require_phase("merge", "left", left, Phase::Presence)?;
    require_phase("merge", "right", right, Phase::Presence)?;

    let a = left.context();
    let b = right.context();
    let score = coherence(a, b);

    let mut next = *a;
    for dimension in AVERAGED_DIMENSIONS {
        let mid = arith::midpoint(a.get(dimension), b.get(dimension));
        next = next.with_clamped(dimension, mid);
    }

    let sum = a.associations().saturating_add(b.associations());
    let amplified = score > config.coherence_threshold;
    let associations = if amplified {
        sum.saturating_add(config.amplification_bonus)
    } else {
        sum
    };
    next = next.with_clamped(Dimension::Associations, associations);

    debug!(
        coherence = %score,
        amplified,
        associations = %next.associations(),
        "Merged presences"
    );

    Ok(EmergenceState::from_parts(Phase::Presence, next, GenesisType::Merge))
}
