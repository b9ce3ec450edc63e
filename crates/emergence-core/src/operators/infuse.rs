//! Infuse: the rise from potential to presence.

use emergence_types::{Dimension, EmergenceState, GenesisType, Phase, Stimulus};
use tracing::debug;

use crate::arith;
use crate::config::InfuseConfig;
use crate::error::{EmergenceError, require_phase};

/// Infuse `state` with `stimulus` using the default [`InfuseConfig`].
pub fn infuse(state: &EmergenceState, stimulus: &Stimulus) -> Result<EmergenceState, EmergenceError> {
    infuse_with(&InfuseConfig::default(), state, stimulus)
}

/// Infuse `state` with `stimulus`.
///
/// Requires `state` to be in [`Phase::Potential`]. Every dimension present
/// in the stimulus is blended as `prior*(1-w) + stimulus*w`; absent
/// dimensions carry over. `associations` is never blended: it grows by
/// `association_gain` and any stimulus entry for it is ignored. The result
/// is clamped, in [`Phase::Presence`], tagged [`GenesisType::Infusion`].
pub fn infuse_with(
    config: &InfuseConfig,
    state: &EmergenceState,
    stimulus: &Stimulus,
) -> Result<EmergenceState, EmergenceError> {
    require_phase("infuse", "state", state, Phase::Potential)?;

    let prior = *state.context();
    let mut next = prior;
    for (dimension, target) in stimulus.iter() {
        if dimension == Dimension::Associations {
            continue;
        }
        let blended = arith::blend(prior.get(dimension), target, config.weight);
        next = next.with_clamped(dimension, blended);
    }

    let associations = prior.associations().saturating_add(config.association_gain);
    next = next.with_clamped(Dimension::Associations, associations);

    debug!(
        valence = %next.valence(),
        grounding = %next.grounding(),
        associations = %next.associations(),
        "Infused potential into presence"
    );

    Ok(EmergenceState::from_parts(Phase::Presence, next, GenesisType::Infusion))
}
