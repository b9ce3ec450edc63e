//! Configured entry point for applying operators.
//!
//! [`EmergenceEngine`] owns a validated [`MathConfig`] and dispatches to the
//! operator functions. It holds no mutable state: one engine may be shared
//! across threads and used for any number of independent chains.
//!
//! [`Operation`] describes a single step so that callers can record, replay,
//! or batch transitions. [`EmergenceEngine::apply_all`] threads each result
//! into the next step explicitly.

use emergence_types::{EmergenceState, Stimulus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigError, MathConfig};
use crate::error::EmergenceError;
use crate::operators::{collapse, infuse, merge};

/// One operator application, minus the state it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Infuse the current state with a stimulus.
    Infuse {
        /// The incoming stimulus.
        stimulus: Stimulus,
    },
    /// Collapse the current state under a stimulus.
    Collapse {
        /// The collapsing force.
        stimulus: Stimulus,
    },
    /// Merge the current state with another presence.
    Merge {
        /// The right-hand operand.
        other: EmergenceState,
    },
}

impl Operation {
    /// The operator name (`infuse`, `collapse`, `merge`).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Infuse { .. } => "infuse",
            Self::Collapse { .. } => "collapse",
            Self::Merge { .. } => "merge",
        }
    }
}

/// Applies operators with a fixed, validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmergenceEngine {
    config: MathConfig,
}

impl EmergenceEngine {
    /// Create an engine, rejecting configs that fail [`MathConfig::validate`].
    pub fn new(config: MathConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this engine applies.
    pub const fn config(&self) -> &MathConfig {
        &self.config
    }

    /// `POTENTIAL -> PRESENCE`. See [`infuse::infuse_with`].
    pub fn infuse(
        &self,
        state: &EmergenceState,
        stimulus: &Stimulus,
    ) -> Result<EmergenceState, EmergenceError> {
        infuse::infuse_with(&self.config.infuse, state, stimulus)
    }

    /// `PRESENCE -> POTENTIAL`. See [`collapse::collapse_with`].
    pub fn collapse(
        &self,
        state: &EmergenceState,
        stimulus: &Stimulus,
    ) -> Result<EmergenceState, EmergenceError> {
        collapse::collapse_with(&self.config.collapse, state, stimulus)
    }

    /// `PRESENCE + PRESENCE -> PRESENCE`. See [`merge::merge_with`].
    pub fn merge(
        &self,
        left: &EmergenceState,
        right: &EmergenceState,
    ) -> Result<EmergenceState, EmergenceError> {
        merge::merge_with(&self.config.merge, left, right)
    }

    /// Apply one operation to `state`. For merges `state` is the left operand.
    pub fn apply(
        &self,
        state: &EmergenceState,
        operation: &Operation,
    ) -> Result<EmergenceState, EmergenceError> {
        match operation {
            Operation::Infuse { stimulus } => self.infuse(state, stimulus),
            Operation::Collapse { stimulus } => self.collapse(state, stimulus),
            Operation::Merge { other } => self.merge(state, other),
        }
    }

    /// Apply `operations` in order, starting from `seed`.
    ///
    /// Each step receives the previous step's result. Stops at the first
    /// failing step and returns its error; an empty sequence returns `seed`.
    pub fn apply_all<'a>(
        &self,
        seed: EmergenceState,
        operations: impl IntoIterator<Item = &'a Operation>,
    ) -> Result<EmergenceState, EmergenceError> {
        operations
            .into_iter()
            .enumerate()
            .try_fold(seed, |state, (step, operation)| {
                self.apply(&state, operation).inspect_err(|err| {
                    debug!(step, operation = operation.name(), %err, "Sequence halted");
                })
            })
    }
}
