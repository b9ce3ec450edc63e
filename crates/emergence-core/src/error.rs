//! Error types for the emergence-core crate.
//!
//! Operators never panic and never return a state that violates its bounds.
//! They fail only when called from the wrong super-state.

use emergence_types::{EmergenceState, Phase, ValidationError};
use tracing::debug;

/// Errors that can occur when applying an operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmergenceError {
    /// An operator was applied to a state in the wrong super-state.
    #[error("invalid transition: {operation} requires {operand} in {expected}, found {found}")]
    InvalidTransition {
        /// The operator that was attempted (`infuse`, `collapse`, `merge`).
        operation: &'static str,
        /// Which argument was rejected (`state`, `left`, `right`).
        operand: &'static str,
        /// The super-state the operator requires.
        expected: Phase,
        /// The super-state the argument was actually in.
        found: Phase,
    },

    /// A state or stimulus failed construction-time validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reject `state` unless it occupies `expected`.
pub(crate) fn require_phase(
    operation: &'static str,
    operand: &'static str,
    state: &EmergenceState,
    expected: Phase,
) -> Result<(), EmergenceError> {
    let found = state.phase();
    if found == expected {
        return Ok(());
    }
    debug!(operation, operand, %expected, %found, "Transition rejected");
    Err(EmergenceError::InvalidTransition {
        operation,
        operand,
        expected,
        found,
    })
}
