//! Validation errors raised when constructing states and stimuli.

use rust_decimal::Decimal;

use crate::enums::Dimension;

/// A value supplied at construction time violates a declared invariant.
///
/// Raised by [`EmergenceState::new`], [`Context::new`], [`Stimulus`]
/// builders, and deserialization. Never raised by an operator: operators
/// clamp their own outputs.
///
/// [`EmergenceState::new`]: crate::structs::EmergenceState::new
/// [`Context::new`]: crate::structs::Context::new
/// [`Stimulus`]: crate::structs::Stimulus
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The presence indicator was not `0` or `1`.
    #[error("invalid presence value {value}: must be 0 or 1")]
    InvalidValue {
        /// The rejected indicator.
        value: u8,
    },

    /// A dimension lies outside its declared bound.
    #[error("{dimension} = {value} is out of bounds [{lower}, {}]", display_upper(.upper.as_ref()))]
    OutOfBounds {
        /// The offending dimension.
        dimension: Dimension,
        /// The rejected value.
        value: Decimal,
        /// Inclusive lower bound of the dimension.
        lower: Decimal,
        /// Inclusive upper bound, `None` when unbounded above.
        upper: Option<Decimal>,
    },
}

/// Render an optional upper bound, using `inf` for unbounded dimensions.
fn display_upper(upper: Option<&Decimal>) -> String {
    upper.map_or_else(|| String::from("inf"), ToString::to_string)
}
