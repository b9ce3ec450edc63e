//! The three state-transition operators.
//!
//! | Operator | Transition |
//! |---|---|
//! | [`infuse`] | `POTENTIAL -> PRESENCE` |
//! | [`collapse`] | `PRESENCE -> POTENTIAL` |
//! | [`merge`] | `PRESENCE + PRESENCE -> PRESENCE` |
//!
//! Each module exposes a `*_with` function taking its config section and a
//! convenience function using the defaults. Operators borrow their inputs
//! and return a freshly constructed state; nothing is mutated in place.

pub mod collapse;
pub mod infuse;
pub mod merge;
