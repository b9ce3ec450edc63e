//! The Emergence math engine: pure operators over emergence states.
//!
//! A state is a binary presence indicator plus a bounded six-dimension
//! context (see `emergence-types`). Three operators move states between the
//! `POTENTIAL` and `PRESENCE` super-states:
//!
//! ```text
//! POTENTIAL --infuse-->          PRESENCE
//! PRESENCE  --collapse-->        POTENTIAL
//! PRESENCE  --merge(PRESENCE)--> PRESENCE
//! ```
//!
//! Every operator borrows its inputs and returns a new, clamped state. There
//! is no I/O (apart from [`MathConfig::from_file`]), no randomness, and no
//! shared mutable state.
//!
//! # Modules
//!
//! - [`coherence`](mod@coherence) -- Directional alignment score used to gate merge amplification.
//! - [`config`] -- Tunable constants loaded from `emergence-config.yaml` ([`MathConfig`]).
//! - [`engine`] -- [`EmergenceEngine`] and replayable [`Operation`] steps.
//! - [`error`] -- [`EmergenceError`] returned by every operator.
//! - [`operators`] -- [`infuse`], [`collapse`], and [`merge`].

mod arith;
pub mod coherence;
pub mod config;
pub mod engine;
pub mod error;
pub mod operators;

pub use coherence::coherence;
pub use config::{CollapseConfig, ConfigError, InfuseConfig, MathConfig, MergeConfig};
pub use engine::{EmergenceEngine, Operation};
pub use error::EmergenceError;
pub use operators::collapse::{collapse, collapse_with};
pub use operators::infuse::{infuse, infuse_with};
pub use operators::merge::{merge, merge_with};
