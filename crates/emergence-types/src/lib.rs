//! Shared type definitions for the Emergence math engine.
//!
//! This crate holds the value types that the operators in `emergence-core`
//! transform. Types are plain immutable data: they validate on construction
//! and flow downstream to `TypeScript` via `ts-rs` for the web client that
//! seeds states and renders results.
//!
//! # Modules
//!
//! - [`enums`] -- [`Phase`], [`GenesisType`], and the bounded [`Dimension`] set
//! - [`error`] -- [`ValidationError`] raised on invalid construction
//! - [`structs`] -- [`Context`], [`Stimulus`], and [`EmergenceState`]

pub mod enums;
pub mod error;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Dimension, GenesisType, Phase};
pub use error::ValidationError;
pub use structs::{Context, EmergenceState, Stimulus};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the client-facing types.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::enums::GenesisType::export_all();
        let _ = crate::enums::Dimension::export_all();
        let _ = crate::structs::Context::export_all();
        let _ = crate::structs::Stimulus::export_all();
        let _ = crate::structs::EmergenceState::export_all();
    }
}
