//! Enumeration types for the Emergence math engine.
//!
//! Covers the two super-states a state can occupy ([`Phase`]), the provenance
//! tag recorded on every state ([`GenesisType`]), and the six named context
//! dimensions with their declared bounds ([`Dimension`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The discrete presence indicator of an [`EmergenceState`].
///
/// Serialized as the integer `0` or `1`. Any other integer is rejected with
/// [`ValidationError::InvalidValue`].
///
/// [`EmergenceState`]: crate::structs::EmergenceState
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Phase {
    /// `value = 0`: a context exists but has not crystallized into presence.
    Potential,
    /// `value = 1`: the context is actively manifest.
    Presence,
}

impl Phase {
    /// The binary indicator for this phase (`0` or `1`).
    pub const fn value(self) -> u8 {
        match self {
            Self::Potential => 0,
            Self::Presence => 1,
        }
    }

    /// Interpret a binary indicator. Returns `None` for anything but `0`/`1`.
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Potential),
            1 => Some(Self::Presence),
            _ => None,
        }
    }

    /// Upper-case name used in transition diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Potential => "POTENTIAL",
            Self::Presence => "PRESENCE",
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(ValidationError::InvalidValue { value })
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.value()
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GenesisType
// ---------------------------------------------------------------------------

/// How a state came into being.
///
/// Set exactly once when the state is constructed and never changed
/// afterward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum GenesisType {
    /// Supplied from outside the engine (an initial or default state).
    #[default]
    Seed,
    /// Produced by the infuse operator.
    Infusion,
    /// Produced by the collapse operator.
    Collapse,
    /// Produced by the merge operator.
    Merge,
}

impl GenesisType {
    /// The lower-case wire name (`"seed"`, `"infusion"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Infusion => "infusion",
            Self::Collapse => "collapse",
            Self::Merge => "merge",
        }
    }
}

impl core::fmt::Display for GenesisType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// One named dimension of a state's context vector.
///
/// | Dimension | Bound |
/// |---|---|
/// | `valence` | `[-1, 1]` |
/// | `persistence` | `[0, 1]` |
/// | `grounding` | `[0, 1]` |
/// | `source` | `>= 0` |
/// | `clarity` | `[0, 1]` |
/// | `associations` | `>= 0` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Dimension {
    /// Affective direction, negative to positive.
    Valence,
    /// Felt intensity that carries the state forward.
    Persistence,
    /// Directional anchoring of the experience.
    Grounding,
    /// Strength of the sourcing behind a presence.
    Source,
    /// Understanding of what the experience is about.
    Clarity,
    /// Count of associations formed, tolerant of fractional amplification.
    Associations,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Valence,
        Self::Persistence,
        Self::Grounding,
        Self::Source,
        Self::Clarity,
        Self::Associations,
    ];

    /// The lower-case wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valence => "valence",
            Self::Persistence => "persistence",
            Self::Grounding => "grounding",
            Self::Source => "source",
            Self::Clarity => "clarity",
            Self::Associations => "associations",
        }
    }

    /// Inclusive lower bound.
    pub const fn lower(self) -> Decimal {
        match self {
            Self::Valence => Decimal::NEGATIVE_ONE,
            Self::Persistence
            | Self::Grounding
            | Self::Source
            | Self::Clarity
            | Self::Associations => Decimal::ZERO,
        }
    }

    /// Inclusive upper bound, or `None` when the dimension is unbounded above.
    pub const fn upper(self) -> Option<Decimal> {
        match self {
            Self::Valence | Self::Persistence | Self::Grounding | Self::Clarity => {
                Some(Decimal::ONE)
            }
            Self::Source | Self::Associations => None,
        }
    }

    /// Width of the declared range, used to normalize differences.
    ///
    /// `None` for dimensions without an upper bound.
    pub fn span(self) -> Option<Decimal> {
        self.upper().and_then(|upper| upper.checked_sub(self.lower()))
    }

    /// Whether `value` lies inside this dimension's declared bound.
    pub fn contains(self, value: Decimal) -> bool {
        value >= self.lower() && self.upper().is_none_or(|upper| value <= upper)
    }

    /// Clamp `value` into this dimension's declared bound.
    pub fn clamp(self, value: Decimal) -> Decimal {
        let lower = self.lower();
        if value < lower {
            return lower;
        }
        match self.upper() {
            Some(upper) if value > upper => upper,
            _ => value,
        }
    }

    /// Check `value` against the bound, returning it unchanged when valid.
    pub fn validate(self, value: Decimal) -> Result<Decimal, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfBounds {
                dimension: self,
                value,
                lower: self.lower(),
                upper: self.upper(),
            })
        }
    }
}

impl core::fmt::Display for Dimension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
