//! Value types transformed by the Emergence math engine.
//!
//! Covers the validated six-dimension [`Context`], the partial [`Stimulus`]
//! patch applied during a transition, and the [`EmergenceState`] snapshot
//! itself. Every type here validates on construction and on
//! deserialization, so a value that exists is a value that satisfies its
//! bounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::enums::{Dimension, GenesisType, Phase};
use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// The continuous context vector of a state.
///
/// All six dimensions are always populated. Fields are private so a
/// `Context` can only be obtained through [`Context::new`], the clamping
/// builders, or deserialization, each of which enforces the bounds listed
/// on [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Context {
    /// Affective direction in `[-1, 1]`.
    #[ts(as = "String")]
    valence: Decimal,
    /// Felt intensity in `[0, 1]`.
    #[ts(as = "String")]
    persistence: Decimal,
    /// Directional anchoring in `[0, 1]`.
    #[ts(as = "String")]
    grounding: Decimal,
    /// Sourcing strength, `>= 0`.
    #[ts(as = "String")]
    source: Decimal,
    /// Understanding in `[0, 1]`.
    #[ts(as = "String")]
    clarity: Decimal,
    /// Association count, `>= 0`.
    #[ts(as = "String")]
    associations: Decimal,
}

impl Context {
    /// Build a context from all six dimensions, validating each bound.
    pub fn new(
        valence: Decimal,
        persistence: Decimal,
        grounding: Decimal,
        source: Decimal,
        clarity: Decimal,
        associations: Decimal,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            valence: Dimension::Valence.validate(valence)?,
            persistence: Dimension::Persistence.validate(persistence)?,
            grounding: Dimension::Grounding.validate(grounding)?,
            source: Dimension::Source.validate(source)?,
            clarity: Dimension::Clarity.validate(clarity)?,
            associations: Dimension::Associations.validate(associations)?,
        })
    }

    /// Read one dimension by name.
    pub const fn get(&self, dimension: Dimension) -> Decimal {
        match dimension {
            Dimension::Valence => self.valence,
            Dimension::Persistence => self.persistence,
            Dimension::Grounding => self.grounding,
            Dimension::Source => self.source,
            Dimension::Clarity => self.clarity,
            Dimension::Associations => self.associations,
        }
    }

    /// Return a copy with `dimension` replaced, rejecting out-of-range values.
    pub fn with(self, dimension: Dimension, value: Decimal) -> Result<Self, ValidationError> {
        let value = dimension.validate(value)?;
        Ok(self.replace(dimension, value))
    }

    /// Return a copy with `dimension` replaced by `value` clamped into range.
    pub fn with_clamped(self, dimension: Dimension, value: Decimal) -> Self {
        self.replace(dimension, dimension.clamp(value))
    }

    /// Iterate `(dimension, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Decimal)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Affective direction in `[-1, 1]`.
    pub const fn valence(&self) -> Decimal {
        self.valence
    }

    /// Felt intensity in `[0, 1]`.
    pub const fn persistence(&self) -> Decimal {
        self.persistence
    }

    /// Directional anchoring in `[0, 1]`.
    pub const fn grounding(&self) -> Decimal {
        self.grounding
    }

    /// Sourcing strength, `>= 0`.
    pub const fn source(&self) -> Decimal {
        self.source
    }

    /// Understanding in `[0, 1]`.
    pub const fn clarity(&self) -> Decimal {
        self.clarity
    }

    /// Association count, `>= 0`.
    pub const fn associations(&self) -> Decimal {
        self.associations
    }

    const fn replace(mut self, dimension: Dimension, value: Decimal) -> Self {
        match dimension {
            Dimension::Valence => self.valence = value,
            Dimension::Persistence => self.persistence = value,
            Dimension::Grounding => self.grounding = value,
            Dimension::Source => self.source = value,
            Dimension::Clarity => self.clarity = value,
            Dimension::Associations => self.associations = value,
        }
        self
    }
}

impl Default for Context {
    /// The reference initial seed context: a faint, mostly-unclear potential.
    fn default() -> Self {
        Self {
            valence: Decimal::ZERO,
            persistence: Decimal::new(1, 1),
            grounding: Decimal::new(2, 1),
            source: Decimal::ZERO,
            clarity: Decimal::new(5, 1),
            associations: Decimal::ZERO,
        }
    }
}

/// Unvalidated wire shape of a [`Context`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ContextRecord {
    valence: Decimal,
    persistence: Decimal,
    grounding: Decimal,
    source: Decimal,
    clarity: Decimal,
    associations: Decimal,
}

impl<'de> Deserialize<'de> for Context {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let r = ContextRecord::deserialize(deserializer)?;
        Self::new(
            r.valence,
            r.persistence,
            r.grounding,
            r.source,
            r.clarity,
            r.associations,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Stimulus
// ---------------------------------------------------------------------------

/// A partial context patch applied during a transition.
///
/// Any subset of the six dimensions may be present. Each present entry must
/// lie inside its dimension's bound. Which entries an operator reads is part
/// of that operator's definition; dimensions an operator does not read are
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stimulus {
    /// Target affective direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    valence: Option<Decimal>,
    /// Target felt intensity.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    persistence: Option<Decimal>,
    /// Target anchoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    grounding: Option<Decimal>,
    /// Target sourcing strength.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    source: Option<Decimal>,
    /// Target understanding.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    clarity: Option<Decimal>,
    /// Association entry. No operator reads it.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    associations: Option<Decimal>,
}

impl Stimulus {
    /// An empty stimulus (no dimension present).
    pub const fn new() -> Self {
        Self {
            valence: None,
            persistence: None,
            grounding: None,
            source: None,
            clarity: None,
            associations: None,
        }
    }

    /// Build a stimulus from `(dimension, value)` entries.
    ///
    /// Later entries for the same dimension replace earlier ones.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Dimension, Decimal)>,
    ) -> Result<Self, ValidationError> {
        entries
            .into_iter()
            .try_fold(Self::new(), |stimulus, (dimension, value)| stimulus.with(dimension, value))
    }

    /// Return a copy with `dimension` set to `value`.
    pub fn with(mut self, dimension: Dimension, value: Decimal) -> Result<Self, ValidationError> {
        let value = Some(dimension.validate(value)?);
        match dimension {
            Dimension::Valence => self.valence = value,
            Dimension::Persistence => self.persistence = value,
            Dimension::Grounding => self.grounding = value,
            Dimension::Source => self.source = value,
            Dimension::Clarity => self.clarity = value,
            Dimension::Associations => self.associations = value,
        }
        Ok(self)
    }

    /// A stimulus carrying only a valence entry.
    pub fn valence_only(valence: Decimal) -> Result<Self, ValidationError> {
        Self::new().with(Dimension::Valence, valence)
    }

    /// The entry for `dimension`, if present.
    pub const fn get(&self, dimension: Dimension) -> Option<Decimal> {
        match dimension {
            Dimension::Valence => self.valence,
            Dimension::Persistence => self.persistence,
            Dimension::Grounding => self.grounding,
            Dimension::Source => self.source,
            Dimension::Clarity => self.clarity,
            Dimension::Associations => self.associations,
        }
    }

    /// Present entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Decimal)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|value| (d, value)))
    }

    /// Whether no dimension is present.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Unvalidated wire shape of a [`Stimulus`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StimulusRecord {
    #[serde(default)]
    valence: Option<Decimal>,
    #[serde(default)]
    persistence: Option<Decimal>,
    #[serde(default)]
    grounding: Option<Decimal>,
    #[serde(default)]
    source: Option<Decimal>,
    #[serde(default)]
    clarity: Option<Decimal>,
    #[serde(default)]
    associations: Option<Decimal>,
}

impl<'de> Deserialize<'de> for Stimulus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let r = StimulusRecord::deserialize(deserializer)?;
        let entries = [
            (Dimension::Valence, r.valence),
            (Dimension::Persistence, r.persistence),
            (Dimension::Grounding, r.grounding),
            (Dimension::Source, r.source),
            (Dimension::Clarity, r.clarity),
            (Dimension::Associations, r.associations),
        ];
        Self::from_entries(entries.into_iter().filter_map(|(d, v)| v.map(|v| (d, v))))
            .map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// EmergenceState
// ---------------------------------------------------------------------------

/// One immutable snapshot of a contextual qualitative state.
///
/// Serialized as `{"value": 0|1, "context": {...}, "genesisType": "..."}`.
/// There are no setters: the engine's operators always return a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EmergenceState {
    /// Presence indicator, `0` or `1`.
    #[ts(as = "u8")]
    value: Phase,
    /// The six-dimension context vector.
    context: Context,
    /// Which operation produced this state.
    genesis_type: GenesisType,
}

impl EmergenceState {
    /// Seed a state from a raw presence indicator and a complete context.
    ///
    /// Fails with [`ValidationError::InvalidValue`] if `value` is not `0`
    /// or `1`. The genesis type is [`GenesisType::Seed`].
    pub fn new(value: u8, context: Context) -> Result<Self, ValidationError> {
        let phase = Phase::try_from(value)?;
        Ok(Self::seed(phase, context))
    }

    /// Seed a state in `phase` from an already-validated context.
    pub const fn seed(phase: Phase, context: Context) -> Self {
        Self::from_parts(phase, context, GenesisType::Seed)
    }

    /// Assemble a state with an explicit provenance tag.
    ///
    /// Meant for the operators in `emergence-core` and for rehydrating
    /// states that were stored after an operator produced them. Callers
    /// seeding new states should use [`EmergenceState::new`] or
    /// [`EmergenceState::seed`], which always tag [`GenesisType::Seed`].
    /// The tag is provenance only: no operator reads it, so a mislabeled
    /// state still obeys every dimension bound.
    pub const fn from_parts(phase: Phase, context: Context, genesis_type: GenesisType) -> Self {
        Self {
            value: phase,
            context,
            genesis_type,
        }
    }

    /// The super-state this snapshot occupies.
    pub const fn phase(&self) -> Phase {
        self.value
    }

    /// The binary presence indicator (`0` or `1`).
    pub const fn value(&self) -> u8 {
        self.value.value()
    }

    /// Whether the state is in [`Phase::Presence`].
    pub const fn is_presence(&self) -> bool {
        matches!(self.value, Phase::Presence)
    }

    /// Whether the state is in [`Phase::Potential`].
    pub const fn is_potential(&self) -> bool {
        matches!(self.value, Phase::Potential)
    }

    /// The context vector.
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Which operation produced this state.
    pub const fn genesis_type(&self) -> GenesisType {
        self.genesis_type
    }
}

impl Default for EmergenceState {
    /// A potential seed over [`Context::default`].
    fn default() -> Self {
        Self::seed(Phase::Potential, Context::default())
    }
}

/// Unvalidated wire shape of an [`EmergenceState`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StateRecord {
    value: u8,
    context: Context,
    #[serde(default)]
    genesis_type: GenesisType,
}

impl<'de> Deserialize<'de> for EmergenceState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let r = StateRecord::deserialize(deserializer)?;
        let phase = Phase::try_from(r.value).map_err(serde::de::Error::custom)?;
        Ok(Self::from_parts(phase, r.context, r.genesis_type))
    }
}
