//! Tunable constants for the emergence operators.
//!
//! The blend weights, decay constants, coherence threshold, and
//! amplification bonus are design choices rather than recovered constants,
//! so they live in a typed config that can be loaded from
//! `emergence-config.yaml` and overridden per deployment. Every field has a
//! default; an empty file yields [`MathConfig::default`].
//!
//! Loading always validates: a config that could let an operator break its
//! observable contract (for example a collapse that does not decay
//! persistence) is rejected with [`ConfigError::Invalid`].

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but violates a constraint between tunables.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field (e.g. `merge.coherence_threshold`).
        field: &'static str,
        /// What the constraint requires.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
///
/// Mirrors the structure of `emergence-config.yaml`: one section per
/// operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathConfig {
    /// Infuse (potential to presence) parameters.
    #[serde(default)]
    pub infuse: InfuseConfig,

    /// Collapse (presence to potential) parameters.
    #[serde(default)]
    pub collapse: CollapseConfig,

    /// Merge (presence with presence) parameters.
    #[serde(default)]
    pub merge: MergeConfig,
}

impl MathConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value violates a constraint.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value violates a constraint.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constraint between tunables.
    ///
    /// - All weights, decays, and the coherence threshold lie in `[0, 1]`.
    /// - `collapse.weight < infuse.weight` (collapse is the softer blend).
    /// - `collapse.persistence_decay > 0` (collapse must lower persistence).
    /// - `collapse.clarity_decay <= collapse.persistence_decay`.
    /// - `merge.amplification_bonus > 0` and `infuse.association_gain >= 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("infuse.weight", self.infuse.weight)?;
        unit_interval("collapse.weight", self.collapse.weight)?;
        unit_interval("collapse.persistence_decay", self.collapse.persistence_decay)?;
        unit_interval("collapse.clarity_decay", self.collapse.clarity_decay)?;
        unit_interval("collapse.source_decay", self.collapse.source_decay)?;
        unit_interval("merge.coherence_threshold", self.merge.coherence_threshold)?;

        if self.collapse.weight >= self.infuse.weight {
            return Err(ConfigError::Invalid {
                field: "collapse.weight",
                reason: format!(
                    "must be below infuse.weight ({}), got {}",
                    self.infuse.weight, self.collapse.weight
                ),
            });
        }
        if self.collapse.persistence_decay <= Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "collapse.persistence_decay",
                reason: String::from("must be greater than 0"),
            });
        }
        if self.collapse.clarity_decay > self.collapse.persistence_decay {
            return Err(ConfigError::Invalid {
                field: "collapse.clarity_decay",
                reason: format!(
                    "must not exceed collapse.persistence_decay ({}), got {}",
                    self.collapse.persistence_decay, self.collapse.clarity_decay
                ),
            });
        }
        if self.merge.amplification_bonus <= Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "merge.amplification_bonus",
                reason: format!("must be greater than 0, got {}", self.merge.amplification_bonus),
            });
        }
        if self.infuse.association_gain < Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "infuse.association_gain",
                reason: format!("must not be negative, got {}", self.infuse.association_gain),
            });
        }
        Ok(())
    }
}

/// Reject values outside `[0, 1]`.
fn unit_interval(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must lie in [0, 1], got {value}"),
        });
    }
    Ok(())
}

/// Infuse parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfuseConfig {
    /// Weight `w` given to the stimulus in `prior*(1-w) + stimulus*w`.
    ///
    /// Stimulus-dominant so a strong positive stimulus lifts valence and
    /// grounding well above a near-zero prior.
    #[serde(default = "default_infuse_weight")]
    pub weight: Decimal,

    /// Associations added by every infusion.
    #[serde(default = "default_association_gain")]
    pub association_gain: Decimal,
}

impl Default for InfuseConfig {
    fn default() -> Self {
        Self {
            weight: default_infuse_weight(),
            association_gain: default_association_gain(),
        }
    }
}

/// Collapse parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseConfig {
    /// Blend weight toward the stimulus for `valence` and `grounding`.
    #[serde(default = "default_collapse_weight")]
    pub weight: Decimal,

    /// `k` in `persistence * (1 - k*|valence|)`.
    #[serde(default = "default_persistence_decay")]
    pub persistence_decay: Decimal,

    /// Per-unit-valence decay of clarity. Slower than persistence.
    #[serde(default = "default_clarity_decay")]
    pub clarity_decay: Decimal,

    /// Fraction of `source` lost on every collapse.
    #[serde(default = "default_source_decay")]
    pub source_decay: Decimal,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            weight: default_collapse_weight(),
            persistence_decay: default_persistence_decay(),
            clarity_decay: default_clarity_decay(),
            source_decay: default_source_decay(),
        }
    }
}

/// Merge parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Coherence a merge must strictly exceed to amplify.
    #[serde(default = "default_coherence_threshold")]
    pub coherence_threshold: Decimal,

    /// Associations added on top of the plain sum by a coherent merge.
    #[serde(default = "default_amplification_bonus")]
    pub amplification_bonus: Decimal,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            coherence_threshold: default_coherence_threshold(),
            amplification_bonus: default_amplification_bonus(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_infuse_weight() -> Decimal {
    Decimal::from_parts(7, 0, 0, false, 1)
}

const fn default_association_gain() -> Decimal {
    Decimal::ONE
}

const fn default_collapse_weight() -> Decimal {
    Decimal::from_parts(3, 0, 0, false, 1)
}

const fn default_persistence_decay() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 1)
}

const fn default_clarity_decay() -> Decimal {
    Decimal::from_parts(25, 0, 0, false, 2)
}

const fn default_source_decay() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 1)
}

const fn default_coherence_threshold() -> Decimal {
    Decimal::from_parts(8, 0, 0, false, 1)
}

const fn default_amplification_bonus() -> Decimal {
    Decimal::ONE
}
