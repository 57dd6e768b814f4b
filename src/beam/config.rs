//! Beam search configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Width parameters of a beam search.
///
/// # Examples
///
/// ```
/// use u_construct::beam::BeamConfig;
///
/// let config = BeamConfig::default()
///     .with_beam_width(8)
///     .with_expansion_width(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(BeamConfig::default().beam_width, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BeamConfig {
    /// Maximum partial solutions retained per depth.
    pub beam_width: usize,

    /// Maximum children generated per retained solution per depth.
    pub expansion_width: usize,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            beam_width: 1,
            expansion_width: 1,
        }
    }
}

impl BeamConfig {
    /// Sets the number of partial solutions kept per depth.
    pub fn with_beam_width(mut self, n: usize) -> Self {
        self.beam_width = n;
        self
    }

    /// Sets the number of children generated per frontier member.
    pub fn with_expansion_width(mut self, n: usize) -> Self {
        self.expansion_width = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width == 0 {
            return Err(ConfigError::invalid("beam-width", "must be at least 1"));
        }
        if self.expansion_width == 0 {
            return Err(ConfigError::invalid("expansion-width", "must be at least 1"));
        }
        Ok(())
    }
}
