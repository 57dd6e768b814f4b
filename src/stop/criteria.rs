//! Stop thresholds.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Thresholds that end a run. Any one firing stops it.
///
/// # Examples
///
/// ```
/// use u_construct::stop::StopCriteria;
///
/// let criteria = StopCriteria::default()
///     .with_max_iterations(100)
///     .with_max_no_improvement(20)
///     .with_max_budget(1_000_000);
/// assert!(criteria.validate().is_ok());
///
/// // Neither iteration threshold set: rejected.
/// assert!(StopCriteria::default().validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StopCriteria {
    /// Total element evaluations allowed across the run. 0 = unlimited.
    pub max_budget: u64,

    /// Maximum number of restarts. 0 = disabled.
    pub max_iterations: usize,

    /// Maximum restarts without a strict improvement. 0 = disabled.
    #[serde(rename = "max-no-improvement-iterations")]
    pub max_no_improvement: usize,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked together with the operation budget, so a construction in
    /// progress stops at its next element decision.
    pub time_limit_ms: Option<u64>,
}

impl Default for StopCriteria {
    fn default() -> Self {
        Self {
            max_budget: 0,
            max_iterations: 0,
            max_no_improvement: 0,
            time_limit_ms: None,
        }
    }
}

impl StopCriteria {
    /// Criteria for a single construction with no operation limit.
    pub fn single_pass() -> Self {
        Self::default().with_max_iterations(1)
    }

    /// Sets the maximum number of element evaluations (0 = unlimited).
    pub fn with_max_budget(mut self, n: u64) -> Self {
        self.max_budget = n;
        self
    }

    /// Sets the maximum number of restarts.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the maximum number of consecutive restarts without improvement.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Rejects criteria that could never end an iterated run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 && self.max_no_improvement == 0 {
            return Err(ConfigError::NoIterationLimit);
        }
        Ok(())
    }
}
