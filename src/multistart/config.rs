//! Multistart configuration.

use crate::error::ConfigError;

/// Configuration of the multistart wrapper.
///
/// Termination is governed by the run's
/// [`StopCriteria`](crate::stop::StopCriteria).
///
/// # Examples
///
/// ```
/// use u_construct::multistart::MultistartConfig;
///
/// let config = MultistartConfig::default().with_num_solutions(5);
/// assert!(config.validate().is_ok());
/// assert_eq!(MultistartConfig::default().num_solutions, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultistartConfig {
    /// Solutions built per restart; the best of them represents the
    /// restart.
    pub num_solutions: usize,
}

impl Default for MultistartConfig {
    fn default() -> Self {
        Self { num_solutions: 1 }
    }
}

impl MultistartConfig {
    /// Sets the number of constructions per restart.
    pub fn with_num_solutions(mut self, n: usize) -> Self {
        self.num_solutions = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_solutions == 0 {
            return Err(ConfigError::invalid("num-solutions", "must be at least 1"));
        }
        Ok(())
    }
}
