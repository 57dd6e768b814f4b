//! Live stop counters shared by every algorithm and selector of a run.

use super::criteria::StopCriteria;
use crate::error::ConfigError;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Counters checked against a [`StopCriteria`].
///
/// One budget is created per run and passed by shared reference into every
/// algorithm and selector. Counters are atomics, so the budget is `Sync`.
#[derive(Debug)]
pub struct SearchBudget {
    criteria: StopCriteria,
    operations: AtomicU64,
    iterations: AtomicUsize,
    no_improvement: AtomicUsize,
    started: Instant,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {
    /// Starts a budget; the wall clock starts now.
    ///
    /// Fails with [`ConfigError::NoIterationLimit`] when neither iteration
    /// threshold is set, since a multistart run could then never stop.
    pub fn new(criteria: StopCriteria) -> Result<Self, ConfigError> {
        criteria.validate()?;
        Ok(Self::from_valid(criteria))
    }

    /// Starts a budget from criteria that already passed `validate`.
    pub(crate) fn from_valid(criteria: StopCriteria) -> Self {
        Self {
            criteria,
            operations: AtomicU64::new(0),
            iterations: AtomicUsize::new(0),
            no_improvement: AtomicUsize::new(0),
            started: Instant::now(),
            cancel: None,
        }
    }

    /// Budget with no operation or time limit, for a single construction.
    pub fn unlimited() -> Self {
        Self::from_valid(StopCriteria::single_pass())
    }

    /// Attaches an external cancellation flag.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn criteria(&self) -> &StopCriteria {
        &self.criteria
    }

    /// Records `n` element evaluations.
    #[inline]
    pub fn charge(&self, n: usize) {
        self.operations.fetch_add(n as u64, Ordering::Relaxed);
    }

    /// Element evaluations recorded so far.
    pub fn operations(&self) -> u64 {
        self.operations.load(Ordering::Relaxed)
    }

    /// Restarts recorded so far.
    pub fn iterations(&self) -> usize {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Restarts since the last strict improvement.
    pub fn no_improvement(&self) -> usize {
        self.no_improvement.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Records one finished restart.
    pub fn record_iteration(&self, improved: bool) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
        if improved {
            self.no_improvement.store(0, Ordering::Relaxed);
        } else {
            self.no_improvement.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Whether the operation budget, time limit or cancellation fired.
    ///
    /// Constructions check this before every element decision.
    pub fn exhausted(&self) -> bool {
        if self.criteria.max_budget > 0 && self.operations() >= self.criteria.max_budget {
            return true;
        }
        if let Some(limit) = self.criteria.time_limit_ms {
            if self.elapsed().as_millis() >= u128::from(limit) {
                return true;
            }
        }
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Whether any stop criterion fired; checked between restarts.
    pub fn should_stop(&self) -> bool {
        if self.exhausted() {
            return true;
        }
        let max_iterations = self.criteria.max_iterations;
        if max_iterations > 0 && self.iterations() >= max_iterations {
            return true;
        }
        let max_no_improvement = self.criteria.max_no_improvement;
        max_no_improvement > 0 && self.no_improvement() >= max_no_improvement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_criteria_without_iteration_limit() {
        assert!(matches!(
            SearchBudget::new(StopCriteria::default()),
            Err(ConfigError::NoIterationLimit)
        ));
        assert!(SearchBudget::new(StopCriteria::default().with_max_budget(1_000)).is_err());
        assert!(SearchBudget::new(StopCriteria::single_pass()).is_ok());
    }

    #[test]
    fn test_operation_budget() {
        let budget = SearchBudget::new(StopCriteria::single_pass().with_max_budget(10)).unwrap();
        budget.charge(9);
        assert!(!budget.exhausted());
        budget.charge(1);
        assert!(budget.exhausted());
        assert!(budget.should_stop());
    }

    #[test]
    fn test_zero_budget_is_unlimited() {
        let budget = SearchBudget::unlimited();
        budget.charge(usize::MAX / 2);
        assert!(!budget.exhausted());
    }

    #[test]
    fn test_max_iterations() {
        let budget = SearchBudget::new(StopCriteria::default().with_max_iterations(2)).unwrap();
        assert!(!budget.should_stop());
        budget.record_iteration(true);
        assert!(!budget.should_stop());
        budget.record_iteration(false);
        assert!(budget.should_stop());
        assert!(!budget.exhausted());
    }

    #[test]
    fn test_no_improvement_resets() {
        let budget = SearchBudget::new(StopCriteria::default().with_max_no_improvement(2)).unwrap();
        budget.record_iteration(false);
        assert_eq!(budget.no_improvement(), 1);
        budget.record_iteration(true);
        assert_eq!(budget.no_improvement(), 0);
        budget.record_iteration(false);
        budget.record_iteration(false);
        assert!(budget.should_stop());
        assert_eq!(budget.iterations(), 4);
    }

    #[test]
    fn test_cancellation() {
        let flag = Arc::new(AtomicBool::new(false));
        let budget = SearchBudget::unlimited().with_cancel(flag.clone());
        assert!(!budget.exhausted());
        flag.store(true, Ordering::Relaxed);
        assert!(budget.exhausted());
    }

    #[test]
    fn test_time_limit_zero_fires_immediately() {
        let budget = SearchBudget::new(StopCriteria::single_pass().with_time_limit_ms(0)).unwrap();
        assert!(budget.exhausted());
    }
}
