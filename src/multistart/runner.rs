//! Multistart execution loop.

use super::config::MultistartConfig;
use crate::algorithm::ConstructiveAlgorithm;
use crate::error::ConfigError;
use crate::problem::{Problem, Solution};
use crate::selection::Selector;
use crate::stop::SearchBudget;

/// Result of a multistart run.
#[derive(Debug, Clone)]
pub struct MultistartResult<S: Clone> {
    /// The best solution found over all restarts.
    pub best: S,

    /// Objective of the best solution.
    pub best_cost: f64,

    /// Restarts performed.
    pub iterations: usize,

    /// Base-algorithm constructions performed.
    pub constructions: usize,

    /// Restarts that produced a strictly better global best.
    pub improvements: usize,

    /// Global best cost after each restart.
    pub cost_history: Vec<f64>,
}

/// Repeats a base algorithm and keeps the global best.
///
/// Each restart builds `num_solutions` solutions; the best of them is fed
/// to [`Selector::update_probabilities_iteration`] and competes for the
/// global best. Restarts continue until the budget's stop criteria fire.
/// The no-improvement counter resets only on a strict improvement.
#[derive(Debug, Clone)]
pub struct MultistartRunner<A> {
    base: A,
    config: MultistartConfig,
}

impl<A> MultistartRunner<A> {
    /// Wraps `base` after validating `config`.
    pub fn new(base: A, config: MultistartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { base, config })
    }

    pub fn base(&self) -> &A {
        &self.base
    }

    pub fn config(&self) -> &MultistartConfig {
        &self.config
    }

    /// Runs restarts and reports search statistics.
    ///
    /// At least one restart is always performed, so a result exists even
    /// when the budget is already exhausted.
    #[tracing::instrument(level = "debug", name = "Multistart", skip_all)]
    pub fn run_with_stats<P, S>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> MultistartResult<P::Solution>
    where
        P: Problem,
        A: ConstructiveAlgorithm<P>,
        S: Selector<P>,
    {
        let mut best: Option<(P::Solution, f64)> = None;
        let mut constructions = 0usize;
        let mut improvements = 0usize;
        let mut cost_history = Vec::new();

        loop {
            let mut restart_best: Option<(P::Solution, f64)> = None;
            for _ in 0..self.config.num_solutions {
                let solution = self.base.run(problem, instance, selector, budget);
                constructions += 1;
                let cost = solution.objective_value();
                if restart_best.as_ref().is_none_or(|(_, c)| cost < *c) {
                    restart_best = Some((solution, cost));
                }
                if budget.exhausted() {
                    break;
                }
            }

            let Some((solution, cost)) = restart_best else {
                unreachable!("num_solutions is validated to be at least 1");
            };
            selector.update_probabilities_iteration(problem, instance, &solution);

            let improved = best.as_ref().is_none_or(|(_, b)| cost < *b);
            if improved {
                tracing::debug!(
                    iteration = budget.iterations(),
                    cost,
                    operations = budget.operations(),
                    "new best"
                );
                best = Some((solution, cost));
                improvements += 1;
            }
            budget.record_iteration(improved);
            if let Some((_, b)) = &best {
                cost_history.push(*b);
            }

            if budget.should_stop() {
                break;
            }
        }

        let Some((best, best_cost)) = best else {
            unreachable!("at least one restart is always performed");
        };

        MultistartResult {
            best,
            best_cost,
            iterations: budget.iterations(),
            constructions,
            improvements,
            cost_history,
        }
    }
}

impl<P, A> ConstructiveAlgorithm<P> for MultistartRunner<A>
where
    P: Problem,
    A: ConstructiveAlgorithm<P>,
{
    fn name(&self) -> &str {
        "iterated"
    }

    fn run<S: Selector<P>>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution {
        self.run_with_stats(problem, instance, selector, budget).best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::{BeamConfig, BeamRunner};
    use crate::greedy::GreedyRunner;
    use crate::knapsack::fixtures::random_instance;
    use crate::knapsack::KnapsackProblem;
    use crate::selection::{GreedySelector, PheromoneSelector, RandomizedSelector};
    use crate::stop::StopCriteria;
    use std::cell::RefCell;

    /// Base algorithm that records the cost of every construction.
    struct Recording {
        costs: RefCell<Vec<f64>>,
    }

    impl<P: Problem> ConstructiveAlgorithm<P> for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        fn run<S: Selector<P>>(
            &self,
            problem: &P,
            instance: &P::Instance,
            selector: &mut S,
            budget: &SearchBudget,
        ) -> P::Solution {
            let solution = GreedyRunner::construct(problem, instance, selector, budget);
            self.costs.borrow_mut().push(solution.objective_value());
            solution
        }
    }

    fn recording() -> Recording {
        Recording {
            costs: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_exact_iteration_count_and_best() {
        let problem = KnapsackProblem::default();
        let instance = random_instance(25, 1);
        let runner = MultistartRunner::new(recording(), MultistartConfig::default()).unwrap();
        let budget = SearchBudget::new(StopCriteria::default().with_max_iterations(17)).unwrap();
        let mut selector = RandomizedSelector::new(4, 1.0, 5).unwrap();

        let result = runner.run_with_stats(&problem, &instance, &mut selector, &budget);

        let costs = runner.base().costs.borrow();
        assert_eq!(costs.len(), 17);
        assert_eq!(result.iterations, 17);
        assert_eq!(result.constructions, 17);
        let min = costs.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_cost, min);
        assert_eq!(result.best.objective_value(), min);
    }

    #[test]
    fn test_num_solutions_per_restart() {
        let problem = KnapsackProblem::default();
        let instance = random_instance(15, 2);
        let runner = MultistartRunner::new(
            recording(),
            MultistartConfig::default().with_num_solutions(4),
        )
        .unwrap();
        let budget = SearchBudget::new(StopCriteria::default().with_max_iterations(3)).unwrap();
        let mut selector = RandomizedSelector::new(3, 1.0, 8).unwrap();

        let result = runner.run_with_stats(&problem, &instance, &mut selector, &budget);
        assert_eq!(result.iterations, 3);
        assert_eq!(result.constructions, 12);
        assert_eq!(runner.base().costs.borrow().len(), 12);
    }

    #[test]
    fn test_no_improvement_stops_deterministic_search() {
        let problem = KnapsackProblem::default();
        let instance = random_instance(15, 3);
        let runner = MultistartRunner::new(GreedyRunner, MultistartConfig::default()).unwrap();
        let budget = SearchBudget::new(StopCriteria::default().with_max_no_improvement(3)).unwrap();

        let result = runner.run_with_stats(&problem, &instance, &mut GreedySelector, &budget);
        // First restart improves, the next three only match it.
        assert_eq!(result.iterations, 4);
        assert_eq!(result.improvements, 1);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let problem = KnapsackProblem::default();
        let instance = random_instance(30, 4);
        let runner = MultistartRunner::new(GreedyRunner, MultistartConfig::default()).unwrap();
        let budget = SearchBudget::new(StopCriteria::default().with_max_iterations(40)).unwrap();
        let mut selector = RandomizedSelector::new(5, 1.0, 13).unwrap();

        let result = runner.run_with_stats(&problem, &instance, &mut selector, &budget);
        assert_eq!(result.cost_history.len(), 40);
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0], "history increased: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_operation_budget_ends_run() {
        let problem = KnapsackProblem::default();
        let instance = random_instance(20, 5);
        let runner = MultistartRunner::new(GreedyRunner, MultistartConfig::default()).unwrap();
        let budget = SearchBudget::new(
            StopCriteria::default()
                .with_max_iterations(1_000_000)
                .with_max_budget(1_000),
        )
        .unwrap();
        let mut selector = RandomizedSelector::new(3, 1.0, 1).unwrap();

        let result = runner.run_with_stats(&problem, &instance, &mut selector, &budget);
        assert!(result.iterations < 1_000_000);
        assert!(budget.exhausted());
        assert!(result.best.weight() <= instance.capacity());
    }

    #[test]
    fn test_pheromone_over_beam_reproducible() {
        let problem = KnapsackProblem::default();
        let instance = random_instance(25, 6);
        let beam = BeamRunner::new(
            BeamConfig::default()
                .with_beam_width(2)
                .with_expansion_width(2),
        )
        .unwrap();
        let runner = MultistartRunner::new(beam, MultistartConfig::default()).unwrap();

        let run = || {
            let mut selector = PheromoneSelector::from_gamma(2.0, 0.2, 77).unwrap();
            let budget = SearchBudget::new(StopCriteria::default().with_max_iterations(10)).unwrap();
            runner.solve(&problem, &instance, &mut selector, &budget)
        };
        let a = run();
        let b = run();
        assert_eq!(a.accepted(), b.accepted());
        assert_eq!(a.objective_value().to_bits(), b.objective_value().to_bits());
        assert!(a.weight() <= instance.capacity());
    }

    #[test]
    fn test_rejects_zero_solutions() {
        let config = MultistartConfig::default().with_num_solutions(0);
        assert!(MultistartRunner::new(GreedyRunner, config).is_err());
    }
}
