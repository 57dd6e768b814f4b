//! Common interface of the constructive algorithms.

use crate::problem::Problem;
use crate::selection::Selector;
use crate::stop::SearchBudget;

/// Builds a terminal solution of `P` using a selector.
///
/// Implementations never fail: infeasibility and budget exhaustion end the
/// construction and return the best solution assembled so far.
pub trait ConstructiveAlgorithm<P: Problem> {
    /// Returns a human-readable name for this algorithm.
    fn name(&self) -> &str;

    /// Runs the algorithm with an already initialized selector.
    ///
    /// Wrapping algorithms call this on their base algorithm so that
    /// selector state (e.g. pheromone trails) persists across restarts.
    fn run<S: Selector<P>>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution;

    /// Initializes the selector once, then runs the algorithm.
    fn solve<S: Selector<P>>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution {
        selector.initialize(problem, instance);
        self.run(problem, instance, selector, budget)
    }
}
