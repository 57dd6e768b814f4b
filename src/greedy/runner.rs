//! Single-pass construction loop.

use crate::algorithm::ConstructiveAlgorithm;
use crate::problem::{Instance, Problem, Solution};
use crate::selection::Selector;
use crate::stop::SearchBudget;

/// Builds one solution along a single path.
///
/// Every iteration removes exactly one candidate (accepted or visited), so
/// the loop terminates after at most `num_elements` decisions even when
/// every selection is infeasible.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyRunner;

impl GreedyRunner {
    /// Constructs a solution from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_construct::greedy::GreedyRunner;
    /// use u_construct::knapsack::{KnapsackInstance, KnapsackItem, KnapsackProblem};
    /// use u_construct::selection::GreedySelector;
    /// use u_construct::stop::SearchBudget;
    ///
    /// let instance = KnapsackInstance::new(
    ///     7,
    ///     vec![KnapsackItem::new(9.0, 3), KnapsackItem::new(5.0, 4), KnapsackItem::new(6.0, 5)],
    /// );
    /// let solution = GreedyRunner::construct(
    ///     &KnapsackProblem::default(),
    ///     &instance,
    ///     &mut GreedySelector,
    ///     &SearchBudget::unlimited(),
    /// );
    /// assert_eq!(solution.value(), 14.0);
    /// ```
    pub fn construct<P, S>(
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution
    where
        P: Problem,
        S: Selector<P>,
    {
        Self::complete(problem, instance, instance.initialize_solution(), selector, budget)
    }

    /// Continues an existing partial solution until it is complete, runs out
    /// of candidates, or the budget is exhausted.
    pub fn complete<P, S>(
        problem: &P,
        instance: &P::Instance,
        mut solution: P::Solution,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution
    where
        P: Problem,
        S: Selector<P>,
    {
        while !problem.is_complete(instance, &solution)
            && !solution.candidates().is_empty()
            && !budget.exhausted()
        {
            let Some(element) = selector.select_element(problem, instance, &solution, budget)
            else {
                break;
            };

            if problem.is_valid(instance, &solution, element) {
                solution.add_element_to_solution(element);
                selector.update_probabilities_internal(problem, instance, &solution, element);
                tracing::trace!(element, "accepted");
            } else {
                solution.add_element_to_visited(element);
                tracing::trace!(element, "rejected");
            }
        }
        solution
    }
}

impl<P: Problem> ConstructiveAlgorithm<P> for GreedyRunner {
    fn name(&self) -> &str {
        "greedy"
    }

    fn run<S: Selector<P>>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution {
        Self::construct(problem, instance, selector, budget)
    }
}
