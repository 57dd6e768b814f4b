//! Pilot method: lookahead selection by simulated completion.
//!
//! For each of the `k` best candidates by static quality, the pilot clones
//! the current solution, accepts the candidate and completes the clone with
//! a fast subordinate selector. The candidate whose completion scores best
//! is committed. All simulation work is charged to the shared budget.
//!
//! # References
//!
//! Duin & Voß (1999), "The Pilot Method: A Strategy for Heuristic
//! Repetition with Application to the Steiner Problem in Graphs"

use super::greedy::GreedySelector;
use super::scoring::ranked_candidates;
use super::types::Selector;
use crate::error::ConfigError;
use crate::greedy::GreedyRunner;
use crate::problem::{ElementId, Problem, Solution};
use crate::stop::SearchBudget;

/// Lookahead selector over the top-`k` candidates.
#[derive(Debug, Clone)]
pub struct PilotSelector<S = GreedySelector> {
    k: usize,
    subordinate: S,
}

impl PilotSelector<GreedySelector> {
    /// Pilot with a greedy subordinate.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        Self::with_subordinate(k, GreedySelector)
    }
}

impl<S> PilotSelector<S> {
    /// Pilot completing simulations with `subordinate`.
    pub fn with_subordinate(k: usize, subordinate: S) -> Result<Self, ConfigError> {
        if k == 0 {
            return Err(ConfigError::invalid("k-value", "must be at least 1"));
        }
        Ok(Self { k, subordinate })
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl<P: Problem, S: Selector<P>> Selector<P> for PilotSelector<S> {
    fn name(&self) -> &str {
        "pilot"
    }

    fn initialize(&mut self, problem: &P, instance: &P::Instance) {
        self.subordinate.initialize(problem, instance);
    }

    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId> {
        let ranked = ranked_candidates(problem, instance, solution, budget);
        let &(first, _) = ranked.first()?;

        let mut best: Option<(ElementId, f64)> = None;
        for &(e, _) in ranked.iter().take(self.k) {
            if !problem.is_valid(instance, solution, e) {
                continue;
            }
            let lookahead = if problem.element_complete_solution(instance, solution, e) {
                problem.objective_value_with(solution, e)
            } else {
                let mut trial = solution.clone();
                trial.add_element_to_solution(e);
                GreedyRunner::complete(problem, instance, trial, &mut self.subordinate, budget)
                    .objective_value()
            };
            tracing::trace!(element = e, lookahead, "pilot simulation");
            if best.is_none_or(|(_, b)| lookahead < b) {
                best = Some((e, lookahead));
            }
        }

        // No feasible candidate among the top k: hand back the best-ranked
        // one so the construction marks it visited.
        Some(best.map_or(first, |(e, _)| e))
    }
}
