//! Fitness-proportionate (roulette wheel) selection.

use super::scoring::{roulette, sanitize};
use super::types::Selector;
use crate::problem::{ElementId, Problem, Solution};
use crate::random::create_rng;
use crate::stop::SearchBudget;
use rand::rngs::StdRng;

/// Picks a candidate with probability proportional to its quality.
///
/// Candidates with zero, negative or NaN quality are excluded from the
/// wheel. If no candidate has positive quality the pick is uniform.
#[derive(Debug, Clone)]
pub struct WeightedSelector {
    rng: StdRng,
}

impl WeightedSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: create_rng(seed),
        }
    }
}

impl<P: Problem> Selector<P> for WeightedSelector {
    fn name(&self) -> &str {
        "weighted"
    }

    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId> {
        let candidates = solution.candidates();
        if candidates.is_empty() {
            return None;
        }
        budget.charge(candidates.len());

        let weights: Vec<f64> = candidates
            .iter()
            .map(|&e| sanitize(problem.element_quality(instance, solution, e)))
            .collect();
        Some(candidates[roulette(&weights, &mut self.rng)])
    }
}
