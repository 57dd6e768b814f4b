//! Deterministic best-quality selection.

use super::scoring::sanitize;
use super::types::Selector;
use crate::problem::{ElementId, Problem, Solution};
use crate::stop::SearchBudget;

/// Always picks the candidate with the highest quality.
///
/// Ties go to the lowest element id, so the choice never depends on how a
/// solution happens to order its candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl GreedySelector {
    pub fn new() -> Self {
        Self
    }
}

impl<P: Problem> Selector<P> for GreedySelector {
    fn name(&self) -> &str {
        "greedy"
    }

    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId> {
        let candidates = solution.candidates();
        budget.charge(candidates.len());

        let mut best: Option<(ElementId, f64)> = None;
        for &e in candidates {
            let q = sanitize(problem.element_quality(instance, solution, e));
            best = match best {
                Some((b, bq)) if bq > q || (bq == q && b < e) => Some((b, bq)),
                _ => Some((e, q)),
            };
        }
        best.map(|(e, _)| e)
    }
}
