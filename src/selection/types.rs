//! Core trait for element selectors.

use crate::problem::{ElementId, Problem};
use crate::stop::SearchBudget;

/// Chooses the next element a construction attempts.
///
/// # Lifecycle
///
/// 1. [`initialize`](Selector::initialize) once per run.
/// 2. During each construction, [`select_element`](Selector::select_element)
///    repeatedly; after each acceptance
///    [`update_probabilities_internal`](Selector::update_probabilities_internal).
/// 3. [`update_probabilities_iteration`](Selector::update_probabilities_iteration)
///    once per completed restart, with that restart's best solution.
///
/// Selectors must return one of `solution.candidates()`, or `None` when
/// the candidate set is empty. Every candidate scored is charged to the
/// budget as one operation.
pub trait Selector<P: Problem> {
    /// Returns a human-readable name for this selector.
    fn name(&self) -> &str;

    /// Prepares per-run state (trail tables, subordinate selectors).
    fn initialize(&mut self, _problem: &P, _instance: &P::Instance) {}

    /// Picks the next candidate to attempt.
    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId>;

    /// Called after `element` was accepted into `solution`.
    fn update_probabilities_internal(
        &mut self,
        _problem: &P,
        _instance: &P::Instance,
        _solution: &P::Solution,
        _element: ElementId,
    ) {
    }

    /// Called once per restart with the restart's best solution.
    fn update_probabilities_iteration(
        &mut self,
        _problem: &P,
        _instance: &P::Instance,
        _solution: &P::Solution,
    ) {
    }
}
