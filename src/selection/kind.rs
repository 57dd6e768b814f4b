//! Runtime choice among the built-in selectors.

use super::greedy::GreedySelector;
use super::pheromone::PheromoneSelector;
use super::pilot::PilotSelector;
use super::randomized::RandomizedSelector;
use super::types::Selector;
use super::weighted::WeightedSelector;
use crate::problem::{ElementId, Problem};
use crate::stop::SearchBudget;

/// One of the built-in selectors, chosen from configuration.
#[derive(Debug, Clone)]
pub enum SelectorKind {
    Greedy(GreedySelector),
    Randomized(RandomizedSelector),
    Weighted(WeightedSelector),
    Pheromone(PheromoneSelector),
    Pilot(PilotSelector<GreedySelector>),
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            SelectorKind::Greedy($s) => $body,
            SelectorKind::Randomized($s) => $body,
            SelectorKind::Weighted($s) => $body,
            SelectorKind::Pheromone($s) => $body,
            SelectorKind::Pilot($s) => $body,
        }
    };
}

impl<P: Problem> Selector<P> for SelectorKind {
    fn name(&self) -> &str {
        dispatch!(self, s => Selector::<P>::name(s))
    }

    fn initialize(&mut self, problem: &P, instance: &P::Instance) {
        dispatch!(self, s => s.initialize(problem, instance))
    }

    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId> {
        dispatch!(self, s => s.select_element(problem, instance, solution, budget))
    }

    fn update_probabilities_internal(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        element: ElementId,
    ) {
        dispatch!(self, s => s.update_probabilities_internal(problem, instance, solution, element))
    }

    fn update_probabilities_iteration(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
    ) {
        dispatch!(self, s => s.update_probabilities_iteration(problem, instance, solution))
    }
}

impl From<GreedySelector> for SelectorKind {
    fn from(s: GreedySelector) -> Self {
        SelectorKind::Greedy(s)
    }
}

impl From<RandomizedSelector> for SelectorKind {
    fn from(s: RandomizedSelector) -> Self {
        SelectorKind::Randomized(s)
    }
}

impl From<WeightedSelector> for SelectorKind {
    fn from(s: WeightedSelector) -> Self {
        SelectorKind::Weighted(s)
    }
}

impl From<PheromoneSelector> for SelectorKind {
    fn from(s: PheromoneSelector) -> Self {
        SelectorKind::Pheromone(s)
    }
}

impl From<PilotSelector<GreedySelector>> for SelectorKind {
    fn from(s: PilotSelector<GreedySelector>) -> Self {
        SelectorKind::Pilot(s)
    }
}
