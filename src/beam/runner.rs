//! Beam search execution loop.
//!
//! # Algorithm
//!
//! 1. Start with a frontier holding one empty solution.
//! 2. At each depth, for every frontier member:
//!    a. If it is complete (or has no candidates left), retire it.
//!    b. Otherwise generate up to `expansion_width` children, each a clone
//!       of the member plus one selector-chosen feasible element. Siblings
//!       are masked from later selections of the same member; infeasible
//!       picks are marked visited on the member itself.
//! 3. Pool all children, stable-sort by objective and keep the best
//!    `beam_width` as the next frontier. Equal objectives keep generation
//!    order, so the earlier child wins.
//! 4. Stop when the frontier is empty or the budget is exhausted.
//!
//! The result is the best retired solution: complete before incomplete,
//! then lower objective, then earliest retired.

use super::config::BeamConfig;
use crate::algorithm::ConstructiveAlgorithm;
use crate::error::ConfigError;
use crate::problem::{Instance, Problem, Solution};
use crate::selection::Selector;
use crate::stop::SearchBudget;

/// Result of a beam search run.
#[derive(Debug, Clone)]
pub struct BeamResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Objective of the best solution.
    pub best_cost: f64,

    /// Whether the best solution is complete.
    pub complete: bool,

    /// Number of depths expanded.
    pub depth: usize,

    /// Total children generated.
    pub children: usize,

    /// Largest frontier held at any depth.
    pub max_frontier: usize,
}

/// Best retired solution so far.
struct Incumbent<S> {
    solution: S,
    complete: bool,
    cost: f64,
}

impl<S> Incumbent<S> {
    fn beats(&self, other: &Incumbent<S>) -> bool {
        (self.complete && !other.complete)
            || (self.complete == other.complete && self.cost < other.cost)
    }
}

/// Bounded-width breadth-first construction.
#[derive(Debug, Clone, Copy)]
pub struct BeamRunner {
    config: BeamConfig,
}

impl BeamRunner {
    /// Creates a runner after validating `config`.
    pub fn new(config: BeamConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    /// Runs beam search and reports search statistics.
    #[tracing::instrument(level = "debug", name = "Beam Search", skip_all)]
    pub fn run_with_stats<P, S>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> BeamResult<P::Solution>
    where
        P: Problem,
        S: Selector<P>,
    {
        let mut frontier = vec![instance.initialize_solution()];
        let mut incumbent: Option<Incumbent<P::Solution>> = None;
        let mut depth = 0usize;
        let mut generated = 0usize;
        let mut max_frontier = frontier.len();

        let retire = |solution: P::Solution, incumbent: &mut Option<Incumbent<_>>| {
            let candidate = Incumbent {
                complete: problem.is_complete(instance, &solution),
                cost: solution.objective_value(),
                solution,
            };
            if incumbent.as_ref().is_none_or(|best| candidate.beats(best)) {
                *incumbent = Some(candidate);
            }
        };

        while !frontier.is_empty() {
            if budget.exhausted() {
                for member in frontier.drain(..) {
                    retire(member, &mut incumbent);
                }
                break;
            }

            let mut children = Vec::with_capacity(frontier.len() * self.config.expansion_width);
            for member in frontier.drain(..) {
                if problem.is_complete(instance, &member) || member.candidates().is_empty() {
                    retire(member, &mut incumbent);
                    continue;
                }
                let before = children.len();
                let base = self.expand(problem, instance, member, selector, budget, &mut children);
                if children.len() == before {
                    retire(base, &mut incumbent);
                }
            }

            generated += children.len();
            children.sort_by(|a, b| a.objective_value().total_cmp(&b.objective_value()));
            children.truncate(self.config.beam_width);
            max_frontier = max_frontier.max(children.len());
            frontier = children;
            depth += 1;

            tracing::trace!(depth, frontier = frontier.len(), "beam depth expanded");
        }

        // The initial frontier is never empty, so something was retired.
        let Incumbent {
            solution,
            complete,
            cost,
        } = match incumbent {
            Some(best) => best,
            None => unreachable!("beam search retired no solution"),
        };

        tracing::debug!(depth, generated, best_cost = cost, complete, "beam search finished");

        BeamResult {
            best: solution,
            best_cost: cost,
            complete,
            depth,
            children: generated,
            max_frontier,
        }
    }

    /// Pushes up to `expansion_width` children of `member` into `children`
    /// and returns `member` with its infeasible picks marked visited.
    fn expand<P, S>(
        &self,
        problem: &P,
        instance: &P::Instance,
        member: P::Solution,
        selector: &mut S,
        budget: &SearchBudget,
        children: &mut Vec<P::Solution>,
    ) -> P::Solution
    where
        P: Problem,
        S: Selector<P>,
    {
        let mut base = member;
        // Same state as `base`, plus the picks of earlier siblings.
        let mut masked = base.clone();
        let mut produced = 0usize;

        while produced < self.config.expansion_width
            && !masked.candidates().is_empty()
            && !problem.is_complete(instance, &base)
            && !budget.exhausted()
        {
            let Some(element) = selector.select_element(problem, instance, &masked, budget) else {
                break;
            };

            if problem.is_valid(instance, &base, element) {
                let mut child = base.clone();
                child.add_element_to_solution(element);
                selector.update_probabilities_internal(problem, instance, &child, element);
                children.push(child);
                produced += 1;
            } else {
                base.add_element_to_visited(element);
            }
            masked.add_element_to_visited(element);
        }
        base
    }
}

impl<P: Problem> ConstructiveAlgorithm<P> for BeamRunner {
    fn name(&self) -> &str {
        "beamsearch"
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
