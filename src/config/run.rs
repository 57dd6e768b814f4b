//! Validated, runnable configuration.

use super::types::{BeamSettings, InternalAlgorithm, PriorityConfig, RunConfig};
use crate::algorithm::ConstructiveAlgorithm;
use crate::beam::{BeamConfig, BeamRunner};
use crate::error::ConfigError;
use crate::greedy::GreedyRunner;
use crate::multistart::{MultistartConfig, MultistartRunner};
use crate::problem::{Problem, Solution};
use crate::random::derive_seed;
use crate::selection::{
    GreedySelector, PheromoneSelector, PilotSelector, RandomizedSelector, Selector, SelectorKind,
    WeightedSelector,
};
use crate::stop::{SearchBudget, StopCriteria};
use std::path::Path;

/// Seed stream reserved for the run's selector.
const SELECTOR_STREAM: u64 = 0;

/// Algorithm an iterated run repeats.
#[derive(Debug, Clone, Copy)]
pub enum BaseAlgorithm {
    Greedy(GreedyRunner),
    Beam(BeamRunner),
}

impl<P: Problem> ConstructiveAlgorithm<P> for BaseAlgorithm {
    fn name(&self) -> &str {
        match self {
            BaseAlgorithm::Greedy(a) => ConstructiveAlgorithm::<P>::name(a),
            BaseAlgorithm::Beam(a) => ConstructiveAlgorithm::<P>::name(a),
        }
    }

    fn run<S: Selector<P>>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution {
        match self {
            BaseAlgorithm::Greedy(a) => a.run(problem, instance, selector, budget),
            BaseAlgorithm::Beam(a) => a.run(problem, instance, selector, budget),
        }
    }
}

/// Algorithm of a configured run.
#[derive(Debug, Clone)]
pub enum Algorithm {
    Greedy(GreedyRunner),
    Beam(BeamRunner),
    Multistart(MultistartRunner<BaseAlgorithm>),
}

impl<P: Problem> ConstructiveAlgorithm<P> for Algorithm {
    fn name(&self) -> &str {
        match self {
            Algorithm::Greedy(a) => ConstructiveAlgorithm::<P>::name(a),
            Algorithm::Beam(a) => ConstructiveAlgorithm::<P>::name(a),
            Algorithm::Multistart(a) => ConstructiveAlgorithm::<P>::name(a),
        }
    }

    fn run<S: Selector<P>>(
        &self,
        problem: &P,
        instance: &P::Instance,
        selector: &mut S,
        budget: &SearchBudget,
    ) -> P::Solution {
        match self {
            Algorithm::Greedy(a) => a.run(problem, instance, selector, budget),
            Algorithm::Beam(a) => a.run(problem, instance, selector, budget),
            Algorithm::Multistart(a) => a.run(problem, instance, selector, budget),
        }
    }
}

/// An algorithm, a selector and stop criteria ready to execute.
///
/// Every check happens in [`Run::new`]; once built, a run cannot fail.
/// Each call to [`Run::run`] starts from a fresh copy of the configured
/// selector, so repeated runs with the same seed give the same result.
///
/// # Examples
///
/// ```
/// use u_construct::config::Run;
/// use u_construct::knapsack::{KnapsackInstance, KnapsackItem, KnapsackProblem};
/// use u_construct::problem::Solution;
///
/// let instance = KnapsackInstance::new(
///     7,
///     vec![
///         KnapsackItem::new(9.0, 3),
///         KnapsackItem::new(5.0, 4),
///         KnapsackItem::new(6.0, 5),
///     ],
/// );
/// let run = Run::from_json(r#"{ "type": "greedy", "priority": { "type": "greedy" } }"#, 0)
///     .unwrap();
/// let solution = run.run(&KnapsackProblem::default(), &instance);
/// assert_eq!(solution.objective_value(), -14.0);
/// ```
#[derive(Debug, Clone)]
pub struct Run {
    algorithm: Algorithm,
    selector: SelectorKind,
    criteria: StopCriteria,
}

impl Run {
    /// Validates `config` and builds its components, seeding the selector
    /// from `seed`.
    pub fn new(config: &RunConfig, seed: u64) -> Result<Self, ConfigError> {
        let selector_seed = derive_seed(seed, SELECTOR_STREAM);
        let run = match config {
            RunConfig::Greedy(settings) => Run {
                algorithm: Algorithm::Greedy(GreedyRunner),
                selector: build_selector(&settings.priority, selector_seed)?,
                criteria: single_construction(settings.stop),
            },
            RunConfig::Beamsearch(settings) => Run {
                algorithm: Algorithm::Beam(build_beam(settings)?),
                selector: build_selector(&settings.priority, selector_seed)?,
                criteria: single_construction(settings.stop),
            },
            RunConfig::Iterated(settings) => {
                settings.stop.validate()?;
                let (base, priority) = match &settings.internal_algorithm {
                    InternalAlgorithm::Greedy(inner) => {
                        reject_inner_stop(inner.stop)?;
                        (BaseAlgorithm::Greedy(GreedyRunner), &inner.priority)
                    }
                    InternalAlgorithm::Beamsearch(inner) => {
                        reject_inner_stop(inner.stop)?;
                        (BaseAlgorithm::Beam(build_beam(inner)?), &inner.priority)
                    }
                };
                let config = MultistartConfig::default().with_num_solutions(settings.num_solutions);
                Run {
                    algorithm: Algorithm::Multistart(MultistartRunner::new(base, config)?),
                    selector: build_selector(priority, selector_seed)?,
                    criteria: settings.stop,
                }
            }
        };
        Ok(run)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str, seed: u64) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(json)?;
        Self::new(&config, seed)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>, seed: u64) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, seed)
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn selector(&self) -> &SelectorKind {
        &self.selector
    }

    pub fn criteria(&self) -> &StopCriteria {
        &self.criteria
    }

    /// Executes the run with a fresh budget built from its stop criteria.
    pub fn run<P: Problem>(&self, problem: &P, instance: &P::Instance) -> P::Solution {
        // Criteria were validated in `Run::new`.
        self.run_with_budget(problem, instance, &SearchBudget::from_valid(self.criteria))
    }

    /// Executes the run against a caller-provided budget, for example one
    /// carrying a cancellation flag.
    pub fn run_with_budget<P: Problem>(
        &self,
        problem: &P,
        instance: &P::Instance,
        budget: &SearchBudget,
    ) -> P::Solution {
        let mut selector = self.selector.clone();
        let solution = self.algorithm.solve(problem, instance, &mut selector, budget);

        tracing::info!(
            algorithm = ConstructiveAlgorithm::<P>::name(&self.algorithm),
            selector = Selector::<P>::name(&selector),
            objective = solution.objective_value(),
            operations = budget.operations(),
            iterations = budget.iterations(),
            elapsed_ms = budget.elapsed().as_millis() as u64,
            "run finished"
        );
        solution
    }
}

fn build_beam(settings: &BeamSettings) -> Result<BeamRunner, ConfigError> {
    BeamRunner::new(
        BeamConfig::default()
            .with_beam_width(settings.beam_width)
            .with_expansion_width(settings.expansion_width),
    )
}

/// Criteria of a non-iterated run: one construction, limited only by the
/// operation budget and time limit of `stop` if given.
fn single_construction(stop: Option<StopCriteria>) -> StopCriteria {
    match stop {
        Some(stop) if stop.validate().is_ok() => stop,
        Some(stop) => stop.with_max_iterations(1),
        None => StopCriteria::single_pass(),
    }
}

fn reject_inner_stop(stop: Option<StopCriteria>) -> Result<(), ConfigError> {
    match stop {
        Some(_) => Err(ConfigError::invalid(
            "stop",
            "set stop criteria on the iterated algorithm, not on its internal algorithm",
        )),
        None => Ok(()),
    }
}

fn build_selector(priority: &PriorityConfig, seed: u64) -> Result<SelectorKind, ConfigError> {
    let selector: SelectorKind = match *priority {
        PriorityConfig::Greedy => GreedySelector.into(),
        PriorityConfig::Random {
            k_value,
            alpha_value,
        } => RandomizedSelector::new(k_value, alpha_value, seed)?.into(),
        PriorityConfig::Weighted => WeightedSelector::new(seed).into(),
        PriorityConfig::Pheromone {
            alpha_value,
            beta_value,
            gamma_value,
            phi_value,
            deposit_value,
        } => {
            let selector = match (gamma_value, alpha_value, beta_value) {
                (Some(gamma), _, _) => PheromoneSelector::from_gamma(gamma, phi_value, seed)?,
                (None, Some(alpha), Some(beta)) => {
                    PheromoneSelector::new(alpha, beta, phi_value, seed)?
                }
                (None, None, _) => return Err(missing("alpha-value")),
                (None, Some(_), None) => return Err(missing("beta-value")),
            };
            match deposit_value {
                Some(deposit) => selector.with_deposit(deposit)?.into(),
                None => selector.into(),
            }
        }
        PriorityConfig::Pilot { k_value } => PilotSelector::new(k_value)?.into(),
    };
    Ok(selector)
}

fn missing(field: &'static str) -> ConfigError {
    ConfigError::MissingField {
        section: "priority",
        field,
    }
}
