//! Pheromone-trail selection (Ant System style).
//!
//! Selection probability of candidate `e`:
//!
//! ```text
//! p(e) ∝ trail(e)^alpha * quality(e)^beta
//! ```
//!
//! After each restart the trails are updated against the restart's best
//! solution (iteration-best reinforcement):
//!
//! ```text
//! trail(e) <- (1 - phi) * trail(e)               for every element
//! trail(e) <- trail(e) + deposit                  for every accepted e
//! ```
//!
//! Trails never drop below [`MIN_TRAIL`], so the selection weights of a
//! non-empty candidate set never collapse to zero.
//!
//! # References
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//! of Cooperating Agents"

use super::scoring::{roulette, sanitize};
use super::types::Selector;
use crate::error::ConfigError;
use crate::problem::{ElementId, Instance, Problem, Solution};
use crate::random::create_rng;
use crate::stop::SearchBudget;
use rand::rngs::StdRng;

/// Trail value of every element after `initialize`.
pub const INITIAL_TRAIL: f64 = 1.0;

/// Lower bound of any trail.
pub const MIN_TRAIL: f64 = 1e-6;

/// Quality floor used before exponentiation.
const MIN_QUALITY: f64 = 1e-10;

/// Probabilistic selection guided by per-element trails learned across
/// restarts.
#[derive(Debug, Clone)]
pub struct PheromoneSelector {
    alpha: f64,
    beta: f64,
    phi: f64,
    deposit: f64,
    trails: Vec<f64>,
    rng: StdRng,
}

impl PheromoneSelector {
    /// Creates a selector with trail exponent `alpha`, quality exponent
    /// `beta` and evaporation rate `phi` in `[0, 1]`.
    pub fn new(alpha: f64, beta: f64, phi: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(alpha.is_finite() && alpha >= 0.0) {
            return Err(ConfigError::invalid(
                "alpha-value",
                format!("must be non-negative, got {alpha}"),
            ));
        }
        if !(beta.is_finite() && beta >= 0.0) {
            return Err(ConfigError::invalid(
                "beta-value",
                format!("must be non-negative, got {beta}"),
            ));
        }
        if !(0.0..=1.0).contains(&phi) {
            return Err(ConfigError::invalid(
                "phi-value",
                format!("must be in [0, 1], got {phi}"),
            ));
        }
        Ok(Self {
            alpha,
            beta,
            phi,
            deposit: 1.0,
            trails: Vec::new(),
            rng: create_rng(seed),
        })
    }

    /// Creates a selector from a single balance parameter `gamma`.
    ///
    /// `gamma > 1` gives `(alpha, beta) = (1 / gamma, 1)`, otherwise
    /// `(1, gamma)`.
    pub fn from_gamma(gamma: f64, phi: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(gamma.is_finite() && gamma >= 0.0) {
            return Err(ConfigError::invalid(
                "gamma-value",
                format!("must be non-negative, got {gamma}"),
            ));
        }
        let (alpha, beta) = if gamma > 1.0 {
            (1.0 / gamma, 1.0)
        } else {
            (1.0, gamma)
        };
        Self::new(alpha, beta, phi, seed)
    }

    /// Sets the amount added to each reinforced trail.
    pub fn with_deposit(mut self, deposit: f64) -> Result<Self, ConfigError> {
        if !(deposit.is_finite() && deposit >= 0.0) {
            return Err(ConfigError::invalid(
                "deposit-value",
                format!("must be non-negative, got {deposit}"),
            ));
        }
        self.deposit = deposit;
        Ok(self)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Current trail table, indexed by element id.
    pub fn trails(&self) -> &[f64] {
        &self.trails
    }

    fn weight(&self, element: ElementId, quality: f64) -> f64 {
        let trail = self.trails[element].powf(self.alpha);
        let quality = sanitize(quality).max(MIN_QUALITY).powf(self.beta);
        trail * quality
    }
}

impl<P: Problem> Selector<P> for PheromoneSelector {
    fn name(&self) -> &str {
        "pheromone"
    }

    fn initialize(&mut self, _problem: &P, instance: &P::Instance) {
        self.trails = vec![INITIAL_TRAIL; instance.num_elements()];
    }

    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId> {
        assert_eq!(
            self.trails.len(),
            instance.num_elements(),
            "pheromone selector used before initialize"
        );
        let candidates = solution.candidates();
        if candidates.is_empty() {
            return None;
        }
        budget.charge(candidates.len());

        let weights: Vec<f64> = candidates
            .iter()
            .map(|&e| self.weight(e, problem.element_quality(instance, solution, e)))
            .collect();
        Some(candidates[roulette(&weights, &mut self.rng)])
    }

    fn update_probabilities_iteration(
        &mut self,
        _problem: &P,
        _instance: &P::Instance,
        solution: &P::Solution,
    ) {
        let keep = 1.0 - self.phi;
        for trail in &mut self.trails {
            *trail = (*trail * keep).max(MIN_TRAIL);
        }
        for &e in solution.accepted() {
            self.trails[e] += self.deposit;
        }
        tracing::trace!(
            reinforced = solution.accepted().len(),
            "pheromone trails updated"
        );
    }
}
