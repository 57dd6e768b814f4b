//! Restricted candidate list selection (GRASP-style).
//!
//! # Restriction policy
//!
//! The restricted candidate list (RCL) is built in two steps:
//!
//! 1. **Quality band**: keep candidates with
//!    `q >= q_max - alpha * (q_max - q_min)`.
//!    `alpha = 0` keeps only the best-quality ties, `alpha = 1` keeps all.
//! 2. **Cardinality cap**: truncate the band to the best `k` candidates.
//!    `k = 0` disables the cap.
//!
//! One member of the RCL is then drawn uniformly.
//!
//! # References
//!
//! Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"

use super::scoring::ranked_candidates;
use super::types::Selector;
use crate::error::ConfigError;
use crate::problem::{ElementId, Problem};
use crate::random::create_rng;
use crate::stop::SearchBudget;
use rand::rngs::StdRng;
use rand::Rng;

/// Uniform pick among the best candidates.
#[derive(Debug, Clone)]
pub struct RandomizedSelector {
    k: usize,
    alpha: f64,
    rng: StdRng,
}

impl RandomizedSelector {
    /// Creates a selector with RCL size `k` (0 = unbounded) and quality band
    /// `alpha` in `[0, 1]`.
    pub fn new(k: usize, alpha: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::invalid(
                "alpha-value",
                format!("must be in [0, 1], got {alpha}"),
            ));
        }
        Ok(Self {
            k,
            alpha,
            rng: create_rng(seed),
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Length of the restricted list over `ranked` (best first, non-empty).
    fn rcl_len(&self, ranked: &[(ElementId, f64)]) -> usize {
        let q_max = ranked[0].1;
        let q_min = ranked[ranked.len() - 1].1;
        let spread = q_max - q_min;

        let threshold = if spread.is_finite() {
            q_max - self.alpha * spread
        } else if self.alpha >= 1.0 {
            f64::NEG_INFINITY
        } else {
            q_max
        };

        let band = ranked
            .iter()
            .take_while(|(_, q)| *q >= threshold)
            .count()
            .max(1);
        if self.k > 0 {
            band.min(self.k)
        } else {
            band
        }
    }
}

impl<P: Problem> Selector<P> for RandomizedSelector {
    fn name(&self) -> &str {
        "random"
    }

    fn select_element(
        &mut self,
        problem: &P,
        instance: &P::Instance,
        solution: &P::Solution,
        budget: &SearchBudget,
    ) -> Option<ElementId> {
        let ranked = ranked_candidates(problem, instance, solution, budget);
        if ranked.is_empty() {
            return None;
        }
        let len = self.rcl_len(&ranked);
        let pick = self.rng.random_range(0..len);
        Some(ranked[pick].0)
    }
}
