//! Candidate scoring shared by the selectors.

use crate::problem::{ElementId, Problem, Solution};
use crate::stop::SearchBudget;
use rand::Rng;

/// Quality with NaN mapped to the worst possible score.
#[inline]
pub(crate) fn sanitize(quality: f64) -> f64 {
    if quality.is_nan() {
        f64::NEG_INFINITY
    } else {
        quality
    }
}

/// Scores all candidates, best first. Ties go to the lower element id.
pub(crate) fn ranked_candidates<P: Problem>(
    problem: &P,
    instance: &P::Instance,
    solution: &P::Solution,
    budget: &SearchBudget,
) -> Vec<(ElementId, f64)> {
    let candidates = solution.candidates();
    budget.charge(candidates.len());

    let mut ranked: Vec<(ElementId, f64)> = candidates
        .iter()
        .map(|&e| (e, sanitize(problem.element_quality(instance, solution, e))))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Roulette wheel over non-negative weights; returns an index into `weights`.
///
/// Infinite weights win outright (uniformly among themselves). Zero,
/// negative and NaN weights are excluded; if nothing remains the pick is
/// uniform over all entries.
///
/// # Panics
/// Panics if `weights` is empty.
pub(crate) fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot select from empty weights");

    let infinite: Vec<usize> = weights
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w == f64::INFINITY)
        .map(|(i, _)| i)
        .collect();
    if !infinite.is_empty() {
        return infinite[rng.random_range(0..infinite.len())];
    }

    let usable = |w: f64| w.is_finite() && w > 0.0;
    let total: f64 = weights.iter().copied().filter(|&w| usable(w)).sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, &w) in weights.iter().enumerate() {
        if !usable(w) {
            continue;
        }
        cumulative += w;
        last = i;
        if cumulative > threshold {
            return i;
        }
    }
    last // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_roulette_excludes_zero_weights() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let idx = roulette(&[0.0, 3.0, -1.0, f64::NAN, 1.0], &mut rng);
            assert!(idx == 1 || idx == 4, "picked excluded index {idx}");
        }
    }

    #[test]
    fn test_roulette_proportional() {
        let mut rng = create_rng(42);
        let mut counts = [0u32; 2];
        for _ in 0..10000 {
            counts[roulette(&[1.0, 9.0], &mut rng)] += 1;
        }
        assert!(
            counts[1] > 8500 && counts[1] < 9500,
            "expected ~90% for heavy weight, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_all_degenerate_is_uniform() {
        let mut rng = create_rng(42);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            counts[roulette(&[0.0, -2.0, 0.0], &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 800, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_infinite_wins() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(roulette(&[5.0, f64::INFINITY, 2.0], &mut rng), 1);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty weights")]
    fn test_roulette_empty_panics() {
        let mut rng = create_rng(42);
        roulette(&[], &mut rng);
    }

    #[test]
    fn test_sanitize_nan() {
        assert_eq!(sanitize(f64::NAN), f64::NEG_INFINITY);
        assert_eq!(sanitize(2.5), 2.5);
    }
}
