//! Knapsack evaluation and feasibility rules.

use super::instance::KnapsackInstance;
use super::solution::KnapsackSolution;
use crate::problem::{ElementId, Problem, Solution};

/// How candidate items are ranked by selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnapsackQuality {
    /// Raw item value.
    #[default]
    Value,
    /// Value per unit of weight.
    Density,
}

/// 0/1 knapsack: maximize packed value within the capacity.
///
/// The objective is the negated packed value, so lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackProblem {
    quality: KnapsackQuality,
}

impl KnapsackProblem {
    pub fn new(quality: KnapsackQuality) -> Self {
        Self { quality }
    }

    pub fn quality(&self) -> KnapsackQuality {
        self.quality
    }
}

impl Problem for KnapsackProblem {
    type Instance = KnapsackInstance;
    type Solution = KnapsackSolution;

    fn objective_value(&self, solution: &KnapsackSolution) -> f64 {
        let value: f64 = solution
            .accepted()
            .iter()
            .map(|&e| solution.item(e).value)
            .sum();
        -value
    }

    fn objective_value_with(&self, solution: &KnapsackSolution, element: ElementId) -> f64 {
        -(solution.value() + solution.item(element).value)
    }

    fn is_valid(
        &self,
        instance: &KnapsackInstance,
        solution: &KnapsackSolution,
        element: ElementId,
    ) -> bool {
        solution
            .weight()
            .checked_add(solution.item(element).weight)
            .is_some_and(|weight| weight <= instance.capacity())
    }

    fn is_complete(&self, _instance: &KnapsackInstance, solution: &KnapsackSolution) -> bool {
        solution.candidates().is_empty()
    }

    fn element_complete_solution(
        &self,
        _instance: &KnapsackInstance,
        solution: &KnapsackSolution,
        element: ElementId,
    ) -> bool {
        solution.candidates() == [element]
    }

    fn element_quality(
        &self,
        _instance: &KnapsackInstance,
        solution: &KnapsackSolution,
        element: ElementId,
    ) -> f64 {
        let item = solution.item(element);
        match self.quality {
            KnapsackQuality::Value => item.value,
            KnapsackQuality::Density => item.density(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::GreedyRunner;
    use crate::knapsack::fixtures::abc;
    use crate::knapsack::KnapsackItem;
    use crate::problem::Instance;
    use crate::selection::GreedySelector;
    use crate::stop::SearchBudget;
    use proptest::prelude::*;

    #[test]
    fn test_feasibility() {
        let problem = KnapsackProblem::default();
        let instance = abc();
        let mut solution = instance.initialize_solution();
        solution.add_element_to_solution(0);
        assert!(problem.is_valid(&instance, &solution, 1));
        assert!(!problem.is_valid(&instance, &solution, 2));
    }

    #[test]
    fn test_huge_weight_is_infeasible() {
        let problem = KnapsackProblem::default();
        let instance: KnapsackInstance = "h\n2 10\n5 1\n4 18446744073709551615\n"
            .parse()
            .unwrap();
        let mut solution = instance.initialize_solution();
        solution.add_element_to_solution(0);
        assert!(!problem.is_valid(&instance, &solution, 1));

        let packed = GreedyRunner::construct(
            &problem,
            &instance,
            &mut GreedySelector,
            &SearchBudget::unlimited(),
        );
        assert_eq!(packed.accepted(), &[0]);
        assert_eq!(packed.weight(), 1);
        assert_eq!(packed.visited(), &[1]);
    }

    #[test]
    fn test_complete_when_no_candidates() {
        let problem = KnapsackProblem::default();
        let instance = abc();
        let mut solution = instance.initialize_solution();
        solution.add_element_to_solution(0);
        solution.add_element_to_visited(2);
        assert!(!problem.is_complete(&instance, &solution));
        assert!(problem.element_complete_solution(&instance, &solution, 1));
        solution.add_element_to_solution(1);
        assert!(problem.is_complete(&instance, &solution));
    }

    #[test]
    fn test_quality_rules() {
        let instance = abc();
        let solution = instance.initialize_solution();
        let by_value = KnapsackProblem::default();
        let by_density = KnapsackProblem::new(KnapsackQuality::Density);
        assert_eq!(by_value.element_quality(&instance, &solution, 2), 6.0);
        assert_eq!(by_density.element_quality(&instance, &solution, 0), 3.0);
    }

    #[test]
    fn test_clone_isolation() {
        let instance = abc();
        let mut original = instance.initialize_solution();
        original.add_element_to_solution(0);

        let mut copy = original.clone();
        copy.add_element_to_solution(1);
        copy.add_element_to_visited(2);

        assert_eq!(original.accepted(), &[0]);
        assert_eq!(original.candidates().len(), 2);
        assert!(original.visited().is_empty());
        assert_eq!(original.value(), 9.0);
        assert_eq!(original.weight(), 3);

        original.add_element_to_visited(1);
        assert_eq!(copy.accepted(), &[0, 1]);
        assert_eq!(copy.visited(), &[2]);
        assert_eq!(copy.value(), 14.0);
    }

    fn arb_instance() -> impl Strategy<Value = KnapsackInstance> {
        (
            proptest::collection::vec((0.0f64..100.0, 0u64..50), 1..30),
            0u64..500,
        )
            .prop_map(|(items, capacity)| {
                KnapsackInstance::new(
                    capacity,
                    items
                        .into_iter()
                        .map(|(v, w)| KnapsackItem::new(v, w))
                        .collect(),
                )
            })
    }

    proptest! {
        #[test]
        fn prop_incremental_objective_matches_recompute(
            instance in arb_instance(),
            picks in proptest::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..40),
        ) {
            let problem = KnapsackProblem::default();
            let mut solution = instance.initialize_solution();
            for (pick, accept) in picks {
                if solution.candidates().is_empty() {
                    break;
                }
                let e = solution.candidates()[pick.index(solution.candidates().len())];
                if accept {
                    let predicted = problem.objective_value_with(&solution, e);
                    solution.add_element_to_solution(e);
                    prop_assert_eq!(predicted, problem.objective_value(&solution));
                } else {
                    solution.add_element_to_visited(e);
                }
                prop_assert_eq!(solution.objective_value(), problem.objective_value(&solution));
                prop_assert_eq!(
                    solution.accepted().len() + solution.visited().len() + solution.candidates().len(),
                    instance.num_elements()
                );
            }
        }
    }
}
