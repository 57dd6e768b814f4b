//! Knapsack solution with running aggregates.

use super::instance::KnapsackItem;
use crate::problem::{ElementId, Partition, Solution};
use std::sync::Arc;

/// A (partial) packing.
///
/// The item table is shared read-only with the instance; the partition and
/// aggregates are owned, so clones never alias mutable state.
#[derive(Debug, Clone)]
pub struct KnapsackSolution {
    items: Arc<[KnapsackItem]>,
    partition: Partition,
    value: f64,
    weight: u64,
}

impl KnapsackSolution {
    pub(crate) fn new(items: Arc<[KnapsackItem]>) -> Self {
        let partition = Partition::new(items.len());
        Self {
            items,
            partition,
            value: 0.0,
            weight: 0,
        }
    }

    /// Total value of the packed items.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Total weight of the packed items.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub(crate) fn item(&self, element: ElementId) -> &KnapsackItem {
        &self.items[element]
    }
}

impl Solution for KnapsackSolution {
    fn accepted(&self) -> &[ElementId] {
        self.partition.accepted()
    }

    fn candidates(&self) -> &[ElementId] {
        self.partition.candidates()
    }

    fn visited(&self) -> &[ElementId] {
        self.partition.visited()
    }

    fn add_element_to_solution(&mut self, element: ElementId) {
        self.partition.accept(element);
        let item = self.items[element];
        self.value += item.value;
        self.weight = self.weight.saturating_add(item.weight);
    }

    fn add_element_to_visited(&mut self, element: ElementId) {
        self.partition.visit(element);
    }

    fn objective_value(&self) -> f64 {
        -self.value
    }

    fn resource_usage(&self) -> f64 {
        self.weight as f64
    }
}
