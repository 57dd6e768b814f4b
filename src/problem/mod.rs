//! The Problem/Instance/Solution contract.
//!
//! Concrete problem families (knapsack, graph labeling, ...) implement the
//! three traits in [`types`]. The engine is generic over the family, so a
//! selector or algorithm can never be invoked on a mismatched solution type.
//!
//! [`Partition`] is the reusable bookkeeping for the three-way
//! accepted/visited/candidate split that most solution types delegate to.

mod partition;
mod types;

pub use partition::Partition;
pub use types::{ElementId, Instance, Problem, Solution};
