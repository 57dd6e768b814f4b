//! 0/1 knapsack reference problem.
//!
//! A complete Element/Instance/Solution/Problem family. It serves as the
//! worked example of the problem contract and is what the `construct`
//! binary solves.

#[cfg(test)]
pub(crate) mod fixtures;
mod instance;
mod problem;
mod solution;

pub use instance::{KnapsackInstance, KnapsackItem};
pub use problem::{KnapsackProblem, KnapsackQuality};
pub use solution::KnapsackSolution;
