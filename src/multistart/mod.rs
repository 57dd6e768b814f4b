//! Multistart (iterated) construction.
//!
//! Repeatedly invokes a base algorithm (greedy or beam search), keeping the
//! best solution across restarts. Selector state such as pheromone trails
//! carries over from one restart to the next, which turns a randomized
//! greedy into GRASP-style construction and a pheromone selector into an
//! ant-colony-style search.

mod config;
mod runner;

pub use config::MultistartConfig;
pub use runner::{MultistartResult, MultistartRunner};
