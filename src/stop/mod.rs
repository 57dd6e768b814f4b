//! Stop criteria shared by all constructive algorithms.
//!
//! [`StopCriteria`] holds the thresholds of a run and is fixed once the run
//! starts. [`SearchBudget`] holds the live counters and is passed by
//! reference to every algorithm and selector, so work done anywhere
//! (including pilot lookahead simulations) is charged to the same budget.

mod budget;
mod criteria;

pub use budget::SearchBudget;
pub use criteria::StopCriteria;
