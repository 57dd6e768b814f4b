//! Greedy construction.
//!
//! Builds a single solution element by element: the selector proposes a
//! candidate, feasible candidates are accepted and infeasible ones are
//! marked visited. The construction ends when the problem reports the
//! solution complete, no candidates remain, or the budget is exhausted.
//!
//! With [`GreedySelector`](crate::selection::GreedySelector) this is the
//! classic deterministic greedy heuristic; with a randomized selector it is
//! the construction phase of GRASP.

mod runner;

pub use runner::GreedyRunner;
