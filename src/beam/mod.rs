//! Beam search construction.
//!
//! Explores several partial solutions in parallel, breadth-first, keeping
//! only the best `beam_width` of them after each expansion round. Every
//! child is an independent clone, so siblings never share mutable state.
//!
//! With `beam_width = expansion_width = 1` and a deterministic selector,
//! beam search reproduces greedy construction exactly.
//!
//! # References
//!
//! Ow & Morton (1988), "Filtered beam search in scheduling"

mod config;
mod runner;

pub use config::BeamConfig;
pub use runner::{BeamResult, BeamRunner};
