//! Element selection strategies.
//!
//! A selector decides which candidate a construction attempts next. The
//! algorithms in this crate are generic over [`Selector`], so any strategy
//! can drive greedy construction, beam expansion or multistart restarts.
//!
//! | Selector | Rule |
//! |---|---|
//! | [`GreedySelector`] | best quality, deterministic |
//! | [`RandomizedSelector`] | uniform over a restricted candidate list |
//! | [`WeightedSelector`] | roulette wheel proportional to quality |
//! | [`PheromoneSelector`] | `trail^alpha * quality^beta`, trails learned across restarts |
//! | [`PilotSelector`] | best simulated completion among the top `k` |
//!
//! [`SelectorKind`] wraps all of them for configuration-driven runs.
//!
//! Each stochastic selector owns an explicitly seeded generator; two
//! selectors built with the same seed make the same choices.

mod greedy;
mod kind;
mod pheromone;
mod pilot;
mod randomized;
mod scoring;
mod types;
mod weighted;

pub use greedy::GreedySelector;
pub use kind::SelectorKind;
pub use pheromone::{PheromoneSelector, INITIAL_TRAIL, MIN_TRAIL};
pub use pilot::PilotSelector;
pub use randomized::RandomizedSelector;
pub use types::Selector;
pub use weighted::WeightedSelector;
