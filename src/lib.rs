//! Domain-agnostic constructive metaheuristics.
//!
//! Builds solutions element by element from an empty start, with the
//! choice of the next element delegated to a pluggable selector:
//!
//! - **Greedy construction**: one pass, adding each selected element if it
//!   keeps the solution feasible.
//! - **Beam Search**: bounded-width breadth-first construction keeping the
//!   best `beam_width` partial solutions per depth.
//! - **Multistart**: repeated greedy or beam construction keeping the best
//!   result, with selector learning between restarts (GRASP, ant colony).
//! - **Selectors**: greedy, restricted-candidate-list random, roulette
//!   weighted, pheromone-guided and pilot (lookahead) selection.
//!
//! # Architecture
//!
//! Problems plug in through the [`problem`] traits: an `Instance` holds the
//! ground set of elements, a `Solution` partitions it into candidate,
//! visited and accepted elements, and a `Problem` scores and validates
//! moves. The algorithms never see domain types directly. The [`knapsack`]
//! module is a complete reference implementation, and [`config`] turns a
//! JSON description into a runnable algorithm and selector pair.

pub mod algorithm;
pub mod beam;
pub mod config;
pub mod error;
pub mod greedy;
pub mod knapsack;
pub mod multistart;
pub mod problem;
pub mod random;
pub mod selection;
pub mod stop;
