//! JSON run configuration.
//!
//! A configuration names one algorithm (`greedy`, `beamsearch` or
//! `iterated`) and one selector (`priority`). [`RunConfig`] mirrors the JSON
//! document; [`Run`] is the validated form that can be executed against any
//! [`Problem`](crate::problem::Problem).
//!
//! ```json
//! { "type": "iterated",
//!   "internal-algorithm": { "type": "beamsearch",
//!       "priority": { "type": "pheromone", "gamma-value": 2.0, "phi-value": 0.1 },
//!       "beam-width": 3, "expansion-width": 2 },
//!   "stop": { "max-iterations": 100, "max-no-improvement-iterations": 20 },
//!   "num-solutions": 5 }
//! ```

mod run;
mod types;

pub use run::{Algorithm, BaseAlgorithm, Run};
pub use types::{
    BeamSettings, GreedySettings, InternalAlgorithm, IteratedSettings, PriorityConfig, RunConfig,
};
