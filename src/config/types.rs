//! JSON schema of a run configuration.

use crate::stop::StopCriteria;
use serde::{Deserialize, Serialize};

fn one() -> usize {
    1
}

/// Top-level run configuration, tagged by `"type"`.
///
/// # Examples
///
/// ```
/// use u_construct::config::{PriorityConfig, RunConfig};
///
/// let config: RunConfig = r#"{
///     "type": "beamsearch",
///     "priority": { "type": "random", "k-value": 3, "alpha-value": 0.5 },
///     "beam-width": 4
/// }"#
/// .parse()
/// .unwrap();
///
/// match config {
///     RunConfig::Beamsearch(beam) => {
///         assert_eq!(beam.beam_width, 4);
///         assert_eq!(beam.expansion_width, 1);
///         assert!(matches!(beam.priority, PriorityConfig::Random { k_value: 3, .. }));
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RunConfig {
    Greedy(GreedySettings),
    Beamsearch(BeamSettings),
    Iterated(IteratedSettings),
}

/// Algorithm repeated by an iterated run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InternalAlgorithm {
    Greedy(GreedySettings),
    Beamsearch(BeamSettings),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedySettings {
    pub priority: PriorityConfig,

    /// Operation budget for a single construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopCriteria>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BeamSettings {
    pub priority: PriorityConfig,

    #[serde(default = "one")]
    pub beam_width: usize,

    #[serde(default = "one")]
    pub expansion_width: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopCriteria>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IteratedSettings {
    pub internal_algorithm: InternalAlgorithm,

    /// Required: at least one iteration threshold must be positive.
    pub stop: StopCriteria,

    #[serde(default = "one")]
    pub num_solutions: usize,
}

/// Element selection rule, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PriorityConfig {
    Greedy,

    #[serde(rename_all = "kebab-case")]
    Random { k_value: usize, alpha_value: f64 },

    Weighted,

    /// Either `gamma-value` or both `alpha-value` and `beta-value`.
    /// `gamma-value` takes precedence when present.
    #[serde(rename_all = "kebab-case")]
    Pheromone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alpha_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        beta_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gamma_value: Option<f64>,
        phi_value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        deposit_value: Option<f64>,
    },

    #[serde(rename_all = "kebab-case")]
    Pilot { k_value: usize },
}

impl std::str::FromStr for RunConfig {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iterated() {
        let config: RunConfig = r#"{
            "type": "iterated",
            "internal-algorithm": {
                "type": "beamsearch",
                "priority": { "type": "pheromone", "gamma-value": 2.0, "phi-value": 0.1 },
                "beam-width": 3,
                "expansion-width": 2
            },
            "stop": { "max-budget": 0, "max-iterations": 100, "max-no-improvement-iterations": 20 },
            "num-solutions": 5
        }"#
        .parse()
        .unwrap();

        let RunConfig::Iterated(iterated) = config else {
            panic!("expected iterated");
        };
        assert_eq!(iterated.num_solutions, 5);
        assert_eq!(iterated.stop.max_iterations, 100);
        assert_eq!(iterated.stop.max_no_improvement, 20);
        let InternalAlgorithm::Beamsearch(beam) = iterated.internal_algorithm else {
            panic!("expected beamsearch");
        };
        assert_eq!((beam.beam_width, beam.expansion_width), (3, 2));
        assert_eq!(
            beam.priority,
            PriorityConfig::Pheromone {
                alpha_value: None,
                beta_value: None,
                gamma_value: Some(2.0),
                phi_value: 0.1,
                deposit_value: None,
            }
        );
    }

    #[test]
    fn test_num_solutions_default() {
        let config: RunConfig = r#"{
            "type": "iterated",
            "internal-algorithm": { "type": "greedy", "priority": { "type": "weighted" } },
            "stop": { "max-iterations": 3 }
        }"#
        .parse()
        .unwrap();
        let RunConfig::Iterated(iterated) = config else {
            panic!("expected iterated");
        };
        assert_eq!(iterated.num_solutions, 1);
        assert_eq!(iterated.stop.max_budget, 0);
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!(r#"{ "type": "tabu", "priority": { "type": "greedy" } }"#
            .parse::<RunConfig>()
            .is_err());
        assert!(r#"{ "type": "greedy", "priority": { "type": "best" } }"#
            .parse::<RunConfig>()
            .is_err());
    }

    #[test]
    fn test_iterated_cannot_nest() {
        let json = r#"{
            "type": "iterated",
            "internal-algorithm": {
                "type": "iterated",
                "internal-algorithm": { "type": "greedy", "priority": { "type": "greedy" } },
                "stop": { "max-iterations": 2 }
            },
            "stop": { "max-iterations": 2 }
        }"#;
        assert!(json.parse::<RunConfig>().is_err());
    }

    #[test]
    fn test_iterated_requires_stop() {
        let json = r#"{
            "type": "iterated",
            "internal-algorithm": { "type": "greedy", "priority": { "type": "greedy" } }
        }"#;
        assert!(json.parse::<RunConfig>().is_err());
    }

    #[test]
    fn test_random_requires_parameters() {
        assert!(r#"{ "type": "greedy", "priority": { "type": "random", "k-value": 2 } }"#
            .parse::<RunConfig>()
            .is_err());
    }
}
