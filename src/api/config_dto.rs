use serde::{Deserialize, Serialize};

/// Experiment configuration, read from YAML or JSON.
///
/// ```yaml
/// num_services: 2000
/// seed: 42
/// services_file: data/synthetic_services.csv
/// workflow_file: data/workflow.json
/// strategy: greedy:cost
/// output_file: results/composition.csv
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentConfigDto {
    /// Number of services the synthetic generator produces.
    pub num_services: usize,

    /// Fixed seed for reproducible generation; random when absent.
    pub seed: Option<u64>,

    pub services_file: String,
    pub workflow_file: String,

    /// `random`, `greedy` or `greedy:<attribute>`.
    pub strategy: String,

    pub output_file: Option<String>,
}

impl Default for ExperimentConfigDto {
    fn default() -> Self {
        Self {
            num_services: 2000,
            seed: None,
            services_file: "data/synthetic_services.csv".to_string(),
            workflow_file: "data/workflow.json".to_string(),
            strategy: "greedy:cost".to_string(),
            output_file: None,
        }
    }
}
