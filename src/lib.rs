use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::api::config_dto::ExperimentConfigDto;
use crate::domain::composition::composition_strategy::CompositionStrategy;
use crate::domain::registry::service_registry::ServiceRegistry;
use crate::domain::service::Service;
use crate::domain::utils::id::TaskId;
use crate::domain::utils::synthetic::generate_synthetic_services;
use crate::error::Result;
use crate::loader::parser::{load_services, load_workflow, save_composition, save_services};

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Result of one composition run, detached from the registry it was computed on.
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub run_id: Uuid,
    pub strategy: CompositionStrategy,
    pub num_tasks: usize,
    pub assignments: BTreeMap<TaskId, Service>,
}

impl ExperimentOutcome {
    /// Tasks of the workflow that received no service.
    pub fn unassigned(&self) -> usize {
        self.num_tasks - self.assignments.len()
    }
}

/// Generates `config.num_services` synthetic services, seeded if the config has a seed.
pub fn generate_services(config: &ExperimentConfigDto) -> Vec<Service> {
    match config.seed {
        Some(seed) => generate_synthetic_services(config.num_services, &mut StdRng::seed_from_u64(seed)),
        None => generate_synthetic_services(config.num_services, &mut rand::rng()),
    }
}

/// Generates services and writes them to `config.services_file`.
pub fn generate_services_file(config: &ExperimentConfigDto) -> Result<Vec<Service>> {
    let services = generate_services(config);
    save_services(&config.services_file, &services)?;
    Ok(services)
}

/// Loads services and workflow named by `config`, runs the configured strategy
/// and writes the report to `config.output_file` when one is set.
pub fn run_experiment(config: &ExperimentConfigDto) -> Result<ExperimentOutcome> {
    let strategy: CompositionStrategy = config.strategy.parse()?;

    let registry = ServiceRegistry::new(load_services(&config.services_file)?);
    let workflow = load_workflow(&config.workflow_file)?;
    log::info!("{} loaded from '{}'.", workflow, config.workflow_file);

    let run_id = Uuid::new_v4();
    let composition = strategy.compose(&workflow, &registry)?;
    log::info!(
        "Run {} ({}) assigned {} of {} tasks.",
        run_id,
        strategy,
        composition.len(),
        workflow.len()
    );

    if let Some(output_file) = &config.output_file {
        save_composition(output_file, &run_id.to_string(), &strategy.to_string(), &composition)?;
    }

    let assignments = composition.into_iter().map(|(task_id, service)| (task_id, service.clone())).collect();

    Ok(ExperimentOutcome { run_id, strategy, num_tasks: workflow.len(), assignments })
}
