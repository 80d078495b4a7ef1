use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use qos_service_composition::api::config_dto::ExperimentConfigDto;
use qos_service_composition::domain::composition::qos_attribute::QosAttribute;
use qos_service_composition::domain::utils::normalize::normalize_qos;
use qos_service_composition::loader::parser::{load_config, load_services};
use qos_service_composition::{generate_services_file, logger, run_experiment};

#[derive(Parser, Debug)]
#[command(name = "qos-compose", version, about = "Baseline QoS-aware service composition for workflow DAGs")]
struct Cli {
    /// Experiment config (YAML, or JSON by extension). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a synthetic services CSV.
    Generate {
        #[arg(short, long)]
        num_services: Option<usize>,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compose the configured workflow with a baseline strategy.
    Compose {
        /// `random`, `greedy` or `greedy:<attribute>`; overrides the config.
        #[arg(short, long)]
        strategy: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the min-max normalized values of one QoS attribute.
    Normalize {
        #[arg(short, long, default_value = "cost")]
        attribute: String,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("loading config '{}'", path.display()))?,
        None => ExperimentConfigDto::default(),
    };

    match cli.command {
        Command::Generate { num_services, seed, output } => {
            if let Some(num_services) = num_services {
                config.num_services = num_services;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(output) = output {
                config.services_file = output;
            }

            let services = generate_services_file(&config).context("generating services")?;
            println!("{} {} services -> {}", "Generated".green().bold(), services.len(), config.services_file);
        }
        Command::Compose { strategy, output } => {
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            if output.is_some() {
                config.output_file = output;
            }

            let outcome = run_experiment(&config).context("running composition")?;

            println!("{} {} ({})", "Run".bold(), outcome.run_id, outcome.strategy.to_string().cyan());
            for (task_id, service) in &outcome.assignments {
                println!("  Task {:>4} -> {}", task_id, service);
            }
            if outcome.unassigned() > 0 {
                println!("{} {} tasks without candidates", "Unassigned:".yellow(), outcome.unassigned());
            }
            println!(
                "{} {}/{} tasks assigned",
                "Done.".green().bold(),
                outcome.assignments.len(),
                outcome.num_tasks
            );
        }
        Command::Normalize { attribute } => {
            let attribute: QosAttribute = attribute.parse()?;
            let services = load_services(&config.services_file)
                .with_context(|| format!("loading services '{}'", config.services_file))?;

            let values: Vec<f64> = services.iter().map(|service| attribute.select(service)).collect();
            for (service, normalized) in services.iter().zip(normalize_qos(&values)) {
                println!("{},{:.6}", service.id, normalized);
            }
        }
    }

    Ok(())
}
