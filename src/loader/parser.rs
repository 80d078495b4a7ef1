use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::api::config_dto::ExperimentConfigDto;
use crate::api::service_dto::{AssignmentDto, ServiceDto};
use crate::api::workflow_dto::WorkflowDto;
use crate::domain::composition::baseline::Composition;
use crate::domain::service::Service;
use crate::domain::workflow::workflow::Workflow;
use crate::error::Result;

/// Reads and deserializes a JSON file.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let content = fs::read_to_string(file_path)?;
    let value = serde_json::from_str::<T>(&content)?;
    Ok(value)
}

/// Loads an experiment config. `.json` files are parsed as JSON, anything
/// else as YAML. Missing fields fall back to their defaults.
pub fn load_config(file_path: impl AsRef<Path>) -> Result<ExperimentConfigDto> {
    let file_path = file_path.as_ref();

    let config = if file_path.extension().is_some_and(|ext| ext == "json") {
        parse_json_file::<ExperimentConfigDto>(file_path)?
    } else {
        let content = fs::read_to_string(file_path)?;
        serde_yaml::from_str::<ExperimentConfigDto>(&content)?
    };

    log::info!("Loaded config from '{}'.", file_path.display());
    Ok(config)
}

pub fn load_workflow(file_path: impl AsRef<Path>) -> Result<Workflow> {
    let dto = parse_json_file::<WorkflowDto>(file_path)?;
    Workflow::try_from(dto)
}

/// Reads services from CSV with header `id,cost,response_time,availability,base_energy_kwh`.
pub fn read_services_csv<R: Read>(reader: R) -> Result<Vec<Service>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut services = Vec::new();

    for record in csv_reader.deserialize::<ServiceDto>() {
        services.push(Service::from(record?));
    }
    Ok(services)
}

pub fn write_services_csv<W: Write>(writer: W, services: &[Service]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for service in services {
        csv_writer.serialize(ServiceDto::from(service))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn load_services(file_path: impl AsRef<Path>) -> Result<Vec<Service>> {
    let file_path = file_path.as_ref();
    let services = read_services_csv(File::open(file_path)?)?;

    log::info!("Loaded {} services from '{}'.", services.len(), file_path.display());
    Ok(services)
}

/// Writes `services` to `file_path`, creating missing parent directories.
pub fn save_services(file_path: impl AsRef<Path>, services: &[Service]) -> Result<()> {
    let file_path = file_path.as_ref();
    create_parent_dir(file_path)?;
    write_services_csv(File::create(file_path)?, services)?;

    log::info!("Wrote {} services to '{}'.", services.len(), file_path.display());
    Ok(())
}

/// Writes one row per assigned task, in task id order.
pub fn write_composition_csv<W: Write>(
    writer: W,
    run_id: &str,
    strategy: &str,
    composition: &Composition,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (task_id, service) in composition {
        csv_writer.serialize(AssignmentDto {
            run_id: run_id.to_string(),
            strategy: strategy.to_string(),
            task_id: task_id.value(),
            service_id: service.id.value(),
            cost: service.cost,
            response_time: service.response_time,
            availability: service.availability,
            base_energy_kwh: service.base_energy_kwh,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_composition(
    file_path: impl AsRef<Path>,
    run_id: &str,
    strategy: &str,
    composition: &Composition,
) -> Result<()> {
    let file_path = file_path.as_ref();
    create_parent_dir(file_path)?;
    write_composition_csv(File::create(file_path)?, run_id, strategy, composition)?;

    log::info!("Wrote composition report to '{}'.", file_path.display());
    Ok(())
}

fn create_parent_dir(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils::id::{ServiceId, TaskId};
    use crate::error::Error;

    #[test]
    fn test_read_services_csv() {
        let data = "id,cost,response_time,availability,base_energy_kwh\n1,10.0,50.0,0.95,0.5\n2,5.0,60.0,0.9,0.6\n";
        let services = read_services_csv(data.as_bytes()).unwrap();

        assert_eq!(services.len(), 2);
        assert_eq!(services[1], Service::new(ServiceId::new(2), 5.0, 60.0, 0.9, 0.6));
    }

    #[test]
    fn test_read_services_csv_rejects_bad_row() {
        let data = "id,cost,response_time,availability,base_energy_kwh\n1,cheap,50.0,0.95,0.5\n";
        assert!(matches!(read_services_csv(data.as_bytes()), Err(Error::CsvError(_))));
    }

    #[test]
    fn test_write_services_csv_header() {
        let mut buffer = Vec::new();
        write_services_csv(&mut buffer, &[Service::new(ServiceId::new(3), 1.5, 2.0, 0.9, 0.25)]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,cost,response_time,availability,base_energy_kwh"));
        assert_eq!(lines.next(), Some("3,1.5,2.0,0.9,0.25"));
    }

    #[test]
    fn test_write_composition_csv() {
        let service = Service::new(ServiceId::new(2), 5.0, 60.0, 0.9, 0.6);
        let mut composition = Composition::new();
        composition.insert(TaskId::new(1), &service);

        let mut buffer = Vec::new();
        write_composition_csv(&mut buffer, "run-1", "greedy:cost", &composition).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "run_id,strategy,task_id,service_id,cost,response_time,availability,base_energy_kwh\n\
             run-1,greedy:cost,1,2,5.0,60.0,0.9,0.6\n"
        );
    }
}
