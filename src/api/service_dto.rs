use serde::{Deserialize, Serialize};

use crate::domain::service::Service;
use crate::domain::utils::id::ServiceId;

/// One row of a services CSV file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDto {
    pub id: u64,
    pub cost: f64,
    pub response_time: f64,
    pub availability: f64,
    pub base_energy_kwh: f64,
}

impl From<ServiceDto> for Service {
    fn from(dto: ServiceDto) -> Self {
        Service::new(ServiceId::new(dto.id), dto.cost, dto.response_time, dto.availability, dto.base_energy_kwh)
    }
}

impl From<&Service> for ServiceDto {
    fn from(service: &Service) -> Self {
        ServiceDto {
            id: service.id.value(),
            cost: service.cost,
            response_time: service.response_time,
            availability: service.availability,
            base_energy_kwh: service.base_energy_kwh,
        }
    }
}

/// One row of a composition report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssignmentDto {
    pub run_id: String,
    pub strategy: String,
    pub task_id: u64,
    pub service_id: u64,
    pub cost: f64,
    pub response_time: f64,
    pub availability: f64,
    pub base_energy_kwh: f64,
}
