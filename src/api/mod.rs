pub mod config_dto;
pub mod service_dto;
pub mod workflow_dto;
