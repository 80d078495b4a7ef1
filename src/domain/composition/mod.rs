pub mod baseline;
pub mod composition_strategy;
pub mod qos_attribute;
