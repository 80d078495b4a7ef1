pub mod iot_device;
pub mod resource_node;
pub mod resource_store;
