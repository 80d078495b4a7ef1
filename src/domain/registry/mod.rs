pub mod service_registry;
