pub mod composition;
pub mod registry;
pub mod resource;
pub mod service;
pub mod utils;
pub mod workflow;
