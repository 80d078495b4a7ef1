pub mod dependency;
pub mod task;
pub mod workflow;
pub mod workflow_node;
