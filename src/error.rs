use thiserror::Error;

use crate::domain::utils::id::{ResourceNodeId, TaskId};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON document: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config: {0}")]
    ConfigError(#[from] serde_yaml::Error),

    #[error("Failed to read or write CSV data: {0}")]
    CsvError(#[from] csv::Error),

    /// The workflow graph contains a cycle; holds the tasks that could not be ordered.
    #[error("Workflow graph contains a cycle involving tasks {0:?}")]
    GraphCycle(Vec<TaskId>),

    /// An edge references a task id that was never declared.
    #[error("Dependency {source_task} -> {target_task} references unknown task {missing}")]
    UnknownTask { source_task: TaskId, target_task: TaskId, missing: TaskId },

    #[error("Task {0} is declared more than once in the workflow")]
    DuplicateTask(TaskId),

    #[error("Unknown QoS attribute '{0}' (expected cost, response_time, availability or energy)")]
    AttributeNotFound(String),

    #[error("Unknown composition strategy '{0}'")]
    UnknownStrategy(String),

    #[error("Resource node {0} is not registered in the resource store")]
    UnknownResourceNode(ResourceNodeId),
}

pub type Result<T> = std::result::Result<T, Error>;
