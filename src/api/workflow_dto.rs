use serde::{Deserialize, Serialize};

/// JSON form of a workflow:
/// `{"tasks": [{"id": 1, "requiredServices": [3]}], "edges": [[1, 2]]}`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDto {
    pub tasks: Vec<TaskDto>,

    /// `(source, target)` pairs; target depends on source.
    #[serde(default)]
    pub edges: Vec<(u64, u64)>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: u64,

    #[serde(default)]
    pub required_services: Vec<u64>,
}
