use crate::domain::utils::id::TaskId;

/// Represents an edge of the workflow graph: `target` depends on `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dependency {
    /// Key to Workflow.nodes, which has to run first.
    pub source: TaskId,

    /// Key to Workflow.nodes, which waits for `source`.
    pub target: TaskId,
}

impl Dependency {
    pub fn new(source: TaskId, target: TaskId) -> Self {
        Self { source, target }
    }
}

impl From<(TaskId, TaskId)> for Dependency {
    fn from((source, target): (TaskId, TaskId)) -> Self {
        Self::new(source, target)
    }
}

impl From<(u64, u64)> for Dependency {
    fn from((source, target): (u64, u64)) -> Self {
        Self::new(TaskId::new(source), TaskId::new(target))
    }
}
