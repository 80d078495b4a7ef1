use crate::domain::utils::id::TaskId;
use crate::domain::workflow::task::Task;

/// Represents a node in the workflow graph (one task).
#[derive(Debug, Clone)]
pub struct WorkflowNode {
    pub task: Task,

    /// Graph structure: keys to the Workflow's nodes map.
    /// Predecessors this task depends on.
    pub incoming: Vec<TaskId>,

    /// Successors that depend on this task.
    pub outgoing: Vec<TaskId>,
}

impl WorkflowNode {
    pub fn new(task: Task) -> Self {
        Self { task, incoming: Vec::new(), outgoing: Vec::new() }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }
}
