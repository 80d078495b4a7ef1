use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::api::workflow_dto::WorkflowDto;
use crate::domain::utils::id::{ServiceId, TaskId};
use crate::domain::workflow::dependency::Dependency;
use crate::domain::workflow::task::Task;
use crate::domain::workflow::workflow_node::WorkflowNode;
use crate::error::{Error, Result};

/// A composite workflow: a DAG of tasks where an edge `source -> target`
/// means `target` depends on `source`.
#[derive(Debug, Clone)]
pub struct Workflow {
    /// The graph nodes, keyed by task id.
    pub nodes: HashMap<TaskId, WorkflowNode>,

    /// Edges in insertion order, without duplicates.
    pub dependencies: Vec<Dependency>,

    /// Keys to Workflow.nodes without predecessors, ascending.
    pub entry_nodes: Vec<TaskId>,

    /// Keys to Workflow.nodes without successors, ascending.
    pub exit_nodes: Vec<TaskId>,
}

impl Workflow {
    /// Builds the graph from a task list and an edge list.
    ///
    /// Every edge endpoint must be a declared task, and task ids must be unique.
    /// Acyclicity is not checked here; `get_tasks` reports cycles.
    pub fn new<E>(tasks: Vec<Task>, edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Dependency>,
    {
        // Phase 1: Create all WorkflowNodes
        let mut nodes = Self::generate_workflow_nodes(tasks)?;

        // Phase 2: Validate and deduplicate the dependencies
        let dependencies = Self::build_dependencies(&nodes, edges)?;

        // Phase 3: Populate the adjacency lists (incoming/outgoing) on each node
        Self::populate_node_adjacency_lists(&mut nodes, &dependencies);

        // Phase 4: Find the entry/exit points
        let (entry_nodes, exit_nodes) = Self::find_entry_exit_points(&nodes);

        log::debug!(
            "Workflow constructed with {} tasks, {} dependencies, {} entry and {} exit tasks.",
            nodes.len(),
            dependencies.len(),
            entry_nodes.len(),
            exit_nodes.len()
        );

        Ok(Workflow { nodes, dependencies, entry_nodes, exit_nodes })
    }

    /// **Phase 1: Generate Workflow Nodes**
    fn generate_workflow_nodes(tasks: Vec<Task>) -> Result<HashMap<TaskId, WorkflowNode>> {
        let mut nodes = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let task_id = task.id;
            if nodes.insert(task_id, WorkflowNode::new(task)).is_some() {
                return Err(Error::DuplicateTask(task_id));
            }
        }
        Ok(nodes)
    }

    /// **Phase 2: Build Dependencies**
    ///
    /// Rejects edges with an undeclared endpoint. A repeated edge is kept once.
    fn build_dependencies<E>(
        nodes: &HashMap<TaskId, WorkflowNode>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Vec<Dependency>>
    where
        E: Into<Dependency>,
    {
        let mut seen: HashSet<Dependency> = HashSet::new();
        let mut dependencies = Vec::new();

        for edge in edges {
            let dependency: Dependency = edge.into();

            for endpoint in [dependency.source, dependency.target] {
                if !nodes.contains_key(&endpoint) {
                    return Err(Error::UnknownTask {
                        source_task: dependency.source,
                        target_task: dependency.target,
                        missing: endpoint,
                    });
                }
            }

            if seen.insert(dependency) {
                dependencies.push(dependency);
            } else {
                log::debug!("Ignoring repeated dependency {} -> {}", dependency.source, dependency.target);
            }
        }
        Ok(dependencies)
    }

    /// **Phase 3: Populate Node Adjacency Lists**
    fn populate_node_adjacency_lists(nodes: &mut HashMap<TaskId, WorkflowNode>, dependencies: &[Dependency]) {
        for dependency in dependencies {
            if let Some(source_node) = nodes.get_mut(&dependency.source) {
                source_node.outgoing.push(dependency.target);
            }
            if let Some(target_node) = nodes.get_mut(&dependency.target) {
                target_node.incoming.push(dependency.source);
            }
        }
    }

    /// **Phase 4: Find Entry and Exit Points**
    fn find_entry_exit_points(nodes: &HashMap<TaskId, WorkflowNode>) -> (Vec<TaskId>, Vec<TaskId>) {
        let mut entry_nodes: Vec<TaskId> = nodes.values().filter(|n| n.incoming.is_empty()).map(|n| n.id()).collect();
        let mut exit_nodes: Vec<TaskId> = nodes.values().filter(|n| n.outgoing.is_empty()).map(|n| n.id()).collect();

        entry_nodes.sort();
        exit_nodes.sort();
        (entry_nodes, exit_nodes)
    }
}

impl Workflow {
    /// Returns the tasks in topological order: every task comes after all of
    /// its predecessors. Independent tasks are ordered by ascending id.
    ///
    /// Uses Kahn's algorithm; tasks left with a non-zero in-degree are on or
    /// behind a cycle and are reported in `Error::GraphCycle`.
    pub fn get_tasks(&self) -> Result<Vec<&Task>> {
        let mut in_degree: HashMap<TaskId, usize> =
            self.nodes.iter().map(|(task_id, node)| (*task_id, node.incoming.len())).collect();

        let mut ready: BTreeSet<TaskId> =
            in_degree.iter().filter(|(_, degree)| **degree == 0).map(|(task_id, _)| *task_id).collect();

        let mut ordered = Vec::with_capacity(self.nodes.len());

        while let Some(task_id) = ready.pop_first() {
            let Some(node) = self.nodes.get(&task_id) else {
                continue;
            };
            ordered.push(&node.task);

            for successor in &node.outgoing {
                if let Some(degree) = in_degree.get_mut(successor) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(*successor);
                    }
                }
            }
        }

        if ordered.len() < self.nodes.len() {
            let mut blocked: Vec<TaskId> =
                in_degree.into_iter().filter(|(_, degree)| *degree > 0).map(|(task_id, _)| task_id).collect();
            blocked.sort();

            log::error!("Topological ordering failed, cycle among tasks {:?}", blocked);
            return Err(Error::GraphCycle(blocked));
        }

        Ok(ordered)
    }

    pub fn get_task(&self, task_id: TaskId) -> Option<&Task> {
        self.nodes.get(&task_id).map(|node| &node.task)
    }

    pub fn get_node(&self, task_id: TaskId) -> Option<&WorkflowNode> {
        self.nodes.get(&task_id)
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Constructs a Workflow from its JSON representation.
impl TryFrom<WorkflowDto> for Workflow {
    type Error = Error;

    fn try_from(dto: WorkflowDto) -> Result<Self> {
        let tasks = dto
            .tasks
            .into_iter()
            .map(|task_dto| {
                Task::with_required_services(
                    TaskId::new(task_dto.id),
                    task_dto.required_services.into_iter().map(ServiceId::new),
                )
            })
            .collect();

        Workflow::new(tasks, dto.edges)
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Workflow with {} tasks", self.nodes.len())
    }
}
