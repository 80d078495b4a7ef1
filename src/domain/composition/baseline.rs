use std::collections::BTreeMap;

use crate::domain::composition::qos_attribute::QosAttribute;
use crate::domain::registry::service_registry::ServiceRegistry;
use crate::domain::service::Service;
use crate::domain::utils::id::TaskId;
use crate::domain::workflow::task::Task;
use crate::domain::workflow::workflow::Workflow;
use crate::error::Result;

/// Target for the analytic events of finished compositions.
pub const ANALYTICS_TARGET: &str = "analytics";

/// Assignment of one service per task. Tasks without any candidate have no entry.
pub type Composition<'a> = BTreeMap<TaskId, &'a Service>;

/// Deterministic stand-in for a random pick: `task_id mod candidate_count`.
///
/// Only meant as a lower-bound sanity check. Same inputs give the same
/// composition on every run and every platform.
pub fn random_composition<'a>(workflow: &Workflow, registry: &'a ServiceRegistry) -> Result<Composition<'a>> {
    let composition = compose_with(workflow, registry, |task, candidates| {
        let index = (task.id.value() % candidates.len() as u64) as usize;
        candidates[index]
    })?;

    log_composition("random", None, workflow, &composition);
    Ok(composition)
}

/// Assigns each task the candidate with the smallest value of `key`.
///
/// `key` is parsed into a `QosAttribute` before the workflow is visited, so an
/// unknown name fails with `Error::AttributeNotFound` even when no task has
/// candidates.
pub fn greedy_composition<'a>(
    workflow: &Workflow,
    registry: &'a ServiceRegistry,
    key: &str,
) -> Result<Composition<'a>> {
    let attribute: QosAttribute = key.parse()?;
    greedy_composition_by(workflow, registry, attribute)
}

/// Typed variant of `greedy_composition`. On ties the first minimal
/// candidate, i.e. the one with the lowest service id, wins.
pub fn greedy_composition_by<'a>(
    workflow: &Workflow,
    registry: &'a ServiceRegistry,
    attribute: QosAttribute,
) -> Result<Composition<'a>> {
    let composition = compose_with(workflow, registry, |_, candidates| {
        // `min_by` keeps the first of several equal elements.
        candidates
            .iter()
            .copied()
            .min_by(|a, b| attribute.select(a).total_cmp(&attribute.select(b)))
            .unwrap_or(candidates[0])
    })?;

    log_composition("greedy", Some(attribute), workflow, &composition);
    Ok(composition)
}

/// Visits the tasks in topological order and lets `select` pick one of the
/// non-empty candidate lists.
fn compose_with<'a, F>(workflow: &Workflow, registry: &'a ServiceRegistry, mut select: F) -> Result<Composition<'a>>
where
    F: FnMut(&Task, &[&'a Service]) -> &'a Service,
{
    let mut composition = Composition::new();

    for task in workflow.get_tasks()? {
        let candidates = registry.find_candidates_for_task(task);
        if candidates.is_empty() {
            log::debug!("No candidate service for task {}, leaving it unassigned.", task.id);
            continue;
        }

        let chosen = select(task, &candidates);
        log::trace!("Task {} -> {}", task.id, chosen);
        composition.insert(task.id, chosen);
    }

    Ok(composition)
}

fn log_composition(strategy: &str, attribute: Option<QosAttribute>, workflow: &Workflow, composition: &Composition) {
    let attribute_name = attribute.map(|a| a.name()).unwrap_or("-");
    let num_tasks = workflow.len();
    let num_assignments = composition.len();

    tracing::info!(
        target: ANALYTICS_TARGET,
        LogDescription = "Composition finished",
        Strategy = strategy,
        Attribute = attribute_name,
        NumberOfTasks = num_tasks,
        NumberOfAssignments = num_assignments,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils::id::ServiceId;
    use crate::domain::workflow::dependency::Dependency;
    use crate::error::Error;

    fn service(id: u64, cost: f64, response_time: f64, availability: f64, energy: f64) -> Service {
        Service::new(ServiceId::new(id), cost, response_time, availability, energy)
    }

    fn two_service_registry() -> ServiceRegistry {
        ServiceRegistry::new(vec![service(1, 10.0, 50.0, 0.95, 0.5), service(2, 5.0, 60.0, 0.90, 0.6)])
    }

    fn single_task_workflow() -> Workflow {
        Workflow::new(vec![Task::new(TaskId::new(1))], Vec::<Dependency>::new()).unwrap()
    }

    fn chain_workflow(len: u64) -> Workflow {
        let tasks = (1..=len).map(|id| Task::new(TaskId::new(id))).collect();
        let edges: Vec<(u64, u64)> = (1..len).map(|id| (id, id + 1)).collect();
        Workflow::new(tasks, edges).unwrap()
    }

    #[test]
    fn test_greedy_picks_minimum_cost() {
        let registry = two_service_registry();
        let composition = greedy_composition(&single_task_workflow(), &registry, "cost").unwrap();

        assert_eq!(composition[&TaskId::new(1)].id, ServiceId::new(2));
    }

    #[test]
    fn test_greedy_other_attributes() {
        let registry = two_service_registry();
        let workflow = single_task_workflow();

        let by_rt = greedy_composition(&workflow, &registry, "response_time").unwrap();
        assert_eq!(by_rt[&TaskId::new(1)].id, ServiceId::new(1));

        let by_energy = greedy_composition(&workflow, &registry, "energy").unwrap();
        assert_eq!(by_energy[&TaskId::new(1)].id, ServiceId::new(1));

        let by_availability = greedy_composition_by(&workflow, &registry, QosAttribute::Availability).unwrap();
        assert_eq!(by_availability[&TaskId::new(1)].id, ServiceId::new(2));
    }

    #[test]
    fn test_greedy_tie_takes_first_candidate() {
        let registry = ServiceRegistry::new(vec![
            service(3, 1.0, 10.0, 0.9, 0.1),
            service(2, 1.0, 20.0, 0.9, 0.1),
            service(4, 2.0, 5.0, 0.9, 0.1),
        ]);

        let composition = greedy_composition(&single_task_workflow(), &registry, "cost").unwrap();
        assert_eq!(composition[&TaskId::new(1)].id, ServiceId::new(2));
    }

    #[test]
    fn test_greedy_unknown_attribute_fails() {
        let registry = two_service_registry();
        let result = greedy_composition(&single_task_workflow(), &registry, "nonexistent_attr");

        assert!(matches!(result, Err(Error::AttributeNotFound(key)) if key == "nonexistent_attr"));
    }

    #[test]
    fn test_greedy_unknown_attribute_fails_without_candidates() {
        let registry = ServiceRegistry::default();
        let result = greedy_composition(&single_task_workflow(), &registry, "latency");

        assert!(matches!(result, Err(Error::AttributeNotFound(_))));
    }

    #[test]
    fn test_random_is_deterministic() {
        let registry = ServiceRegistry::new((1..=7).map(|id| service(id, id as f64, 10.0, 0.9, 0.1)));
        let workflow = chain_workflow(10);

        let first = random_composition(&workflow, &registry).unwrap();
        let second = random_composition(&workflow, &registry).unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_index_is_task_id_modulo_candidates() {
        let registry = ServiceRegistry::new((1..=3).map(|id| service(id, 1.0, 10.0, 0.9, 0.1)));
        let composition = random_composition(&chain_workflow(4), &registry).unwrap();

        // Candidates are [1, 2, 3]; task id mod 3 indexes into them.
        assert_eq!(composition[&TaskId::new(1)].id, ServiceId::new(2));
        assert_eq!(composition[&TaskId::new(2)].id, ServiceId::new(3));
        assert_eq!(composition[&TaskId::new(3)].id, ServiceId::new(1));
        assert_eq!(composition[&TaskId::new(4)].id, ServiceId::new(2));
    }

    #[test]
    fn test_empty_candidates_leave_no_entry() {
        let registry = ServiceRegistry::default();
        let workflow = chain_workflow(3);

        assert!(random_composition(&workflow, &registry).unwrap().is_empty());
        assert!(greedy_composition(&workflow, &registry, "cost").unwrap().is_empty());
    }

    #[test]
    fn test_cycle_propagates() {
        let tasks = (1..=3).map(|id| Task::new(TaskId::new(id))).collect();
        let edges: Vec<(u64, u64)> = vec![(1, 2), (2, 3), (3, 1)];
        let workflow = Workflow::new(tasks, edges).unwrap();
        let registry = two_service_registry();

        assert!(matches!(random_composition(&workflow, &registry), Err(Error::GraphCycle(_))));
        assert!(matches!(greedy_composition(&workflow, &registry, "cost"), Err(Error::GraphCycle(_))));
    }
}
