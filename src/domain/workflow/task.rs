use std::collections::BTreeSet;
use std::fmt;

use crate::domain::utils::id::{ServiceId, TaskId};

/// A unit of work inside a `Workflow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,

    /// Compatible service ids. Empty means every candidate is compatible.
    /// The registry does not filter on this yet.
    pub required_services: BTreeSet<ServiceId>,
}

impl Task {
    pub fn new(id: TaskId) -> Self {
        Self { id, required_services: BTreeSet::new() }
    }

    pub fn with_required_services(id: TaskId, required_services: impl IntoIterator<Item = ServiceId>) -> Self {
        Self { id, required_services: required_services.into_iter().collect() }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.required_services.is_empty()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task(id={})", self.id)
    }
}
