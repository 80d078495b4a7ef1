use std::collections::BTreeMap;

use crate::domain::service::Service;
use crate::domain::utils::id::ServiceId;
use crate::domain::workflow::task::Task;

/// Catalog of services, keyed by service id.
///
/// Iteration is in ascending id order, which keeps the candidate order and
/// therefore every composition reproducible. Read-only after construction,
/// so it can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<ServiceId, Service>,
}

impl ServiceRegistry {
    /// Builds the catalog. A repeated id overwrites the earlier service.
    pub fn new(services: impl IntoIterator<Item = Service>) -> Self {
        let mut map = BTreeMap::new();
        for service in services {
            if let Some(previous) = map.insert(service.id, service) {
                log::warn!("Service {} registered twice, keeping the last entry.", previous.id);
            }
        }
        log::debug!("ServiceRegistry built with {} services.", map.len());

        Self { services: map }
    }

    /// Returns `None` when no service has this id.
    pub fn get_service(&self, id: ServiceId) -> Option<&Service> {
        self.services.get(&id)
    }

    /// All registered services are candidates for every task for now;
    /// `Task::required_services` is not consulted.
    pub fn find_candidates_for_task(&self, _task: &Task) -> Vec<&Service> {
        self.services.values().collect()
    }

    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl FromIterator<Service> for ServiceRegistry {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        Self::new(iter)
    }
}
