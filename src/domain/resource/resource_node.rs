use std::fmt;

use crate::domain::service::Service;
use crate::domain::utils::id::{ResourceNodeId, ServiceId};

/// An edge or cloud location that hosts services.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceNode {
    pub id: ResourceNodeId,

    /// Geographical label, e.g. `us-west`.
    pub location: String,

    /// Computational capacity in abstract units.
    pub capacity: f64,

    /// Hosted services in the order they were added.
    pub services: Vec<ServiceId>,
}

impl ResourceNode {
    pub fn new(id: ResourceNodeId, location: impl Into<String>, capacity: f64) -> Self {
        Self { id, location: location.into(), capacity, services: Vec::new() }
    }

    /// Hosts `service` on this node and points its back reference here.
    ///
    /// Adding the same service twice lists it twice.
    pub fn add_service(&mut self, service: &mut Service) {
        self.services.push(service.id);
        service.hosting_node = Some(self.id);
    }

    /// Removes every occurrence of `service_id`. Returns true if any was removed.
    pub fn remove_service(&mut self, service_id: ServiceId) -> bool {
        let before = self.services.len();
        self.services.retain(|hosted| *hosted != service_id);
        self.services.len() != before
    }

    pub fn hosts(&self, service_id: ServiceId) -> bool {
        self.services.contains(&service_id)
    }
}

impl fmt::Display for ResourceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceNode(id={}, location={}, capacity={:.2})", self.id, self.location, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: u64) -> Service {
        Service::new(ServiceId::new(id), 10.0, 50.0, 0.95, 0.5)
    }

    #[test]
    fn test_add_service_sets_back_reference() {
        let mut node = ResourceNode::new(ResourceNodeId::new(1), "us-west", 4.0);
        let mut s = service(7);

        node.add_service(&mut s);

        assert_eq!(s.hosting_node, Some(node.id));
        assert!(node.hosts(s.id));
        assert_eq!(node.services, vec![ServiceId::new(7)]);
    }

    #[test]
    fn test_add_service_twice_keeps_duplicate() {
        let mut node = ResourceNode::new(ResourceNodeId::new(1), "eu-central", 2.0);
        let mut s = service(3);

        node.add_service(&mut s);
        node.add_service(&mut s);

        assert_eq!(node.services.len(), 2);
        assert!(node.remove_service(s.id));
        assert!(node.services.is_empty());
        assert!(!node.remove_service(s.id));
    }

    #[test]
    fn test_display() {
        let node = ResourceNode::new(ResourceNodeId::new(2), "us-west", 4.0);
        assert_eq!(node.to_string(), "ResourceNode(id=2, location=us-west, capacity=4.00)");
    }
}
