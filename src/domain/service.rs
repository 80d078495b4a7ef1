use std::fmt;

use crate::domain::utils::id::{ResourceNodeId, ServiceId};

/// An atomic unit of computation with its QoS attributes.
///
/// `hosting_node` is a plain relation to the node that hosts this service.
/// It is written by `ResourceNode::add_service` and never owns the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ServiceId,

    /// Monetary cost.
    pub cost: f64,

    /// Execution time in ms.
    pub response_time: f64,

    /// Probability in [0, 1].
    pub availability: f64,

    /// Base energy consumption in kWh.
    pub base_energy_kwh: f64,

    pub hosting_node: Option<ResourceNodeId>,
}

impl Service {
    pub fn new(id: ServiceId, cost: f64, response_time: f64, availability: f64, base_energy_kwh: f64) -> Self {
        Self { id, cost, response_time, availability, base_energy_kwh, hosting_node: None }
    }

    pub fn is_hosted(&self) -> bool {
        self.hosting_node.is_some()
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service(id={}, cost={:.2}, rt={:.2}, avail={:.2}, energy={:.2})",
            self.id, self.cost, self.response_time, self.availability, self.base_energy_kwh
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_init() {
        let service = Service::new(ServiceId::new(1), 10.0, 50.0, 0.95, 0.5);

        assert_eq!(service.cost, 10.0);
        assert!(!service.is_hosted());
        assert_eq!(service.to_string(), "Service(id=1, cost=10.00, rt=50.00, avail=0.95, energy=0.50)");
    }
}
