use std::fmt;
use std::str::FromStr;

use crate::domain::composition::baseline::{Composition, greedy_composition_by, random_composition};
use crate::domain::composition::qos_attribute::QosAttribute;
use crate::domain::registry::service_registry::ServiceRegistry;
use crate::domain::workflow::workflow::Workflow;
use crate::error::{Error, Result};

/// The available baseline composition algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionStrategy {
    /// Deterministic pseudo-random pick per task.
    Random,
    /// Minimum of the given QoS attribute per task.
    Greedy(QosAttribute),
}

impl CompositionStrategy {
    /// Runs the selected algorithm.
    pub fn compose<'a>(&self, workflow: &Workflow, registry: &'a ServiceRegistry) -> Result<Composition<'a>> {
        match self {
            CompositionStrategy::Random => random_composition(workflow, registry),
            CompositionStrategy::Greedy(attribute) => greedy_composition_by(workflow, registry, *attribute),
        }
    }
}

impl Default for CompositionStrategy {
    fn default() -> Self {
        CompositionStrategy::Greedy(QosAttribute::default())
    }
}

/// Accepts `random`, `greedy` (by cost) and `greedy:<attribute>`.
impl FromStr for CompositionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once(':') {
            None => match s.trim() {
                "random" => Ok(CompositionStrategy::Random),
                "greedy" => Ok(CompositionStrategy::Greedy(QosAttribute::default())),
                _ => Err(Error::UnknownStrategy(s.to_string())),
            },
            Some(("greedy", attribute)) => Ok(CompositionStrategy::Greedy(attribute.parse()?)),
            Some(_) => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for CompositionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionStrategy::Random => write!(f, "random"),
            CompositionStrategy::Greedy(attribute) => write!(f, "greedy:{}", attribute),
        }
    }
}
