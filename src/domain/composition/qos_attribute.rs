use std::fmt;
use std::str::FromStr;

use crate::domain::service::Service;
use crate::error::Error;

/// The QoS attributes a composer can optimize for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QosAttribute {
    #[default]
    Cost,
    ResponseTime,
    Availability,
    /// Selects `Service::base_energy_kwh`.
    Energy,
}

impl QosAttribute {
    pub const ALL: [QosAttribute; 4] =
        [QosAttribute::Cost, QosAttribute::ResponseTime, QosAttribute::Availability, QosAttribute::Energy];

    /// Reads this attribute from `service`.
    pub fn select(&self, service: &Service) -> f64 {
        match self {
            QosAttribute::Cost => service.cost,
            QosAttribute::ResponseTime => service.response_time,
            QosAttribute::Availability => service.availability,
            QosAttribute::Energy => service.base_energy_kwh,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QosAttribute::Cost => "cost",
            QosAttribute::ResponseTime => "response_time",
            QosAttribute::Availability => "availability",
            QosAttribute::Energy => "energy",
        }
    }
}

impl FromStr for QosAttribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cost" => Ok(QosAttribute::Cost),
            "response_time" => Ok(QosAttribute::ResponseTime),
            "availability" => Ok(QosAttribute::Availability),
            "energy" | "base_energy_kwh" => Ok(QosAttribute::Energy),
            _ => Err(Error::AttributeNotFound(s.to_string())),
        }
    }
}

impl fmt::Display for QosAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils::id::ServiceId;

    #[test]
    fn test_parse_known_attributes() {
        for attribute in QosAttribute::ALL {
            assert_eq!(attribute.name().parse::<QosAttribute>().unwrap(), attribute);
        }
        assert_eq!("base_energy_kwh".parse::<QosAttribute>().unwrap(), QosAttribute::Energy);
    }

    #[test]
    fn test_parse_unknown_attribute() {
        let result = "nonexistent_attr".parse::<QosAttribute>();
        assert!(matches!(result, Err(Error::AttributeNotFound(key)) if key == "nonexistent_attr"));
    }

    #[test]
    fn test_select() {
        let service = Service::new(ServiceId::new(1), 10.0, 50.0, 0.95, 0.5);

        assert_eq!(QosAttribute::Cost.select(&service), 10.0);
        assert_eq!(QosAttribute::ResponseTime.select(&service), 50.0);
        assert_eq!(QosAttribute::Availability.select(&service), 0.95);
        assert_eq!(QosAttribute::Energy.select(&service), 0.5);
    }
}
