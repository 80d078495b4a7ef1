use std::fmt;

use crate::domain::utils::id::IoTDeviceId;

/// A constrained device with an energy budget. Not yet consulted by the composers.
#[derive(Debug, Clone, PartialEq)]
pub struct IoTDevice {
    pub id: IoTDeviceId,

    /// Current battery charge in [0, 1].
    pub battery_level: f64,

    /// Device has a local renewable energy source.
    pub local_renewable: bool,
}

impl IoTDevice {
    pub fn new(id: IoTDeviceId) -> Self {
        Self::with_energy(id, 1.0, false)
    }

    pub fn with_energy(id: IoTDeviceId, battery_level: f64, local_renewable: bool) -> Self {
        Self { id, battery_level, local_renewable }
    }
}

impl fmt::Display for IoTDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IoTDevice(id={}, battery={:.2}, renewable={})", self.id, self.battery_level, self.local_renewable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let device = IoTDevice::new(IoTDeviceId::new(1));
        assert_eq!(device.battery_level, 1.0);
        assert!(!device.local_renewable);
        assert_eq!(device.to_string(), "IoTDevice(id=1, battery=1.00, renewable=false)");
    }
}
