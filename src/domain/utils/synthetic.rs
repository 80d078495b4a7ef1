use std::f64::consts::PI;

use rand::Rng;

use crate::domain::service::Service;
use crate::domain::utils::id::ServiceId;

pub const COST_RANGE: (f64, f64) = (1.0, 100.0);
pub const RESPONSE_TIME_MEAN: f64 = 50.0;
pub const RESPONSE_TIME_STD_DEV: f64 = 20.0;
pub const RESPONSE_TIME_MIN: f64 = 0.1;
pub const AVAILABILITY_RANGE: (f64, f64) = (0.9, 0.99);
pub const ENERGY_RANGE: (f64, f64) = (0.1, 1.0);

/// Generates `num_services` services with ids `1..=num_services`:
///
/// * cost ~ U(1, 100)
/// * response_time ~ N(50, 20), clipped to at least 0.1 ms
/// * availability ~ U(0.9, 0.99)
/// * base_energy_kwh ~ U(0.1, 1.0)
pub fn generate_synthetic_services<R: Rng + ?Sized>(num_services: usize, rng: &mut R) -> Vec<Service> {
    let services: Vec<Service> = (1..=num_services as u64)
        .map(|id| {
            let cost = rng.random_range(COST_RANGE.0..COST_RANGE.1);
            let response_time =
                sample_normal(rng, RESPONSE_TIME_MEAN, RESPONSE_TIME_STD_DEV).max(RESPONSE_TIME_MIN);
            let availability = rng.random_range(AVAILABILITY_RANGE.0..AVAILABILITY_RANGE.1);
            let base_energy_kwh = rng.random_range(ENERGY_RANGE.0..ENERGY_RANGE.1);

            Service::new(ServiceId::new(id), cost, response_time, availability, base_energy_kwh)
        })
        .collect();

    log::info!("Generated {} synthetic services.", services.len());
    services
}

/// Box-Muller transform.
fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // u1 in (0, 1] keeps ln finite.
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();

    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
