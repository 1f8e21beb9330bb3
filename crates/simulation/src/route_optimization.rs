//! Mock route optimization.
//!
//! Reorders each driver's stops by ascending latitude and applies fixed
//! discounts to the route metrics. There is no real routing here. Every pass
//! discounts the *current* metrics, so repeated passes compound.

use crate::config::{CO2_DISCOUNT, MILES_DISCOUNT, TIME_DISCOUNT};
use crate::fleet::{Driver, Metrics, Stop};

/// Stops sorted by ascending latitude. Stable: equal latitudes keep their
/// original relative order.
pub fn sort_stops_by_latitude(stops: &[Stop]) -> Vec<Stop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| a.lat.total_cmp(&b.lat));
    sorted
}

pub fn discounted_metrics(metrics: &Metrics) -> Metrics {
    metrics.scaled(MILES_DISCOUNT, TIME_DISCOUNT, CO2_DISCOUNT)
}

/// One optimization pass over a single driver.
pub fn optimize_driver(driver: &Driver) -> Driver {
    Driver {
        name: driver.name.clone(),
        stops: sort_stops_by_latitude(&driver.stops),
        metrics: discounted_metrics(&driver.metrics),
    }
}

/// One optimization pass over the whole fleet. Driver order is preserved.
pub fn optimize_drivers(drivers: &[Driver]) -> Vec<Driver> {
    drivers.iter().map(optimize_driver).collect()
}
