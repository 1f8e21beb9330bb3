//! Core fleet data: delivery stops, per-route metrics, and drivers.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A single delivery location. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: u32,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// Display-only arrival time, e.g. "9:30 AM".
    pub eta: String,
}

impl Stop {
    pub fn new(id: u32, address: &str, lat: f64, lng: f64, eta: &str) -> Self {
        Self {
            id,
            address: address.to_string(),
            lat,
            lng,
            eta: eta.to_string(),
        }
    }
}

/// Distance, duration, and emissions for one route (or a sum of routes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metrics {
    pub miles: u32,
    /// Minutes.
    pub time: u32,
    /// Kilograms of CO2.
    pub co2: u32,
}

impl Metrics {
    pub const fn new(miles: u32, time: u32, co2: u32) -> Self {
        Self { miles, time, co2 }
    }

    /// Scale each field by its own factor and round half away from zero.
    pub fn scaled(&self, miles: f64, time: f64, co2: f64) -> Self {
        Self {
            miles: scale_round(self.miles, miles),
            time: scale_round(self.time, time),
            co2: scale_round(self.co2, co2),
        }
    }

    /// Signed per-field difference `self - other`.
    pub fn delta_from(&self, other: &Metrics) -> MetricsDelta {
        MetricsDelta {
            miles: i64::from(self.miles) - i64::from(other.miles),
            time: i64::from(self.time) - i64::from(other.time),
            co2: i64::from(self.co2) - i64::from(other.co2),
        }
    }
}

impl Add for Metrics {
    type Output = Metrics;

    fn add(self, rhs: Metrics) -> Metrics {
        Metrics {
            miles: self.miles.saturating_add(rhs.miles),
            time: self.time.saturating_add(rhs.time),
            co2: self.co2.saturating_add(rhs.co2),
        }
    }
}

impl std::iter::Sum for Metrics {
    fn sum<I: Iterator<Item = Metrics>>(iter: I) -> Metrics {
        iter.fold(Metrics::default(), Add::add)
    }
}

fn scale_round(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round().max(0.0) as u32
}

/// Signed difference between two metric triples. Used for savings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsDelta {
    pub miles: i64,
    pub time: i64,
    pub co2: i64,
}

impl MetricsDelta {
    pub const ZERO: MetricsDelta = MetricsDelta {
        miles: 0,
        time: 0,
        co2: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// A driver and the route they own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique within a session.
    pub name: String,
    pub stops: Vec<Stop>,
    pub metrics: Metrics,
}

impl Driver {
    pub fn new(name: &str, stops: Vec<Stop>, metrics: Metrics) -> Self {
        Self {
            name: name.to_string(),
            stops,
            metrics,
        }
    }

    /// Stop ids in route order.
    pub fn stop_ids(&self) -> Vec<u32> {
        self.stops.iter().map(|s| s.id).collect()
    }
}
