//! The dashboard's single owned state bundle and its transitions.
//!
//! Every mutation the dashboard supports is a method here, so the transforms
//! can be exercised on a plain struct without building an `App`. Systems in
//! `dashboard_actions` and `traffic_incident` are thin wrappers around them.

use bevy::prelude::*;

use crate::baseline::baseline_drivers;
use crate::dashboard_actions::ActionError;
use crate::fleet::{Driver, Stop};
use crate::route_optimization::optimize_drivers;
use crate::traffic_incident::{IncidentClearPolicy, IncidentSchedule, TrafficIncident};

/// Runtime knobs. Insert before `SimulationPlugin` to override the defaults.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DashboardSettings {
    pub incident_clear_policy: IncidentClearPolicy,
}

#[derive(Resource, Debug, Clone)]
pub struct DashboardState {
    drivers: Vec<Driver>,
    /// Startup fleet, kept for savings.
    baseline: Vec<Driver>,
    selected_driver: usize,
    optimized: bool,
    optimization_passes: u32,
    pub incident: IncidentSchedule,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(baseline_drivers())
    }
}

impl DashboardState {
    /// Start a session from `baseline`. The baseline must be non-empty so the
    /// selected index is valid.
    pub fn new(baseline: Vec<Driver>) -> Self {
        debug_assert!(!baseline.is_empty(), "dashboard needs at least one driver");
        Self {
            drivers: baseline.clone(),
            baseline,
            selected_driver: 0,
            optimized: false,
            optimization_passes: 0,
            incident: IncidentSchedule::default(),
        }
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn baseline(&self) -> &[Driver] {
        &self.baseline
    }

    pub fn selected_driver(&self) -> usize {
        self.selected_driver
    }

    pub fn optimized(&self) -> bool {
        self.optimized
    }

    pub fn optimization_passes(&self) -> u32 {
        self.optimization_passes
    }

    pub fn traffic_incident(&self) -> Option<&TrafficIncident> {
        self.incident.active()
    }

    /// Stops of the selected driver, in route order.
    pub fn selected_driver_stops(&self) -> &[Stop] {
        self.drivers
            .get(self.selected_driver)
            .map(|d| d.stops.as_slice())
            .unwrap_or(&[])
    }

    pub fn select_driver(&mut self, index: usize) -> Result<(), ActionError> {
        if index >= self.drivers.len() {
            return Err(ActionError::DriverOutOfRange {
                index,
                driver_count: self.drivers.len(),
            });
        }
        self.selected_driver = index;
        Ok(())
    }

    /// Replace the fleet with one optimization pass over the current drivers.
    /// Repeated calls compound the discount.
    pub fn optimize_route(&mut self) {
        self.drivers = optimize_drivers(&self.drivers);
        self.optimized = true;
        self.optimization_passes += 1;
    }

    pub fn simulate_traffic(
        &mut self,
        now_tick: u64,
        policy: IncidentClearPolicy,
    ) -> TrafficIncident {
        self.incident.raise(now_tick, policy).clone()
    }
}
