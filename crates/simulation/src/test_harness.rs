//! # TestDashboard - headless integration test harness
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `SimulationPlugin` so tests
//! can queue actions, advance fixed ticks, and assert on the resulting state
//! without a window or renderer.

use bevy::prelude::*;

use crate::dashboard_actions::{
    ActionQueue, ActionResult, ActionResultLog, ActionSource, DashboardAction,
};
use crate::dashboard_observation::DashboardObservation;
use crate::dashboard_state::{DashboardSettings, DashboardState};
use crate::observation_builder::{observe_world, CurrentObservation};
use crate::traffic_incident::{IncidentClearPolicy, IncidentHistory, TrafficIncident};
use crate::{run_fixed_ticks, SimulationPlugin, TickCounter};

pub struct TestDashboard {
    app: App,
}

impl Default for TestDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDashboard {
    /// A dashboard on the baseline fleet with default settings.
    pub fn new() -> Self {
        Self::with_settings(DashboardSettings::default())
    }

    pub fn with_clear_policy(policy: IncidentClearPolicy) -> Self {
        Self::with_settings(DashboardSettings {
            incident_clear_policy: policy,
        })
    }

    fn with_settings(settings: DashboardSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Before SimulationPlugin so its init_resource keeps ours.
        app.insert_resource(settings);
        app.add_plugins(SimulationPlugin);
        // Run Startup once.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run N fixed ticks (100 ms each).
    pub fn tick(&mut self, n: u64) {
        run_fixed_ticks(self.app.world_mut(), n);
    }

    /// Queue an action as the player would. Applied on the next tick.
    pub fn queue(&mut self, action: DashboardAction) {
        let tick = self.tick_count();
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, ActionSource::Player, action);
    }

    /// Queue an action, run one tick, and return its result.
    pub fn act(&mut self, action: DashboardAction) -> ActionResult {
        self.queue(action);
        self.tick(1);
        self.last_result().unwrap_or(ActionResult::Success)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn state(&self) -> &DashboardState {
        self.app.world().resource::<DashboardState>()
    }

    pub fn incident(&self) -> Option<&TrafficIncident> {
        self.state().traffic_incident()
    }

    pub fn tick_count(&self) -> u64 {
        self.app.world().resource::<TickCounter>().0
    }

    pub fn incident_history(&self) -> &IncidentHistory {
        self.app.world().resource::<IncidentHistory>()
    }

    pub fn last_result(&self) -> Option<ActionResult> {
        self.app
            .world()
            .resource::<ActionResultLog>()
            .last_n(1)
            .first()
            .map(|(_, r)| r.clone())
    }

    /// Snapshot captured by the last tick's PostSim.
    pub fn current_observation(&self) -> &DashboardObservation {
        &self.app.world().resource::<CurrentObservation>().observation
    }

    /// Snapshot captured right now.
    pub fn observe(&self) -> DashboardObservation {
        observe_world(self.app.world())
    }
}
