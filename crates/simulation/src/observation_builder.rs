//! Keeps a `DashboardObservation` snapshot current.
//!
//! `build_observation` runs in `FixedUpdate` / `SimulationSet::PostSim` so
//! every action and incident clear of the tick has settled before capture.

use bevy::prelude::*;

use crate::dashboard_actions::ActionResultLog;
use crate::dashboard_observation::DashboardObservation;
use crate::dashboard_state::DashboardState;
use crate::traffic_incident::IncidentHistory;
use crate::{SimulationSet, TickCounter};

/// The most recent observation, updated every tick in PostSim.
#[derive(Resource, Default, Debug, Clone)]
pub struct CurrentObservation {
    pub observation: DashboardObservation,
}

pub fn build_observation(
    tick: Res<TickCounter>,
    state: Res<DashboardState>,
    history: Res<IncidentHistory>,
    action_log: Res<ActionResultLog>,
    mut current: ResMut<CurrentObservation>,
) {
    current.observation = DashboardObservation::capture(tick.0, &state, &history, &action_log);
}

/// Capture a snapshot straight from the world, outside the schedule.
pub fn observe_world(world: &World) -> DashboardObservation {
    DashboardObservation::capture(
        world.resource::<TickCounter>().0,
        world.resource::<DashboardState>(),
        world.resource::<IncidentHistory>(),
        world.resource::<ActionResultLog>(),
    )
}

pub struct ObservationPlugin;

impl Plugin for ObservationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentObservation>();
        app.add_systems(
            FixedUpdate,
            build_observation
                .in_set(SimulationSet::PostSim)
                .after(crate::traffic_incident::record_incident_history),
        );
    }
}
