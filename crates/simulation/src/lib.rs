use bevy::prelude::*;

pub mod agent_protocol;
pub mod baseline;
pub mod config;
pub mod dashboard_actions;
pub mod dashboard_observation;
pub mod dashboard_state;
pub mod dashboard_views;
pub mod fleet;
pub mod observation_builder;
pub mod route_optimization;
pub mod simulation_sets;
pub mod traffic_incident;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

use config::FIXED_TIMESTEP_SECS;
use dashboard_state::{DashboardSettings, DashboardState};

/// Fixed ticks elapsed since startup. Incremented first thing every tick.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

/// Run `n` fixed ticks by executing the `FixedUpdate` schedule directly.
///
/// Headless drivers (agent mode, tests) use this instead of `App::update` so
/// ticks advance deterministically without waiting on wall-clock time. Since
/// `First` never runs here, event buffers are swapped after every tick.
pub fn run_fixed_ticks(world: &mut World, n: u64) {
    for _ in 0..n {
        world.run_schedule(FixedUpdate);
        traffic_incident::swap_incident_events(world);
    }
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP_SECS))
            .init_resource::<TickCounter>()
            .init_resource::<DashboardSettings>()
            .init_resource::<DashboardState>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::PreSim,
                    SimulationSet::Simulation,
                    SimulationSet::PostSim,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                advance_tick_counter.in_set(SimulationSet::PreSim),
            )
            .add_systems(Startup, log_session_start);

        app.add_plugins((
            dashboard_actions::DashboardActionsPlugin,
            traffic_incident::TrafficIncidentPlugin,
            observation_builder::ObservationPlugin,
        ));
    }
}

fn log_session_start(state: Res<DashboardState>, settings: Res<DashboardSettings>) {
    info!(
        "Dashboard session started with {} drivers (incident clears: {:?})",
        state.drivers().len(),
        settings.incident_clear_policy
    );
}
