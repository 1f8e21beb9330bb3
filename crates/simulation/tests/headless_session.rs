//! Drives a headless dashboard session through the crate's public API only,
//! the way the `--agent` loop does: queue an action, run fixed ticks, read
//! the snapshot, and serialize protocol responses.
//!
//! Run: cargo test -p simulation --test headless_session

use bevy::prelude::*;

use simulation::agent_protocol::{make_response, AgentCommand, ResponsePayload};
use simulation::config::INCIDENT_CLEAR_TICKS;
use simulation::dashboard_actions::{ActionQueue, ActionSource, DashboardAction};
use simulation::fleet::Metrics;
use simulation::observation_builder::{observe_world, CurrentObservation};
use simulation::{run_fixed_ticks, SimulationPlugin, TickCounter};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SimulationPlugin);
    app.update();
    app
}

fn act(app: &mut App, action: DashboardAction) {
    let tick = app.world().resource::<TickCounter>().0;
    app.world_mut()
        .resource_mut::<ActionQueue>()
        .push(tick, ActionSource::Agent, action);
    run_fixed_ticks(app.world_mut(), 1);
}

#[test]
fn test_session_optimize_then_incident_round() {
    let mut app = headless_app();
    let start_tick = app.world().resource::<TickCounter>().0;

    act(&mut app, DashboardAction::SelectDriver { index: 1 });
    act(&mut app, DashboardAction::OptimizeRoute);

    let obs = observe_world(app.world());
    assert_eq!(obs.tick, start_tick + 2);
    assert_eq!(obs.selected_driver, 1);
    let ids: Vec<u32> = obs.selected_stops.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![9, 8, 7, 10, 6]);
    assert_eq!(obs.total_metrics, Metrics::new(106, 454, 53));
    assert_eq!(obs.leaderboard[0].name, "Driver B");

    act(&mut app, DashboardAction::SimulateTraffic);
    assert!(observe_world(app.world()).traffic_incident.is_some());

    run_fixed_ticks(app.world_mut(), INCIDENT_CLEAR_TICKS);
    let obs = observe_world(app.world());
    assert!(obs.traffic_incident.is_none());
    assert_eq!(obs.incidents_raised, 1);
    assert_eq!(obs.incidents_cleared, 1);
}

#[test]
fn test_current_observation_tracks_world() {
    let mut app = headless_app();
    act(&mut app, DashboardAction::OptimizeRoute);
    let cached = app.world().resource::<CurrentObservation>().observation.clone();
    assert_eq!(cached, observe_world(app.world()));
}

#[test]
fn test_protocol_lines_over_a_session() {
    let mut app = headless_app();

    let cmd: AgentCommand =
        serde_json::from_str(r#"{"cmd":"act","action":{"SelectDriver":{"index":7}}}"#)
            .expect("act command parses");
    let AgentCommand::Act { action } = cmd else {
        panic!("expected act command");
    };
    act(&mut app, action);

    let obs = observe_world(app.world());
    assert_eq!(obs.selected_driver, 0);
    assert_eq!(obs.recent_action_results.len(), 1);
    assert!(!obs.recent_action_results[0].success);

    let json = serde_json::to_value(make_response(ResponsePayload::Observation {
        observation: obs,
    }))
    .expect("observation serializes");
    assert_eq!(json["type"], "observation");
    assert_eq!(json["observation"]["selected_driver"], 0);
}
