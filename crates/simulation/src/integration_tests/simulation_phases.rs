use crate::dashboard_actions::DashboardAction;
use crate::test_harness::TestDashboard;

// ---------------------------------------------------------------------------
// SimulationSet phase ordering
// ---------------------------------------------------------------------------

/// If the set chain were broken Bevy would panic building the schedule, or
/// the snapshot would lag the state by a tick.
#[test]
fn test_simulation_set_phases_configured() {
    let mut dash = TestDashboard::new();
    dash.tick(5);
    assert_eq!(dash.current_observation().tick, dash.tick_count());
}

/// PreSim applies the action before PostSim captures, so the snapshot taken
/// on the same tick already reflects it.
#[test]
fn test_observation_sees_action_on_same_tick() {
    let mut dash = TestDashboard::new();
    dash.act(DashboardAction::OptimizeRoute);
    let obs = dash.current_observation();
    assert!(obs.optimized);
    assert_eq!(obs.optimization_passes, 1);
}

/// The incident clear (Simulation) runs before the snapshot (PostSim).
#[test]
fn test_observation_sees_clear_on_same_tick() {
    let mut dash = TestDashboard::new();
    dash.act(DashboardAction::SimulateTraffic);
    assert!(dash.current_observation().traffic_incident.is_some());

    dash.tick(crate::config::INCIDENT_CLEAR_TICKS);
    assert!(dash.current_observation().traffic_incident.is_none());
    assert_eq!(dash.current_observation().incidents_cleared, 1);
}
