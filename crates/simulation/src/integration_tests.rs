//! Integration tests using the `TestDashboard` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and check the
//! dashboard's behavior across the executor, incident clears, and the
//! observation snapshot working together.

mod dashboard_flow_tests;
mod simulation_phases;

use crate::test_harness::TestDashboard;

#[test]
fn test_startup_selects_first_driver() {
    let dash = TestDashboard::new();
    assert_eq!(dash.state().selected_driver(), 0);
    assert!(dash.state().selected_driver() < dash.state().drivers().len());
    assert!(!dash.state().optimized());
    assert!(dash.incident().is_none());
}

#[test]
fn test_tick_counter_advances() {
    let mut dash = TestDashboard::new();
    let start = dash.tick_count();
    dash.tick(5);
    assert_eq!(dash.tick_count(), start + 5);
}
