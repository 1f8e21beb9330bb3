//! End-to-end flows over the observation snapshot.

use crate::dashboard_actions::{ActionError, ActionResult, DashboardAction};
use crate::fleet::{Metrics, MetricsDelta};
use crate::test_harness::TestDashboard;

#[test]
fn test_baseline_observation() {
    let dash = TestDashboard::new();
    let obs = dash.observe();
    assert_eq!(obs.total_metrics, Metrics::new(125, 517, 62));
    assert_eq!(obs.savings, MetricsDelta::ZERO);

    let names: Vec<&str> = obs.leaderboard.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Driver B", "Driver C", "Driver A"]);
    let co2: Vec<u32> = obs.leaderboard.iter().map(|e| e.co2).collect();
    assert_eq!(co2, vec![19, 21, 22]);
}

#[test]
fn test_savings_stay_zero_without_optimize() {
    let mut dash = TestDashboard::new();
    dash.act(DashboardAction::SelectDriver { index: 1 });
    dash.act(DashboardAction::SimulateTraffic);
    dash.tick(60);
    assert_eq!(dash.observe().savings, MetricsDelta::ZERO);
}

#[test]
fn test_savings_after_optimize() {
    let mut dash = TestDashboard::new();
    dash.act(DashboardAction::OptimizeRoute);
    let obs = dash.observe();
    assert_eq!(obs.total_metrics, Metrics::new(106, 454, 53));
    assert_eq!(
        obs.savings,
        MetricsDelta {
            miles: 19,
            time: 63,
            co2: 9
        }
    );
}

#[test]
fn test_totals_track_current_fleet() {
    let mut dash = TestDashboard::new();
    dash.act(DashboardAction::OptimizeRoute);
    dash.act(DashboardAction::OptimizeRoute);
    let obs = dash.observe();
    let expected: Metrics = obs.drivers.iter().map(|d| d.metrics).sum();
    assert_eq!(obs.total_metrics, expected);
}

#[test]
fn test_select_driver_changes_route_view() {
    let mut dash = TestDashboard::new();
    assert_eq!(dash.observe().selected_stops[0].address, "123 Main St");

    assert!(dash.act(DashboardAction::SelectDriver { index: 2 }).is_success());
    let obs = dash.observe();
    assert_eq!(obs.selected_driver, 2);
    assert_eq!(obs.selected_stops[0].address, "777 Poplar Ave");
}

#[test]
fn test_out_of_range_selection_is_rejected() {
    let mut dash = TestDashboard::new();
    let result = dash.act(DashboardAction::SelectDriver { index: 3 });
    assert_eq!(
        result,
        ActionResult::Error(ActionError::DriverOutOfRange {
            index: 3,
            driver_count: 3
        })
    );
    assert_eq!(dash.state().selected_driver(), 0);

    let obs = dash.observe();
    let last = obs.recent_action_results.last().expect("result recorded");
    assert!(!last.success);
}
