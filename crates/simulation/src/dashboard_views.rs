//! Read-side views derived from `DashboardState`.
//!
//! Nothing here is cached; every call recomputes from the current fleet so a
//! view can never go stale relative to the state it describes.

use serde::{Deserialize, Serialize};

use crate::dashboard_state::DashboardState;
use crate::fleet::{Driver, Metrics, MetricsDelta};

/// Field-wise sum of the drivers' metrics.
pub fn total_metrics(drivers: &[Driver]) -> Metrics {
    drivers.iter().map(|d| d.metrics).sum()
}

/// Baseline totals minus current totals. Zero until the first optimization.
pub fn savings(state: &DashboardState) -> MetricsDelta {
    if !state.optimized() {
        return MetricsDelta::ZERO;
    }
    total_metrics(state.baseline()).delta_from(&total_metrics(state.drivers()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1 = lowest CO2.
    pub rank: usize,
    pub name: String,
    pub co2: u32,
}

/// Drivers ranked by ascending CO2. Ties keep fleet order.
pub fn leaderboard(drivers: &[Driver]) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&Driver> = drivers.iter().collect();
    ranked.sort_by_key(|d| d.metrics.co2);
    ranked
        .into_iter()
        .enumerate()
        .map(|(i, d)| LeaderboardEntry {
            rank: i + 1,
            name: d.name.clone(),
            co2: d.metrics.co2,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::baseline_drivers;

    #[test]
    fn test_baseline_totals() {
        assert_eq!(
            total_metrics(&baseline_drivers()),
            Metrics::new(125, 517, 62)
        );
    }

    #[test]
    fn test_savings_zero_before_optimize() {
        let mut state = DashboardState::default();
        state.select_driver(2).unwrap();
        assert!(savings(&state).is_zero());
    }

    #[test]
    fn test_savings_after_one_pass() {
        let mut state = DashboardState::default();
        state.optimize_route();
        // 125 - 106, 517 - 454, 62 - 53
        assert_eq!(
            savings(&state),
            MetricsDelta {
                miles: 19,
                time: 63,
                co2: 9
            }
        );
    }

    #[test]
    fn test_baseline_leaderboard() {
        let board = leaderboard(&baseline_drivers());
        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Driver B", "Driver C", "Driver A"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].co2, 19);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_leaderboard_ties_keep_fleet_order() {
        let mut drivers = baseline_drivers();
        for d in &mut drivers {
            d.metrics.co2 = 10;
        }
        let names: Vec<String> = leaderboard(&drivers).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Driver A", "Driver B", "Driver C"]);
    }

    #[test]
    fn test_views_follow_state() {
        let mut state = DashboardState::default();
        state.optimize_route();
        assert_eq!(total_metrics(state.drivers()), Metrics::new(106, 454, 53));
    }
}
