//! Compact, typed, serializable snapshot of the dashboard.
//!
//! `DashboardObservation` gathers the fleet, the derived views, and the
//! incident state into one struct so an external agent (or a test) can read
//! everything the dashboard would render in a single call.

use serde::{Deserialize, Serialize};

use crate::dashboard_actions::{ActionResult, ActionResultLog};
use crate::dashboard_state::DashboardState;
use crate::dashboard_views::{leaderboard, savings, total_metrics, LeaderboardEntry};
use crate::fleet::{Driver, Metrics, MetricsDelta, Stop};
use crate::traffic_incident::{IncidentHistory, TrafficIncident};

/// How many recent action results an observation carries.
const RECENT_RESULTS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardObservation {
    pub tick: u64,

    // -- Fleet ----------------------------------------------------------------
    pub drivers: Vec<Driver>,
    pub selected_driver: usize,
    pub selected_stops: Vec<Stop>,

    // -- Optimization ---------------------------------------------------------
    pub optimized: bool,
    pub optimization_passes: u32,
    pub total_metrics: Metrics,
    pub savings: MetricsDelta,
    pub leaderboard: Vec<LeaderboardEntry>,

    // -- Incidents ------------------------------------------------------------
    pub traffic_incident: Option<TrafficIncident>,
    pub incidents_raised: u32,
    pub incidents_cleared: u32,

    pub recent_action_results: Vec<ActionResultEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResultEntry {
    pub action_summary: String,
    pub success: bool,
}

impl DashboardObservation {
    pub fn capture(
        tick: u64,
        state: &DashboardState,
        history: &IncidentHistory,
        action_log: &ActionResultLog,
    ) -> Self {
        let recent_action_results = action_log
            .last_n(RECENT_RESULTS)
            .iter()
            .map(|(action, result)| ActionResultEntry {
                action_summary: format!("{:?}", action),
                success: matches!(result, ActionResult::Success),
            })
            .collect();

        Self {
            tick,
            drivers: state.drivers().to_vec(),
            selected_driver: state.selected_driver(),
            selected_stops: state.selected_driver_stops().to_vec(),
            optimized: state.optimized(),
            optimization_passes: state.optimization_passes(),
            total_metrics: total_metrics(state.drivers()),
            savings: savings(state),
            leaderboard: leaderboard(state.drivers()),
            traffic_incident: state.traffic_incident().cloned(),
            incidents_raised: history.raised,
            incidents_cleared: history.cleared,
            recent_action_results,
        }
    }
}
