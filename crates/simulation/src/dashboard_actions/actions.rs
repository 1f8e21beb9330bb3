use serde::{Deserialize, Serialize};

/// Everything a user (or agent) can do to the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardAction {
    SelectDriver { index: usize },
    OptimizeRoute,
    SimulateTraffic,
}
