//! Ring-buffer log of recently executed dashboard actions and their results.
//!
//! The [`ActionResultLog`] resource stores the last 64 `(DashboardAction,
//! ActionResult)` pairs so the agent loop and the observation snapshot can
//! report what happened without polling the ECS every tick.

use bevy::prelude::*;

use super::{ActionResult, DashboardAction};

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: Vec<(DashboardAction, ActionResult)>,
}

impl ActionResultLog {
    /// Record a new action/result pair, evicting the oldest when full.
    pub fn push(&mut self, action: DashboardAction, result: ActionResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((action, result));
    }

    /// Return the last `n` entries (or fewer if the log is shorter).
    pub fn last_n(&self, n: usize) -> &[(DashboardAction, ActionResult)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
