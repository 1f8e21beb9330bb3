//! Deterministic ordering of the dashboard's fixed-tick systems.
//!
//! ```text
//! PreSim  ->  Simulation  ->  PostSim
//! ```
//!
//! * **PreSim** - Tick counter, then the action executor. Every queued
//!   action is applied before anything else reads the state this tick.
//! * **Simulation** - Time-driven state changes (incident clears).
//! * **PostSim** - Read-only aggregation: incident history, observation
//!   snapshot. These never mutate `DashboardState`.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` -> `Simulation` -> `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}
