//! Simulated traffic incidents.
//!
//! `simulate_traffic` raises a fixed incident and schedules a one-shot clear
//! `INCIDENT_CLEAR_TICKS` fixed ticks later. A clear is unconditional: it
//! removes whatever incident is active when it fires.
//!
//! How overlapping raises interact is governed by [`IncidentClearPolicy`]:
//! with `CancelPrevious` a new raise drops every pending clear, so the newest
//! incident always lives the full delay. With `Independent` every raise keeps
//! its own clear, and the oldest one may remove a newer incident early.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{INCIDENT_CLEAR_TICKS, INCIDENT_DELAY_MINUTES, INCIDENT_LOCATION};
use crate::dashboard_state::DashboardState;
use crate::TickCounter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficIncident {
    pub location: String,
    pub delay_minutes: u32,
}

impl TrafficIncident {
    /// The one incident the dashboard knows how to simulate.
    pub fn simulated() -> Self {
        Self {
            location: INCIDENT_LOCATION.to_string(),
            delay_minutes: INCIDENT_DELAY_MINUTES,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentClearPolicy {
    /// A new raise cancels the previous pending clear.
    #[default]
    CancelPrevious,
    /// Every raise schedules its own clear; none are cancelled.
    Independent,
}

/// A scheduled clear. Carries no link to the incident that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub fires_at_tick: u64,
}

/// The active incident plus every clear still waiting to fire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentSchedule {
    active: Option<TrafficIncident>,
    pending: Vec<PendingClear>,
}

impl IncidentSchedule {
    pub fn active(&self) -> Option<&TrafficIncident> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> &[PendingClear] {
        &self.pending
    }

    /// Set the simulated incident and schedule its clear.
    pub fn raise(&mut self, now_tick: u64, policy: IncidentClearPolicy) -> &TrafficIncident {
        if policy == IncidentClearPolicy::CancelPrevious {
            self.pending.clear();
        }
        self.pending.push(PendingClear {
            fires_at_tick: now_tick + INCIDENT_CLEAR_TICKS,
        });
        self.active.insert(TrafficIncident::simulated())
    }

    /// Fire every clear that is due. Returns the incident that was removed,
    /// if any was active when a clear fired.
    pub fn fire_due(&mut self, now_tick: u64) -> Option<TrafficIncident> {
        let before = self.pending.len();
        self.pending.retain(|c| c.fires_at_tick > now_tick);
        if self.pending.len() == before {
            return None;
        }
        self.active.take()
    }
}

/// Emitted whenever an incident appears or disappears.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum TrafficIncidentEvent {
    Raised(TrafficIncident),
    Cleared(TrafficIncident),
}

/// Running totals, surfaced in the observation snapshot.
#[derive(Resource, Debug, Clone, Default)]
pub struct IncidentHistory {
    pub raised: u32,
    pub cleared: u32,
}

/// Fires due incident clears.
pub fn expire_incidents(
    tick: Res<TickCounter>,
    mut state: ResMut<DashboardState>,
    mut events: EventWriter<TrafficIncidentEvent>,
) {
    if state.incident.pending().is_empty() {
        return;
    }
    if let Some(cleared) = state.incident.fire_due(tick.0) {
        info!(
            "Traffic incident at {} cleared (tick {})",
            cleared.location, tick.0
        );
        events.send(TrafficIncidentEvent::Cleared(cleared));
    }
}

pub fn record_incident_history(
    mut events: EventReader<TrafficIncidentEvent>,
    mut history: ResMut<IncidentHistory>,
) {
    for event in events.read() {
        match event {
            TrafficIncidentEvent::Raised(_) => history.raised += 1,
            TrafficIncidentEvent::Cleared(_) => history.cleared += 1,
        }
    }
}

/// Double-buffer swap for `TrafficIncidentEvent`, for drivers that run
/// `FixedUpdate` without `App::update`. An event survives two swaps, so
/// PostSim readers on the sending tick still see it.
pub fn swap_incident_events(world: &mut World) {
    if let Some(mut events) = world.get_resource_mut::<Events<TrafficIncidentEvent>>() {
        events.update();
    }
}

pub struct TrafficIncidentPlugin;

impl Plugin for TrafficIncidentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IncidentHistory>()
            .add_event::<TrafficIncidentEvent>()
            .add_systems(
                FixedUpdate,
                expire_incidents.in_set(crate::SimulationSet::Simulation),
            )
            .add_systems(
                FixedUpdate,
                record_incident_history.in_set(crate::SimulationSet::PostSim),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_sets_incident_immediately() {
        let mut schedule = IncidentSchedule::default();
        let incident = schedule
            .raise(0, IncidentClearPolicy::CancelPrevious)
            .clone();
        assert_eq!(incident.location, "Main St & Oak Ave");
        assert_eq!(incident.delay_minutes, 15);
        assert_eq!(schedule.active(), Some(&incident));
        assert_eq!(schedule.pending().len(), 1);
    }

    #[test]
    fn test_clear_fires_after_delay() {
        let mut schedule = IncidentSchedule::default();
        schedule.raise(10, IncidentClearPolicy::CancelPrevious);

        assert!(schedule.fire_due(10 + INCIDENT_CLEAR_TICKS - 1).is_none());
        assert!(schedule.active().is_some());

        let cleared = schedule.fire_due(10 + INCIDENT_CLEAR_TICKS);
        assert!(cleared.is_some());
        assert!(schedule.active().is_none());
        assert!(schedule.pending().is_empty());
    }

    #[test]
    fn test_cancel_previous_keeps_newest_alive() {
        let mut schedule = IncidentSchedule::default();
        schedule.raise(0, IncidentClearPolicy::CancelPrevious);
        schedule.raise(30, IncidentClearPolicy::CancelPrevious);
        assert_eq!(schedule.pending().len(), 1);

        // The first raise's clear would have fired here.
        assert!(schedule.fire_due(INCIDENT_CLEAR_TICKS).is_none());
        assert!(schedule.active().is_some());

        assert!(schedule.fire_due(30 + INCIDENT_CLEAR_TICKS).is_some());
        assert!(schedule.active().is_none());
    }

    #[test]
    fn test_independent_clears_race() {
        let mut schedule = IncidentSchedule::default();
        schedule.raise(0, IncidentClearPolicy::Independent);
        schedule.raise(30, IncidentClearPolicy::Independent);
        assert_eq!(schedule.pending().len(), 2);

        // The older clear removes the newer incident early.
        assert!(schedule.fire_due(INCIDENT_CLEAR_TICKS).is_some());
        assert!(schedule.active().is_none());
        assert_eq!(schedule.pending().len(), 1);

        // The remaining clear fires on nothing.
        assert!(schedule.fire_due(30 + INCIDENT_CLEAR_TICKS).is_none());
        assert!(schedule.pending().is_empty());
    }

    #[test]
    fn test_fire_due_without_pending_is_noop() {
        let mut schedule = IncidentSchedule::default();
        assert!(schedule.fire_due(1_000).is_none());
    }
}
