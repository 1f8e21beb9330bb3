//! Action executor system: drains the [`ActionQueue`] each fixed tick and
//! applies every queued [`DashboardAction`] to the [`DashboardState`],
//! recording results in the [`ActionResultLog`].

use bevy::prelude::*;

use crate::dashboard_state::{DashboardSettings, DashboardState};
use crate::traffic_incident::TrafficIncidentEvent;
use crate::TickCounter;

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, DashboardAction};

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    tick: Res<TickCounter>,
    settings: Res<DashboardSettings>,
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut state: ResMut<DashboardState>,
    mut incidents: EventWriter<TrafficIncidentEvent>,
) {
    for queued in queue.drain() {
        let result = execute_single(
            queued.action,
            tick.0,
            &settings,
            &mut state,
            &mut incidents,
        );
        if let ActionResult::Error(e) = &result {
            warn!("{:?} from {:?} rejected: {:?}", queued.action, queued.source, e);
        }
        log.push(queued.action, result);
    }
}

fn execute_single(
    action: DashboardAction,
    now_tick: u64,
    settings: &DashboardSettings,
    state: &mut DashboardState,
    incidents: &mut EventWriter<TrafficIncidentEvent>,
) -> ActionResult {
    match action {
        DashboardAction::SelectDriver { index } => state.select_driver(index).into(),
        DashboardAction::OptimizeRoute => {
            state.optimize_route();
            info!(
                "Route optimization pass {} applied to {} drivers",
                state.optimization_passes(),
                state.drivers().len()
            );
            ActionResult::Success
        }
        DashboardAction::SimulateTraffic => {
            let incident = state.simulate_traffic(now_tick, settings.incident_clear_policy);
            info!(
                "Traffic incident at {} ({} min delay)",
                incident.location, incident.delay_minutes
            );
            incidents.send(TrafficIncidentEvent::Raised(incident));
            ActionResult::Success
        }
    }
}
