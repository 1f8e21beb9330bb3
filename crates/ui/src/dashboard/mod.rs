//! The GreenRoute dashboard: header, incident banner, metric cards, route
//! map with controls, stop list, and leaderboard.
//!
//! Panels only read `DashboardState`. Buttons never mutate it directly; they
//! push a `DashboardAction` onto the `ActionQueue` and the simulation applies
//! it on the next fixed tick, exactly like agent commands.

mod header;
mod leaderboard;
mod metric_cards;
mod route_map;
mod stop_list;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::dashboard_actions::{ActionQueue, ActionSource, DashboardAction};
use simulation::dashboard_state::DashboardState;
use simulation::dashboard_views::{leaderboard, savings, total_metrics};
use simulation::TickCounter;

pub use route_map::project_stop;

pub fn dashboard_ui(
    mut contexts: EguiContexts,
    state: Res<DashboardState>,
    tick: Res<TickCounter>,
    mut queue: ResMut<ActionQueue>,
) {
    let ctx = contexts.ctx_mut();
    let mut clicked: Vec<DashboardAction> = Vec::new();

    egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
        header::header(ui);
        if let Some(incident) = state.traffic_incident() {
            header::incident_banner(ui, incident);
        }
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            metric_cards::metric_cards(
                ui,
                &total_metrics(state.drivers()),
                state.optimized().then(|| savings(&state)),
            );
            ui.add_space(12.0);

            ui.columns(2, |cols| {
                clicked.extend(route_map::route_panel(&mut cols[0], &state));
                stop_list::stop_list(&mut cols[1], state.selected_driver_stops());
                cols[1].add_space(12.0);
                leaderboard::leaderboard_panel(&mut cols[1], &leaderboard(state.drivers()));
            });
        });
    });

    for action in clicked {
        debug!("Dashboard button queued {:?}", action);
        queue.push(tick.0, ActionSource::Player, action);
    }
}

pub struct DashboardUiPlugin;

impl Plugin for DashboardUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, dashboard_ui);
    }
}
