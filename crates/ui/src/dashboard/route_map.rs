use bevy_egui::egui;

use simulation::dashboard_actions::DashboardAction;
use simulation::dashboard_state::DashboardState;
use simulation::fleet::Stop;

use crate::theme::{card_frame, GREEN, GREEN_DARK, MUTED};

/// Logical canvas the projection maps into.
const CANVAS_WIDTH: f32 = 500.0;
const CANVAS_HEIGHT: f32 = 400.0;
const MAP_HEIGHT: f32 = 260.0;
const MARKER_RADIUS: f32 = 10.0;

/// Canvas position of a stop. `%` keeps the dividend's sign, so points
/// west of -74.01 or south of -1.3 land at negative coordinates.
pub fn project_stop(lat: f64, lng: f64) -> egui::Pos2 {
    let x = ((lng + 74.01) * 3000.0) % 500.0;
    let y = ((lat + 1.3) * 3000.0) % 400.0;
    egui::pos2(x as f32, y as f32)
}

fn to_screen(rect: egui::Rect, canvas: egui::Pos2) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + canvas.x / CANVAS_WIDTH * rect.width(),
        rect.min.y + canvas.y / CANVAS_HEIGHT * rect.height(),
    )
}

/// Stop numbers sit to the right of and just below the marker center, clear
/// of the marker itself.
fn marker_label_pos(marker: egui::Pos2) -> egui::Pos2 {
    marker + egui::vec2(MARKER_RADIUS + 2.0, 5.0)
}

/// Map card plus the driver and action buttons. Returns the actions the
/// user clicked this frame.
pub(super) fn route_panel(ui: &mut egui::Ui, state: &DashboardState) -> Vec<DashboardAction> {
    let mut clicked = Vec::new();
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Route Map");

        ui.horizontal(|ui| {
            for (index, driver) in state.drivers().iter().enumerate() {
                let selected = index == state.selected_driver();
                if ui.selectable_label(selected, &driver.name).clicked() && !selected {
                    clicked.push(DashboardAction::SelectDriver { index });
                }
            }
        });
        ui.add_space(8.0);

        draw_route(ui, state.selected_driver_stops());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let optimize = egui::Button::new(
                egui::RichText::new("Optimize Route").color(egui::Color32::WHITE),
            )
            .fill(GREEN);
            if ui.add(optimize).clicked() {
                clicked.push(DashboardAction::OptimizeRoute);
            }
            if ui.button("Simulate Traffic").clicked() {
                clicked.push(DashboardAction::SimulateTraffic);
            }
        });
    });
    clicked
}

fn draw_route(ui: &mut egui::Ui, stops: &[Stop]) {
    let size = egui::vec2(ui.available_width(), MAP_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, egui::Color32::from_rgb(243, 244, 246));

    if stops.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No stops",
            egui::FontId::proportional(14.0),
            MUTED,
        );
        return;
    }

    let points: Vec<egui::Pos2> = stops
        .iter()
        .map(|s| to_screen(rect, project_stop(s.lat, s.lng)))
        .collect();
    painter.add(egui::Shape::line(
        points.clone(),
        egui::Stroke::new(3.0, GREEN),
    ));

    for (n, pos) in points.iter().enumerate() {
        painter.circle(
            *pos,
            MARKER_RADIUS,
            GREEN_DARK,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
        painter.text(
            marker_label_pos(*pos),
            egui::Align2::LEFT_BOTTOM,
            (n + 1).to_string(),
            egui::FontId::proportional(12.0),
            GREEN_DARK,
        );
    }
}
