use bevy_egui::egui;

use simulation::traffic_incident::TrafficIncident;

use crate::theme::{GREEN_DARK, MUTED};

pub(super) fn header(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("GreenRoute Logistics")
            .size(30.0)
            .strong()
            .color(GREEN_DARK),
    );
    ui.label(egui::RichText::new("Sustainable Delivery Route Optimization").color(MUTED));
}

pub(super) fn incident_banner(ui: &mut egui::Ui, incident: &TrafficIncident) {
    ui.add_space(6.0);
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(254, 226, 226))
        .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(239, 68, 68)))
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new("Traffic Incident Alert!")
                    .strong()
                    .color(egui::Color32::from_rgb(153, 27, 27)),
            );
            ui.label(
                egui::RichText::new(incident_text(incident))
                    .color(egui::Color32::from_rgb(185, 28, 28)),
            );
        });
}

fn incident_text(incident: &TrafficIncident) -> String {
    format!(
        "Incident at {} - {} min delay",
        incident.location, incident.delay_minutes
    )
}
