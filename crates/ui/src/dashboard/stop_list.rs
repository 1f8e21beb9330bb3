use bevy_egui::egui;

use simulation::fleet::Stop;

use crate::theme::{card_frame, GREEN_DARK, MUTED};

pub(super) fn stop_list(ui: &mut egui::Ui, stops: &[Stop]) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Delivery Stops");
        ui.add_space(4.0);
        for (n, stop) in stops.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(stop_label(n)).strong().color(GREEN_DARK));
                ui.label(&stop.address);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&stop.eta).color(MUTED));
                });
            });
        }
    });
}

fn stop_label(position: usize) -> String {
    format!("Stop {}", position + 1)
}
