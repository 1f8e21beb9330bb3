use bevy_egui::egui;

use simulation::dashboard_views::LeaderboardEntry;

use crate::theme::{card_frame, MUTED};

const GOLD: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);
const SILVER: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
const BRONZE: egui::Color32 = egui::Color32::from_rgb(180, 83, 9);

fn badge_color(rank: usize) -> egui::Color32 {
    match rank {
        1 => GOLD,
        2 => SILVER,
        _ => BRONZE,
    }
}

pub(super) fn leaderboard_panel(ui: &mut egui::Ui, entries: &[LeaderboardEntry]) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Driver Leaderboard");
        ui.add_space(4.0);
        for entry in entries {
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 12.0, badge_color(entry.rank));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    entry.rank.to_string(),
                    egui::FontId::proportional(12.0),
                    egui::Color32::WHITE,
                );
                ui.label(egui::RichText::new(&entry.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format!("{} kg CO₂", entry.co2)).color(MUTED));
                });
            });
        }
    });
}
