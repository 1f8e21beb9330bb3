use bevy_egui::egui;

use simulation::fleet::{Metrics, MetricsDelta};

use crate::theme::{card_frame, BLUE, GREEN, MUTED, PURPLE};

struct Card {
    title: &'static str,
    value: String,
    saved: Option<String>,
    color: egui::Color32,
}

/// The three headline cards. `savings` is `Some` once a pass has run.
pub(super) fn metric_cards(ui: &mut egui::Ui, totals: &Metrics, savings: Option<MetricsDelta>) {
    let cards = build_cards(totals, savings);
    ui.columns(cards.len(), |cols| {
        for (col, card) in cols.iter_mut().zip(&cards) {
            card_frame().show(col, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new(card.title).small().color(MUTED));
                ui.label(
                    egui::RichText::new(&card.value)
                        .size(26.0)
                        .strong()
                        .color(card.color),
                );
                if let Some(saved) = &card.saved {
                    ui.label(egui::RichText::new(saved).small().color(card.color));
                }
            });
        }
    });
}

fn build_cards(totals: &Metrics, savings: Option<MetricsDelta>) -> [Card; 3] {
    [
        Card {
            title: "Total Miles",
            value: totals.miles.to_string(),
            saved: savings.map(|s| format!("↓ {} miles saved", s.miles)),
            color: GREEN,
        },
        Card {
            title: "Total Time",
            value: format!("{} min", totals.time),
            saved: savings.map(|s| format!("↓ {} min saved", s.time)),
            color: BLUE,
        },
        Card {
            title: "CO₂ Emissions",
            value: format!("{} kg", totals.co2),
            saved: savings.map(|s| format!("↓ {} kg reduced", s.co2)),
            color: PURPLE,
        },
    ]
}
