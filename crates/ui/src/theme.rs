use bevy_egui::{egui, EguiContexts};

/// Brand greens, shared by panels that color text or markers.
pub const GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const GREEN_DARK: egui::Color32 = egui::Color32::from_rgb(22, 101, 52);
pub const BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const CARD: egui::Color32 = egui::Color32::WHITE;

pub fn apply_green_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Pale green-to-blue backdrop, white cards.
    let panel = egui::Color32::from_rgb(236, 248, 241);
    let inactive = egui::Color32::from_rgb(229, 231, 235);
    let hover = egui::Color32::from_rgb(209, 250, 229);
    let active = GREEN;

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = CARD;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(243, 244, 246);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(249, 250, 251);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    // egui 0.31+ uses CornerRadius with u8 values
    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

/// White card frame used by every dashboard section.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(229, 231, 235)))
}
