use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod dashboard;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, (spawn_camera, theme::apply_green_theme))
            .add_plugins(dashboard::DashboardUiPlugin);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
