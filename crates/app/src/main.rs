use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::dashboard_state::DashboardSettings;
use simulation::traffic_incident::IncidentClearPolicy;

mod agent_mode;

/// Command-line switches. Anything unrecognized is ignored.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    agent: bool,
    independent_incident_clears: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut cli = Self::default();
        for arg in args {
            match arg.as_str() {
                "--agent" => cli.agent = true,
                "--independent-incident-clears" => cli.independent_incident_clears = true,
                _ => {}
            }
        }
        cli
    }

    fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            incident_clear_policy: if self.independent_incident_clears {
                IncidentClearPolicy::Independent
            } else {
                IncidentClearPolicy::CancelPrevious
            },
        }
    }
}

fn main() {
    let cli = CliArgs::parse(std::env::args().skip(1));

    #[cfg(not(target_arch = "wasm32"))]
    if cli.agent {
        agent_mode::run_agent_mode(cli.settings());
        return;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "GreenRoute Logistics".to_string(),
            resolution: (1280.0, 860.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(cli.settings())
    .add_plugins((simulation::SimulationPlugin, ui::UiPlugin));

    app.run();
}
