//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! When the `--agent` CLI flag is passed, the dashboard skips the window and
//! UI plugins and enters this loop instead of `app.run()`.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.
//!
//! Ticks are driven by running `FixedUpdate` directly, so one `step` tick is
//! always one 100 ms simulation tick regardless of wall-clock time.

#[cfg(not(target_arch = "wasm32"))]
pub fn run_agent_mode(settings: simulation::dashboard_state::DashboardSettings) {
    use std::io::BufRead;

    use simulation::agent_protocol::{
        make_response, AgentCommand, ResponsePayload, PROTOCOL_VERSION,
    };

    let mut app = headless_app(settings);

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_response(&mut stdout, &make_response(ResponsePayload::Ready));

    // Log to stderr so it does not interfere with the JSON protocol on stdout.
    eprintln!(
        "greenroute agent mode v{} ready, waiting for commands on stdin",
        PROTOCOL_VERSION
    );

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: AgentCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                let resp = make_response(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                });
                write_response(&mut stdout, &resp);
                continue;
            }
        };

        let response = process_command(cmd, &mut app);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    eprintln!("greenroute agent mode shutting down");
}

/// Minimal Bevy App: simulation only, no window or UI.
#[cfg(not(target_arch = "wasm32"))]
fn headless_app(settings: simulation::dashboard_state::DashboardSettings) -> bevy::app::App {
    use bevy::prelude::*;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(settings);
    app.add_plugins(simulation::SimulationPlugin);

    // Initial update so Startup systems execute and resources initialize.
    app.update();
    app
}

/// Serialize one response as a single stdout line. A response that fails to
/// serialize is replaced by an `error` line so the client never stalls.
#[cfg(not(target_arch = "wasm32"))]
fn write_response(
    out: &mut impl std::io::Write,
    response: &simulation::agent_protocol::AgentResponse,
) {
    use simulation::agent_protocol::{make_response, ResponsePayload};

    let line = serde_json::to_string(response).or_else(|e| {
        serde_json::to_string(&make_response(ResponsePayload::Error {
            message: format!("Serialize error: {e}"),
        }))
    });
    match line {
        Ok(line) => {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
        Err(e) => eprintln!("failed to serialize response: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
fn process_command(
    cmd: simulation::agent_protocol::AgentCommand,
    app: &mut bevy::app::App,
) -> simulation::agent_protocol::AgentResponse {
    use simulation::agent_protocol::{
        make_response, AgentCommand, ResponsePayload, MAX_STEP_TICKS,
    };
    use simulation::observation_builder::observe_world;
    use simulation::run_fixed_ticks;

    match cmd {
        AgentCommand::Observe => make_response(ResponsePayload::Observation {
            observation: observe_world(app.world()),
        }),

        AgentCommand::Act { action } => make_response(ResponsePayload::ActionResult {
            result: act_one_tick(app, action),
        }),

        AgentCommand::BatchAct { actions } => {
            let results = actions
                .into_iter()
                .map(|action| act_one_tick(app, action))
                .collect();
            make_response(ResponsePayload::BatchResult { results })
        }

        AgentCommand::Step { ticks } => {
            run_fixed_ticks(app.world_mut(), ticks.min(MAX_STEP_TICKS));
            let tick = app.world().resource::<simulation::TickCounter>().0;
            make_response(ResponsePayload::StepComplete { tick })
        }

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

/// Queue `action` as an agent action, run one tick so the executor applies
/// it, and report the logged result.
#[cfg(not(target_arch = "wasm32"))]
fn act_one_tick(
    app: &mut bevy::app::App,
    action: simulation::dashboard_actions::DashboardAction,
) -> simulation::dashboard_actions::ActionResult {
    use simulation::dashboard_actions::{
        ActionQueue, ActionResult, ActionResultLog, ActionSource,
    };
    use simulation::TickCounter;

    let tick = app.world().resource::<TickCounter>().0;
    app.world_mut()
        .resource_mut::<ActionQueue>()
        .push(tick, ActionSource::Agent, action);

    simulation::run_fixed_ticks(app.world_mut(), 1);

    app.world()
        .resource::<ActionResultLog>()
        .last_n(1)
        .first()
        .map(|(_, r)| r.clone())
        .unwrap_or(ActionResult::Success)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use bevy::app::App;

    use simulation::agent_protocol::{AgentCommand, ResponsePayload, MAX_STEP_TICKS};
    use simulation::dashboard_actions::{ActionError, ActionResult, DashboardAction};
    use simulation::dashboard_state::{DashboardSettings, DashboardState};
    use simulation::TickCounter;

    use super::*;

    fn tick(app: &App) -> u64 {
        app.world().resource::<TickCounter>().0
    }

    #[test]
    fn test_step_is_capped() {
        let mut app = headless_app(DashboardSettings::default());
        let before = tick(&app);

        let resp = process_command(AgentCommand::Step { ticks: 20_000 }, &mut app);

        assert_eq!(tick(&app), before + MAX_STEP_TICKS);
        match resp.payload {
            ResponsePayload::StepComplete { tick } => assert_eq!(tick, before + MAX_STEP_TICKS),
            other => panic!("expected step_complete, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_act_one_result_and_tick_per_action() {
        let mut app = headless_app(DashboardSettings::default());
        let before = tick(&app);

        let resp = process_command(
            AgentCommand::BatchAct {
                actions: vec![
                    DashboardAction::SelectDriver { index: 9 },
                    DashboardAction::OptimizeRoute,
                ],
            },
            &mut app,
        );

        let ResponsePayload::BatchResult { results } = resp.payload else {
            panic!("expected batch_result");
        };
        assert_eq!(
            results,
            vec![
                ActionResult::Error(ActionError::DriverOutOfRange {
                    index: 9,
                    driver_count: 3
                }),
                ActionResult::Success,
            ]
        );
        assert_eq!(tick(&app), before + 2);

        let state = app.world().resource::<DashboardState>();
        assert_eq!(state.selected_driver(), 0);
        assert_eq!(state.optimization_passes(), 1);
    }

    #[test]
    fn test_simulated_incident_clears_after_fifty_steps() {
        let mut app = headless_app(DashboardSettings::default());

        let resp = process_command(
            AgentCommand::Act {
                action: DashboardAction::SimulateTraffic,
            },
            &mut app,
        );
        assert!(matches!(
            resp.payload,
            ResponsePayload::ActionResult {
                result: ActionResult::Success
            }
        ));
        assert!(app
            .world()
            .resource::<DashboardState>()
            .traffic_incident()
            .is_some());

        process_command(AgentCommand::Step { ticks: 50 }, &mut app);

        let resp = process_command(AgentCommand::Observe, &mut app);
        let ResponsePayload::Observation { observation } = resp.payload else {
            panic!("expected observation");
        };
        assert!(observation.traffic_incident.is_none());
        assert_eq!(observation.incidents_cleared, 1);
    }

    #[test]
    fn test_quit_says_goodbye() {
        let mut app = headless_app(DashboardSettings::default());
        let resp = process_command(AgentCommand::Quit, &mut app);
        assert!(matches!(resp.payload, ResponsePayload::Goodbye));
    }
}
