//! Agent text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that external programs
//! (scripts, test harnesses) use to drive the dashboard over newline-delimited
//! JSON on stdin/stdout.
//!
//! These types live in the `simulation` crate so they can be unit-tested
//! without pulling in the app binary. The I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::dashboard_actions::{ActionResult, DashboardAction};
use crate::dashboard_observation::DashboardObservation;

/// Largest `step` the loop will run in one command.
pub const MAX_STEP_TICKS: u64 = 10_000;

// ---------------------------------------------------------------------------
// Commands (stdin -> dashboard)
// ---------------------------------------------------------------------------

/// One line of stdin. The `cmd` field is the discriminator.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Request the current dashboard snapshot.
    #[serde(rename = "observe")]
    Observe,

    /// Execute a single action and run one tick.
    #[serde(rename = "act")]
    Act { action: DashboardAction },

    /// Execute several actions, one tick each.
    #[serde(rename = "batch_act")]
    BatchAct { actions: Vec<DashboardAction> },

    /// Advance by `ticks` fixed ticks (100 ms each), capped at [`MAX_STEP_TICKS`].
    #[serde(rename = "step")]
    Step { ticks: u64 },

    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (dashboard -> stdout)
// ---------------------------------------------------------------------------

/// Every response carries the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "observation")]
    Observation { observation: DashboardObservation },

    #[serde(rename = "action_result")]
    ActionResult { result: ActionResult },

    #[serde(rename = "batch_result")]
    BatchResult { results: Vec<ActionResult> },

    /// Reports the tick counter after stepping.
    #[serde(rename = "step_complete")]
    StepComplete { tick: u64 },

    #[serde(rename = "error")]
    Error { message: String },

    /// Response to `quit`.
    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}
