/// Fixed simulation timestep. FixedUpdate runs at 10 Hz.
pub const FIXED_TIMESTEP_MS: u64 = 100;
pub const FIXED_TIMESTEP_SECS: f64 = FIXED_TIMESTEP_MS as f64 / 1000.0;

/// Multiplier applied to each driver's miles on every optimization pass.
pub const MILES_DISCOUNT: f64 = 0.85;
/// Multiplier applied to each driver's route time on every optimization pass.
pub const TIME_DISCOUNT: f64 = 0.88;
/// Multiplier applied to each driver's CO2 on every optimization pass.
pub const CO2_DISCOUNT: f64 = 0.85;

pub const INCIDENT_LOCATION: &str = "Main St & Oak Ave";
pub const INCIDENT_DELAY_MINUTES: u32 = 15;

/// Wall-clock delay before a simulated incident clears itself.
pub const INCIDENT_CLEAR_DELAY_MS: u64 = 5000;
/// `INCIDENT_CLEAR_DELAY_MS` expressed in fixed ticks (50 at 10 Hz).
pub const INCIDENT_CLEAR_TICKS: u64 = INCIDENT_CLEAR_DELAY_MS / FIXED_TIMESTEP_MS;
