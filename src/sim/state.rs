use crate::motor::MotorConfig;
use crate::physics::structure::MAX_SAFETY_FACTOR;

// ---------------------------------------------------------------------------
// Shared constants
// ---------------------------------------------------------------------------

/// Sea-level ambient pressure, Pa. The resting chamber baseline.
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Minimum simulated time between history samples, s.
pub const HISTORY_INTERVAL: f64 = 0.010;

/// Web thickness at which the grain counts as consumed, m.
pub const BURNOUT_WEB: f64 = 0.001;

/// Inner-radius fraction of the outer radius that also ends the burn.
pub const BURNOUT_RADIUS_FRACTION: f64 = 0.98;

// ---------------------------------------------------------------------------
// Burn lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of a motor. Burning is the only phase that advances; both
/// terminal phases are absorbing (no reignition).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnPhase {
    Idle,
    Burning,
    BurnedOut,
    Exploded,
}

impl BurnPhase {
    pub fn label(&self) -> &'static str {
        match self {
            BurnPhase::Idle => "IDLE",
            BurnPhase::Burning => "BURNING",
            BurnPhase::BurnedOut => "BURNED OUT",
            BurnPhase::Exploded => "EXPLODED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BurnPhase::BurnedOut | BurnPhase::Exploded)
    }
}

// ---------------------------------------------------------------------------
// Motor state: everything the simulation knows at one instant
// ---------------------------------------------------------------------------

/// One recorded instant of a burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySample {
    pub time: f64,              // s
    pub chamber_pressure: f64,  // Pa
    pub thrust: f64,            // N
    pub burn_rate: f64,         // m/s
    pub inner_radius: f64,      // m
    pub kn: f64,                // burning area / throat area
    pub stress: f64,            // Pa
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotorState {
    pub time: f64,              // s
    pub inner_radius: f64,      // m, core_radius <= r <= outer_radius
    // Instantaneous values, recomputed every step
    pub chamber_pressure: f64,  // Pa
    pub thrust: f64,            // N
    pub burn_rate: f64,         // m/s
    pub burning_area: f64,      // m^2
    pub kn: f64,
    pub stress: f64,            // Pa
    pub safety_factor: f64,
    pub phase: BurnPhase,
    // Aggregates, accumulated only while burning
    pub total_impulse: f64,     // N*s
    pub burn_time: f64,         // s, frozen at burnout
    pub max_thrust: f64,        // N
    pub max_pressure: f64,      // Pa
    pub explosion_time: Option<f64>,
    pub history: Vec<HistorySample>,
}

impl MotorState {
    /// Fresh idle state for a motor configuration.
    pub fn new(config: &MotorConfig) -> Self {
        MotorState {
            time: 0.0,
            inner_radius: config.grain.core_radius,
            chamber_pressure: ATMOSPHERIC_PRESSURE,
            thrust: 0.0,
            burn_rate: 0.0,
            burning_area: 0.0,
            kn: 0.0,
            stress: 0.0,
            safety_factor: MAX_SAFETY_FACTOR,
            phase: BurnPhase::Idle,
            total_impulse: 0.0,
            burn_time: 0.0,
            max_thrust: 0.0,
            max_pressure: 0.0,
            explosion_time: None,
            history: Vec::new(),
        }
    }

    pub fn sample(&self) -> HistorySample {
        HistorySample {
            time: self.time,
            chamber_pressure: self.chamber_pressure,
            thrust: self.thrust,
            burn_rate: self.burn_rate,
            inner_radius: self.inner_radius,
            kn: self.kn,
            stress: self.stress,
        }
    }
}
