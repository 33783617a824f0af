use crate::motor::propellant::PropellantSpec;
use crate::sim::state::ATMOSPHERIC_PRESSURE;

// ---------------------------------------------------------------------------
// Thrust coefficient + thrust
// ---------------------------------------------------------------------------

/// Cf clamp bounds: the envelope of credible nozzle performance.
pub const MIN_THRUST_COEF: f64 = 1.0;
pub const MAX_THRUST_COEF: f64 = 2.2;

/// Fallback Cf when the isentropic relation degenerates (gamma at or
/// below 1, non-finite inputs).
pub const DEFAULT_THRUST_COEF: f64 = 1.5;

/// Isentropic thrust coefficient for the given chamber pressure,
/// with the exit pressure pinned at ambient.
///
/// `Cf^2 = (2 g^2 / (g-1)) * (2 / (g+1))^((g+1)/(g-1))
///         * (1 - (Pe/Pc)^((g-1)/g))`
pub fn thrust_coefficient(chamber_pressure: f64, gamma: f64) -> f64 {
    let g = gamma;
    let heat_term = 2.0 * g * g / (g - 1.0);
    let choke_term = (2.0 / (g + 1.0)).powf((g + 1.0) / (g - 1.0));
    let expand_term = 1.0 - (ATMOSPHERIC_PRESSURE / chamber_pressure).powf((g - 1.0) / g);
    let cf = (heat_term * choke_term * expand_term).sqrt();
    super::clamp_or(cf, MIN_THRUST_COEF, MAX_THRUST_COEF, DEFAULT_THRUST_COEF)
}

/// Thrust produced at the given chamber pressure, N.
///
/// `F = Cf * Pc * At`. Zero at or below ambient pressure (a dead motor
/// must not pick up ghost thrust from the Cf floor) and for a degenerate
/// throat. The configured nozzle efficiency is applied by the simulation
/// loop, not here.
pub fn thrust_force(
    chamber_pressure: f64,
    throat_area: f64,
    exit_area: f64,
    propellant: &PropellantSpec,
) -> f64 {
    let _ = exit_area; // exit pressure is pinned at ambient, so the divergence term vanishes
    if !(chamber_pressure > ATMOSPHERIC_PRESSURE) || !(throat_area > 0.0) {
        return 0.0;
    }
    let cf = thrust_coefficient(chamber_pressure, propellant.gamma);
    super::clamp_or(cf * chamber_pressure * throat_area, 0.0, f64::MAX, 0.0)
}
