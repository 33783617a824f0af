use crate::motor::propellant::PropellantSpec;
use crate::sim::state::ATMOSPHERIC_PRESSURE;

use super::burn_rate::burn_rate;

// ---------------------------------------------------------------------------
// Chamber pressure: steady-state mass balance, solved by fixed point
// ---------------------------------------------------------------------------

/// Cold-start solver seed, Pa.
pub const DEFAULT_SEED: f64 = 2.0e6;

/// Model ceiling, Pa. Any casing in the catalog has long since failed.
pub const MAX_CHAMBER_PRESSURE: f64 = 15.0e6;

/// Fixed-point iteration cap.
pub const MAX_ITERATIONS: usize = 20;

/// Early-out tolerance between successive estimates, Pa.
pub const TOLERANCE: f64 = 1.0e3;

/// Blend weight kept on the previous estimate each iteration. The power
/// law makes the bare map contract at roughly `n`; the blend slows it to
/// `0.7 + 0.3 n` but keeps it stable across the whole catalog envelope.
pub const RELAXATION: f64 = 0.7;

/// Solve the equilibrium chamber pressure, Pa.
///
/// Balances gas generation against nozzle discharge:
/// `P = density * r(P) * Ab * c_star / At`, iterated from `seed` with
/// relaxation. The result is always finite and inside
/// `[ATMOSPHERIC_PRESSURE, MAX_CHAMBER_PRESSURE]`; degenerate inputs
/// (no burning surface, no throat, unphysical propellant) return the
/// atmospheric baseline.
pub fn solve_chamber_pressure(
    burning_area: f64,
    throat_area: f64,
    propellant: &PropellantSpec,
    seed: f64,
) -> f64 {
    if !(burning_area > 0.0) || !(throat_area > 0.0) {
        return ATMOSPHERIC_PRESSURE;
    }
    if !(propellant.density > 0.0) || !(propellant.c_star > 0.0) {
        return ATMOSPHERIC_PRESSURE;
    }

    let mut p = super::clamp_or(seed, ATMOSPHERIC_PRESSURE, MAX_CHAMBER_PRESSURE, DEFAULT_SEED);
    for _ in 0..MAX_ITERATIONS {
        let mdot = propellant.density * burn_rate(p, propellant) * burning_area;
        let p_balance = mdot * propellant.c_star / throat_area;
        let next = RELAXATION * p + (1.0 - RELAXATION) * p_balance;
        if !next.is_finite() {
            return ATMOSPHERIC_PRESSURE;
        }
        let delta = (next - p).abs();
        p = next;
        if delta < TOLERANCE {
            break;
        }
    }
    super::clamp_or(p, ATMOSPHERIC_PRESSURE, MAX_CHAMBER_PRESSURE, ATMOSPHERIC_PRESSURE)
}

/// `solve_chamber_pressure` from the cold-start seed.
pub fn solve_chamber_pressure_default(
    burning_area: f64,
    throat_area: f64,
    propellant: &PropellantSpec,
) -> f64 {
    solve_chamber_pressure(burning_area, throat_area, propellant, DEFAULT_SEED)
}
