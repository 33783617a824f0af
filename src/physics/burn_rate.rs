use crate::motor::propellant::PropellantSpec;

// ---------------------------------------------------------------------------
// Burn rate (Saint-Robert power law)
// ---------------------------------------------------------------------------

/// Pressure floor fed to the power law, MPa. Sub-atmospheric chamber
/// pressure still regresses at roughly the strand-burner rate.
pub const MIN_PRESSURE_MPA: f64 = 0.1;

/// Regression rate ceiling, m/s. Nothing in the catalog burns faster.
pub const MAX_BURN_RATE: f64 = 0.030;

const PA_PER_MPA: f64 = 1.0e6;

/// Linear regression rate of the burning surface, m/s.
///
/// `r = a * (P / P_ref)^n` with `a` in mm/s; pressure is expressed in MPa
/// (the unit the catalog coefficients are quoted against) and floored at
/// `MIN_PRESSURE_MPA`. The result is clamped into `[0, MAX_BURN_RATE]`;
/// a non-finite rate from degenerate propellant numbers becomes 0.
pub fn burn_rate(chamber_pressure: f64, propellant: &PropellantSpec) -> f64 {
    let p_mpa = (chamber_pressure / PA_PER_MPA).max(MIN_PRESSURE_MPA);
    let ref_mpa = propellant.ref_pressure / PA_PER_MPA;
    let rate_mm = propellant.burn_coef * (p_mpa / ref_mpa).powf(propellant.burn_exponent);
    super::clamp_or(rate_mm / 1000.0, 0.0, MAX_BURN_RATE, 0.0)
}
