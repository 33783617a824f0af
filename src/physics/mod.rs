pub mod burn_area;
pub mod burn_rate;
pub mod pressure;
pub mod structure;
pub mod thrust;

pub use burn_area::burning_area;
pub use burn_rate::burn_rate;
pub use pressure::{solve_chamber_pressure, solve_chamber_pressure_default};
pub use structure::{classify, hoop_stress, safety_factor, CasingStatus};
pub use thrust::{thrust_coefficient, thrust_force};

/// Clamp `value` into `[lo, hi]`, substituting `fallback` for non-finite
/// input. Every model boundary funnels its output through this so that a
/// bad configuration can only ever produce a finite, in-range number.
pub fn clamp_or(value: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.min(hi).max(lo)
    } else {
        fallback
    }
}
