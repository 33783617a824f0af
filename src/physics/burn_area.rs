use std::f64::consts::PI;

use crate::motor::grain::{GrainGeometry, GrainShape};

// ---------------------------------------------------------------------------
// Burning surface area
// ---------------------------------------------------------------------------

/// Smallest effective core radius, m. Keeps a freshly-cast or degenerate
/// core from zeroing the burning surface.
pub const MIN_BURN_RADIUS: f64 = 0.001;

/// Effective radius cap as a fraction of the grain outer radius.
pub const MAX_RADIUS_FRACTION: f64 = 0.99;

/// Exposed fraction of the two annular end faces of each BATES segment.
/// A fixed stand-in for inhibitor coverage; real motors vary per cast.
pub const END_FACE_EXPOSURE: f64 = 0.5;

/// Perimeter gain of the star port over a circular port at the same
/// radius. Fixed-geometry approximation: the point count and depth of the
/// star are not modeled.
pub const STAR_PERIMETER_FACTOR: f64 = 1.5;

/// Instantaneous burning surface area, m^2.
///
/// The inner radius is clamped into `[MIN_BURN_RADIUS, 0.99 * outer]`
/// before any geometry is evaluated, so callers may hand in a raw
/// regression value without worrying about the edges.
///
/// Surfaces per shape:
///   - BATES:        core lateral surface + partially inhibited end faces
///   - CYLINDRICAL:  core lateral surface only (ends fully inhibited)
///   - STAR:         core lateral surface scaled by the perimeter factor
///   - FINOCYL:      reserved; cylindrical fallback
pub fn burning_area(grain: &GrainGeometry, inner_radius: f64) -> f64 {
    let max_radius = (MAX_RADIUS_FRACTION * grain.outer_radius).max(MIN_BURN_RADIUS);
    let r = super::clamp_or(inner_radius, MIN_BURN_RADIUS, max_radius, MIN_BURN_RADIUS);
    let n = grain.segments as f64;
    let lateral = n * 2.0 * PI * r * grain.segment_length;

    let area = match grain.shape {
        GrainShape::Bates => {
            let annulus = (grain.outer_radius.powi(2) - r.powi(2)).max(0.0);
            lateral + n * 2.0 * PI * annulus * END_FACE_EXPOSURE
        }
        GrainShape::Star => lateral * STAR_PERIMETER_FACTOR,
        GrainShape::Cylindrical | GrainShape::Finocyl => lateral,
    };
    area.max(0.0)
}
