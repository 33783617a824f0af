use crate::motor::material::MaterialSpec;

// ---------------------------------------------------------------------------
// Casing structure: hoop stress, safety factor, failure classification
// ---------------------------------------------------------------------------

/// Ceiling on the reported safety factor. An unloaded casing reports this
/// rather than an unrepresentable infinity.
pub const MAX_SAFETY_FACTOR: f64 = 99.0;

/// Thin-wall hoop stress `sigma = P * r / t`, Pa.
///
/// A wall of zero or negative thickness cannot hold pressure at all; that
/// case (and any non-finite arithmetic) returns the infinite-stress
/// sentinel so classification lands on Catastrophic deterministically.
pub fn hoop_stress(pressure: f64, casing_inner_radius: f64, wall_thickness: f64) -> f64 {
    if !(wall_thickness > 0.0) {
        return f64::INFINITY;
    }
    let sigma = pressure * casing_inner_radius / wall_thickness;
    if sigma.is_finite() {
        sigma
    } else {
        f64::INFINITY
    }
}

/// Margin to yield: `yield / sigma`, clamped into `[0, MAX_SAFETY_FACTOR]`.
/// No load (or indeterminate stress) means unbounded margin, reported as
/// the ceiling; infinite stress means no margin at all.
pub fn safety_factor(stress: f64, material: &MaterialSpec) -> f64 {
    if !(stress > 0.0) {
        return MAX_SAFETY_FACTOR;
    }
    super::clamp_or(
        material.yield_strength / stress,
        0.0,
        MAX_SAFETY_FACTOR,
        MAX_SAFETY_FACTOR,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingStatus {
    Nominal,
    /// Past yield: permanently deformed but still holding.
    Yielding,
    /// Past ultimate strength. The only status that ends a simulation.
    Catastrophic,
}

pub fn classify(stress: f64, material: &MaterialSpec) -> CasingStatus {
    if stress > material.ultimate_strength {
        CasingStatus::Catastrophic
    } else if stress > material.yield_strength {
        CasingStatus::Yielding
    } else {
        CasingStatus::Nominal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::material;

    #[test]
    fn stress_matches_hand_calc() {
        // 5 MPa on a 30 mm radius, 3 mm wall: 50 MPa hoop stress
        let sigma = hoop_stress(5.0e6, 0.030, 0.003);
        assert!((sigma - 50.0e6).abs() < 1.0);
    }

    #[test]
    fn missing_wall_is_infinite_stress() {
        assert_eq!(hoop_stress(5.0e6, 0.030, 0.0), f64::INFINITY);
        assert_eq!(hoop_stress(5.0e6, 0.030, -0.003), f64::INFINITY);
        assert_eq!(hoop_stress(5.0e6, 0.030, f64::NAN), f64::INFINITY);
        assert_eq!(hoop_stress(5.0e6, f64::NAN, 0.003), f64::INFINITY);
    }

    #[test]
    fn safety_factor_spans_its_clamp_range() {
        let alu = material::aluminum();
        // 276 MPa yield over 50 MPa stress
        assert!((safety_factor(50.0e6, &alu) - 5.52).abs() < 0.01);
        // Unloaded or indeterminate: ceiling
        assert_eq!(safety_factor(0.0, &alu), MAX_SAFETY_FACTOR);
        assert_eq!(safety_factor(-1.0, &alu), MAX_SAFETY_FACTOR);
        assert_eq!(safety_factor(f64::NAN, &alu), MAX_SAFETY_FACTOR);
        assert_eq!(safety_factor(1.0, &alu), MAX_SAFETY_FACTOR);
        // Infinite stress: no margin
        assert_eq!(safety_factor(f64::INFINITY, &alu), 0.0);
    }

    #[test]
    fn classification_brackets_the_strength_limits() {
        let alu = material::aluminum();
        assert_eq!(classify(100.0e6, &alu), CasingStatus::Nominal);
        assert_eq!(classify(280.0e6, &alu), CasingStatus::Yielding);
        assert_eq!(classify(320.0e6, &alu), CasingStatus::Catastrophic);
        assert_eq!(classify(f64::INFINITY, &alu), CasingStatus::Catastrophic);
        // Exactly at yield still counts as nominal
        assert_eq!(classify(276.0e6, &alu), CasingStatus::Nominal);
    }
}
