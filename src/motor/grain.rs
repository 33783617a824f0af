use std::f64::consts::PI;

use super::propellant::PropellantSpec;

// ---------------------------------------------------------------------------
// Grain geometry (segmented cylindrical grain with a circular core)
// ---------------------------------------------------------------------------

/// Core cross-section of the grain. Burning-area treatment per shape lives
/// in `physics::burn_area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainShape {
    Bates,
    Cylindrical,
    Star,
    /// Reserved. Burns with the cylindrical fallback until a real
    /// fin-perimeter model lands.
    Finocyl,
}

impl GrainShape {
    /// Stable catalog keys, in display order.
    pub const KEYS: [&'static str; 4] = ["BATES", "STAR", "CYLINDRICAL", "FINOCYL"];

    /// Look up a shape by catalog key (case-sensitive).
    pub fn from_key(key: &str) -> Option<GrainShape> {
        match key {
            "BATES" => Some(GrainShape::Bates),
            "STAR" => Some(GrainShape::Star),
            "CYLINDRICAL" => Some(GrainShape::Cylindrical),
            "FINOCYL" => Some(GrainShape::Finocyl),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            GrainShape::Bates => "BATES",
            GrainShape::Star => "STAR",
            GrainShape::Cylindrical => "CYLINDRICAL",
            GrainShape::Finocyl => "FINOCYL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrainGeometry {
    pub shape: GrainShape,
    pub outer_radius: f64,    // m
    pub core_radius: f64,     // m
    pub segment_length: f64,  // m, per segment
    pub segments: u32,
}

impl GrainGeometry {
    /// Propellant thickness between core and outer surface at cast time.
    pub fn initial_web(&self) -> f64 {
        self.outer_radius - self.core_radius
    }

    /// Web still unburned once the core has opened to `inner_radius`.
    pub fn web_remaining(&self, inner_radius: f64) -> f64 {
        self.outer_radius - inner_radius
    }

    /// Cast propellant volume across all segments, m^3.
    pub fn propellant_volume(&self) -> f64 {
        let annulus = (self.outer_radius.powi(2) - self.core_radius.powi(2)).max(0.0);
        self.segments as f64 * self.segment_length * PI * annulus
    }

    /// Cast propellant mass for the given propellant, kg.
    pub fn propellant_mass(&self, propellant: &PropellantSpec) -> f64 {
        self.propellant_volume() * propellant.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::propellant;

    fn four_segment_bates() -> GrainGeometry {
        GrainGeometry {
            shape: GrainShape::Bates,
            outer_radius: 0.027,
            core_radius: 0.012,
            segment_length: 0.060,
            segments: 4,
        }
    }

    #[test]
    fn shape_keys_round_trip() {
        for key in GrainShape::KEYS {
            assert_eq!(GrainShape::from_key(key).unwrap().key(), key);
        }
        assert!(GrainShape::from_key("MOONBURNER").is_none());
    }

    #[test]
    fn web_shrinks_as_the_core_opens() {
        let grain = four_segment_bates();
        assert!((grain.initial_web() - 0.015).abs() < 1e-12);
        assert!((grain.web_remaining(0.020) - 0.007).abs() < 1e-12);
    }

    #[test]
    fn volume_and_mass_match_hand_calc() {
        let grain = four_segment_bates();
        // 4 segments x 60 mm x pi (27^2 - 12^2) mm^2
        let expected = 4.0 * 0.060 * PI * (0.027f64.powi(2) - 0.012f64.powi(2));
        assert!((grain.propellant_volume() - expected).abs() < 1e-12);

        let mass = grain.propellant_mass(&propellant::knsb());
        assert!((mass - expected * 1841.0).abs() < 1e-9);
        assert!(mass > 0.8 && mass < 0.83, "about 0.81 kg of KNSB");
    }

    #[test]
    fn inverted_radii_give_zero_volume() {
        let mut grain = four_segment_bates();
        grain.core_radius = 0.030;
        assert_eq!(grain.propellant_volume(), 0.0);
    }
}
