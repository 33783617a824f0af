use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Nozzle geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NozzleGeometry {
    pub throat_diameter: f64,  // m
    pub exit_diameter: f64,    // m
    pub efficiency: f64,       // overall thrust efficiency, 0..1
}

impl NozzleGeometry {
    /// Throat cross-section, m^2. Zero for a non-positive diameter.
    pub fn throat_area(&self) -> f64 {
        circle_area(self.throat_diameter)
    }

    /// Exit-plane cross-section, m^2. Zero for a non-positive diameter.
    pub fn exit_area(&self) -> f64 {
        circle_area(self.exit_diameter)
    }

    /// Exit-to-throat area ratio. Zero when the throat is degenerate.
    pub fn expansion_ratio(&self) -> f64 {
        let throat = self.throat_area();
        if throat > 0.0 {
            self.exit_area() / throat
        } else {
            0.0
        }
    }
}

fn circle_area(diameter: f64) -> f64 {
    if diameter > 0.0 {
        PI * (diameter / 2.0).powi(2)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_match_hand_calc() {
        let nozzle = NozzleGeometry {
            throat_diameter: 0.009,
            exit_diameter: 0.018,
            efficiency: 0.85,
        };
        assert!((nozzle.throat_area() - PI * 0.0045 * 0.0045).abs() < 1e-15);
        // Doubling the diameter quadruples the area
        assert!((nozzle.expansion_ratio() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_throat_is_zero_not_nan() {
        let nozzle = NozzleGeometry {
            throat_diameter: 0.0,
            exit_diameter: 0.018,
            efficiency: 0.85,
        };
        assert_eq!(nozzle.throat_area(), 0.0);
        assert_eq!(nozzle.expansion_ratio(), 0.0);

        let negative = NozzleGeometry {
            throat_diameter: -0.009,
            exit_diameter: 0.018,
            efficiency: 0.85,
        };
        assert_eq!(negative.throat_area(), 0.0);
    }
}
