// ---------------------------------------------------------------------------
// Casing geometry (thin-walled pressure tube)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CasingGeometry {
    pub inner_radius: f64,    // m
    pub wall_thickness: f64,  // m
}

impl CasingGeometry {
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.wall_thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_radius_adds_the_wall() {
        let casing = CasingGeometry {
            inner_radius: 0.030,
            wall_thickness: 0.003,
        };
        assert!((casing.outer_radius() - 0.033).abs() < 1e-12);
    }
}
