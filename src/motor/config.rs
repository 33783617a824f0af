use super::casing::CasingGeometry;
use super::grain::{GrainGeometry, GrainShape};
use super::material::{self, MaterialSpec};
use super::nozzle::NozzleGeometry;
use super::propellant::{self, PropellantSpec};

// ---------------------------------------------------------------------------
// Motor configuration: everything the simulation needs to run a burn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MotorConfig {
    pub propellant: PropellantSpec,
    pub material: MaterialSpec,
    pub grain: GrainGeometry,
    pub nozzle: NozzleGeometry,
    pub casing: CasingGeometry,
}

impl MotorConfig {
    /// Cast propellant mass of the configured grain, kg.
    pub fn propellant_mass(&self) -> f64 {
        self.grain.propellant_mass(&self.propellant)
    }
}

/// The reference motor: KNSB in a 4-segment BATES grain, 9 mm throat,
/// 60 mm ID aluminum casing with a 3 mm wall. Initial Kn works out to 400.
impl Default for MotorConfig {
    fn default() -> Self {
        MotorConfig {
            propellant: propellant::knsb(),
            material: material::aluminum(),
            grain: GrainGeometry {
                shape: GrainShape::Bates,
                outer_radius: 0.027,
                core_radius: 0.012,
                segment_length: 0.060,
                segments: 4,
            },
            nozzle: NozzleGeometry {
                throat_diameter: 0.009,
                exit_diameter: 0.018,
                efficiency: 0.85,
            },
            casing: CasingGeometry {
                inner_radius: 0.030,
                wall_thickness: 0.003,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Partial updates: optional per-field patches, merged by a pure function
// ---------------------------------------------------------------------------

/// Partial update for a motor configuration. Propellant and material are
/// replaced whole (they are immutable catalog entries); geometry sections
/// patch field by field. Absent fields keep their current values. No
/// validation happens here: out-of-range values show up downstream as
/// degenerate-but-finite physics output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotorConfigPatch {
    pub propellant: Option<PropellantSpec>,
    pub material: Option<MaterialSpec>,
    pub grain: Option<GrainPatch>,
    pub nozzle: Option<NozzlePatch>,
    pub casing: Option<CasingPatch>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrainPatch {
    pub shape: Option<GrainShape>,
    pub outer_radius: Option<f64>,
    pub core_radius: Option<f64>,
    pub segment_length: Option<f64>,
    pub segments: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NozzlePatch {
    pub throat_diameter: Option<f64>,
    pub exit_diameter: Option<f64>,
    pub efficiency: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CasingPatch {
    pub inner_radius: Option<f64>,
    pub wall_thickness: Option<f64>,
}

/// Apply a patch to a base configuration. Pure: neither input is touched.
pub fn merge(base: &MotorConfig, patch: &MotorConfigPatch) -> MotorConfig {
    let mut cfg = base.clone();
    if let Some(p) = &patch.propellant {
        cfg.propellant = p.clone();
    }
    if let Some(m) = &patch.material {
        cfg.material = m.clone();
    }
    if let Some(g) = &patch.grain {
        if let Some(v) = g.shape {
            cfg.grain.shape = v;
        }
        if let Some(v) = g.outer_radius {
            cfg.grain.outer_radius = v;
        }
        if let Some(v) = g.core_radius {
            cfg.grain.core_radius = v;
        }
        if let Some(v) = g.segment_length {
            cfg.grain.segment_length = v;
        }
        if let Some(v) = g.segments {
            cfg.grain.segments = v;
        }
    }
    if let Some(n) = &patch.nozzle {
        if let Some(v) = n.throat_diameter {
            cfg.nozzle.throat_diameter = v;
        }
        if let Some(v) = n.exit_diameter {
            cfg.nozzle.exit_diameter = v;
        }
        if let Some(v) = n.efficiency {
            cfg.nozzle.efficiency = v;
        }
    }
    if let Some(c) = &patch.casing {
        if let Some(v) = c.inner_radius {
            cfg.casing.inner_radius = v;
        }
        if let Some(v) = c.wall_thickness {
            cfg.casing.wall_thickness = v;
        }
    }
    cfg
}

// ---------------------------------------------------------------------------
// Preset motors
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// The default KNSB / BATES reference motor.
    pub fn reference_motor() -> MotorConfig {
        MotorConfig::default()
    }

    /// Reference motor with a 0.5 mm wall. Crosses the ultimate strength of
    /// aluminum early in the burn; useful for exercising the CATO path.
    pub fn thin_wall_demo() -> MotorConfig {
        let mut cfg = MotorConfig::default();
        cfg.casing.wall_thickness = 0.0005;
        cfg
    }
}
