// ---------------------------------------------------------------------------
// Casing material definition + catalog
// ---------------------------------------------------------------------------

/// Structural properties of a casing material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSpec {
    pub name: String,
    pub density: f64,            // kg/m^3
    pub yield_strength: f64,     // Pa
    pub ultimate_strength: f64,  // Pa
}

/// Stable catalog keys, in display order.
pub const KEYS: [&str; 4] = ["ALUMINUM", "STEEL", "PVC", "COMPOSITE"];

/// Look up a material by catalog key (case-sensitive).
pub fn lookup(key: &str) -> Option<MaterialSpec> {
    match key {
        "ALUMINUM" => Some(aluminum()),
        "STEEL" => Some(steel()),
        "PVC" => Some(pvc()),
        "COMPOSITE" => Some(composite()),
        _ => None,
    }
}

/// 6061-T6 aluminum tube stock.
pub fn aluminum() -> MaterialSpec {
    MaterialSpec {
        name: "ALUMINUM".into(),
        density: 2700.0,
        yield_strength: 276.0e6,
        ultimate_strength: 310.0e6,
    }
}

/// 4130 chromoly steel.
pub fn steel() -> MaterialSpec {
    MaterialSpec {
        name: "STEEL".into(),
        density: 7850.0,
        yield_strength: 435.0e6,
        ultimate_strength: 670.0e6,
    }
}

/// Schedule-40 PVC pipe. No yield plateau to speak of; treated as
/// yielding just below its burst strength.
pub fn pvc() -> MaterialSpec {
    MaterialSpec {
        name: "PVC".into(),
        density: 1400.0,
        yield_strength: 45.0e6,
        ultimate_strength: 52.0e6,
    }
}

/// Filament-wound composite, hoop-dominated layup.
pub fn composite() -> MaterialSpec {
    MaterialSpec {
        name: "COMPOSITE".into(),
        density: 1600.0,
        yield_strength: 550.0e6,
        ultimate_strength: 895.0e6,
    }
}
