// ---------------------------------------------------------------------------
// Propellant definition + catalog
// ---------------------------------------------------------------------------

/// Ballistic properties of a solid propellant.
///
/// Burn rate follows the Saint-Robert power law `r = a * (P / P_ref)^n`
/// with `a` in mm/s at the reference pressure. Catalog entries are
/// single-law fits over the whole operating range, which is adequate for
/// the steady-state chamber model used here.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellantSpec {
    pub name: String,
    pub density: f64,        // kg/m^3
    pub burn_coef: f64,      // a, mm/s at ref_pressure
    pub burn_exponent: f64,  // n, dimensionless
    pub ref_pressure: f64,   // Pa
    pub c_star: f64,         // characteristic velocity, m/s
    pub gamma: f64,          // ratio of specific heats of the exhaust
}

/// Stable catalog keys, in display order.
pub const KEYS: [&str; 4] = ["KNSB", "KNSU", "KNDX", "APCP"];

/// Look up a propellant by catalog key (case-sensitive).
pub fn lookup(key: &str) -> Option<PropellantSpec> {
    match key {
        "KNSB" => Some(knsb()),
        "KNSU" => Some(knsu()),
        "KNDX" => Some(kndx()),
        "APCP" => Some(apcp()),
        _ => None,
    }
}

/// Potassium nitrate / sorbitol, 65/35. The workhorse amateur sugar
/// propellant: slow, forgiving, low-temperature castable.
pub fn knsb() -> PropellantSpec {
    PropellantSpec {
        name: "KNSB".into(),
        density: 1841.0,
        burn_coef: 5.13,
        burn_exponent: 0.222,
        ref_pressure: 1.0e6,
        c_star: 885.0,
        gamma: 1.137,
    }
}

/// Potassium nitrate / sucrose, 65/35. Faster and more pressure-sensitive
/// than KNSB.
pub fn knsu() -> PropellantSpec {
    PropellantSpec {
        name: "KNSU".into(),
        density: 1889.0,
        burn_coef: 8.26,
        burn_exponent: 0.319,
        ref_pressure: 1.0e6,
        c_star: 905.0,
        gamma: 1.133,
    }
}

/// Potassium nitrate / dextrose, 65/35.
pub fn kndx() -> PropellantSpec {
    PropellantSpec {
        name: "KNDX".into(),
        density: 1879.0,
        burn_coef: 6.80,
        burn_exponent: 0.400,
        ref_pressure: 1.0e6,
        c_star: 890.0,
        gamma: 1.131,
    }
}

/// Ammonium perchlorate composite, generic commercial formulation.
pub fn apcp() -> PropellantSpec {
    PropellantSpec {
        name: "APCP".into(),
        density: 1750.0,
        burn_coef: 5.10,
        burn_exponent: 0.350,
        ref_pressure: 1.0e6,
        c_star: 1530.0,
        gamma: 1.21,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_key() {
        for key in KEYS {
            let spec = lookup(key).unwrap();
            assert_eq!(spec.name, key);
        }
    }

    #[test]
    fn lookup_rejects_unknown_and_lowercase() {
        assert!(lookup("RP-1").is_none());
        assert!(lookup("knsb").is_none());
    }

    #[test]
    fn catalog_values_are_physical() {
        for key in KEYS {
            let p = lookup(key).unwrap();
            assert!(p.density > 1000.0 && p.density < 2500.0, "{key} density");
            assert!(p.burn_coef > 0.0 && p.burn_exponent >= 0.0, "{key} burn law");
            assert!(p.ref_pressure > 0.0, "{key} ref pressure");
            assert!(p.c_star > 500.0 && p.c_star < 2000.0, "{key} c*");
            assert!(p.gamma > 1.0 && p.gamma < 1.4, "{key} gamma");
        }
    }
}
