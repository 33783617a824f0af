//! TOML motor definitions, layered over the built-in default motor.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::motor::config::{
    merge, CasingPatch, GrainPatch, MotorConfig, MotorConfigPatch, NozzlePatch,
};
use crate::motor::grain::GrainShape;
use crate::motor::{material, propellant};

/// Errors that can occur while loading a motor definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read motor file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse motor file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown propellant {0:?}")]
    UnknownPropellant(String),
    #[error("unknown casing material {0:?}")]
    UnknownMaterial(String),
    #[error("unknown grain shape {0:?}")]
    UnknownGrainShape(String),
}

/// On-disk motor definition. Every section is optional; anything missing
/// keeps the default motor's value. Dimensions are millimeters in the file
/// and convert to meters on resolve.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotorFile {
    #[serde(default)]
    pub propellant: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub grain: GrainSection,
    #[serde(default)]
    pub nozzle: NozzleSection,
    #[serde(default)]
    pub casing: CasingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrainSection {
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub outer_diameter_mm: Option<f64>,
    #[serde(default)]
    pub core_diameter_mm: Option<f64>,
    #[serde(default)]
    pub segment_length_mm: Option<f64>,
    #[serde(default)]
    pub segments: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NozzleSection {
    #[serde(default)]
    pub throat_diameter_mm: Option<f64>,
    #[serde(default)]
    pub exit_diameter_mm: Option<f64>,
    #[serde(default)]
    pub efficiency: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CasingSection {
    #[serde(default)]
    pub inner_diameter_mm: Option<f64>,
    #[serde(default)]
    pub wall_mm: Option<f64>,
}

impl MotorFile {
    /// Resolve catalog keys and convert units into a config patch.
    pub fn to_patch(&self) -> Result<MotorConfigPatch, ConfigError> {
        let propellant = self
            .propellant
            .as_deref()
            .map(|key| {
                propellant::lookup(key)
                    .ok_or_else(|| ConfigError::UnknownPropellant(key.to_string()))
            })
            .transpose()?;
        let material = self
            .material
            .as_deref()
            .map(|key| {
                material::lookup(key).ok_or_else(|| ConfigError::UnknownMaterial(key.to_string()))
            })
            .transpose()?;
        let shape = self
            .grain
            .shape
            .as_deref()
            .map(|key| {
                GrainShape::from_key(key)
                    .ok_or_else(|| ConfigError::UnknownGrainShape(key.to_string()))
            })
            .transpose()?;

        Ok(MotorConfigPatch {
            propellant,
            material,
            grain: Some(GrainPatch {
                shape,
                outer_radius: self.grain.outer_diameter_mm.map(radius_from_diameter_mm),
                core_radius: self.grain.core_diameter_mm.map(radius_from_diameter_mm),
                segment_length: self.grain.segment_length_mm.map(meters_from_mm),
                segments: self.grain.segments,
            }),
            nozzle: Some(NozzlePatch {
                throat_diameter: self.nozzle.throat_diameter_mm.map(meters_from_mm),
                exit_diameter: self.nozzle.exit_diameter_mm.map(meters_from_mm),
                efficiency: self.nozzle.efficiency,
            }),
            casing: Some(CasingPatch {
                inner_radius: self.casing.inner_diameter_mm.map(radius_from_diameter_mm),
                wall_thickness: self.casing.wall_mm.map(meters_from_mm),
            }),
        })
    }
}

/// Load a motor definition from TOML and layer it over the default motor.
pub fn load_motor_config<P: AsRef<Path>>(path: P) -> Result<MotorConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let file: MotorFile = toml::from_str(&contents)?;
    let patch = file.to_patch()?;
    Ok(merge(&MotorConfig::default(), &patch))
}

fn meters_from_mm(mm: f64) -> f64 {
    mm / 1000.0
}

fn radius_from_diameter_mm(mm: f64) -> f64 {
    mm / 2000.0
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
propellant = "KNDX"

[grain]
shape = "STAR"
outer_diameter_mm = 75.0
segments = 3

[casing]
wall_mm = 2.0
"#;

    #[test]
    fn motor_file_overrides_only_what_it_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motor.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = load_motor_config(&path).unwrap();
        assert_eq!(config.propellant.name, "KNDX");
        assert_eq!(config.grain.shape, GrainShape::Star);
        assert!((config.grain.outer_radius - 0.0375).abs() < 1e-12);
        assert_eq!(config.grain.segments, 3);
        assert!((config.casing.wall_thickness - 0.002).abs() < 1e-12);

        // Untouched sections keep the default motor.
        let default = MotorConfig::default();
        assert_eq!(config.material.name, default.material.name);
        assert_eq!(config.nozzle.throat_diameter, default.nozzle.throat_diameter);
        assert_eq!(config.grain.core_radius, default.grain.core_radius);
    }

    #[test]
    fn empty_file_yields_the_default_motor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motor.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_motor_config(&path).unwrap();
        let default = MotorConfig::default();
        assert_eq!(config.propellant.name, default.propellant.name);
        assert_eq!(config.grain.segments, default.grain.segments);
    }

    #[test]
    fn unknown_catalog_keys_are_rejected() {
        let file = MotorFile {
            propellant: Some("JET-A".to_string()),
            ..MotorFile::default()
        };
        assert!(matches!(
            file.to_patch(),
            Err(ConfigError::UnknownPropellant(_))
        ));

        let file = MotorFile {
            material: Some("cardboard".to_string()),
            ..MotorFile::default()
        };
        assert!(matches!(
            file.to_patch(),
            Err(ConfigError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn malformed_toml_reports_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motor.toml");
        std::fs::write(&path, "propellant = [not toml").unwrap();

        assert!(matches!(
            load_motor_config(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        assert!(matches!(
            load_motor_config("/nonexistent/motor.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
