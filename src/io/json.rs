use std::fs::File;
use std::io::{self, BufWriter, Write};

use serde::Serialize;

use crate::motor::config::MotorConfig;
use crate::sim::state::MotorState;

const STANDARD_GRAVITY: f64 = 9.80665; // m/s^2

/// Condensed burn report, serialized as JSON for downstream tooling.
#[derive(Debug, Clone, Serialize)]
pub struct BurnSummary {
    pub outcome: String,
    pub motor_class: String,
    pub propellant: String,
    pub burn_time_s: f64,
    pub total_impulse_ns: f64,
    pub average_thrust_n: f64,
    pub max_thrust_n: f64,
    pub max_pressure_pa: f64,
    pub peak_kn: f64,
    pub propellant_mass_kg: f64,
    pub specific_impulse_s: f64,
    pub explosion_time_s: Option<f64>,
    pub samples: usize,
}

impl BurnSummary {
    pub fn from_burn(config: &MotorConfig, state: &MotorState) -> BurnSummary {
        // Exploded motors never reach burnout, so fall back to the frozen clock.
        let duration = if state.burn_time > 0.0 {
            state.burn_time
        } else {
            state.time
        };
        let average_thrust = if duration > 0.0 {
            state.total_impulse / duration
        } else {
            0.0
        };
        let propellant_mass = config.propellant_mass();
        let specific_impulse = if propellant_mass > 0.0 {
            state.total_impulse / (propellant_mass * STANDARD_GRAVITY)
        } else {
            0.0
        };
        let peak_kn = state.history.iter().map(|s| s.kn).fold(0.0, f64::max);

        BurnSummary {
            outcome: state.phase.label().to_string(),
            motor_class: motor_class(state.total_impulse).to_string(),
            propellant: config.propellant.name.clone(),
            burn_time_s: duration,
            total_impulse_ns: state.total_impulse,
            average_thrust_n: average_thrust,
            max_thrust_n: state.max_thrust,
            max_pressure_pa: state.max_pressure,
            peak_kn,
            propellant_mass_kg: propellant_mass,
            specific_impulse_s: specific_impulse,
            explosion_time_s: state.explosion_time,
            samples: state.history.len(),
        }
    }
}

/// Letter class by total impulse, doubling per letter from A at 2.5 N*s.
pub fn motor_class(total_impulse: f64) -> &'static str {
    if !(total_impulse > 0.0) {
        return "-";
    }
    let classes = [
        (2.5, "A"),
        (5.0, "B"),
        (10.0, "C"),
        (20.0, "D"),
        (40.0, "E"),
        (80.0, "F"),
        (160.0, "G"),
        (320.0, "H"),
        (640.0, "I"),
        (1280.0, "J"),
        (2560.0, "K"),
        (5120.0, "L"),
        (10240.0, "M"),
        (20480.0, "N"),
        (40960.0, "O"),
    ];
    for (limit, letter) in classes {
        if total_impulse <= limit {
            return letter;
        }
    }
    "O+"
}

/// Write a summary to any `Write` sink as pretty-printed JSON.
pub fn write_summary<W: Write>(out: &mut W, summary: &BurnSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::from)?;
    writeln!(out)
}

/// Convenience wrapper writing straight to a file path.
pub fn write_summary_file(path: &str, summary: &BurnSummary) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_summary(&mut writer, summary)
}

// ---------------------------------------------------------------------------
