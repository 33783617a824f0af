use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::sim::state::HistorySample;

/// Write a burn history to any `Write` sink as CSV.
pub fn write_history<W: Write>(out: &mut W, history: &[HistorySample]) -> io::Result<()> {
    writeln!(
        out,
        "time_s,chamber_pressure_pa,thrust_n,burn_rate_m_s,inner_radius_m,kn,stress_pa"
    )?;
    for sample in history {
        writeln!(
            out,
            "{:.4},{:.1},{:.3},{:.6},{:.6},{:.2},{:.1}",
            sample.time,
            sample.chamber_pressure,
            sample.thrust,
            sample.burn_rate,
            sample.inner_radius,
            sample.kn,
            sample.stress,
        )?;
    }
    Ok(())
}

/// Convenience wrapper writing straight to a file path.
pub fn write_history_file(path: &str, history: &[HistorySample]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_history(&mut writer, history)
}

// ---------------------------------------------------------------------------
