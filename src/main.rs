use anyhow::anyhow;
use clap::Parser;

use motor_sim::config::load_motor_config;
use motor_sim::io::csv::write_history_file;
use motor_sim::io::json::{write_summary_file, BurnSummary};
use motor_sim::motor::config::{merge, CasingPatch, GrainPatch, MotorConfig, MotorConfigPatch};
use motor_sim::motor::grain::GrainShape;
use motor_sim::motor::{material, propellant};
use motor_sim::physics::{burn_area, structure};
use motor_sim::sim::event::{standard_events, BurnEventKind};
use motor_sim::sim::motor::MotorSimulation;
use motor_sim::sim::state::MotorState;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Solid rocket motor internal ballistics simulator"
)]
struct Cli {
    /// Motor definition TOML; missing sections keep the default motor
    #[arg(long)]
    config: Option<String>,

    /// Propellant catalog key (KNSB, KNSU, KNDX, APCP)
    #[arg(long)]
    propellant: Option<String>,

    /// Casing material catalog key (ALUMINUM, STEEL, PVC, COMPOSITE)
    #[arg(long)]
    material: Option<String>,

    /// Grain shape catalog key (BATES, STAR, CYLINDRICAL)
    #[arg(long)]
    grain_shape: Option<String>,

    /// Grain segment count override
    #[arg(long)]
    segments: Option<u32>,

    /// Casing wall thickness override in millimeters
    #[arg(long)]
    wall_mm: Option<f64>,

    /// Integration step in seconds
    #[arg(long, default_value_t = 0.01)]
    dt: f64,

    /// Cap on simulated burn time in seconds
    #[arg(long, default_value_t = 30.0)]
    max_time: f64,

    /// Write the sampled burn history to this CSV path
    #[arg(long)]
    csv: Option<String>,

    /// Write the burn summary to this JSON path
    #[arg(long)]
    json: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // -----------------------------------------------------------------------
    // Resolve the motor configuration
    // -----------------------------------------------------------------------
    let base = match &cli.config {
        Some(path) => load_motor_config(path)?,
        None => MotorConfig::default(),
    };
    let config = merge(&base, &cli_patch(&cli)?);

    // -----------------------------------------------------------------------
    // Run the burn
    // -----------------------------------------------------------------------
    let mut sim = MotorSimulation::new(config);
    sim.ignite();
    sim.run(cli.dt, cli.max_time);

    let state = sim.state();
    let summary = BurnSummary::from_burn(sim.config(), state);

    print_report(sim.config(), state, &summary, cli.dt);

    // -----------------------------------------------------------------------
    // Exports
    // -----------------------------------------------------------------------
    if let Some(path) = &cli.csv {
        write_history_file(path, &state.history)?;
        println!("  History CSV written to {path}");
        println!();
    }
    if let Some(path) = &cli.json {
        write_summary_file(path, &summary)?;
        println!("  Summary JSON written to {path}");
        println!();
    }

    Ok(())
}

/// Fold the command-line overrides into a config patch.
fn cli_patch(cli: &Cli) -> anyhow::Result<MotorConfigPatch> {
    let propellant = cli
        .propellant
        .as_deref()
        .map(|key| {
            propellant::lookup(key).ok_or_else(|| {
                anyhow!(
                    "unknown propellant {key:?}, expected one of {:?}",
                    propellant::KEYS
                )
            })
        })
        .transpose()?;
    let material = cli
        .material
        .as_deref()
        .map(|key| {
            material::lookup(key).ok_or_else(|| {
                anyhow!(
                    "unknown casing material {key:?}, expected one of {:?}",
                    material::KEYS
                )
            })
        })
        .transpose()?;
    let shape = cli
        .grain_shape
        .as_deref()
        .map(|key| {
            GrainShape::from_key(key).ok_or_else(|| {
                anyhow!(
                    "unknown grain shape {key:?}, expected one of {:?}",
                    GrainShape::KEYS
                )
            })
        })
        .transpose()?;

    Ok(MotorConfigPatch {
        propellant,
        material,
        grain: Some(GrainPatch {
            shape,
            segments: cli.segments,
            ..GrainPatch::default()
        }),
        nozzle: None,
        casing: Some(CasingPatch {
            wall_thickness: cli.wall_mm.map(|mm| mm / 1000.0),
            ..CasingPatch::default()
        }),
    })
}

fn print_report(config: &MotorConfig, state: &MotorState, summary: &BurnSummary, dt: f64) {
    let throat_area = config.nozzle.throat_area();
    let initial_kn = if throat_area > 0.0 {
        burn_area::burning_area(&config.grain, config.grain.core_radius) / throat_area
    } else {
        0.0
    };

    println!();
    println!("====================================================================");
    println!(
        "  SOLID MOTOR BURN SIMULATION — {} / {}x {}",
        config.propellant.name,
        config.grain.segments,
        config.grain.shape.key()
    );
    println!("====================================================================");
    println!();

    println!("  Motor Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Propellant:    {:>9}      Casing:        {:>9}",
        config.propellant.name, config.material.name
    );
    println!(
        "  Grain OD:      {:>9.1} mm   Core dia:      {:>9.1} mm",
        config.grain.outer_radius * 2000.0,
        config.grain.core_radius * 2000.0
    );
    println!(
        "  Segment len:   {:>9.1} mm   Segments:      {:>9}",
        config.grain.segment_length * 1000.0,
        config.grain.segments
    );
    println!(
        "  Throat dia:    {:>9.1} mm   Expansion:     {:>9.2}",
        config.nozzle.throat_diameter * 1000.0,
        config.nozzle.expansion_ratio()
    );
    println!(
        "  Wall:          {:>9.1} mm   Initial Kn:    {:>9.1}",
        config.casing.wall_thickness * 1000.0,
        initial_kn
    );
    println!(
        "  Prop mass:     {:>9.3} kg   Efficiency:    {:>9.2}",
        summary.propellant_mass_kg, config.nozzle.efficiency
    );
    println!();

    println!("  Burn Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in standard_events(state) {
        match event.kind {
            BurnEventKind::Ignition => println!(
                "  IGNITION  t={:>6.2}s   Pc={:>6.2} MPa   Kn={:>6.1}",
                event.time,
                event.sample.chamber_pressure / 1.0e6,
                event.sample.kn
            ),
            BurnEventKind::PressurePeak => println!(
                "  PEAK      t={:>6.2}s   Pc={:>6.2} MPa   F={:>7.1} N",
                event.time,
                event.sample.chamber_pressure / 1.0e6,
                event.sample.thrust
            ),
            BurnEventKind::Burnout => println!(
                "  BURNOUT   t={:>6.2}s   impulse={:>7.1} N*s",
                event.time, state.total_impulse
            ),
            BurnEventKind::Cato => println!(
                "  CATO      t={:>6.2}s   Pc={:>6.2} MPa   stress={:>6.1} MPa",
                event.time,
                event.sample.chamber_pressure / 1.0e6,
                event.sample.stress / 1.0e6
            ),
            BurnEventKind::Custom(label) => {
                println!("  EVENT     t={:>6.2}s   {label}", event.time)
            }
        }
    }
    if !state.phase.is_terminal() {
        println!("  NO TERMINAL EVENT within {:.1} s", state.time);
    }
    println!();

    let peak_stress = state.history.iter().map(|s| s.stress).fold(0.0_f64, f64::max);
    let min_safety_factor = structure::safety_factor(peak_stress, &config.material);
    let designation = format!("{}{:.0}", summary.motor_class, summary.average_thrust_n);

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Motor class:   {:>9}      Total impulse: {:>9.1} N*s",
        designation, summary.total_impulse_ns
    );
    println!(
        "  Max thrust:    {:>9.1} N    Avg thrust:    {:>9.1} N",
        summary.max_thrust_n, summary.average_thrust_n
    );
    println!(
        "  Max pressure:  {:>9.2} MPa  Burn time:     {:>9.2} s",
        summary.max_pressure_pa / 1.0e6,
        summary.burn_time_s
    );
    println!(
        "  Min SF:        {:>9.1}      Isp:           {:>9.1} s",
        min_safety_factor, summary.specific_impulse_s
    );
    println!();

    // -----------------------------------------------------------------------
    // Burn history table (sampled)
    // -----------------------------------------------------------------------
    println!("  Burn History");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>9}  {:>8}  {:>6}  {:>5}",
        "t (s)", "Pc (MPa)", "F (N)", "r (mm/s)", "web (mm)", "Kn", "phase"
    );
    println!("  {}", "─".repeat(64));

    let interval = (state.history.len() / 24).max(1);
    for (i, s) in state.history.iter().enumerate() {
        let forced = i == 0 || i == state.history.len().saturating_sub(1);
        if !forced && i % interval != 0 {
            continue;
        }
        println!(
            "  {:>7.2}  {:>8.2}  {:>8.1}  {:>9.2}  {:>8.1}  {:>6.0}  {:>5}",
            s.time,
            s.chamber_pressure / 1.0e6,
            s.thrust,
            s.burn_rate * 1000.0,
            config.grain.web_remaining(s.inner_radius) * 1000.0,
            s.kn,
            phase_label_at(state, s.time)
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} s",
        (state.time / dt).round() as u64,
        dt
    );
    println!("====================================================================");
    println!();
}

/// Reconstruct the phase column from the terminal markers in the state.
fn phase_label_at(state: &MotorState, time: f64) -> &'static str {
    if let Some(when) = state.explosion_time {
        if time >= when {
            return "CATO";
        }
    }
    if state.burn_time > 0.0 && time >= state.burn_time {
        return "OUT";
    }
    "BURN"
}
