use crate::motor::config::{merge, MotorConfig, MotorConfigPatch};
use crate::motor::{grain::GrainShape, material, propellant};
use crate::physics::{self, burn_area, burn_rate, pressure, structure, thrust};

use super::state::{
    BurnPhase, MotorState, ATMOSPHERIC_PRESSURE, BURNOUT_RADIUS_FRACTION, BURNOUT_WEB,
    HISTORY_INTERVAL,
};

// ---------------------------------------------------------------------------
// Motor simulation: owns the configuration and steps the burn state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MotorSimulation {
    config: MotorConfig,
    state: MotorState,
}

impl MotorSimulation {
    pub fn new(config: MotorConfig) -> Self {
        let state = MotorState::new(&config);
        MotorSimulation { config, state }
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    pub fn state(&self) -> &MotorState {
        &self.state
    }

    pub fn into_state(self) -> MotorState {
        self.state
    }

    /// Light the motor. Only an idle motor ignites; a burned-out or
    /// exploded one stays dead, and igniting twice is a no-op.
    pub fn ignite(&mut self) {
        if self.state.phase == BurnPhase::Idle {
            self.state.phase = BurnPhase::Burning;
        }
    }

    /// Advance the burn by `dt` seconds.
    ///
    /// Does nothing unless the motor is Burning, and ignores non-positive
    /// or non-finite steps. The caller picks dt (0.01 s is typical) and is
    /// expected to keep it under 50 ms; accuracy, not safety, is what
    /// degrades beyond that.
    pub fn step(&mut self, dt: f64) {
        if self.state.phase != BurnPhase::Burning {
            return;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let Self { config, state } = self;

        state.time += dt;

        // Nozzle geometry is re-read every step so config updates apply
        // mid-burn.
        let throat_area = config.nozzle.throat_area();
        let exit_area = config.nozzle.exit_area();

        state.burning_area = burn_area::burning_area(&config.grain, state.inner_radius);
        state.kn = if throat_area > 0.0 {
            state.burning_area / throat_area
        } else {
            0.0
        };

        // Warm-seed the solver with the previous chamber pressure; the
        // first step after ignition falls back to the cold-start seed.
        let seed = if state.chamber_pressure > ATMOSPHERIC_PRESSURE {
            state.chamber_pressure
        } else {
            pressure::DEFAULT_SEED
        };
        state.chamber_pressure =
            pressure::solve_chamber_pressure(state.burning_area, throat_area, &config.propellant, seed);
        state.max_pressure = state.max_pressure.max(state.chamber_pressure);

        state.burn_rate = burn_rate::burn_rate(state.chamber_pressure, &config.propellant);
        state.inner_radius =
            (state.inner_radius + state.burn_rate * dt).min(config.grain.outer_radius);

        // Burnout: web consumed, or the core has opened almost to the
        // outer surface. Settle to the quiet baseline and stop.
        if config.grain.web_remaining(state.inner_radius) <= BURNOUT_WEB
            || state.inner_radius >= BURNOUT_RADIUS_FRACTION * config.grain.outer_radius
        {
            state.phase = BurnPhase::BurnedOut;
            state.thrust = 0.0;
            state.burn_rate = 0.0;
            state.chamber_pressure = ATMOSPHERIC_PRESSURE;
            state.burn_time = state.time;
            return;
        }

        let raw_thrust = thrust::thrust_force(
            state.chamber_pressure,
            throat_area,
            exit_area,
            &config.propellant,
        );
        state.thrust = raw_thrust * physics::clamp_or(config.nozzle.efficiency, 0.0, 1.0, 1.0);
        state.max_thrust = state.max_thrust.max(state.thrust);

        state.stress = structure::hoop_stress(
            state.chamber_pressure,
            config.casing.inner_radius,
            config.casing.wall_thickness,
        );
        state.safety_factor = structure::safety_factor(state.stress, &config.material);
        if structure::classify(state.stress, &config.material) == structure::CasingStatus::Catastrophic
        {
            // CATO freezes the state at the failure values rather than
            // zeroing it; the numbers are what the casing last saw.
            state.phase = BurnPhase::Exploded;
            state.explosion_time = Some(state.time);
        }

        state.total_impulse += state.thrust * dt;

        let due = match state.history.last() {
            None => true,
            Some(last) => state.time - last.time >= HISTORY_INTERVAL,
        };
        if due {
            state.history.push(state.sample());
        }
    }

    /// Step repeatedly until the burn ends or `max_time` is reached.
    pub fn run(&mut self, dt: f64, max_time: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        while self.state.phase == BurnPhase::Burning && self.state.time < max_time {
            self.step(dt);
        }
    }

    /// Back to a fresh idle state for the current configuration.
    pub fn reset(&mut self) {
        self.state = MotorState::new(&self.config);
    }

    /// Merge a partial configuration update. Takes effect from the next
    /// step; the burn state is deliberately left alone.
    pub fn update_config(&mut self, patch: &MotorConfigPatch) {
        self.config = merge(&self.config, patch);
    }

    /// Swap the propellant by catalog key. Unknown keys change nothing.
    pub fn set_propellant(&mut self, key: &str) -> bool {
        match propellant::lookup(key) {
            Some(spec) => {
                self.config.propellant = spec;
                true
            }
            None => false,
        }
    }

    /// Swap the casing material by catalog key. Unknown keys change nothing.
    pub fn set_material(&mut self, key: &str) -> bool {
        match material::lookup(key) {
            Some(spec) => {
                self.config.material = spec;
                true
            }
            None => false,
        }
    }

    /// Swap the grain shape by catalog key. Unknown keys change nothing.
    pub fn set_grain_shape(&mut self, key: &str) -> bool {
        match GrainShape::from_key(key) {
            Some(shape) => {
                self.config.grain.shape = shape;
                true
            }
            None => false,
        }
    }

    /// Fraction of the web consumed so far, 0 at cast and 1 at the outer
    /// surface. A zero-web grain reports 0.
    pub fn burn_progress(&self) -> f64 {
        let grain = &self.config.grain;
        let consumed = self.state.inner_radius - grain.core_radius;
        physics::clamp_or(consumed / grain.initial_web(), 0.0, 1.0, 0.0)
    }
}

/// Ignite and run a motor to completion (or `max_time`), returning the
/// final state with its history.
pub fn simulate(config: &MotorConfig, dt: f64, max_time: f64) -> MotorState {
    let mut sim = MotorSimulation::new(config.clone());
    sim.ignite();
    sim.run(dt, max_time);
    sim.into_state()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::config::{presets, GrainPatch};

    const DT: f64 = 0.01;
    const MAX_TIME: f64 = 30.0;

    #[test]
    fn reference_motor_burns_out_in_bounds() {
        let state = simulate(&MotorConfig::default(), DT, MAX_TIME);

        assert_eq!(state.phase, BurnPhase::BurnedOut);
        assert!(state.burn_time > 1.0 && state.burn_time < 3.0, "burn time {}", state.burn_time);
        assert!(state.total_impulse > 0.0);
        assert!(
            state.max_pressure > 1.0e6 && state.max_pressure < 10.0e6,
            "peak pressure {} Pa",
            state.max_pressure
        );
        // Settled to the quiet baseline
        assert_eq!(state.thrust, 0.0);
        assert_eq!(state.burn_rate, 0.0);
        assert_eq!(state.chamber_pressure, ATMOSPHERIC_PRESSURE);
        assert!(!state.history.is_empty());
    }

    #[test]
    fn reference_motor_performance_is_plausible() {
        let state = simulate(&MotorConfig::default(), DT, MAX_TIME);
        // Roughly a J-class motor: ~1000 N*s, peaking around 750 N
        assert!(
            state.total_impulse > 700.0 && state.total_impulse < 1400.0,
            "impulse {}",
            state.total_impulse
        );
        assert!(
            state.max_thrust > 400.0 && state.max_thrust < 1100.0,
            "max thrust {}",
            state.max_thrust
        );
    }

    #[test]
    fn first_step_kn_matches_the_design_point() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.step(DT);
        // 4-segment BATES at cast over a 9 mm throat: Kn = 400 exactly
        assert!((sim.state().kn - 400.0).abs() < 0.5, "Kn {}", sim.state().kn);
    }

    #[test]
    fn thin_wall_casing_explodes_before_burnout() {
        let healthy = simulate(&MotorConfig::default(), DT, MAX_TIME);
        let failed = simulate(&presets::thin_wall_demo(), DT, MAX_TIME);

        assert_eq!(failed.phase, BurnPhase::Exploded);
        let when = failed.explosion_time.unwrap();
        assert!(
            when < healthy.burn_time,
            "CATO at {when}s should precede burnout at {}s",
            healthy.burn_time
        );
        // Frozen at the failure values, not zeroed
        assert!(failed.thrust > 0.0);
        assert!(failed.stress > failed.chamber_pressure, "stress {} Pa", failed.stress);
        assert_eq!(failed.time, when);
    }

    #[test]
    fn exploded_motor_stays_frozen() {
        let mut sim = MotorSimulation::new(presets::thin_wall_demo());
        sim.ignite();
        sim.run(DT, MAX_TIME);
        assert_eq!(sim.state().phase, BurnPhase::Exploded);

        let frozen = sim.state().clone();
        sim.step(DT);
        sim.ignite();
        sim.step(DT);
        assert_eq!(*sim.state(), frozen);
    }

    #[test]
    fn stepping_an_idle_motor_changes_nothing() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        let before = sim.state().clone();
        for _ in 0..5 {
            sim.step(DT);
        }
        assert_eq!(*sim.state(), before);
        assert_eq!(sim.state().time, 0.0);
    }

    #[test]
    fn bad_dt_is_ignored_mid_burn() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.step(DT);
        let snapshot = sim.state().clone();
        sim.step(0.0);
        sim.step(-0.5);
        sim.step(f64::NAN);
        assert_eq!(*sim.state(), snapshot);
    }

    #[test]
    fn burn_progress_is_monotone_and_caps_at_one() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        assert_eq!(sim.burn_progress(), 0.0);

        let mut last = 0.0;
        while sim.state().phase == BurnPhase::Burning && sim.state().time < MAX_TIME {
            sim.step(DT);
            let progress = sim.burn_progress();
            assert!(progress >= last, "progress dipped at t={}", sim.state().time);
            if sim.state().phase == BurnPhase::Burning {
                assert!(progress < 1.0, "progress pinned while still burning");
            }
            last = progress;
        }
        assert_eq!(sim.state().phase, BurnPhase::BurnedOut);
        assert!(last > 0.9 && last <= 1.0, "final progress {last}");
    }

    #[test]
    fn zero_web_grain_reports_zero_progress() {
        let mut config = MotorConfig::default();
        config.grain.core_radius = config.grain.outer_radius;
        let sim = MotorSimulation::new(config);
        assert_eq!(sim.burn_progress(), 0.0);
    }

    #[test]
    fn history_samples_respect_the_interval() {
        // A dt that does not divide the sampling interval evenly
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.run(0.003, MAX_TIME);

        let history = &sim.state().history;
        assert!(history.len() > 10);
        for pair in history.windows(2) {
            let delta = pair[1].time - pair[0].time;
            assert!(delta >= HISTORY_INTERVAL - 1e-9, "samples {delta}s apart");
        }
    }

    #[test]
    fn reset_restores_a_fresh_state_idempotently() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.run(DT, 0.5);
        assert!(sim.state().time > 0.0);

        sim.reset();
        let once = sim.state().clone();
        assert_eq!(once, MotorState::new(sim.config()));

        sim.reset();
        assert_eq!(*sim.state(), once);

        // The reset motor can run a whole new burn
        sim.ignite();
        sim.run(DT, MAX_TIME);
        assert_eq!(sim.state().phase, BurnPhase::BurnedOut);
    }

    #[test]
    fn run_stops_at_the_time_cap() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.run(DT, 0.05);
        assert_eq!(sim.state().phase, BurnPhase::Burning);
        assert!(sim.state().time >= 0.05 && sim.state().time < 0.1);
    }

    #[test]
    fn update_config_applies_without_resetting_the_burn() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.run(DT, 0.2);
        let time_before = sim.state().time;

        let patch = MotorConfigPatch {
            grain: Some(GrainPatch {
                segments: Some(6),
                ..GrainPatch::default()
            }),
            ..MotorConfigPatch::default()
        };
        sim.update_config(&patch);

        assert_eq!(sim.config().grain.segments, 6);
        assert_eq!(sim.state().time, time_before);
        assert_eq!(sim.state().phase, BurnPhase::Burning);

        // More burning surface from the next step onward
        let kn_before = sim.state().kn;
        sim.step(DT);
        assert!(sim.state().kn > kn_before * 1.3, "Kn should jump with 6 segments");
    }

    #[test]
    fn catalog_setters_accept_known_keys_only() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        assert!(sim.set_propellant("KNSU"));
        assert_eq!(sim.config().propellant.name, "KNSU");
        assert!(!sim.set_propellant("FLUBBER"));
        assert_eq!(sim.config().propellant.name, "KNSU");

        assert!(sim.set_material("STEEL"));
        assert_eq!(sim.config().material.name, "STEEL");
        assert!(!sim.set_material("steel"));

        assert!(sim.set_grain_shape("STAR"));
        assert_eq!(sim.config().grain.shape, GrainShape::Star);
        assert!(!sim.set_grain_shape("MOONBURNER"));
        assert_eq!(sim.config().grain.shape, GrainShape::Star);
    }

    #[test]
    fn ignite_is_idempotent_and_final_phases_refuse_it() {
        let mut sim = MotorSimulation::new(MotorConfig::default());
        sim.ignite();
        sim.ignite();
        assert_eq!(sim.state().phase, BurnPhase::Burning);

        sim.run(DT, MAX_TIME);
        assert_eq!(sim.state().phase, BurnPhase::BurnedOut);
        sim.ignite();
        assert_eq!(sim.state().phase, BurnPhase::BurnedOut);
    }

    #[test]
    fn cato_moment_is_visible_in_the_final_state() {
        let state = simulate(&presets::thin_wall_demo(), DT, MAX_TIME);
        let when = state.explosion_time.unwrap();
        assert_eq!(state.time, when);
        assert!(state.stress > 310.0e6, "failure stress {}", state.stress);
        assert!(state.total_impulse > 0.0, "impulse up to failure counts");
        // The sampler may skip at most one step around the failure
        let last = state.history.last().unwrap();
        assert!(when - last.time < 0.021, "last sample {}s before failure", when - last.time);
    }

    #[test]
    fn degenerate_nozzle_burns_quietly_at_ambient() {
        let mut config = MotorConfig::default();
        config.nozzle.throat_diameter = 0.0;
        let mut sim = MotorSimulation::new(config);
        sim.ignite();
        for _ in 0..50 {
            sim.step(DT);
        }
        let s = sim.state();
        assert_eq!(s.chamber_pressure, ATMOSPHERIC_PRESSURE);
        assert_eq!(s.thrust, 0.0);
        assert_eq!(s.kn, 0.0);
        // Still regresses at the floored strand rate
        assert!(s.inner_radius > 0.012);
    }
}
