use super::state::{BurnPhase, HistorySample, MotorState, ATMOSPHERIC_PRESSURE};

// ---------------------------------------------------------------------------
// Burn events
// ---------------------------------------------------------------------------

/// Kinds of burn events.
#[derive(Debug, Clone, PartialEq)]
pub enum BurnEventKind {
    Ignition,
    /// Highest chamber pressure seen over the recorded burn.
    PressurePeak,
    Burnout,
    Cato,
    Custom(String),
}

/// A discrete event somewhere along a recorded burn.
#[derive(Debug, Clone)]
pub struct BurnEvent {
    pub time: f64,
    pub kind: BurnEventKind,
    pub sample: HistorySample,
}

/// The standard event set of a finished (or aborted) burn: ignition at the
/// first sample, the pressure peak, and the terminal outcome. Every
/// supported grain is progressive, so the peak is found by scanning the
/// record rather than watching for a falling edge; it usually sits right
/// against burnout.
pub fn standard_events(state: &MotorState) -> Vec<BurnEvent> {
    let mut events = Vec::new();

    if let Some(first) = state.history.first() {
        events.push(BurnEvent {
            time: first.time,
            kind: BurnEventKind::Ignition,
            sample: *first,
        });
    }

    let peak = state
        .history
        .iter()
        .max_by(|a, b| a.chamber_pressure.total_cmp(&b.chamber_pressure));
    if let Some(peak) = peak {
        // A motor that never pressurized has no peak worth reporting.
        if peak.chamber_pressure > 2.0 * ATMOSPHERIC_PRESSURE {
            events.push(BurnEvent {
                time: peak.time,
                kind: BurnEventKind::PressurePeak,
                sample: *peak,
            });
        }
    }

    match state.phase {
        BurnPhase::BurnedOut => events.push(BurnEvent {
            time: state.burn_time,
            kind: BurnEventKind::Burnout,
            sample: state.sample(),
        }),
        BurnPhase::Exploded => events.push(BurnEvent {
            time: state.explosion_time.unwrap_or(state.time),
            kind: BurnEventKind::Cato,
            sample: state.sample(),
        }),
        BurnPhase::Idle | BurnPhase::Burning => {}
    }

    events
}

// ---------------------------------------------------------------------------
// Pluggable detectors for anything beyond the standard set
// ---------------------------------------------------------------------------

/// Trait for passive event detectors.
/// Implementations inspect consecutive history samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &HistorySample, current: &HistorySample) -> Option<BurnEventKind>;
}

/// Detects the chamber pressure crossing a threshold (rising or falling).
/// Fires once.
pub struct PressureThresholdDetector {
    pub threshold: f64,
    pub rising: bool,
    fired: bool,
}

impl PressureThresholdDetector {
    pub fn new(threshold: f64, rising: bool) -> Self {
        Self { threshold, rising, fired: false }
    }
}

impl EventDetector for PressureThresholdDetector {
    fn check(&mut self, prev: &HistorySample, current: &HistorySample) -> Option<BurnEventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.rising {
            prev.chamber_pressure < self.threshold && current.chamber_pressure >= self.threshold
        } else {
            prev.chamber_pressure > self.threshold && current.chamber_pressure <= self.threshold
        };
        if crossed {
            self.fired = true;
            Some(BurnEventKind::Custom(format!(
                "Pressure {:.1} MPa ({})",
                self.threshold / 1.0e6,
                if self.rising { "rising" } else { "falling" }
            )))
        } else {
            None
        }
    }
}

/// Run a set of detectors over a recorded burn, oldest sample first.
pub fn scan_history(
    history: &[HistorySample],
    detectors: &mut [&mut dyn EventDetector],
) -> Vec<BurnEvent> {
    let mut events = Vec::new();
    for pair in history.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(BurnEvent {
                    time: pair[1].time,
                    kind,
                    sample: pair[1],
                });
            }
        }
    }
    events
}
