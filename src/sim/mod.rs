pub mod event;
pub mod motor;
pub mod state;

pub use event::{scan_history, standard_events, BurnEvent, BurnEventKind, EventDetector};
pub use motor::{simulate, MotorSimulation};
pub use state::{BurnPhase, HistorySample, MotorState};
