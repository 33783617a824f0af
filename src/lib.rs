pub mod config;
pub mod io;
pub mod motor;
pub mod physics;
pub mod sim;

// Flat re-exports for the common embedding path
pub mod prelude {
    pub use crate::config::{load_motor_config, ConfigError};
    pub use crate::motor::config::{merge, MotorConfig, MotorConfigPatch};
    pub use crate::sim::motor::{simulate, MotorSimulation};
    pub use crate::sim::state::{BurnPhase, HistorySample, MotorState};
}
