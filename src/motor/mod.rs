pub mod casing;
pub mod config;
pub mod grain;
pub mod material;
pub mod nozzle;
pub mod propellant;

pub use casing::CasingGeometry;
pub use config::{merge, CasingPatch, GrainPatch, MotorConfig, MotorConfigPatch, NozzlePatch};
pub use grain::{GrainGeometry, GrainShape};
pub use material::MaterialSpec;
pub use nozzle::NozzleGeometry;
pub use propellant::PropellantSpec;
