//! Walk-core simulation: first-person camera movement with gravity and
//! ground collision, plus the perpetually-recycled snow field.
//!
//! # Invariants
//! - The camera never rests below ground height after ground resolution;
//!   `can_jump` is true exactly while the body stands on the ground.
//! - The snow pool is allocated once and recycled in place, never
//!   reallocated or resized.
//! - All stepping is single-threaded: the frame driver owns a `WalkSim`
//!   and mutates it between render frames. Renderers only read.

pub mod camera;
pub mod config;
pub mod motion;
pub mod snow;
pub mod walk;

pub use camera::WalkCamera;
pub use config::{ConfigError, MovementConfig, SimConfig, SnowConfig};
pub use motion::KinematicBody;
pub use snow::SnowField;
pub use walk::WalkSim;

/// Crate name and version, for diagnostics output.
pub fn crate_info() -> String {
    format!("snowwalk-sim v{}", env!("CARGO_PKG_VERSION"))
}
