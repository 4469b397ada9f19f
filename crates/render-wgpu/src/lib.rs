//! wgpu render backend for the snow walkabout.
//!
//! Renders a grid floor, a deterministic procedural block city as the
//! static environment, and the snow pool as a point cloud.
//!
//! # Invariants
//! - The renderer never mutates simulation state; it reads the camera
//!   pose and snow positions after the tick has finished.
//! - The building layout is generated once and is identical across runs.

mod gpu;
mod scene;
mod shaders;

pub use gpu::SceneRenderer;
pub use scene::{city_blocks, BlockInstance};
