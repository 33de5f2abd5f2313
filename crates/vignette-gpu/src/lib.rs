pub mod backdrop;
pub mod context;
pub mod vignette_pass;

pub use context::{GpuContext, GpuError};
pub use vignette_pass::VignettePass;

/// WGSL source of the vignette pass (`vs_main` / `fs_main`).
pub const VIGNETTE_WGSL: &str = include_str!("../shaders/vignette.wgsl");

/// WGSL source of the demo backdrop (`vs_main` / `fs_main`, no vertex buffer).
pub const BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");
