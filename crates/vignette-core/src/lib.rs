pub mod error;
pub mod resolution;
pub mod vertex;
pub mod vignette;

pub use error::ResolutionError;
pub use resolution::Resolution;
pub use vertex::{Vertex, FULLSCREEN_QUAD_INDICES, FULLSCREEN_QUAD_VERTICES};
pub use vignette::{
    composite_over, fragment_alpha, fragment_color, render_mask, to_unorm8, vertex_stage,
    vignette_factor,
};

// ---------------------------------------------------------------------------
// Vignette curve constants — must match shaders/vignette.wgsl
// ---------------------------------------------------------------------------

/// Scale applied to `uv'.x * uv'.y` so the centre lands near 1.
pub const VIGNETTE_SCALE: f32 = 10.0;

/// Exponent of the falloff curve (fourth root).
pub const VIGNETTE_EXPONENT: f32 = 0.25;

/// Alpha at a fully dark pixel before the target clamps it.
/// Kept at 1.1 rather than 1.0: corners and edges come out fully opaque.
pub const ALPHA_BASELINE: f32 = 1.1;
