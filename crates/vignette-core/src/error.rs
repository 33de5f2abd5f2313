/// Rejected resolution values. The shader divides by both components, so
/// the host refuses to upload anything it cannot divide by.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ResolutionError {
    #[error("resolution must be strictly positive, got {x}×{y}")]
    NonPositive { x: f32, y: f32 },
    #[error("resolution must be finite, got {x}×{y}")]
    NonFinite { x: f32, y: f32 },
}
