use glam::Vec2;

use crate::ResolutionError;

/// Viewport size in physical pixels, uploaded as the vignette uniform.
/// Must match the `Resolution` struct in `vignette.wgsl`.
/// `repr(C)` + `bytemuck` ensures safe casting to `&[u8]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Resolution {
    pub x: f32,
    pub y: f32,
}

impl Default for Resolution {
    /// 1280×720, used until a window reports its real size.
    fn default() -> Self {
        Self { x: 1280.0, y: 720.0 }
    }
}

impl Resolution {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build from a surface / window size in physical pixels.
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self {
            x: width as f32,
            y: height as f32,
        }
    }

    /// Check the invariant the shader relies on: both components finite and
    /// strictly positive.
    pub fn validate(self) -> Result<Self, ResolutionError> {
        let Self { x, y } = self;
        if !x.is_finite() || !y.is_finite() {
            return Err(ResolutionError::NonFinite { x, y });
        }
        if x <= 0.0 || y <= 0.0 {
            return Err(ResolutionError::NonPositive { x, y });
        }
        Ok(self)
    }

    /// Exchange width and height.
    pub fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Pixel coordinate → normalised screen coordinate (`frag / resolution`).
    /// No guard against zero components, same as the shader.
    pub fn normalize(self, frag: Vec2) -> Vec2 {
        frag / Vec2::from(self)
    }
}

impl From<Resolution> for Vec2 {
    fn from(r: Resolution) -> Self {
        Vec2::new(r.x, r.y)
    }
}
