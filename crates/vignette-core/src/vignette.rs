//! CPU reference of `vignette.wgsl`.
//!
//! Each function mirrors one step of the shader so the falloff can be tested
//! without a GPU. None of them guard against a degenerate resolution: a zero
//! component yields the same infinities / NaNs the shader would.

use glam::{Vec2, Vec2Swizzles, Vec3, Vec4};

use crate::{Resolution, ALPHA_BASELINE, VIGNETTE_EXPONENT, VIGNETTE_SCALE};

/// Vertex stage: pass the NDC position through with `w = 1`.
pub fn vertex_stage(position: Vec3) -> Vec4 {
    position.extend(1.0)
}

/// Falloff for a normalised screen coordinate: 0 on every edge, ~0.889 at
/// the centre.
pub fn vignette_factor(uv: Vec2) -> f32 {
    let uv = uv * (Vec2::ONE - uv.yx());
    (uv.x * uv.y * VIGNETTE_SCALE).powf(VIGNETTE_EXPONENT)
}

/// Alpha written by the fragment stage for a pixel at `frag_coord`
/// (framebuffer pixels, origin top-left). Unclamped; may exceed 1.
pub fn fragment_alpha(frag_coord: Vec2, resolution: Resolution) -> f32 {
    ALPHA_BASELINE - vignette_factor(resolution.normalize(frag_coord))
}

/// Full fragment output: black with `fragment_alpha`.
pub fn fragment_color(frag_coord: Vec2, resolution: Resolution) -> Vec4 {
    Vec3::ZERO.extend(fragment_alpha(frag_coord, resolution))
}

/// Standard alpha blending of the black vignette over `dst`. The fragment
/// output is clamped to `[0, 1]` before blending on normalised targets.
pub fn composite_over(dst: Vec3, alpha: f32) -> Vec3 {
    dst * (1.0 - alpha.clamp(0.0, 1.0))
}

/// Store a channel into an 8-bit normalised target.
pub fn to_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Rasterise the alpha mask for a `width`×`height` target, sampling at pixel
/// centres. Row-major, top row first.
pub fn render_mask(width: u32, height: u32) -> Vec<f32> {
    let resolution = Resolution::from_physical(width, height);
    let mut mask = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            mask.push(fragment_alpha(frag, resolution));
        }
    }
    mask
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const R: Resolution = Resolution::new(800.0, 600.0);

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    // --- Vertex stage ---------------------------------------------------------

    #[test]
    fn vertex_stage_appends_w_one() {
        assert_eq!(
            vertex_stage(Vec3::new(-1.0, 0.5, 0.25)),
            Vec4::new(-1.0, 0.5, 0.25, 1.0)
        );
    }

    // --- Fragment stage -------------------------------------------------------

    #[test]
    fn centre_of_800x600() {
        // uv = (0.5, 0.5) → uv' = (0.25, 0.25) → 10 * 0.0625 = 0.625
        let uv = R.normalize(Vec2::new(400.0, 300.0));
        assert_eq!(uv, Vec2::splat(0.5));

        let vig = vignette_factor(uv);
        assert!(approx(vig, 0.625f32.powf(0.25), 1e-6), "got {vig}");
        assert!(approx(vig, 0.88914, 1e-4), "got {vig}");

        let a = fragment_alpha(Vec2::new(400.0, 300.0), R);
        assert!(approx(a, 0.21086, 1e-4), "got {a}");
    }

    #[test]
    fn corners_are_fully_dark() {
        for corner in [
            Vec2::new(0.0, 0.0),
            Vec2::new(800.0, 0.0),
            Vec2::new(0.0, 600.0),
            Vec2::new(800.0, 600.0),
        ] {
            let a = fragment_alpha(corner, R);
            assert!(approx(a, 1.1, 1e-6), "corner {corner}: alpha {a}");
            assert_eq!(to_unorm8(a), 255, "corner {corner}");
        }
    }

    #[test]
    fn edges_are_fully_dark() {
        assert!(approx(fragment_alpha(Vec2::new(0.0, 300.0), R), 1.1, 1e-6));
        assert!(approx(fragment_alpha(Vec2::new(400.0, 600.0), R), 1.1, 1e-6));
    }

    #[test]
    fn symmetric_under_axis_swap() {
        let swapped = R.swapped();
        for (x, y) in [(13.0, 77.0), (400.0, 10.0), (799.0, 599.0), (250.5, 333.3)] {
            let a = fragment_alpha(Vec2::new(x, y), R);
            let b = fragment_alpha(Vec2::new(y, x), swapped);
            assert!(approx(a, b, 1e-6), "({x}, {y}): {a} vs {b}");
        }
    }

    #[test]
    fn alpha_strictly_decreases_toward_centre() {
        let centre = Vec2::new(400.0, 300.0);
        let starts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 150.0),
            Vec2::new(800.0, 420.0),
            Vec2::new(620.0, 0.0),
            Vec2::new(100.0, 600.0),
        ];
        for start in starts {
            let mut prev = fragment_alpha(start, R);
            for step in 1..=64 {
                let t = step as f32 / 64.0;
                let a = fragment_alpha(start.lerp(centre, t), R);
                assert!(a < prev, "from {start} at t={t}: {a} !< {prev}");
                prev = a;
            }
        }
    }

    #[test]
    fn alpha_decreases_from_every_edge_pixel() {
        let centre = Vec2::new(400.0, 300.0);
        let top_bottom = (0..=800).step_by(4).flat_map(|x| {
            let x = x as f32;
            [Vec2::new(x, 0.0), Vec2::new(x, 600.0)]
        });
        let left_right = (0..=600).step_by(4).flat_map(|y| {
            let y = y as f32;
            [Vec2::new(0.0, y), Vec2::new(800.0, y)]
        });
        for start in top_bottom.chain(left_right) {
            let mut prev = fragment_alpha(start, R);
            assert!(approx(prev, 1.1, 1e-6), "edge {start}: {prev}");
            for step in 1..=256 {
                let t = step as f32 / 256.0;
                let a = fragment_alpha(start.lerp(centre, t), R);
                assert!(a < prev, "from {start} at t={t}: {a} !< {prev}");
                prev = a;
            }
            assert!(approx(prev, 0.21086, 1e-4), "from {start}: ended at {prev}");
        }
    }

    #[test]
    fn rgb_is_always_black() {
        for frag in [
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(123.0, 456.0),
            Vec2::new(-50.0, 900.0),
        ] {
            assert_eq!(fragment_color(frag, R).truncate(), Vec3::ZERO);
        }
        // Even with a degenerate resolution the colour channels stay zero.
        let c = fragment_color(Vec2::new(10.0, 10.0), Resolution::new(0.0, 0.0));
        assert_eq!(c.truncate(), Vec3::ZERO);
    }

    #[test]
    fn zero_resolution_is_not_guarded() {
        let a = fragment_alpha(Vec2::new(0.0, 0.0), Resolution::new(0.0, 0.0));
        assert!(a.is_nan());
    }

    // --- Compositing ----------------------------------------------------------

    #[test]
    fn composite_clamps_alpha() {
        let white = Vec3::ONE;
        assert_eq!(composite_over(white, 1.1), Vec3::ZERO);
        assert_eq!(composite_over(white, -0.3), white);
        let half = composite_over(white, 0.5);
        assert!(approx(half.x, 0.5, 1e-6));
    }

    #[test]
    fn unorm8_rounds_and_clamps() {
        assert_eq!(to_unorm8(0.0), 0);
        assert_eq!(to_unorm8(1.0), 255);
        assert_eq!(to_unorm8(1.1), 255);
        assert_eq!(to_unorm8(-0.2), 0);
        assert_eq!(to_unorm8(0.5), 128);
    }

    // --- Mask -----------------------------------------------------------------

    #[test]
    fn mask_has_one_sample_per_pixel() {
        assert_eq!(render_mask(64, 32).len(), 64 * 32);
        assert!(render_mask(0, 10).is_empty());
    }

    #[test]
    fn mask_is_darker_at_corners_than_centre() {
        let (w, h) = (64u32, 48u32);
        let mask = render_mask(w, h);
        let at = |x: u32, y: u32| mask[(y * w + x) as usize];
        let centre = at(w / 2, h / 2);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert!(at(x, y) > centre, "corner ({x}, {y})");
            assert!(at(x, y) > 0.9);
        }
        assert!(centre < 0.25);
    }

    #[test]
    fn mask_is_mirror_symmetric() {
        let (w, h) = (40u32, 30u32);
        let mask = render_mask(w, h);
        for y in 0..h {
            for x in 0..w {
                let a = mask[(y * w + x) as usize];
                let b = mask[(y * w + (w - 1 - x)) as usize];
                let c = mask[((h - 1 - y) * w + x) as usize];
                assert!(approx(a, b, 1e-5) && approx(a, c, 1e-5), "({x}, {y})");
            }
        }
    }
}
