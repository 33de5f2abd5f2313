/// Per-vertex input of the vignette pass: a position already in NDC.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// The four corners of clip space.
pub const FULLSCREEN_QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new(-1.0, -1.0, 0.0),
    Vertex::new(-1.0, 1.0, 0.0),
    Vertex::new(1.0, 1.0, 0.0),
    Vertex::new(1.0, -1.0, 0.0),
];

/// Two triangles over `FULLSCREEN_QUAD_VERTICES` covering the viewport.
pub const FULLSCREEN_QUAD_INDICES: [u16; 6] = [0, 2, 1, 0, 3, 2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_three_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
    }

    #[test]
    fn quad_indices_stay_in_bounds() {
        for i in FULLSCREEN_QUAD_INDICES {
            assert!((i as usize) < FULLSCREEN_QUAD_VERTICES.len(), "index {i} out of range");
        }
        assert_eq!(FULLSCREEN_QUAD_INDICES.len() % 3, 0);
    }

    #[test]
    fn quad_covers_all_four_ndc_corners() {
        for corner in [[-1.0, -1.0], [-1.0, 1.0], [1.0, 1.0], [1.0, -1.0]] {
            assert!(
                FULLSCREEN_QUAD_VERTICES
                    .iter()
                    .any(|v| v.position[0] == corner[0] && v.position[1] == corner[1]),
                "missing corner {corner:?}"
            );
        }
    }

    #[test]
    fn quad_triangles_share_the_diagonal() {
        // Triangles (0,2,1) and (0,3,2) meet along the 0–2 diagonal.
        let (a, b) = FULLSCREEN_QUAD_INDICES.split_at(3);
        let shared: Vec<_> = a.iter().filter(|i| b.contains(*i)).collect();
        assert_eq!(shared, vec![&0u16, &2u16]);
    }
}
