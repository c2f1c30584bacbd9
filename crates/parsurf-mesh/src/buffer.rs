use parsurf_math::aabb::Aabb3;
use parsurf_math::{Point2, Point3, Vector3};

/// Non-indexed triangle stream with per-vertex attributes.
///
/// Vertices are stored three per triangle in draw order and never shared
/// across triangles; each tessellated grid cell contributes six (two
/// triangles). The stream feeds a triangle-list draw call as-is, with no
/// index buffer.
///
/// `uvs` is empty unless texture coordinates were requested during
/// tessellation; when present it has one entry per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
}

impl MeshBuffer {
    /// Create an empty buffer with pre-sized attribute storage.
    pub fn with_capacity(vertices: usize, texcoords: bool) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: if texcoords {
                Vec::with_capacity(vertices)
            } else {
                Vec::new()
            },
        }
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the buffer.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Whether the buffer carries texture coordinates.
    pub fn has_texcoords(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Append another buffer's vertices after this one's.
    ///
    /// No index fixup is needed since the stream is non-indexed.
    pub fn merge(&mut self, other: &MeshBuffer) {
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsurf_math::DVec3;

    fn single_triangle() -> MeshBuffer {
        MeshBuffer {
            positions: vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![DVec3::Z, DVec3::Z, DVec3::Z],
            uvs: vec![],
        }
    }

    #[test]
    fn test_vertex_and_triangle_count() {
        let buf = single_triangle();
        assert_eq!(buf.vertex_count(), 3);
        assert_eq!(buf.triangle_count(), 1);
        assert!(!buf.has_texcoords());
    }

    #[test]
    fn test_merge() {
        let mut a = single_triangle();
        let b = single_triangle();
        a.merge(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        assert_eq!(a.positions[3], a.positions[0]);
    }

    #[test]
    fn test_bounding_box() {
        let buf = single_triangle();
        let bb = buf.bounding_box();
        assert_eq!(bb.min, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_buffer() {
        let buf = MeshBuffer::default();
        assert_eq!(buf.vertex_count(), 0);
        assert_eq!(buf.triangle_count(), 0);
        let bb = buf.bounding_box();
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.max, DVec3::ZERO);
    }

    #[test]
    fn test_with_capacity_texcoords() {
        let buf = MeshBuffer::with_capacity(12, true);
        assert_eq!(buf.vertex_count(), 0);
        assert!(buf.uvs.capacity() >= 12);
    }
}
