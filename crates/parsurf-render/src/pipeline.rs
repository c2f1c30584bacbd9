use parsurf_math::{Point2, Point3, Vector3};
use parsurf_mesh::MeshBuffer;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Create a GPU vertex from mesh vertex data.
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3, uv: Point2) -> Self {
        Self {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
            uv: [uv.x as f32, uv.y as f32],
        }
    }

    /// Convert vertex array to raw bytes for GPU upload.
    pub fn as_bytes(vertices: &[GpuVertex]) -> Vec<u8> {
        let size = std::mem::size_of::<GpuVertex>() * vertices.len();
        let mut bytes = Vec::with_capacity(size);
        unsafe {
            let ptr = vertices.as_ptr() as *const u8;
            bytes.extend_from_slice(std::slice::from_raw_parts(ptr, size));
        }
        bytes
    }
}

/// Interleaved render data for a non-indexed triangle-list draw.
///
/// There is no index buffer; the draw call covers `vertices.len()`
/// vertices in stream order.
#[derive(Debug, Clone)]
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub vertex_buffer_bytes: Vec<u8>,
}

impl RenderMesh {
    /// Number of vertices the draw call must cover.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Convert a MeshBuffer to interleaved GPU-ready buffers.
pub fn prepare_mesh(buffer: &MeshBuffer) -> RenderMesh {
    let vertex_count = buffer.positions.len();
    let mut vertices = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let pos = buffer.positions[i];
        let normal = buffer.normals.get(i).copied().unwrap_or(Vector3::Z);
        let uv = buffer.uvs.get(i).copied().unwrap_or(Point2::ZERO);
        vertices.push(GpuVertex::from_mesh_vertex(pos, normal, uv));
    }

    let vertex_buffer_bytes = GpuVertex::as_bytes(&vertices);

    RenderMesh {
        vertices,
        vertex_buffer_bytes,
    }
}

/// Separate f32 attribute streams, for backends that upload positions,
/// normals, and texture coordinates to distinct buffers.
#[derive(Debug, Clone, Default)]
pub struct VertexStreams {
    /// Three components per vertex.
    pub positions: Vec<f32>,
    /// Three components per vertex.
    pub normals: Vec<f32>,
    /// Two components per vertex; empty when the mesh carries none.
    pub texcoords: Vec<f32>,
}

impl VertexStreams {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Flatten a MeshBuffer into separate f32 attribute streams.
pub fn split_streams(buffer: &MeshBuffer) -> VertexStreams {
    let mut streams = VertexStreams {
        positions: Vec::with_capacity(buffer.positions.len() * 3),
        normals: Vec::with_capacity(buffer.normals.len() * 3),
        texcoords: Vec::with_capacity(buffer.uvs.len() * 2),
    };

    for p in &buffer.positions {
        streams.positions.extend([p.x as f32, p.y as f32, p.z as f32]);
    }
    for n in &buffer.normals {
        streams.normals.extend([n.x as f32, n.y as f32, n.z as f32]);
    }
    for uv in &buffer.uvs {
        streams.texcoords.extend([uv.x as f32, uv.y as f32]);
    }

    streams
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsurf_math::DVec3;

    fn create_test_buffer() -> MeshBuffer {
        MeshBuffer {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![DVec3::Z, DVec3::Z, DVec3::Z],
            uvs: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
        }
    }

    #[test]
    fn test_gpu_vertex_size() {
        // 3 floats (position) + 3 floats (normal) + 2 floats (uv) = 32 bytes
        assert_eq!(std::mem::size_of::<GpuVertex>(), 32);
    }

    #[test]
    fn test_prepare_mesh_counts() {
        let buffer = create_test_buffer();
        let render_mesh = prepare_mesh(&buffer);
        assert_eq!(render_mesh.vertex_count(), 3);
        // 3 vertices * 32 bytes each
        assert_eq!(render_mesh.vertex_buffer_bytes.len(), 3 * 32);
    }

    #[test]
    fn test_gpu_vertex_from_mesh_vertex() {
        let pos = Point3::new(1.0, 2.0, 3.0);
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let uv = Point2::new(0.5, 0.5);

        let vertex = GpuVertex::from_mesh_vertex(pos, normal, uv);

        assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertex.uv, [0.5, 0.5]);
    }

    #[test]
    fn test_buffer_without_texcoords() {
        let mut buffer = create_test_buffer();
        buffer.uvs.clear();

        let render_mesh = prepare_mesh(&buffer);
        assert_eq!(render_mesh.vertices[0].uv, [0.0, 0.0]);

        let streams = split_streams(&buffer);
        assert!(streams.texcoords.is_empty());
    }

    #[test]
    fn test_split_streams_layout() {
        let buffer = create_test_buffer();
        let streams = split_streams(&buffer);

        assert_eq!(streams.vertex_count(), 3);
        assert_eq!(streams.positions.len(), 9);
        assert_eq!(streams.normals.len(), 9);
        assert_eq!(streams.texcoords.len(), 6);

        assert_eq!(&streams.positions[3..6], &[1.0, 0.0, 0.0]);
        assert_eq!(&streams.normals[0..3], &[0.0, 0.0, 1.0]);
        assert_eq!(&streams.texcoords[2..4], &[1.0, 0.0]);
    }
}
