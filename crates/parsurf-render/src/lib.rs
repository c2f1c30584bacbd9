pub mod pipeline;

pub use pipeline::{prepare_mesh, split_streams, GpuVertex, RenderMesh, VertexStreams};
