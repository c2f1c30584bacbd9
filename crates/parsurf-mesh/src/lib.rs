pub mod buffer;
pub mod normal;
pub mod tessellator;

pub use buffer::MeshBuffer;
pub use normal::estimate_normal;
pub use tessellator::{tessellate_flat, tessellate_flat_parallel, FlatTessellation};
