pub mod asset;
pub mod convert;
pub mod error;
pub mod loader;
pub mod render_data;
pub mod strip;
pub mod versions;

/// Hard cap on UV channels per LOD; exceeding it is a format violation.
pub const MAX_MESH_UV_SETS: usize = 8;

pub use asset::{DecodeStatus, StaticMeshAsset, StaticMeshSlot};
pub use convert::convert;
pub use error::{MeshError, Result};
pub use loader::load_static_mesh;
