pub mod mesh;
pub mod off;

pub use mesh::TriangleMesh;
pub use off::{read_off, OffMesh};
