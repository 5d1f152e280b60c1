pub mod aabb;
pub mod ortho;
pub mod transform;

pub use glam::{DMat4, DVec2, DVec3, DVec4};
pub use aabb::Aabb3;
pub use ortho::Ortho2;
pub use transform::Transform;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
