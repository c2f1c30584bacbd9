pub mod aabb;

pub use glam::{DVec2, DVec3, DVec4, DMat3, DMat4};
pub use aabb::Aabb3;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
