use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for &p in rest {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![
            dvec3(1.0, 2.0, 3.0),
            dvec3(-1.0, 5.0, 0.0),
            dvec3(3.0, -1.0, 2.0),
        ];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_center_and_extents() {
        let aabb = Aabb3::new(dvec3(-2.0, 0.0, 0.0), dvec3(2.0, 4.0, 1.0));
        assert_relative_eq!(aabb.center().x, 0.0);
        assert_relative_eq!(aabb.center().y, 2.0);
        assert_relative_eq!(aabb.extents().x, 4.0);
        assert_relative_eq!(aabb.extents().z, 1.0);
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(dvec3(0.5, 0.5, 0.5)));
        assert!(!aabb.contains_point(dvec3(1.5, 0.5, 0.5)));
    }

    #[test]
    fn test_merge() {
        let a = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0));
        let b = Aabb3::new(dvec3(-1.0, 0.5, 0.0), dvec3(0.5, 2.0, 1.0));
        let merged = a.merge(&b);
        assert_eq!(merged.min, dvec3(-1.0, 0.0, 0.0));
        assert_eq!(merged.max, dvec3(1.0, 2.0, 1.0));
    }
}
