use crate::geometry::Shape;
use crate::math::{Point3, Vector3};
use crate::scene::SolidData;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Size along each axis.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the box enclosing a solid at its current position.
    #[must_use]
    pub fn of(solid: &SolidData) -> Self {
        let half = match solid.shape {
            Shape::Sphere { radius } => Vector3::new(radius, radius, radius),
            Shape::Box {
                width,
                height,
                depth,
            } => Vector3::new(width, height, depth) / 2.0,
            Shape::Cone { radius, height } => Vector3::new(radius, height / 2.0, radius),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                let r = radius_top.max(radius_bottom);
                Vector3::new(r, height / 2.0, r)
            }
        };
        Self {
            min: solid.position - half,
            max: solid.position + half,
        }
    }
}
