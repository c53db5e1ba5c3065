use crate::geometry::{Color, Shape};
use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the scene store.
    pub struct SolidId;
}

/// Data associated with one solid in the scene.
///
/// `position` is the center of the shape. At rest the shape's base touches
/// the ground plane, i.e. `position.y == shape.half_height()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidData {
    /// Shape parameters.
    pub shape: Shape,
    /// Center of the shape in world space.
    pub position: Point3,
    /// Surface color.
    pub color: Color,
    /// Whether the solid casts shadows onto others and the ground.
    pub casts_shadow: bool,
    /// Whether shadows from other solids fall onto this one.
    pub receives_shadow: bool,
}

impl SolidData {
    /// Creates a solid resting on the ground at horizontal position `(x, z)`.
    ///
    /// Shadow casting and receiving are both enabled.
    #[must_use]
    pub fn resting(shape: Shape, x: f64, z: f64, color: Color) -> Self {
        Self {
            shape,
            position: Point3::new(x, shape.half_height(), z),
            color,
            casts_shadow: true,
            receives_shadow: true,
        }
    }

    /// The `position.y` at which this solid sits on the ground.
    #[must_use]
    pub fn rest_height(&self) -> f64 {
        self.shape.half_height()
    }

    /// The `y` coordinate of the solid's lowest point.
    #[must_use]
    pub fn lowest_y(&self) -> f64 {
        self.position.y - self.shape.half_height()
    }

    /// The `y` coordinate of the solid's highest point.
    #[must_use]
    pub fn highest_y(&self) -> f64 {
        self.position.y + self.shape.half_height()
    }
}
