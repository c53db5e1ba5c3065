use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::Shape;
use crate::scene::{SceneStore, SolidId};

/// Computes the volume of a solid from its shape parameters.
///
/// Cylinders use `pi * radius_top^2 * height` regardless of the bottom
/// radius, so a frustum reports the volume of a straight cylinder with its
/// top radius.
pub struct Volume {
    solid: SolidId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &SceneStore) -> Result<f64> {
        let solid = store.solid(self.solid)?;
        Ok(Self::of(&solid.shape))
    }

    /// Volume of a bare shape.
    #[must_use]
    pub fn of(shape: &Shape) -> f64 {
        match *shape {
            Shape::Box {
                width,
                height,
                depth,
            } => width * height * depth,
            Shape::Cone { radius, height } => (1.0 / 3.0) * PI * radius.powi(2) * height,
            Shape::Cylinder {
                radius_top, height, ..
            } => PI * radius_top.powi(2) * height,
            Shape::Sphere { radius } => (4.0 / 3.0) * PI * radius.powi(3),
        }
    }
}
