use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, GeosceneError, Result};
use crate::math::TOLERANCE;

/// The closed set of solid kinds a scene can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Box,
    Cone,
    Cylinder,
}

impl ShapeKind {
    /// All kinds, in the order the generator samples from.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Sphere,
        ShapeKind::Box,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
    ];

    /// Human-readable figure name used by the info panel.
    #[must_use]
    pub fn figure_name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Box => "Rectangular prism",
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.figure_name())
    }
}

impl FromStr for ShapeKind {
    type Err = GeosceneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(ShapeKind::Sphere),
            "box" | "rectangular prism" => Ok(ShapeKind::Box),
            "cone" => Ok(ShapeKind::Cone),
            "cylinder" => Ok(ShapeKind::Cylinder),
            _ => Err(GeometryError::UnknownShapeKind(s.to_owned()).into()),
        }
    }
}

/// Shape parameters of a solid.
///
/// Every shape stands upright along +Y with its center at the solid's
/// position, so its lowest point is `half_height()` below that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f64,
    },
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    Cone {
        radius: f64,
        height: f64,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
    },
}

impl Shape {
    /// Creates a sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn sphere(radius: f64) -> Result<Self> {
        positive("radius", radius)?;
        Ok(Shape::Sphere { radius })
    }

    /// Creates an axis-aligned box.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is not positive.
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Result<Self> {
        positive("width", width)?;
        positive("height", height)?;
        positive("depth", depth)?;
        Ok(Shape::Box {
            width,
            height,
            depth,
        })
    }

    /// Creates an upright cone with its apex on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive.
    pub fn cone(radius: f64, height: f64) -> Result<Self> {
        positive("radius", radius)?;
        positive("height", height)?;
        Ok(Shape::Cone { radius, height })
    }

    /// Creates an upright cylinder. Unequal radii give a frustum.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is negative, both radii are zero, or
    /// the height is not positive.
    pub fn cylinder(radius_top: f64, radius_bottom: f64, height: f64) -> Result<Self> {
        non_negative("radius_top", radius_top)?;
        non_negative("radius_bottom", radius_bottom)?;
        positive("radius_top + radius_bottom", radius_top + radius_bottom)?;
        positive("height", height)?;
        Ok(Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        })
    }

    /// Returns the kind tag of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Cone { .. } => ShapeKind::Cone,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
        }
    }

    /// Full vertical extent of the shape.
    ///
    /// A sphere's effective height is its diameter.
    #[must_use]
    pub fn height(&self) -> f64 {
        match *self {
            Shape::Sphere { radius } => radius * 2.0,
            Shape::Box { height, .. }
            | Shape::Cone { height, .. }
            | Shape::Cylinder { height, .. } => height,
        }
    }

    /// Distance from the shape's center down to its lowest point.
    ///
    /// This is the rest height: a solid whose `position.y` equals it touches
    /// the ground plane at `y = 0`.
    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.height() / 2.0
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > TOLERANCE {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter { parameter, value }.into())
    }
}

fn non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter { parameter, value }.into())
    }
}
