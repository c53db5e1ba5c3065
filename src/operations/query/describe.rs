use std::fmt;

use crate::geometry::{Color, Shape, ShapeKind};
use crate::scene::{SceneStore, SolidId};

use super::Volume;

/// Geometric properties of a solid, ready for display.
///
/// The `Display` impl renders the info panel text: figure name, color,
/// dimensions and volume, two decimals, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidProperties {
    pub kind: ShapeKind,
    pub color: Color,
    pub shape: Shape,
    pub volume: f64,
}

impl SolidProperties {
    /// The raw shape parameters, labelled.
    #[must_use]
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self.shape {
            Shape::Box {
                width,
                height,
                depth,
            } => vec![("Width", width), ("Height", height), ("Depth", depth)],
            Shape::Cone { radius, height } => vec![("Base radius", radius), ("Height", height)],
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => vec![
                ("Radius", radius_top),
                ("Bottom radius", radius_bottom),
                ("Height", height),
            ],
            Shape::Sphere { radius } => vec![("Radius", radius)],
        }
    }
}

impl fmt::Display for SolidProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Geometric figure: {}", self.kind)?;
        writeln!(f, "Color: #{:x}", self.color)?;
        match self.shape {
            Shape::Box {
                width,
                height,
                depth,
            } => writeln!(f, "Dimensions: {width:.2}cm × {height:.2}cm × {depth:.2}cm")?,
            Shape::Cone { radius, height } => {
                writeln!(f, "Base radius: {radius:.2}cm")?;
                writeln!(f, "Height: {height:.2}cm")?;
            }
            Shape::Cylinder {
                radius_top, height, ..
            } => {
                writeln!(f, "Radius: {radius_top:.2}cm")?;
                writeln!(f, "Height: {height:.2}cm")?;
            }
            Shape::Sphere { radius } => writeln!(f, "Radius: {radius:.2}cm")?,
        }
        write!(f, "Volume: {:.2}cm³", self.volume)
    }
}

/// Derives the displayable properties of a solid.
///
/// Yields nothing for a handle that does not resolve, e.g. one kept from a
/// scene that has since been regenerated.
pub struct Describe {
    solid: SolidId,
}

impl Describe {
    /// Creates a new `Describe` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, store: &SceneStore) -> Option<SolidProperties> {
        let solid = store.solid(self.solid).ok()?;
        Some(SolidProperties {
            kind: solid.shape.kind(),
            color: solid.color,
            shape: solid.shape,
            volume: Volume::of(&solid.shape),
        })
    }
}
