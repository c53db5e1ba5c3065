mod color;
mod shape;

pub use color::Color;
pub use shape::{Shape, ShapeKind};
