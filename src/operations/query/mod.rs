mod bounding_box;
mod describe;
mod volume;

pub use bounding_box::Aabb;
pub use describe::{Describe, SolidProperties};
pub use volume::Volume;
