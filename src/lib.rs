pub mod animation;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod lifecycle;
pub mod math;
pub mod operations;
pub mod scene;

pub use error::{GeosceneError, Result};
