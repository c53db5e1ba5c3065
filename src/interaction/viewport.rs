use crate::math::Point2;

/// Pixel size of the surface the scene is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Converts a pointer position in pixels (origin top-left, +y down) to
    /// normalized device coordinates (origin center, +y up).
    #[must_use]
    pub fn to_ndc(&self, client_x: f64, client_y: f64) -> Point2 {
        Point2::new(
            (client_x / self.width) * 2.0 - 1.0,
            -(client_y / self.height) * 2.0 + 1.0,
        )
    }
}
