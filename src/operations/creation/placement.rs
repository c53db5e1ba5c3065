use crate::error::{GeometryError, Result};

/// Limits applied when scattering solids over the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConstraint {
    min_distance: f64,
    max_attempts: usize,
    min_size: f64,
    max_size: f64,
    max_sphere_radius: f64,
    extent: f64,
}

impl Default for PlacementConstraint {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_attempts: 50,
            min_size: 1.0,
            max_size: 3.0,
            max_sphere_radius: 2.5,
            extent: 10.0,
        }
    }
}

impl PlacementConstraint {
    /// Creates a new constraint.
    ///
    /// The sphere radius bound is set three quarters of the way from
    /// `min_size` to `max_size`, and the placement area keeps its default
    /// extent; use [`with_max_sphere_radius`](Self::with_max_sphere_radius)
    /// and [`with_extent`](Self::with_extent) to change them.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_distance` is negative, `max_attempts` is zero,
    /// `min_size` is not positive, or `max_size < min_size`.
    pub fn new(min_distance: f64, max_attempts: usize, min_size: f64, max_size: f64) -> Result<Self> {
        if !(min_distance >= 0.0 && min_distance.is_finite()) {
            return Err(invalid("min_distance", min_distance));
        }
        if max_attempts == 0 {
            return Err(invalid("max_attempts", 0.0));
        }
        if !(min_size > 0.0 && min_size.is_finite()) {
            return Err(invalid("min_size", min_size));
        }
        if !(max_size >= min_size && max_size.is_finite()) {
            return Err(invalid("max_size", max_size));
        }

        Ok(Self {
            min_distance,
            max_attempts,
            min_size,
            max_size,
            max_sphere_radius: min_size + 0.75 * (max_size - min_size),
            extent: Self::default().extent,
        })
    }

    /// Sets the side length of the square placement area centered on the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `extent` is not positive.
    pub fn with_extent(mut self, extent: f64) -> Result<Self> {
        if !(extent > 0.0 && extent.is_finite()) {
            return Err(invalid("extent", extent));
        }
        self.extent = extent;
        Ok(self)
    }

    /// Sets the upper bound for sphere radii.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound lies outside `[min_size, max_size]`.
    pub fn with_max_sphere_radius(mut self, radius: f64) -> Result<Self> {
        if !(radius >= self.min_size && radius <= self.max_size) {
            return Err(invalid("max_sphere_radius", radius));
        }
        self.max_sphere_radius = radius;
        Ok(self)
    }

    /// Minimum horizontal distance between any two solid centers.
    #[must_use]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Position draws allowed per solid before it is skipped.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    #[must_use]
    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    #[must_use]
    pub fn max_sphere_radius(&self) -> f64 {
        self.max_sphere_radius
    }

    /// Side length of the square placement area.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }
}

fn invalid(parameter: &'static str, value: f64) -> crate::error::GeosceneError {
    GeometryError::InvalidParameter { parameter, value }.into()
}
