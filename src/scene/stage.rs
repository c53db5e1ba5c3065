use crate::error::{GeometryError, Result};
use crate::geometry::Color;
use crate::math::ray::Ray;
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// A perspective camera.
///
/// `fov_y_degrees` is the full vertical field of view; `aspect` is
/// viewport width over height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub target: Point3,
    pub up: Vector3,
    pub fov_y_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(5.0, 5.0, 10.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov_y_degrees: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Sets the aspect ratio from a viewport size in pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if height > TOLERANCE {
            self.aspect = width / height;
        }
    }

    /// Builds the picking ray through a point in normalized device coordinates.
    ///
    /// `(0, 0)` is the view center, `(±1, ±1)` the viewport corners, +y up.
    ///
    /// # Errors
    ///
    /// Returns an error if `ndc` is not finite, or if the camera looks at its
    /// own position or along `up`.
    pub fn ray_through(&self, ndc: &Point2) -> Result<Ray> {
        for (parameter, value) in [("ndc.x", ndc.x), ("ndc.y", ndc.y)] {
            if !value.is_finite() {
                return Err(GeometryError::InvalidParameter { parameter, value }.into());
            }
        }

        let view = self.target - self.position;
        let view_len = view.norm();
        if view_len < TOLERANCE {
            return Err(GeometryError::InvalidParameter {
                parameter: "camera view distance",
                value: view_len,
            }
            .into());
        }
        let forward = view / view_len;

        let right = forward.cross(&self.up);
        let right_len = right.norm();
        if right_len < TOLERANCE {
            return Err(GeometryError::InvalidParameter {
                parameter: "camera up/forward separation",
                value: right_len,
            }
            .into());
        }
        let right = right / right_len;
        let true_up = right.cross(&forward);

        let half_tan = (self.fov_y_degrees.to_radians() / 2.0).tan();
        let dir = forward
            + right * (ndc.x * half_tan * self.aspect)
            + true_up * (ndc.y * half_tan);

        Ray::new(self.position, dir)
    }
}

/// The square ground plane the solids stand on, centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub size: f64,
    pub color: Color,
    pub receives_shadow: bool,
}

/// A shadow-casting directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f64,
    pub position: Point3,
    pub casts_shadow: bool,
    /// Shadow map resolution in texels per side.
    pub shadow_map_size: u32,
    /// Half-size of the orthographic shadow frustum.
    pub shadow_extent: f64,
}

/// Fixed stage the rendering collaborator builds once: background, ground,
/// camera, and lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSetup {
    pub background: Color,
    pub ground: GroundPlane,
    pub camera: Camera,
    pub light: DirectionalLight,
    pub ambient: Color,
}

impl Default for StageSetup {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x00ee_eeee),
            ground: GroundPlane {
                size: 18.0,
                color: Color::from_hex(0x00aa_aaaa),
                receives_shadow: true,
            },
            camera: Camera::default(),
            light: DirectionalLight {
                color: Color::from_hex(0x00ff_ffff),
                intensity: 1.0,
                position: Point3::new(5.0, 10.0, 5.0),
                casts_shadow: true,
                shadow_map_size: 1024,
                shadow_extent: 10.0,
            },
            ambient: Color::from_hex(0x0040_4040),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::default();
        let ray = camera.ray_through(&Point2::origin()).unwrap();
        let expected = (camera.target - camera.position).normalize();
        assert_relative_eq!(*ray.dir(), expected, epsilon = 1e-12);
        assert_relative_eq!(*ray.origin(), camera.position);
    }

    #[test]
    fn top_edge_ray_spans_half_fov() {
        let camera = Camera {
            position: Point3::new(0.0, 0.0, 10.0),
            target: Point3::origin(),
            fov_y_degrees: 90.0,
            ..Camera::default()
        };
        let ray = camera.ray_through(&Point2::new(0.0, 1.0)).unwrap();
        // 45 degrees up from the view direction (-z).
        let angle = ray.dir().angle(&-Vector3::z());
        assert_relative_eq!(angle, std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        assert!(ray.dir().y > 0.0);
    }

    #[test]
    fn right_edge_ray_uses_aspect() {
        let mut camera = Camera {
            position: Point3::new(0.0, 0.0, 10.0),
            target: Point3::origin(),
            fov_y_degrees: 90.0,
            ..Camera::default()
        };
        camera.set_viewport(200.0, 100.0);
        let ray = camera.ray_through(&Point2::new(1.0, 0.0)).unwrap();
        // tan(45) * 2 = 2 units right per unit forward.
        assert_relative_eq!(ray.dir().x / -ray.dir().z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_camera_fails() {
        let camera = Camera {
            target: Camera::default().position,
            ..Camera::default()
        };
        assert!(camera.ray_through(&Point2::origin()).is_err());

        let looking_up = Camera {
            position: Point3::origin(),
            target: Point3::new(0.0, 5.0, 0.0),
            ..Camera::default()
        };
        assert!(looking_up.ray_through(&Point2::origin()).is_err());
    }

    #[test]
    fn zero_height_viewport_keeps_aspect() {
        let mut camera = Camera::default();
        camera.set_viewport(640.0, 0.0);
        assert_relative_eq!(camera.aspect, 1.0);
    }

    #[test]
    fn non_finite_ndc_is_rejected() {
        let camera = Camera::default();
        assert!(camera.ray_through(&Point2::new(f64::NAN, 0.0)).is_err());
        assert!(camera.ray_through(&Point2::new(0.0, f64::NEG_INFINITY)).is_err());
    }
}
