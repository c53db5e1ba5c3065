use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// A half-line `origin + t * dir` with `t >= 0` and a unit-length `dir`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Point3,
    dir: Vector3,
}

impl Ray {
    /// Creates a new ray. The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is zero-length or not finite.
    pub fn new(origin: Point3, dir: Vector3) -> Result<Self> {
        let len = dir.norm();
        if !(len >= TOLERANCE && len.is_finite()) {
            return Err(GeometryError::InvalidParameter {
                parameter: "ray direction length",
                value: len,
            }
            .into());
        }
        Ok(Self {
            origin,
            dir: dir / len,
        })
    }

    /// Returns the ray origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction.
    #[must_use]
    pub fn dir(&self) -> &Vector3 {
        &self.dir
    }

    /// Evaluates the ray at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.dir * t
    }
}

/// Nearest non-negative parameter where the ray enters a sphere.
#[must_use]
pub fn ray_sphere(ray: &Ray, center: &Point3, radius: f64) -> Option<f64> {
    let dp = ray.origin - center;
    let a = ray.dir.dot(&ray.dir);
    let b = 2.0 * dp.dot(&ray.dir);
    let c = dp.dot(&dp) - radius * radius;

    nearest_forward(&quadratic_roots(a, b, c))
}

/// Nearest non-negative parameter where the ray enters an axis-aligned box.
///
/// Slab method. Returns `Some(0.0)` when the origin is already inside.
#[must_use]
pub fn ray_aabb(ray: &Ray, min: &Point3, max: &Point3) -> Option<f64> {
    let mut t_enter = 0.0_f64;
    let mut t_exit = f64::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        if d.abs() < TOLERANCE {
            // Parallel to this slab: must already be between its planes.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let t0 = (min[axis] - o) / d;
        let t1 = (max[axis] - o) / d;
        let (near, far) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        t_enter = t_enter.max(near);
        t_exit = t_exit.min(far);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(t_enter)
}

/// Nearest non-negative parameter where the ray hits a capped frustum
/// standing upright on `base` (its bottom cap center).
///
/// The radius varies linearly from `radius_bottom` at `base.y` to `radius_top`
/// at `base.y + height`. A cone is `radius_top == 0`, a cylinder has equal radii.
#[must_use]
pub fn ray_vertical_frustum(
    ray: &Ray,
    base: &Point3,
    radius_bottom: f64,
    radius_top: f64,
    height: f64,
) -> Option<f64> {
    if height < TOLERANCE {
        return None;
    }

    let ox = ray.origin.x - base.x;
    let oy = ray.origin.y - base.y;
    let oz = ray.origin.z - base.z;
    let (dx, dy, dz) = (ray.dir.x, ray.dir.y, ray.dir.z);

    // Radius along the ray: r(t) = (rb + k*oy) + k*dy*t
    let k = (radius_top - radius_bottom) / height;
    let r0 = radius_bottom + k * oy;
    let r1 = k * dy;

    // (ox + t dx)^2 + (oz + t dz)^2 = r(t)^2
    let a = dx * dx + dz * dz - r1 * r1;
    let b = 2.0 * (ox * dx + oz * dz - r0 * r1);
    let c = ox * ox + oz * oz - r0 * r0;

    let mut candidates: Vec<f64> = quadratic_roots(a, b, c)
        .into_iter()
        .filter(|&t| {
            let y = oy + t * dy;
            y >= -TOLERANCE && y <= height + TOLERANCE && r0 + r1 * t >= -TOLERANCE
        })
        .collect();

    if dy.abs() > TOLERANCE {
        for (cap_y, cap_r) in [(0.0, radius_bottom), (height, radius_top)] {
            let t = (cap_y - oy) / dy;
            let px = ox + t * dx;
            let pz = oz + t * dz;
            if px * px + pz * pz <= cap_r * cap_r + TOLERANCE {
                candidates.push(t);
            }
        }
    }

    nearest_forward(&candidates)
}

/// Real roots of `a*t^2 + b*t + c = 0`, falling back to the linear case.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < TOLERANCE {
        if b.abs() < TOLERANCE {
            return vec![];
        }
        return vec![-c / b];
    }

    let disc = b * b - 4.0 * a * c;
    if disc < -TOLERANCE {
        return vec![];
    }
    let sq = disc.max(0.0).sqrt();
    vec![(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)]
}

fn nearest_forward(ts: &[f64]) -> Option<f64> {
    ts.iter()
        .copied()
        .filter(|&t| t >= -TOLERANCE)
        .map(|t| t.max(0.0))
        .reduce(f64::min)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn down_from(x: f64, z: f64) -> Ray {
        Ray::new(p(x, 10.0, z), -Vector3::y()).unwrap()
    }

    #[test]
    fn zero_direction_fails() {
        assert!(Ray::new(p(0.0, 0.0, 0.0), Vector3::zeros()).is_err());
    }

    #[test]
    fn nan_direction_fails() {
        assert!(Ray::new(p(0.0, 0.0, 0.0), Vector3::new(f64::NAN, 0.0, -1.0)).is_err());
        assert!(Ray::new(p(0.0, 0.0, 0.0), Vector3::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(p(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 5.0)).unwrap();
        assert!((ray.dir().norm() - 1.0).abs() < TOL);
        assert!((ray.at(2.0).z - 2.0).abs() < TOL);
    }

    #[test]
    fn sphere_front_hit() {
        let ray = Ray::new(p(0.0, 1.0, 10.0), -Vector3::z()).unwrap();
        let t = ray_sphere(&ray, &p(0.0, 1.0, 0.0), 1.0).unwrap();
        assert!((t - 9.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn sphere_miss() {
        let ray = Ray::new(p(5.0, 1.0, 10.0), -Vector3::z()).unwrap();
        assert!(ray_sphere(&ray, &p(0.0, 1.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn sphere_behind_is_ignored() {
        let ray = Ray::new(p(0.0, 1.0, 10.0), Vector3::z()).unwrap();
        assert!(ray_sphere(&ray, &p(0.0, 1.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn aabb_top_face() {
        let t = ray_aabb(&down_from(0.5, 0.5), &p(0.0, 0.0, 0.0), &p(1.0, 2.0, 1.0)).unwrap();
        assert!((t - 8.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn aabb_parallel_outside_misses() {
        assert!(ray_aabb(&down_from(3.0, 0.5), &p(0.0, 0.0, 0.0), &p(1.0, 2.0, 1.0)).is_none());
    }

    #[test]
    fn aabb_origin_inside() {
        let ray = Ray::new(p(0.5, 0.5, 0.5), Vector3::x()).unwrap();
        let t = ray_aabb(&ray, &p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0)).unwrap();
        assert!(t.abs() < TOL);
    }

    #[test]
    fn cylinder_side_hit() {
        // Horizontal ray at mid height toward a unit-radius cylinder.
        let ray = Ray::new(p(-10.0, 1.0, 0.0), Vector3::x()).unwrap();
        let t = ray_vertical_frustum(&ray, &p(0.0, 0.0, 0.0), 1.0, 1.0, 2.0).unwrap();
        assert!((t - 9.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn cylinder_top_cap_hit() {
        let t = ray_vertical_frustum(&down_from(0.2, 0.2), &p(0.0, 0.0, 0.0), 1.0, 1.0, 2.0)
            .unwrap();
        assert!((t - 8.0).abs() < TOL, "t={t}");
    }

    #[test]
    fn cylinder_above_top_misses() {
        let ray = Ray::new(p(-10.0, 3.0, 0.0), Vector3::x()).unwrap();
        assert!(ray_vertical_frustum(&ray, &p(0.0, 0.0, 0.0), 1.0, 1.0, 2.0).is_none());
    }

    #[test]
    fn cone_narrows_toward_apex() {
        // At y = 1.5 on a cone of base radius 2 and height 2, radius is 0.5.
        let base = p(0.0, 0.0, 0.0);
        let ray = Ray::new(p(-10.0, 1.5, 0.0), Vector3::x()).unwrap();
        let t = ray_vertical_frustum(&ray, &base, 2.0, 0.0, 2.0).unwrap();
        assert!((t - 9.5).abs() < 1e-6, "t={t}");

        let miss = Ray::new(p(-10.0, 1.5, 0.8), Vector3::x()).unwrap();
        assert!(ray_vertical_frustum(&miss, &base, 2.0, 0.0, 2.0).is_none());
    }

    #[test]
    fn cone_apex_from_above() {
        let t = ray_vertical_frustum(&down_from(0.0, 0.0), &p(0.0, 0.0, 0.0), 2.0, 0.0, 2.0)
            .unwrap();
        assert!((t - 8.0).abs() < 1e-6, "t={t}");
    }

    #[test]
    fn quadratic_linear_fallback() {
        let roots = quadratic_roots(0.0, 2.0, -4.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 2.0).abs() < TOL);
    }
}
