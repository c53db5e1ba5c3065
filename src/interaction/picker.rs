use tracing::warn;

use crate::geometry::Shape;
use crate::lifecycle::collaborators::{RayCaster, RayHit};
use crate::math::ray::{ray_aabb, ray_sphere, ray_vertical_frustum, Ray};
use crate::math::{Point2, Vector3};
use crate::operations::query::Aabb;
use crate::scene::{Camera, SceneStore, SolidData};

/// Hit-tests solids against their exact analytic shapes.
///
/// Stands in for an engine's mesh raycaster: spheres, boxes, cones and
/// cylinders are intersected in closed form, after a bounding-box reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticPicker;

impl RayCaster for AnalyticPicker {
    fn intersect(&self, ndc: &Point2, camera: &Camera, store: &SceneStore) -> Vec<RayHit> {
        let ray = match camera.ray_through(ndc) {
            Ok(ray) => ray,
            Err(err) => {
                warn!(%err, "cannot build picking ray");
                return vec![];
            }
        };

        let mut hits: Vec<RayHit> = store
            .iter()
            .filter_map(|(id, solid)| {
                let t = hit_distance(&ray, solid)?;
                Some(RayHit {
                    solid: id,
                    distance: t,
                    point: ray.at(t),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

fn hit_distance(ray: &Ray, solid: &SolidData) -> Option<f64> {
    let bounds = Aabb::of(solid);
    let t_box = ray_aabb(ray, &bounds.min, &bounds.max)?;
    let base = solid.position - Vector3::new(0.0, solid.shape.half_height(), 0.0);

    match solid.shape {
        Shape::Box { .. } => Some(t_box),
        Shape::Sphere { radius } => ray_sphere(ray, &solid.position, radius),
        Shape::Cone { radius, height } => ray_vertical_frustum(ray, &base, radius, 0.0, height),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => ray_vertical_frustum(ray, &base, radius_bottom, radius_top, height),
    }
}
