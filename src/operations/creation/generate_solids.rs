use rand::Rng;
use tracing::{debug, warn};

use crate::geometry::{Color, Shape, ShapeKind};
use crate::math::distance_2d::nearest_horizontal_dist;
use crate::math::Point3;
use crate::scene::{SceneStore, SolidData, SolidId};

use super::PlacementConstraint;

/// Number of solids in a freshly generated scene.
pub const DEFAULT_SOLID_COUNT: usize = 5;

/// Scatters randomly shaped, randomly colored solids over the ground plane.
///
/// Each solid gets up to `max_attempts` random horizontal positions; the
/// first one at least `min_distance` away from every solid already in the
/// store is kept. A solid that finds no such position is skipped with
/// a warning, so the result may hold fewer than `count` solids.
///
/// Every solid is placed at rest: its lowest point touches `y = 0`.
pub struct GenerateSolids {
    count: usize,
    constraint: PlacementConstraint,
}

impl GenerateSolids {
    /// Creates a new `GenerateSolids` operation.
    #[must_use]
    pub fn new(count: usize, constraint: PlacementConstraint) -> Self {
        Self { count, constraint }
    }

    /// Executes the operation, inserting the solids into `store`.
    ///
    /// Returns the IDs of the placed solids in placement order.
    pub fn execute<R: Rng>(&self, store: &mut SceneStore, rng: &mut R) -> Vec<SolidId> {
        let c = &self.constraint;
        let mut placed: Vec<Point3> = store.iter().map(|(_, s)| s.position).collect();
        let mut ids = Vec::with_capacity(self.count);

        for index in 0..self.count {
            // Shared by cones and cylinders for both height and radius bound.
            let figure_height = sample(rng, c.min_size(), c.max_size());

            let Some((x, z)) = self.find_position(&placed, rng) else {
                warn!(
                    "Unable to locate figure {} after {} tries.",
                    index + 1,
                    c.max_attempts()
                );
                continue;
            };

            let shape = self.random_shape(figure_height, rng);
            let color = Color::from_hex(rng.gen_range(0..=0x00ff_ffff));
            let solid = SolidData::resting(shape, x, z, color);

            placed.push(solid.position);
            let id = store.add_solid(solid);
            debug!(?id, kind = %shape.kind(), x, z, "placed solid");
            ids.push(id);
        }

        ids
    }

    fn find_position<R: Rng>(&self, placed: &[Point3], rng: &mut R) -> Option<(f64, f64)> {
        let extent = self.constraint.extent();
        let min_distance = self.constraint.min_distance();

        (0..self.constraint.max_attempts()).find_map(|_| {
            let x = (rng.gen::<f64>() - 0.5) * extent;
            let z = (rng.gen::<f64>() - 0.5) * extent;
            let clear = nearest_horizontal_dist(x, z, placed).map_or(true, |d| d >= min_distance);
            clear.then_some((x, z))
        })
    }

    fn random_shape<R: Rng>(&self, figure_height: f64, rng: &mut R) -> Shape {
        let c = &self.constraint;
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];

        match kind {
            ShapeKind::Sphere => Shape::Sphere {
                radius: sample(rng, c.min_size(), c.max_sphere_radius()),
            },
            ShapeKind::Box => Shape::Box {
                width: sample(rng, c.min_size(), c.max_size()),
                height: sample(rng, c.min_size(), c.max_size()),
                depth: sample(rng, c.min_size(), c.max_size()),
            },
            ShapeKind::Cone => Shape::Cone {
                radius: sample(rng, c.min_size(), figure_height),
                height: figure_height,
            },
            ShapeKind::Cylinder => {
                let radius = sample(rng, c.min_size(), figure_height);
                Shape::Cylinder {
                    radius_top: radius,
                    radius_bottom: radius,
                    height: figure_height,
                }
            }
        }
    }
}

/// Uniform sample in `[lo, hi)`; returns `lo` when the range is empty.
fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}
