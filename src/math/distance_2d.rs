use super::Point3;

/// Returns the distance between `(ax, ay)` and `(bx, by)`.
#[must_use]
pub fn point_to_point_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the distance between two points projected onto the ground (XZ) plane.
///
/// The vertical coordinate is ignored, so solids of different heights standing
/// side by side are compared by their footprint centers only.
#[must_use]
pub fn horizontal_dist(a: &Point3, b: &Point3) -> f64 {
    point_to_point_dist(a.x, a.z, b.x, b.z)
}

/// Returns the smallest horizontal distance from `(x, z)` to any of `others`,
/// or `None` when `others` is empty.
#[must_use]
pub fn nearest_horizontal_dist<'a>(
    x: f64,
    z: f64,
    others: impl IntoIterator<Item = &'a Point3>,
) -> Option<f64> {
    others
        .into_iter()
        .map(|p| point_to_point_dist(x, z, p.x, p.z))
        .reduce(f64::min)
}
