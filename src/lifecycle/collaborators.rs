use crate::error::Result;
use crate::math::{Point2, Point3};
use crate::scene::{Camera, SceneStore, SolidData, SolidId, StageSetup};

/// Scene-graph side of the rendering engine.
///
/// geoscene never draws anything itself; a host wires its 3D engine in by
/// implementing this trait and [`Renderer`].
pub trait SceneGraph {
    /// Builds the fixed parts of the scene: background, ground, camera, lights.
    fn configure_stage(&mut self, stage: &StageSetup);

    /// Adds a mesh for a newly generated solid.
    fn add_solid(&mut self, id: SolidId, solid: &SolidData);

    /// Removes the mesh of a solid that left the scene.
    fn remove_solid(&mut self, id: SolidId);
}

/// Draws one frame.
pub trait Renderer {
    /// Renders the current state of every solid from `camera`.
    fn render(&mut self, store: &SceneStore, camera: &Camera);
}

/// One solid intersected by a picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub solid: SolidId,
    /// Distance from the camera along the ray.
    pub distance: f64,
    /// World-space intersection point.
    pub point: Point3,
}

/// Pointer hit-testing.
pub trait RayCaster {
    /// Returns the solids under the pointer, nearest first.
    ///
    /// `ndc` is the pointer in normalized device coordinates.
    fn intersect(&self, ndc: &Point2, camera: &Camera, store: &SceneStore) -> Vec<RayHit>;
}

/// Serializes a solid into a portable 3D interchange format.
pub trait Exporter {
    /// Encodes `solid` (binary glTF for the default file name).
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be encoded.
    fn serialize(&mut self, id: SolidId, solid: &SolidData) -> Result<Vec<u8>>;
}
