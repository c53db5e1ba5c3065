use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::animation::BounceSimulator;
use crate::error::Result;
use crate::interaction::{SelectionController, Viewport};
use crate::math::Point2;
use crate::operations::creation::GenerateSolids;
use crate::scene::{Camera, SceneSession, SolidId};

use super::collaborators::{Exporter, RayCaster, Renderer, SceneGraph};
use super::SceneConfig;

/// A serialized solid ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Owns the active scene and drives it through its lifetime: generation,
/// regeneration, per-frame animation, selection, and export.
pub struct SceneLifecycle<R = SmallRng> {
    config: SceneConfig,
    session: SceneSession,
    rng: R,
}

impl SceneLifecycle<SmallRng> {
    /// Creates an empty lifecycle seeded from system entropy.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }
}

impl<R: Rng> SceneLifecycle<R> {
    /// Creates an empty lifecycle drawing placement randomness from `rng`.
    #[must_use]
    pub fn with_rng(config: SceneConfig, rng: R) -> Self {
        let session = SceneSession::with_bounce(BounceSimulator::new(config.bounce));
        Self {
            config,
            session,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &SceneSession {
        &self.session
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.config.stage.camera
    }

    /// Camera access for hosts with orbit controls or resizable viewports.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.config.stage.camera
    }

    /// Builds the stage and the first scene. Returns the number of solids placed.
    pub fn populate<G: SceneGraph + ?Sized>(&mut self, graph: &mut G) -> usize {
        graph.configure_stage(&self.config.stage);
        self.generate(graph)
    }

    /// Replaces every solid with a freshly generated set.
    ///
    /// Selection, bounces and the info panel are cleared, which also disables
    /// export. Returns the number of solids placed.
    pub fn reset<G: SceneGraph + ?Sized>(&mut self, graph: &mut G) -> usize {
        for (id, _) in self.session.store.drain() {
            graph.remove_solid(id);
        }
        self.session.clear_transient();

        let placed = self.generate(graph);
        info!(placed, requested = self.config.solid_count, "scene regenerated");
        placed
    }

    /// Advances bounces by `dt` seconds and draws a frame.
    pub fn tick<T: Renderer + ?Sized>(&mut self, dt: f64, renderer: &mut T) {
        self.session.bounce.step(dt, &mut self.session.store);
        renderer.render(&self.session.store, &self.config.stage.camera);
    }

    /// Handles a pointer click at pixel position `(client_x, client_y)`.
    pub fn click<C: RayCaster + ?Sized>(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport: &Viewport,
        caster: &C,
    ) -> Option<SolidId> {
        self.select_at(&viewport.to_ndc(client_x, client_y), caster)
    }

    /// Selects the solid under a pointer given in normalized device coordinates.
    pub fn select_at<C: RayCaster + ?Sized>(&mut self, ndc: &Point2, caster: &C) -> Option<SolidId> {
        SelectionController::new(caster, &self.config.stage.camera).select_at(&mut self.session, ndc)
    }

    /// Serializes the selected solid.
    ///
    /// Returns `Ok(None)` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected solid is gone or the exporter fails.
    pub fn export<E: Exporter + ?Sized>(&self, exporter: &mut E) -> Result<Option<ExportArtifact>> {
        let Some(id) = self.session.selection else {
            info!("no solid selected to export");
            return Ok(None);
        };

        let solid = self.session.store.solid(id)?;
        let bytes = exporter.serialize(id, solid)?;
        Ok(Some(ExportArtifact {
            file_name: self.config.export_file_name.clone(),
            bytes,
        }))
    }

    fn generate<G: SceneGraph + ?Sized>(&mut self, graph: &mut G) -> usize {
        let ids = GenerateSolids::new(self.config.solid_count, self.config.placement)
            .execute(&mut self.session.store, &mut self.rng);
        for &id in &ids {
            if let Ok(solid) = self.session.store.solid(id) {
                graph.add_solid(id, solid);
            }
        }
        ids.len()
    }
}
