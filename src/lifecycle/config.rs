use crate::animation::BounceParams;
use crate::operations::creation::{PlacementConstraint, DEFAULT_SOLID_COUNT};
use crate::scene::StageSetup;

/// Base file name of exported solids.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "figure.glb";

/// Everything a [`SceneLifecycle`](super::SceneLifecycle) needs to know up front.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Solids requested per generated scene.
    pub solid_count: usize,
    pub placement: PlacementConstraint,
    pub bounce: BounceParams,
    pub stage: StageSetup,
    /// File name given to export artifacts.
    pub export_file_name: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            solid_count: DEFAULT_SOLID_COUNT,
            placement: PlacementConstraint::default(),
            bounce: BounceParams::default(),
            stage: StageSetup::default(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_owned(),
        }
    }
}

impl SceneConfig {
    #[must_use]
    pub fn with_solid_count(mut self, solid_count: usize) -> Self {
        self.solid_count = solid_count;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: PlacementConstraint) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_bounce(mut self, bounce: BounceParams) -> Self {
        self.bounce = bounce;
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: StageSetup) -> Self {
        self.stage = stage;
        self
    }

    #[must_use]
    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }
}
