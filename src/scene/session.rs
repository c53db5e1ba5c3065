use crate::animation::BounceSimulator;
use crate::geometry::Color;

use super::{SceneStore, SolidId};

/// What the UI shows about the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanel {
    text: Option<String>,
    export_enabled: bool,
}

impl InfoPanel {
    /// The property summary of the selected solid, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the export action should be offered.
    #[must_use]
    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    /// Replaces the panel content after a selection and enables export.
    ///
    /// `text` is `None` when the solid had nothing displayable; export is
    /// enabled regardless, since a solid is selected.
    pub fn show(&mut self, text: Option<String>) {
        self.text = text;
        self.export_enabled = true;
    }

    /// Empties the panel and disables export.
    pub fn clear(&mut self) {
        self.text = None;
        self.export_enabled = false;
    }
}

/// State of one active scene: its solids, the current selection, the
/// bounce overlay, and the info panel.
///
/// Owned by [`SceneLifecycle`](crate::lifecycle::SceneLifecycle) and lent
/// out by `&mut` to selection and animation.
#[derive(Debug, Default)]
pub struct SceneSession {
    pub(crate) store: SceneStore,
    pub(crate) selection: Option<SolidId>,
    pub(crate) bounce: BounceSimulator,
    pub(crate) info: InfoPanel,
}

impl SceneSession {
    /// Creates an empty session with default bounce parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session around a configured bounce simulator.
    #[must_use]
    pub fn with_bounce(bounce: BounceSimulator) -> Self {
        Self {
            bounce,
            ..Self::default()
        }
    }

    /// The solids of the scene.
    #[must_use]
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// Mutable access to the solids of the scene.
    pub fn store_mut(&mut self) -> &mut SceneStore {
        &mut self.store
    }

    /// The currently selected solid.
    #[must_use]
    pub fn selected(&self) -> Option<SolidId> {
        self.selection
    }

    /// The bounce overlay.
    #[must_use]
    pub fn bounce(&self) -> &BounceSimulator {
        &self.bounce
    }

    /// The info panel.
    #[must_use]
    pub fn info(&self) -> &InfoPanel {
        &self.info
    }

    /// Color of the selected solid, for UI highlights.
    #[must_use]
    pub fn selected_color(&self) -> Option<Color> {
        let id = self.selection?;
        self.store.solid(id).ok().map(|s| s.color)
    }

    /// Drops selection, bounce tracking, and panel content.
    ///
    /// Solids are left in the store; removing them is the caller's job
    /// because the scene graph must be told about each one.
    pub fn clear_transient(&mut self) {
        self.selection = None;
        self.bounce.clear();
        self.info.clear();
    }
}
