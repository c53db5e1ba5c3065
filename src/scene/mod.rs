mod session;
mod solid;
mod stage;

pub use session::{InfoPanel, SceneSession};
pub use solid::{SolidData, SolidId};
pub use stage::{Camera, DirectionalLight, GroundPlane, StageSetup};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Central arena that owns all solids of the active scene.
///
/// Solids are referenced by typed IDs (generational indices), so a handle
/// kept across a scene reset resolves to nothing instead of a new solid.
#[derive(Debug, Default)]
pub struct SceneStore {
    solids: SlotMap<SolidId, SolidData>,
}

impl SceneStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, SceneError> {
        self.solids.get(id).ok_or(SceneError::SolidNotFound)
    }

    /// Returns a mutable reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn solid_mut(&mut self, id: SolidId) -> Result<&mut SolidData, SceneError> {
        self.solids.get_mut(id).ok_or(SceneError::SolidNotFound)
    }

    /// Removes a solid, returning its data if it was present.
    pub fn remove_solid(&mut self, id: SolidId) -> Option<SolidData> {
        self.solids.remove(id)
    }

    /// Returns `true` if `id` refers to a live solid.
    #[must_use]
    pub fn contains(&self, id: SolidId) -> bool {
        self.solids.contains_key(id)
    }

    /// Number of solids in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Returns `true` if the store holds no solids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Iterates over all solids.
    pub fn iter(&self) -> impl Iterator<Item = (SolidId, &SolidData)> {
        self.solids.iter()
    }

    /// Removes every solid, yielding each one.
    pub fn drain(&mut self) -> impl Iterator<Item = (SolidId, SolidData)> + '_ {
        self.solids.drain()
    }
}
