mod clock;
pub mod collaborators;
mod config;
mod manager;

pub use clock::{FrameClock, FrameHost, FrameLoop};
pub use config::{SceneConfig, DEFAULT_EXPORT_FILE_NAME};
pub use manager::{ExportArtifact, SceneLifecycle};
