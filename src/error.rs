use thiserror::Error;

/// Top-level error type for geoscene.
#[derive(Debug, Error)]
pub enum GeosceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to shape parameters and placement limits.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is invalid")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("unknown shape kind: {0}")]
    UnknownShapeKind(String),
}

/// Errors related to the solid store.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("solid not found")]
    SolidNotFound,
}

/// Errors raised while handing a solid to the export collaborator.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Convenience type alias for results using [`GeosceneError`].
pub type Result<T> = std::result::Result<T, GeosceneError>;
