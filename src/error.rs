use thiserror::Error;

/// Top-level error type for geoweave.
#[derive(Debug, Error)]
pub enum GeoweaveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-contiguous input curves")]
    NonContiguous,
}

/// Errors related to operations on caller-supplied input.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`GeoweaveError`].
pub type Result<T> = std::result::Result<T, GeoweaveError>;
