use thiserror::Error;

/// Top-level error type for the Planix geometry kernel.
#[derive(Debug, Error)]
pub enum PlanixError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when a shape is constructed from invalid data.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    InvalidShape { vertices: usize },

    #[error("circle radius must be non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to numerically degenerate configurations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`PlanixError`].
pub type Result<T> = std::result::Result<T, PlanixError>;
