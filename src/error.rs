use thiserror::Error;

/// Top-level error type for the Arealis floor-plan kernel.
#[derive(Debug, Error)]
pub enum ArealisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors related to polygon and boundary computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate boundary: {0}")]
    Degenerate(String),

    #[error("space has no boundary")]
    EmptyBoundary,
}

/// Errors related to parametric shape generation.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("extent {parameter} = {value} must be positive")]
    NonPositiveExtent { parameter: &'static str, value: f64 },

    #[error("arm {parameter} = {value} meets or exceeds the overall extent {extent}")]
    ArmExceedsExtent {
        parameter: &'static str,
        value: f64,
        extent: f64,
    },
}

/// Errors related to corridor and floor layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("critical corridor dimension exceeds floor boundary: {required} >= {available}")]
    DimensionExceeded { required: f64, available: f64 },

    #[error("generated shape does not fit within the floor boundary")]
    OutsideBoundary,
}

/// Convenience type alias for results using [`ArealisError`].
pub type Result<T> = std::result::Result<T, ArealisError>;
