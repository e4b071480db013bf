use thiserror::Error;

/// Top-level error type for the geodome kernel.
#[derive(Debug, Error)]
pub enum GeodomeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A direction was required from a vector with zero magnitude.
    #[error("zero-length vector: {0}")]
    DegenerateVector(String),
}

/// Errors related to the vertex graph.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("unknown mode \"{0}\"")]
    InvalidMode(String),

    #[error("frequency must be a positive integer, got {0}")]
    InvalidFrequency(f64),

    #[error("unknown polyhedron \"{0}\"")]
    UnknownPolyhedron(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`GeodomeError`].
pub type Result<T> = std::result::Result<T, GeodomeError>;
