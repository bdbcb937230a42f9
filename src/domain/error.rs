use thiserror::Error;

/// Construction errors raised while building a [`Graph`](crate::domain::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid vertex count: {0}")]
    InvalidVertexCount(i64),

    #[error("cannot allocate a graph of {0} vertices")]
    TooManyVertices(usize),

    #[error("vertex {vertex} out of bounds for a graph of {vertex_count} vertices")]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },
}

/// Rejected PageRank settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageRankConfigError {
    #[error("damping factor must be in [0, 1), got {0}")]
    Damping(f64),

    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max iterations must be at least 1")]
    MaxIterations,
}
