//! Errors raised by graph lookups.

use thiserror::Error;

/// Failures of lookups which cannot fall back to a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No vertex wraps the requested value.
    #[error("vertex not found")]
    VertexNotFound,

    /// A handle does not belong to a live vertex of this graph.
    #[error("vertex handle {0} not found")]
    StaleVertexId(usize),
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(GraphError::VertexNotFound.to_string(), "vertex not found");
        assert_eq!(
            GraphError::StaleVertexId(7).to_string(),
            "vertex handle 7 not found"
        );
    }
}
