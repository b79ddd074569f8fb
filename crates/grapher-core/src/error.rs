// File: crates/grapher-core/src/error.rs
// Summary: Error taxonomy for table loading, location state and projection lookups.

use thiserror::Error;

pub type GrapherResult<T> = Result<T, GrapherError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrapherError {
    /// Table structure cannot be used at all; aborts the load.
    #[error("malformed input table: {0}")]
    MalformedInput(String),

    /// Location state cannot be decoded; callers fall back to the default view.
    #[error("malformed location state: {0}")]
    MalformedState(String),

    /// Entity is not present in the table; filtered out of projections.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

impl From<csv::Error> for GrapherError {
    fn from(err: csv::Error) -> Self {
        GrapherError::MalformedInput(err.to_string())
    }
}
