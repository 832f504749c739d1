//! Error types for docstruct.

use thiserror::Error;

/// Result type alias for docstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied input that violates the analysis contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error serializing or deserializing an analysis.
    #[error("Serialization error: {0}")]
    Serialize(String),
}
