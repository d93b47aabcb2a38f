//! Error types for list digests

use thiserror::Error;

/// Main error type of the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListHashError {
    /// Inversion or division by the zero field element
    #[error("Division by zero in GF(256)")]
    DivisionByZero,

    /// No invertible candidate was found within the round limit
    #[error("No invertible entry matrix found after {rounds} rounds")]
    DerivationExhausted {
        /// Number of candidates that were tried
        rounds: usize,
    },

    /// Parallel reduction was requested with zero workers
    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    /// A byte buffer had the wrong length for the type it was parsed into
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes
        expected: usize,
        /// Length of the given buffer
        actual: usize,
    },

    /// A matrix that has to be invertible is not
    #[error("Matrix is singular")]
    SingularMatrix,
}

/// Result type using [`ListHashError`]
pub type Result<T> = std::result::Result<T, ListHashError>;
