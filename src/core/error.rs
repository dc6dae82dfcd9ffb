//! Error handling logic

use thiserror::Error;

/// Failures raised by matrix construction and the four state/operator operations.
///
/// Every variant is raised at the point of detection and propagated unchanged;
/// nothing in the crate retries or falls back to another back-end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QubitError {
    /// The operand does not have the shape the operation requires
    /// (non-square matrix for a unitarity check, inconsistent construction
    /// data, or a composite whose dimension overflows `usize`).
    #[error("Shape error ({rows}x{cols}): {message}")]
    Shape {
        /// Row count of the offending operand
        rows: usize,
        /// Column count of the offending operand
        cols: usize,
        /// What was wrong with it
        message: String,
    },

    /// Operator and state cannot be multiplied.
    #[error("Dimension mismatch: operator expects {expected} rows in the state, got {actual}")]
    DimensionMismatch {
        /// Column count of the operator
        expected: usize,
        /// Row count of the state
        actual: usize,
    },

    /// Tensor composition was invoked with zero operands.
    #[error("Tensor product requires at least one operand")]
    EmptyInput,
}

/// Result type for qubit-kit operations
pub type Result<T> = std::result::Result<T, QubitError>;

impl QubitError {
    pub(crate) fn shape(rows: usize, cols: usize, message: impl Into<String>) -> Self {
        QubitError::Shape { rows, cols, message: message.into() }
    }
}
