//! Crate errors.

use thiserror::Error;

/// Result alias used by every fallible container operation.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors raised by vector and matrix operations.
#[derive(Error, Debug)]
pub enum MathError {
    /// Requested length is zero or above the applicable maximum.
    #[error("invalid size {size}: expected a value in 1..={max}")]
    InvalidSize { size: usize, max: usize },

    /// Size bounds that cannot be satisfied together.
    #[error("invalid limits: max_matrix_size {max_matrix_size} must be below max_vector_size {max_vector_size}")]
    InvalidLimits {
        max_vector_size: usize,
        max_matrix_size: usize,
    },

    /// Checked index outside `0..size`.
    #[error("index {index} is out of range for size {size}")]
    OutOfRange { index: usize, size: usize },

    /// Operand dimensions disagree.
    #[error("size mismatch: left operand has size {left}, right operand has size {right}")]
    SizeMismatch { left: usize, right: usize },

    /// Input token could not be parsed as an element.
    #[error("cannot parse {token:?}: {reason}")]
    Parse { token: String, reason: String },

    /// Input ended before every element was read.
    #[error("unexpected end of input: expected {expected} values, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl MathError {
    pub fn is_invalid_size(&self) -> bool {
        matches!(self, MathError::InvalidSize { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MathError::OutOfRange { .. })
    }

    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, MathError::SizeMismatch { .. })
    }
}
