use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

/// Largest element count a vector may be constructed with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest side length a matrix may be constructed with.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Size bounds applied when constructing containers.
///
/// The defaults are [`MAX_VECTOR_SIZE`] and [`MAX_MATRIX_SIZE`]. Missing
/// fields fall back to those defaults when deserializing, so a config file
/// only needs to mention the bound it overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    pub max_vector_size: usize,
    pub max_matrix_size: usize,
}

impl Limits {
    pub fn new(max_vector_size: usize, max_matrix_size: usize) -> Self {
        Self {
            max_vector_size,
            max_matrix_size,
        }
    }

    /// The matrix bound must be non-zero and below the vector bound.
    pub fn validate(&self) -> Result<()> {
        if self.max_matrix_size == 0 || self.max_matrix_size >= self.max_vector_size {
            return Err(MathError::InvalidLimits {
                max_vector_size: self.max_vector_size,
                max_matrix_size: self.max_matrix_size,
            });
        }
        Ok(())
    }

    /// Validate a requested vector length against `1..=max_vector_size`.
    pub fn check_vector_size(&self, size: usize) -> Result<()> {
        self.validate()?;
        check_size(size, self.max_vector_size)
    }

    /// Validate a requested matrix side against `1..=max_matrix_size` and
    /// return the element count of the `size x size` buffer, which must
    /// itself fit within `max_vector_size`.
    pub fn check_matrix_size(&self, size: usize) -> Result<usize> {
        self.validate()?;
        check_size(size, self.max_matrix_size)?;
        match size.checked_mul(size) {
            Some(len) if len <= self.max_vector_size => Ok(len),
            _ => {
                log::debug!("rejecting matrix size {}: buffer exceeds vector bound", size);
                Err(MathError::InvalidSize {
                    size,
                    max: self.max_matrix_size,
                })
            }
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

fn check_size(size: usize, max: usize) -> Result<()> {
    if size == 0 || size > max {
        log::debug!("rejecting container size {} (max {})", size, max);
        return Err(MathError::InvalidSize { size, max });
    }
    Ok(())
}
