//! Dynamically sized containers.
//!
//! Provides `Vector` (1D) and `Matrix` (square, 2D). Binary operations
//! check operand sizes and report a mismatch as `MathError::SizeMismatch`
//! instead of panicking; equality never fails.
pub mod matrix;
mod text;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

use crate::error::{MathError, Result};

pub(crate) fn ensure_same_size(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MathError::SizeMismatch { left, right });
    }
    Ok(())
}
