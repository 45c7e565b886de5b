//! dynmat: owning vector and square matrix containers.
//!
//! `Vector<T>` is a fixed-length sequence and `Matrix<T>` a square
//! row-major matrix. Both deep-copy on clone, validate their size at
//! construction against [`config::Limits`], and offer scalar and
//! structural arithmetic plus whitespace-delimited text I/O.
//!
//! ```
//! use dynmat::math::{Matrix, Vector};
//!
//! let v = Vector::from_slice(&[1, 0, 0, 1, 1]).unwrap();
//! let mut m = Matrix::<i32>::new(5).unwrap();
//! m.set_row(0, &Vector::from_slice(&[1, 2, 3, 4, 5]).unwrap()).unwrap();
//!
//! let product = m.mul_vector(&v).unwrap();
//! assert_eq!(product[0], 10);
//! ```
pub mod config;
pub mod error;
pub mod logging;
pub mod math;

pub use error::{MathError, Result};
