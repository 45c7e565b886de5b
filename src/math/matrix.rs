use std::fmt;
use std::io::{BufRead, Write};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::ChunksExact;
use std::str::FromStr;

use num_traits::Zero;

use crate::config::Limits;
use crate::error::{MathError, Result};
use crate::math::vector::{dot_slices, Vector};
use crate::math::{ensure_same_size, text};

/// Square matrix stored as one row-major buffer.
///
/// Row `i` occupies `data[i * size..(i + 1) * size]` and is handed out as a
/// slice, so `m[i][j]` addresses element `(i, j)`. Every row has exactly
/// `size` elements.
#[derive(Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T> Matrix<T>
where
    T: Clone + Default,
{
    /// Allocate a `size x size` matrix of default-initialized elements.
    ///
    /// Fails with [`MathError::InvalidSize`] when `size` is zero or above
    /// [`crate::config::MAX_MATRIX_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        let len = limits.check_matrix_size(size)?;
        Ok(Self {
            data: vec![T::default(); len],
            size,
        })
    }
}

impl<T> Matrix<T> {
    /// Build a matrix from its rows. Each row must be as long as there are
    /// rows.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self> {
        Self::from_rows_with_limits(rows, &Limits::default())
    }

    pub fn from_rows_with_limits(rows: Vec<Vector<T>>, limits: &Limits) -> Result<Self> {
        let size = rows.len();
        let len = limits.check_matrix_size(size)?;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            ensure_same_size(size, row.len())?;
            data.extend(Vec::from(row));
        }
        Ok(Self { data, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Only a matrix emptied by [`Matrix::take`] is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Row `row` as a slice. Panics when `row >= size()`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.size]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = self.offset(row, 0);
        let end = start + self.size;
        &mut self.data[start..end]
    }

    /// Bounds-checked row access.
    pub fn at(&self, row: usize) -> Result<&[T]> {
        self.check_row(row)?;
        Ok(self.row(row))
    }

    pub fn at_mut(&mut self, row: usize) -> Result<&mut [T]> {
        self.check_row(row)?;
        Ok(self.row_mut(row))
    }

    /// Bounds-checked element access, validating both the row and column.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.data[self.offset(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.size {
            return Err(MathError::OutOfRange {
                index: row,
                size: self.size,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.size {
            return Err(MathError::OutOfRange {
                index: col,
                size: self.size,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> ChunksExact<'_, T> {
        // chunks_exact panics on zero; an emptied matrix has no data anyway.
        self.data.chunks_exact(self.size.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Move the storage out into a new matrix, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        let size = std::mem::replace(&mut self.size, 0);
        Self {
            data: std::mem::take(&mut self.data),
            size,
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    pub fn mapv<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            size: self.size,
        }
    }

    fn zip_with<F>(&self, other: &Matrix<T>, mut f: F) -> Result<Matrix<T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        ensure_same_size(self.size, other.size)?;
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            size: self.size,
        })
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Copy row `row` out as a vector. Panics when `row >= size()`.
    pub fn row_vector(&self, row: usize) -> Vector<T> {
        Vector::from_raw(self.row(row).to_vec())
    }

    /// Gather column `col` into a vector. Panics when `col >= size()`.
    pub fn column(&self, col: usize) -> Vector<T> {
        assert!(col < self.size, "column index out of bounds");
        let mut values = Vec::with_capacity(self.size);
        for row in 0..self.size {
            values.push(self[(row, col)].clone());
        }
        Vector::from_raw(values)
    }

    /// Overwrite row `row` with the contents of `values`.
    pub fn set_row(&mut self, row: usize, values: &Vector<T>) -> Result<()> {
        self.check_row(row)?;
        ensure_same_size(self.size, values.len())?;
        self.row_mut(row).clone_from_slice(values.as_slice());
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Sub<Output = T>,
{
    pub fn try_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Mul<Output = T>,
{
    pub fn mul_scalar(&self, value: T) -> Matrix<T> {
        self.mapv(|x| x.clone() * value.clone())
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// Matrix-vector product: element `i` is row `i` dotted with `vector`.
    pub fn mul_vector(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        ensure_same_size(self.size, vector.len())?;
        Ok(Vector::from_raw(
            self.rows()
                .map(|row| dot_slices(row, vector.as_slice()))
                .collect(),
        ))
    }

    /// Matrix product: element `(i, j)` is row `i` of `self` dotted with
    /// column `j` of `other`.
    pub fn try_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        ensure_same_size(self.size, other.size)?;
        let n = self.size;
        log::trace!("multiplying two {}x{} matrices", n, n);

        let mut data = vec![T::zero(); n * n];
        for col in 0..n {
            let column = other.column(col);
            for (row, values) in self.rows().enumerate() {
                data[row * n + col] = dot_slices(values, column.as_slice());
            }
        }
        Ok(Matrix { data, size: n })
    }
}

impl<T> Matrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Replace every element with the next `size() * size()` tokens, in
    /// row-major order. The matrix is left untouched on failure.
    pub fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<()>
    where
        I: Iterator<Item = &'a str>,
    {
        self.data = text::parse_values(tokens, self.data.len())?;
        Ok(())
    }

    pub fn read_from_str(&mut self, input: &str) -> Result<()> {
        self.read_tokens(&mut input.split_whitespace())
    }

    /// Read the next `size() * size()` tokens from `reader`, leaving any
    /// further input unread.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        self.data = text::read_values(&mut reader, self.data.len())?;
        Ok(())
    }
}

impl<T: fmt::Display> Matrix<T> {
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            size: self.size,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.size = source.size;
    }
}

impl<T: Default> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: vec![T::default()],
            size: 1,
        }
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        self.row(index)
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.row_mut(index)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.row(index.0)[index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.row_mut(index.0)[index.1]
    }
}

impl<'a, T> Mul<T> for &'a Matrix<T>
where
    T: Clone + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
