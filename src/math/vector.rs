use std::fmt;
use std::io::{BufRead, Write};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use num_traits::Zero;

use crate::config::Limits;
use crate::error::{MathError, Result};
use crate::math::{ensure_same_size, text};

/// Owning, fixed-length sequence of `T`.
///
/// The length is chosen at construction and stays fixed; only assignment
/// through [`Clone::clone_from`] or [`Vector::take`] changes it. Clones
/// deep-copy the buffer, so two vectors never share storage.
#[derive(Debug, PartialEq, Eq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T>
where
    T: Clone + Default,
{
    /// Allocate `size` default-initialized elements.
    ///
    /// Fails with [`MathError::InvalidSize`] when `size` is zero or above
    /// [`crate::config::MAX_VECTOR_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        limits.check_vector_size(size)?;
        Ok(Self {
            data: vec![T::default(); size],
        })
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    /// Copy `values` into a new vector. The same size bounds as
    /// [`Vector::new`] apply.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Self::from_slice_with_limits(values, &Limits::default())
    }

    pub fn from_slice_with_limits(values: &[T], limits: &Limits) -> Result<Self> {
        limits.check_vector_size(values.len())?;
        Ok(Self {
            data: values.to_vec(),
        })
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T> Vector<T> {
    /// Adopt `data` as the vector's storage after validating its length.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Self::from_vec_with_limits(data, &Limits::default())
    }

    pub fn from_vec_with_limits(data: Vec<T>, limits: &Limits) -> Result<Self> {
        limits.check_vector_size(data.len())?;
        Ok(Self { data })
    }

    /// Wrap storage whose length the caller already validated.
    pub(crate) fn from_raw(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Only a vector emptied by [`Vector::take`] is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the storage out into a new vector, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self {
            data: std::mem::take(&mut self.data),
        }
    }

    /// Exchange storage with `other` without copying elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&T> {
        let size = self.data.len();
        self.data
            .get(index)
            .ok_or(MathError::OutOfRange { index, size })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(MathError::OutOfRange { index, size })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn mapv<U, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_raw(self.data.iter().map(f).collect())
    }

    fn zip_with<F>(&self, other: &Vector<T>, mut f: F) -> Result<Vector<T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        ensure_same_size(self.len(), other.len())?;
        Ok(Vector::from_raw(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }
}

impl<T> Vector<T>
where
    T: Clone + Add<Output = T>,
{
    pub fn add_scalar(&self, value: T) -> Vector<T> {
        self.mapv(|x| x.clone() + value.clone())
    }

    /// Element-wise sum; sizes must match.
    pub fn try_add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }
}

impl<T> Vector<T>
where
    T: Clone + Sub<Output = T>,
{
    pub fn sub_scalar(&self, value: T) -> Vector<T> {
        self.mapv(|x| x.clone() - value.clone())
    }

    /// Element-wise difference; sizes must match.
    pub fn try_sub(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }
}

impl<T> Vector<T>
where
    T: Clone + Mul<Output = T>,
{
    pub fn mul_scalar(&self, value: T) -> Vector<T> {
        self.mapv(|x| x.clone() * value.clone())
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// Sum of pairwise products, starting from `T::zero()`.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        ensure_same_size(self.len(), other.len())?;
        Ok(dot_slices(self.as_slice(), other.as_slice()))
    }
}

/// Dot product of two slices of equal length.
pub(crate) fn dot_slices<T>(lhs: &[T], rhs: &[T]) -> T
where
    T: Clone + Zero + Mul<Output = T>,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

impl<T> Vector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Replace every element with the next `size()` tokens.
    ///
    /// On failure the vector keeps its previous contents; tokens consumed
    /// before the failure are not returned to the iterator.
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

    /// Read the next `size()` tokens from `reader`, leaving any further
    /// input unread so several containers can be read from one stream.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        self.data = text::read_values(&mut reader, self.data.len())?;
        Ok(())
    }
}

impl<T: fmt::Display> Vector<T> {
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<T: Default> Default for Vector<T> {
    fn default() -> Self {
        Self {
            data: vec![T::default()],
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a, T> Add<T> for &'a Vector<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Vector<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<'a, T> Sub<T> for &'a Vector<T>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Vector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl<'a, T> Mul<T> for &'a Vector<T>
where
    T: Clone + Mul<Output = T>,
{
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.data.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}
