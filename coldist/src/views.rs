/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Column-major matrix storage and borrowed views.
//!
//! Samples are stored one per column, so a `d x n` matrix holds `n` vectors of
//! dimension `d` and each column is a contiguous slice.

use std::ops::{Index, IndexMut};

use num_traits::Zero;
use thiserror::Error;

/// Abstraction over the memory backing a [`ColMatrixBase`].
///
/// # Safety
///
/// Implementations must return the same slice for every call to [`DenseData::as_slice`].
pub unsafe trait DenseData {
    type Elem;

    fn as_slice(&self) -> &[Self::Elem];
}

unsafe impl<T> DenseData for &[T] {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

unsafe impl<T> DenseData for Box<[T]> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

/// A dense column-major matrix over some backing storage.
///
/// Use the [`ColMatrix`] and [`ColMatrixView`] aliases for the owning and borrowing
/// flavors respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColMatrixBase<T: DenseData> {
    data: T,
    nrows: usize,
    ncols: usize,
}

/// Error returned when a slice cannot be viewed with the requested shape.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("tried to view a slice of length {len} as a {nrows}x{ncols} column matrix")]
pub struct ShapeError {
    len: usize,
    nrows: usize,
    ncols: usize,
}

/// An owning column-major matrix.
pub type ColMatrix<T> = ColMatrixBase<Box<[T]>>;

/// A borrowed column-major matrix view.
pub type ColMatrixView<'a, T> = ColMatrixBase<&'a [T]>;

impl<T: DenseData> ColMatrixBase<T> {
    /// Views `data` as a matrix with `nrows` rows and `ncols` columns.
    pub fn try_from(data: T, nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        if data.as_slice().len() != nrows * ncols {
            return Err(ShapeError {
                len: data.as_slice().len(),
                nrows,
                ncols,
            });
        }

        Ok(Self { data, nrows, ncols })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn as_slice(&self) -> &[T::Elem] {
        self.data.as_slice()
    }

    /// Returns column `j` as a contiguous slice.
    pub fn col(&self, j: usize) -> &[T::Elem] {
        assert!(j < self.ncols, "column index out of bounds");
        &self.data.as_slice()[j * self.nrows..(j + 1) * self.nrows]
    }

    /// Iterates over the columns in order.
    pub fn col_iter(&self) -> impl Iterator<Item = &[T::Elem]> + '_ {
        (0..self.ncols).map(move |j| self.col(j))
    }

    pub fn get(&self, i: usize, j: usize) -> &T::Elem {
        &self.col(j)[i]
    }

    /// Reborrows as a non-owning view.
    pub fn as_view(&self) -> ColMatrixView<'_, T::Elem> {
        ColMatrixBase {
            data: self.data.as_slice(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Copies into an owning matrix.
    pub fn to_owned(&self) -> ColMatrix<T::Elem>
    where
        T::Elem: Clone,
    {
        ColMatrixBase {
            data: self.data.as_slice().into(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<'a, T> ColMatrixView<'a, T> {
    /// Views a slice as a single-column matrix.
    pub fn column_vector(data: &'a [T]) -> Self {
        Self {
            data,
            nrows: data.len(),
            ncols: 1,
        }
    }
}

impl<T> ColMatrix<T> {
    /// Builds a matrix by calling `f` once per element.
    pub fn from_fn(f: impl FnMut() -> T, nrows: usize, ncols: usize) -> Self {
        let data: Box<[T]> = std::iter::repeat_with(f).take(nrows * ncols).collect();
        Self { data, nrows, ncols }
    }

    /// An all-zeros matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self
    where
        T: Zero,
    {
        Self::from_fn(T::zero, nrows, ncols)
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns column `j` as a contiguous mutable slice.
    pub fn col_mut(&mut self, j: usize) -> &mut [T] {
        assert!(j < self.ncols, "column index out of bounds");
        &mut self.data[j * self.nrows..(j + 1) * self.nrows]
    }

    /// Consumes the matrix and returns the backing storage.
    pub fn into_inner(self) -> Box<[T]> {
        self.data
    }
}

impl<T: DenseData> Index<(usize, usize)> for ColMatrixBase<T> {
    type Output = T::Elem;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        self.get(i, j)
    }
}

impl<T> IndexMut<(usize, usize)> for ColMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.col_mut(j)[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = ColMatrixView::try_from(data.as_slice(), 3, 2).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m.col(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.col(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m[(2, 1)], 6.0);

        assert!(ColMatrixView::try_from(data.as_slice(), 4, 2).is_err());
    }

    #[test]
    fn test_col_iter() {
        let data = vec![1, 2, 3, 4];
        let m = ColMatrixView::try_from(data.as_slice(), 2, 2).unwrap();
        let cols: Vec<&[i32]> = m.col_iter().collect();
        assert_eq!(cols, vec![&[1, 2][..], &[3, 4][..]]);

        // Degenerate shapes still iterate.
        let empty: [i32; 0] = [];
        let m = ColMatrixView::try_from(&empty[..], 0, 3).unwrap();
        assert_eq!(m.col_iter().count(), 3);
        assert!(m.col_iter().all(<[i32]>::is_empty));
    }

    #[test]
    fn test_owned() {
        let mut m = ColMatrix::<f64>::zeros(2, 3);
        m[(0, 1)] = 5.0;
        m.col_mut(2).copy_from_slice(&[7.0, 8.0]);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 5.0, 0.0, 7.0, 8.0]);

        let v = m.as_view();
        assert_eq!(v.to_owned(), m);
    }

    #[test]
    fn test_column_vector() {
        let data = [1.0, 2.0, 3.0];
        let m = ColMatrixView::column_vector(&data);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 1);
        assert_eq!(m.col(0), &data);
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn test_col_out_of_bounds() {
        let data = [1.0, 2.0];
        let m = ColMatrixView::try_from(&data[..], 2, 1).unwrap();
        let _ = m.col(1);
    }
}
