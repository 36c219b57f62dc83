/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Dense double-precision matrix multiplication.
//!
//! This crate wraps an accelerated `gemm` kernel behind a slice-based interface so the
//! metric engine does not depend on any particular linear-algebra backend. Matrices are
//! implicit row-major slices; a column-major matrix can be multiplied by viewing it as
//! the row-major transpose of itself.

mod backend;
use backend::dgemm_impl;

// Make the naive implementation available for internal testing.
#[cfg(test)]
mod reference;

/// Indicate whether a matrix should be implicitly transposed for an operation.
#[derive(Debug, Clone, Copy)]
pub enum Transpose {
    /// Use a provided matrix directly.
    None,
    /// Use the transpose of a matrix.
    Ordinary,
}

impl Transpose {
    /// Return whether or not the enum is `Transpose::Ordinary`.
    pub fn is_transpose(&self) -> bool {
        matches!(self, Self::Ordinary)
    }

    /// Call exactly one of the arguments depending on the value of `self` and return the
    /// result.
    pub fn call<F, G, T>(&self, if_none: F, if_transpose: G) -> T
    where
        F: Fn() -> T,
        G: Fn() -> T,
    {
        match self {
            Self::None => if_none(),
            Self::Ordinary => if_transpose(),
        }
    }
}

/// Matrix-matrix multiplication for implicit row-major matrices `a` and `b` using the
/// implicit row-major matrix `c` as the destination.
///
/// Performs one of the following operations:
/// ```ignore
/// 1. c = [beta * c] + alpha * a * b
/// 2. c = [beta * c] + alpha * a' * b
/// 3. c = [beta * c] + alpha * a * b'
/// 4. c = [beta * c] + alpha * a' * b'
/// ```
/// Where `x'` indicates the ordinary transpose of `x`.
///
/// If `beta` is `None`, the destination `c` is completely over-written.
///
/// * `atranspose`: Whether `a` should be interpreted as an in-place transpose.
/// * `btranspose`: Whether `b` should be interpreted as an in-place transpose.
/// * `m`: The number of rows in `c` (and in `a` after any transposing).
/// * `n`: The number of columns in `c` (and in `b` after any transposing).
/// * `k`: The inner dimension: the number of columns in `a` and rows in `b` after any
///   transposing.
/// * `alpha`: Scaling parameter for the product `a * b`.
/// * `beta`: Optional scaling parameter for the existing contents of `c`. If `None`,
///   then `c` is overwritten entirely.
///
/// # Note
///
/// This interface is a simplified version of the full cblas `dgemm` interface: it does
/// not support column-major layouts or arbitrary leading-dimension strides. The metric
/// engine only ever multiplies dense matrices, viewed row-major.
///
/// # Panics
///
/// Panics if
/// * `a.len() != m * k`
/// * `b.len() != k * n`
/// * `c.len() != m * n`.
#[allow(clippy::too_many_arguments)]
pub fn dgemm(
    atranspose: Transpose,
    btranspose: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    b: &[f64],
    beta: Option<f64>,
    c: &mut [f64],
) {
    // Check size requirements.
    assert_eq!(
        a.len(),
        m * k,
        "expected {}x{} matrix `a` to have length {}, instead got {}",
        m,
        k,
        m * k,
        a.len()
    );
    assert_eq!(
        b.len(),
        k * n,
        "expected {}x{} matrix `b` to have length {}, instead got {}",
        k,
        n,
        k * n,
        b.len()
    );
    assert_eq!(
        c.len(),
        m * n,
        "expected {}x{} matrix `c` to have length {}, instead got {}",
        m,
        n,
        m * n,
        c.len()
    );

    // Invoke the actual implementation.
    dgemm_impl(atranspose, btranspose, m, n, k, alpha, a, b, beta, c)
}
