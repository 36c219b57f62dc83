/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! GEMM-backed pairwise evaluators.
//!
//! Squared Euclidean distances over all column pairs satisfy
//! `dst = sa (+) sb' - 2 * A' * B` where `sa`/`sb` are the per-column squared
//! norms, so the whole matrix reduces to one rank-d product plus cheap
//! column passes. Euclidean is an elementwise square root on top of that,
//! and cosine uses the same product with reciprocal norms.
//!
//! Cancellation in the subtraction can leave tiny negative values where the
//! true distance is zero or near zero; every path here clamps those to zero.

use coldist_linalg::{dgemm, Transpose};

use crate::views::{ColMatrix, ColMatrixView};

/// Squared norm of each column, optionally weighted.
fn column_sqsum(a: ColMatrixView<'_, f64>, weights: Option<&[f64]>) -> Vec<f64> {
    match weights {
        None => a
            .col_iter()
            .map(|col| col.iter().map(|x| x * x).sum())
            .collect(),
        Some(w) => a
            .col_iter()
            .map(|col| col.iter().zip(w).map(|(x, wi)| wi * x * x).sum())
            .collect(),
    }
}

/// A copy of `a`'s buffer with every column scaled elementwise by `w`.
fn scaled_columns(a: ColMatrixView<'_, f64>, w: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(a.as_slice().len());
    for col in a.col_iter() {
        out.extend(col.iter().zip(w).map(|(x, wi)| wi * x));
    }
    out
}

fn clamp_non_negative(values: &mut [f64]) {
    for v in values {
        if *v < 0.0 {
            *v = 0.0;
        }
    }
}

fn zero_diagonal(dst: &mut ColMatrix<f64>) {
    for j in 0..dst.ncols() {
        dst[(j, j)] = 0.0;
    }
}

/// Accumulates `-2 * dot(a_i, b_j)` (or `alpha * dot`) into an `a.ncols() x
/// b.ncols()` column-major destination.
///
/// The column-major destination buffer is exactly the row-major layout of its
/// transpose, so the product is phrased as `B' * A` in row-major terms.
fn dot_products_into(
    a_data: &[f64],
    b: ColMatrixView<'_, f64>,
    d: usize,
    alpha: f64,
    beta: Option<f64>,
    dst: &mut ColMatrix<f64>,
) {
    dgemm(
        Transpose::None,
        Transpose::Ordinary,
        b.ncols(),
        dst.nrows(),
        d,
        alpha,
        b.as_slice(),
        a_data,
        beta,
        dst.as_mut_slice(),
    );
}

pub(crate) fn sqeuclidean_into(
    a: ColMatrixView<'_, f64>,
    b: ColMatrixView<'_, f64>,
    weights: Option<&[f64]>,
    dst: &mut ColMatrix<f64>,
) {
    debug_assert_eq!(dst.nrows(), a.ncols());
    debug_assert_eq!(dst.ncols(), b.ncols());

    tracing::trace!(weighted = weights.is_some(), "gemm-backed squared Euclidean evaluation");

    let sa = column_sqsum(a, weights);
    let sb = column_sqsum(b, weights);

    for (j, &sbj) in sb.iter().enumerate() {
        for (cell, &sai) in dst.col_mut(j).iter_mut().zip(&sa) {
            *cell = sai + sbj;
        }
    }

    match weights {
        None => dot_products_into(a.as_slice(), b, a.nrows(), -2.0, Some(1.0), dst),
        Some(w) => {
            let scaled = scaled_columns(a, w);
            dot_products_into(&scaled, b, a.nrows(), -2.0, Some(1.0), dst);
        }
    }

    clamp_non_negative(dst.as_mut_slice());
}

pub(crate) fn sqeuclidean_self_into(
    a: ColMatrixView<'_, f64>,
    weights: Option<&[f64]>,
    dst: &mut ColMatrix<f64>,
) {
    sqeuclidean_into(a, a, weights, dst);
    zero_diagonal(dst);
}

pub(crate) fn euclidean_into(
    a: ColMatrixView<'_, f64>,
    b: ColMatrixView<'_, f64>,
    weights: Option<&[f64]>,
    dst: &mut ColMatrix<f64>,
) {
    sqeuclidean_into(a, b, weights, dst);
    for v in dst.as_mut_slice() {
        *v = v.sqrt();
    }
}

pub(crate) fn euclidean_self_into(
    a: ColMatrixView<'_, f64>,
    weights: Option<&[f64]>,
    dst: &mut ColMatrix<f64>,
) {
    euclidean_into(a, a, weights, dst);
    zero_diagonal(dst);
}

pub(crate) fn cosine_into(
    a: ColMatrixView<'_, f64>,
    b: ColMatrixView<'_, f64>,
    dst: &mut ColMatrix<f64>,
) {
    debug_assert_eq!(dst.nrows(), a.ncols());
    debug_assert_eq!(dst.ncols(), b.ncols());

    tracing::trace!("gemm-backed cosine evaluation");

    let ra: Vec<f64> = column_sqsum(a, None).iter().map(|s| s.recip()).collect();
    let rb: Vec<f64> = column_sqsum(b, None).iter().map(|s| s.recip()).collect();

    dot_products_into(a.as_slice(), b, a.nrows(), 1.0, None, dst);

    for (j, &rbj) in rb.iter().enumerate() {
        for (cell, &rai) in dst.col_mut(j).iter_mut().zip(&ra) {
            *cell = 1.0 - *cell * (rai * rbj).sqrt();
        }
    }

    clamp_non_negative(dst.as_mut_slice());
}

pub(crate) fn cosine_self_into(a: ColMatrixView<'_, f64>, dst: &mut ColMatrix<f64>) {
    cosine_into(a, a, dst);
    zero_diagonal(dst);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::distance::{Cosine, Euclidean, SquaredEuclidean, WeightedSquaredEuclidean};
    use crate::pairwise::generic;
    use crate::views::{ColMatrix, ColMatrixView};

    fn random_data(rng: &mut StdRng, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
    }

    #[test]
    fn test_sqeuclidean_matches_cellwise() {
        let mut rng = StdRng::seed_from_u64(0x2f6b91c4a8d37e05);
        let a_data = random_data(&mut rng, 9 * 5);
        let b_data = random_data(&mut rng, 9 * 6);
        let a = ColMatrixView::try_from(a_data.as_slice(), 9, 5).unwrap();
        let b = ColMatrixView::try_from(b_data.as_slice(), 9, 6).unwrap();

        let mut expected = ColMatrix::zeros(5, 6);
        generic::pairwise_into(&SquaredEuclidean, a, b, &mut expected);

        let mut got = ColMatrix::zeros(5, 6);
        sqeuclidean_into(a, b, None, &mut got);

        for (g, e) in got.as_slice().iter().zip(expected.as_slice()) {
            assert_relative_eq!(g, e, max_relative = 1e-13);
        }
    }

    #[test]
    fn test_weighted_sqeuclidean_matches_cellwise() {
        let mut rng = StdRng::seed_from_u64(0x51d8c0f3b97a2e64);
        let a_data = random_data(&mut rng, 9 * 5);
        let b_data = random_data(&mut rng, 9 * 6);
        let w: Vec<f64> = (0..9).map(|_| rng.random_range(0.1..2.0)).collect();
        let a = ColMatrixView::try_from(a_data.as_slice(), 9, 5).unwrap();
        let b = ColMatrixView::try_from(b_data.as_slice(), 9, 6).unwrap();

        let metric = WeightedSquaredEuclidean::new(&w);
        let mut expected = ColMatrix::zeros(5, 6);
        generic::pairwise_into(&metric, a, b, &mut expected);

        let mut got = ColMatrix::zeros(5, 6);
        sqeuclidean_into(a, b, Some(&w), &mut got);

        for (g, e) in got.as_slice().iter().zip(expected.as_slice()) {
            assert_relative_eq!(g, e, max_relative = 1e-13);
        }
    }

    #[test]
    fn test_euclidean_and_cosine_match_cellwise() {
        let mut rng = StdRng::seed_from_u64(0x7c3e55a90b1d46f2);
        let a_data = random_data(&mut rng, 7 * 4);
        let b_data = random_data(&mut rng, 7 * 3);
        let a = ColMatrixView::try_from(a_data.as_slice(), 7, 4).unwrap();
        let b = ColMatrixView::try_from(b_data.as_slice(), 7, 3).unwrap();

        let mut expected = ColMatrix::zeros(4, 3);
        generic::pairwise_into(&Euclidean, a, b, &mut expected);
        let mut got = ColMatrix::zeros(4, 3);
        euclidean_into(a, b, None, &mut got);
        for (g, e) in got.as_slice().iter().zip(expected.as_slice()) {
            assert_relative_eq!(g, e, max_relative = 1e-12);
        }

        generic::pairwise_into(&Cosine, a, b, &mut expected);
        cosine_into(a, b, &mut got);
        for (g, e) in got.as_slice().iter().zip(expected.as_slice()) {
            assert_relative_eq!(g, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_self_distance_diagonal_is_exact_zero() {
        let mut rng = StdRng::seed_from_u64(0xe49a0d12c67b8f31);
        let a_data = random_data(&mut rng, 6 * 5);
        let a = ColMatrixView::try_from(a_data.as_slice(), 6, 5).unwrap();

        let mut dst = ColMatrix::zeros(5, 5);
        sqeuclidean_self_into(a, None, &mut dst);
        for j in 0..5 {
            assert_eq!(dst[(j, j)], 0.0);
            for i in 0..5 {
                assert!(dst[(i, j)] >= 0.0);
                assert_relative_eq!(dst[(i, j)], dst[(j, i)], max_relative = 1e-13);
            }
        }

        cosine_self_into(a, &mut dst);
        for j in 0..5 {
            assert_eq!(dst[(j, j)], 0.0);
        }
    }

    #[test]
    fn test_duplicate_columns_clamp_to_zero() {
        // Identical columns: cancellation drives the algebraic form slightly
        // negative; the result must come back as a clean zero.
        let col = [0.3817, -0.9241, 0.5563];
        let data = [col, col].concat();
        let a = ColMatrixView::try_from(data.as_slice(), 3, 2).unwrap();

        let mut dst = ColMatrix::zeros(2, 2);
        sqeuclidean_into(a, a, None, &mut dst);
        for v in dst.as_slice() {
            assert!(*v >= 0.0);
        }
    }
}
