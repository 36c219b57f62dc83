/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! The built-in column metrics.
//!
//! Unweighted metrics are zero-sized functors. Weighted variants borrow their
//! weight vector and report its length through [`ColumnMetric::required_dim`],
//! which pins the column length of every input they are evaluated on.

use std::marker::PhantomData;

use super::{ColumnMetric, MetricKind};
use crate::error::{DistError, DistResult};
use crate::pairwise::algebraic;
use crate::views::{ColMatrix, ColMatrixView};

/// `sqrt(sum((x - y)^2))`
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

/// `sum((x - y)^2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

/// `sum(|x - y|)`
#[derive(Debug, Clone, Copy, Default)]
pub struct CityBlock;

/// `max(|x - y|)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

/// `sum(|x - y|^p)^(1/p)` for a positive exponent `p`.
#[derive(Debug, Clone, Copy)]
pub struct Minkowski {
    p: f64,
    inv_p: f64,
}

/// Number of coordinates where the columns differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming<T> {
    marker: PhantomData<T>,
}

/// `1 - dot(x, y) / (|x| * |y|)`
///
/// When either column has zero norm the result is NaN, matching the plain
/// formula. Callers that care should screen their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

/// `sqrt(sum(w * (x - y)^2))`
#[derive(Debug, Clone, Copy)]
pub struct WeightedEuclidean<'w> {
    weights: &'w [f64],
}

/// `sum(w * (x - y)^2)`
#[derive(Debug, Clone, Copy)]
pub struct WeightedSquaredEuclidean<'w> {
    weights: &'w [f64],
}

/// `sum(w * |x - y|)`
#[derive(Debug, Clone, Copy)]
pub struct WeightedCityBlock<'w> {
    weights: &'w [f64],
}

/// `sum(w * |x - y|^p)^(1/p)` for a positive exponent `p`.
#[derive(Debug, Clone, Copy)]
pub struct WeightedMinkowski<'w> {
    p: f64,
    inv_p: f64,
    weights: &'w [f64],
}

/// Sum of weights over the coordinates where the columns differ.
#[derive(Debug, Clone, Copy)]
pub struct WeightedHamming<'w, T> {
    weights: &'w [f64],
    marker: PhantomData<T>,
}

impl Minkowski {
    /// The reciprocal exponent is cached since it is applied once per cell.
    pub fn new(p: f64) -> DistResult<Self> {
        if p > 0.0 {
            Ok(Self { p, inv_p: p.recip() })
        } else {
            Err(DistError::NonPositiveExponent(p))
        }
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<T> Hamming<T> {
    pub fn new() -> Self {
        Self { marker: PhantomData }
    }
}

impl<'w> WeightedEuclidean<'w> {
    pub fn new(weights: &'w [f64]) -> Self {
        Self { weights }
    }
}

impl<'w> WeightedSquaredEuclidean<'w> {
    pub fn new(weights: &'w [f64]) -> Self {
        Self { weights }
    }
}

impl<'w> WeightedCityBlock<'w> {
    pub fn new(weights: &'w [f64]) -> Self {
        Self { weights }
    }
}

impl<'w> WeightedMinkowski<'w> {
    pub fn new(p: f64, weights: &'w [f64]) -> DistResult<Self> {
        if p > 0.0 {
            Ok(Self { p, inv_p: p.recip(), weights })
        } else {
            Err(DistError::NonPositiveExponent(p))
        }
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<'w, T> WeightedHamming<'w, T> {
    pub fn new(weights: &'w [f64]) -> Self {
        Self { weights, marker: PhantomData }
    }
}

impl ColumnMetric for Euclidean {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Euclidean
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        SquaredEuclidean.evaluate(a, b).sqrt()
    }

    fn pairwise_into(
        &self,
        a: ColMatrixView<'_, f64>,
        b: ColMatrixView<'_, f64>,
        dst: &mut ColMatrix<f64>,
    ) {
        algebraic::euclidean_into(a, b, None, dst);
    }

    fn pairwise_self_into(&self, a: ColMatrixView<'_, f64>, dst: &mut ColMatrix<f64>) {
        algebraic::euclidean_self_into(a, None, dst);
    }
}

impl ColumnMetric for SquaredEuclidean {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::SquaredEuclidean
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum()
    }

    fn pairwise_into(
        &self,
        a: ColMatrixView<'_, f64>,
        b: ColMatrixView<'_, f64>,
        dst: &mut ColMatrix<f64>,
    ) {
        algebraic::sqeuclidean_into(a, b, None, dst);
    }

    fn pairwise_self_into(&self, a: ColMatrixView<'_, f64>, dst: &mut ColMatrix<f64>) {
        algebraic::sqeuclidean_self_into(a, None, dst);
    }
}

impl ColumnMetric for CityBlock {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::CityBlock
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
    }
}

impl ColumnMetric for Chebyshev {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Chebyshev
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
    }
}

impl ColumnMetric for Minkowski {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Minkowski
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs().powf(self.p)).sum();
        sum.powf(self.inv_p)
    }
}

impl<T: PartialEq> ColumnMetric for Hamming<T> {
    type Elem = T;
    type Output = u32;

    fn kind(&self) -> MetricKind {
        MetricKind::Hamming
    }

    fn evaluate(&self, a: &[T], b: &[T]) -> u32 {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).filter(|(x, y)| x != y).count() as u32
    }
}

impl ColumnMetric for Cosine {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Cosine
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        // Single pass over both columns, accumulating the dot product and both
        // squared norms together.
        let (xx, xy, yy) = a
            .iter()
            .zip(b)
            .fold((0.0, 0.0, 0.0), |(xx, xy, yy), (x, y)| {
                (xx + x * x, xy + x * y, yy + y * y)
            });
        1.0 - xy / (xx * yy).sqrt()
    }

    fn pairwise_into(
        &self,
        a: ColMatrixView<'_, f64>,
        b: ColMatrixView<'_, f64>,
        dst: &mut ColMatrix<f64>,
    ) {
        algebraic::cosine_into(a, b, dst);
    }

    fn pairwise_self_into(&self, a: ColMatrixView<'_, f64>, dst: &mut ColMatrix<f64>) {
        algebraic::cosine_self_into(a, dst);
    }
}

impl ColumnMetric for WeightedEuclidean<'_> {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Euclidean
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        WeightedSquaredEuclidean::new(self.weights).evaluate(a, b).sqrt()
    }

    fn required_dim(&self) -> Option<usize> {
        Some(self.weights.len())
    }

    fn pairwise_into(
        &self,
        a: ColMatrixView<'_, f64>,
        b: ColMatrixView<'_, f64>,
        dst: &mut ColMatrix<f64>,
    ) {
        algebraic::euclidean_into(a, b, Some(self.weights), dst);
    }

    fn pairwise_self_into(&self, a: ColMatrixView<'_, f64>, dst: &mut ColMatrix<f64>) {
        algebraic::euclidean_self_into(a, Some(self.weights), dst);
    }
}

impl ColumnMetric for WeightedSquaredEuclidean<'_> {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::SquaredEuclidean
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), self.weights.len());
        debug_assert_eq!(b.len(), self.weights.len());
        a.iter()
            .zip(b)
            .zip(self.weights)
            .map(|((x, y), w)| {
                let d = x - y;
                w * d * d
            })
            .sum()
    }

    fn required_dim(&self) -> Option<usize> {
        Some(self.weights.len())
    }

    fn pairwise_into(
        &self,
        a: ColMatrixView<'_, f64>,
        b: ColMatrixView<'_, f64>,
        dst: &mut ColMatrix<f64>,
    ) {
        algebraic::sqeuclidean_into(a, b, Some(self.weights), dst);
    }

    fn pairwise_self_into(&self, a: ColMatrixView<'_, f64>, dst: &mut ColMatrix<f64>) {
        algebraic::sqeuclidean_self_into(a, Some(self.weights), dst);
    }
}

impl ColumnMetric for WeightedCityBlock<'_> {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::CityBlock
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), self.weights.len());
        debug_assert_eq!(b.len(), self.weights.len());
        a.iter()
            .zip(b)
            .zip(self.weights)
            .map(|((x, y), w)| w * (x - y).abs())
            .sum()
    }

    fn required_dim(&self) -> Option<usize> {
        Some(self.weights.len())
    }
}

impl ColumnMetric for WeightedMinkowski<'_> {
    type Elem = f64;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Minkowski
    }

    fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), self.weights.len());
        debug_assert_eq!(b.len(), self.weights.len());
        let sum: f64 = a
            .iter()
            .zip(b)
            .zip(self.weights)
            .map(|((x, y), w)| w * (x - y).abs().powf(self.p))
            .sum();
        sum.powf(self.inv_p)
    }

    fn required_dim(&self) -> Option<usize> {
        Some(self.weights.len())
    }
}

impl<T: PartialEq> ColumnMetric for WeightedHamming<'_, T> {
    type Elem = T;
    type Output = f64;

    fn kind(&self) -> MetricKind {
        MetricKind::Hamming
    }

    fn evaluate(&self, a: &[T], b: &[T]) -> f64 {
        debug_assert_eq!(a.len(), self.weights.len());
        debug_assert_eq!(b.len(), self.weights.len());
        a.iter()
            .zip(b)
            .zip(self.weights)
            .filter(|((x, y), _)| x != y)
            .map(|(_, w)| w)
            .sum()
    }

    fn required_dim(&self) -> Option<usize> {
        Some(self.weights.len())
    }
}
