/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use num_traits::Zero;

use super::MetricKind;
use crate::views::{ColMatrix, ColMatrixView};

/// A distance function over matrix columns.
///
/// `evaluate` defines the metric on a single pair of columns. The `pairwise_into`
/// hooks have generic per-cell defaults; metrics with an algebraic formulation
/// (squared Euclidean, Euclidean, cosine) override them to run on GEMM instead.
/// Callers are expected to have validated shapes before invoking the hooks.
pub trait ColumnMetric {
    type Elem;
    type Output: Copy + Zero;

    /// The family this metric belongs to.
    fn kind(&self) -> MetricKind;

    /// Computes the distance between two columns of equal length.
    fn evaluate(&self, a: &[Self::Elem], b: &[Self::Elem]) -> Self::Output;

    /// A fixed column length this metric requires, if any.
    ///
    /// Weighted metrics pin the dimension to the length of their weight vector.
    fn required_dim(&self) -> Option<usize> {
        None
    }

    /// Fills `dst[(i, j)]` with the distance between column `i` of `a` and column
    /// `j` of `b`.
    fn pairwise_into(
        &self,
        a: ColMatrixView<'_, Self::Elem>,
        b: ColMatrixView<'_, Self::Elem>,
        dst: &mut ColMatrix<Self::Output>,
    ) where
        Self: Sized,
    {
        crate::pairwise::generic::pairwise_into(self, a, b, dst);
    }

    /// Fills `dst` with the distances between all column pairs of `a`.
    ///
    /// Symmetric metrics evaluate only the lower triangle and mirror it.
    fn pairwise_self_into(
        &self,
        a: ColMatrixView<'_, Self::Elem>,
        dst: &mut ColMatrix<Self::Output>,
    ) where
        Self: Sized,
    {
        if self.kind().is_symmetric() {
            crate::pairwise::symmetric::pairwise_self_into(self, a, dst);
        } else {
            crate::pairwise::generic::pairwise_into(self, a, a, dst);
        }
    }
}
