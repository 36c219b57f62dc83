/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

pub(crate) mod algebraic;
pub(crate) mod generic;
pub(crate) mod symmetric;

use crate::distance::ColumnMetric;
use crate::error::{DistError, DistResult};
use crate::views::{ColMatrix, ColMatrixView};

/// A validated, not-yet-evaluated pairwise distance computation.
///
/// Construction runs every shape check, so a `Pairwise` that exists can always
/// be evaluated. Evaluation allocates the result matrix and dispatches to the
/// metric's preferred evaluator.
#[derive(Debug, Clone, Copy)]
pub struct Pairwise<'a, M: ColumnMetric> {
    metric: &'a M,
    a: ColMatrixView<'a, M::Elem>,
    b: Option<ColMatrixView<'a, M::Elem>>,
}

impl<'a, M: ColumnMetric> Pairwise<'a, M> {
    /// Distances between every column of `a` and every column of `b`.
    pub fn new(
        metric: &'a M,
        a: ColMatrixView<'a, M::Elem>,
        b: ColMatrixView<'a, M::Elem>,
    ) -> DistResult<Self> {
        check_dims(metric, a.nrows(), b.nrows())?;
        Ok(Self { metric, a, b: Some(b) })
    }

    /// Distances between all column pairs of `a` itself.
    pub fn self_distance(metric: &'a M, a: ColMatrixView<'a, M::Elem>) -> DistResult<Self> {
        check_dims(metric, a.nrows(), a.nrows())?;
        Ok(Self { metric, a, b: None })
    }

    /// Number of rows of the result, one per column of `a`.
    pub fn nrows(&self) -> usize {
        self.a.ncols()
    }

    /// Number of columns of the result, one per column of `b` (or of `a` for a
    /// self-distance).
    pub fn ncols(&self) -> usize {
        self.b.map_or(self.a.ncols(), |b| b.ncols())
    }

    /// Evaluates into a freshly allocated matrix.
    pub fn eval(&self) -> ColMatrix<M::Output> {
        let mut dst = ColMatrix::zeros(self.nrows(), self.ncols());
        tracing::trace!(
            metric = %self.metric.kind(),
            nrows = dst.nrows(),
            ncols = dst.ncols(),
            self_distance = self.b.is_none(),
            "evaluating pairwise distances"
        );

        match self.b {
            Some(b) => self.metric.pairwise_into(self.a, b, &mut dst),
            None => self.metric.pairwise_self_into(self.a, &mut dst),
        }
        dst
    }
}

/// Verifies that both column lengths satisfy the metric.
///
/// Metrics with a pinned dimension (the weighted family) require both inputs to
/// match it exactly; otherwise the two inputs only have to agree with each other.
pub(crate) fn check_dims<M: ColumnMetric>(metric: &M, da: usize, db: usize) -> DistResult<()> {
    match metric.required_dim() {
        Some(required) => {
            if da != required {
                return Err(DistError::DimensionMismatch { expected: required, got: da });
            }
            if db != required {
                return Err(DistError::DimensionMismatch { expected: required, got: db });
            }
        }
        None => {
            if da != db {
                return Err(DistError::DimensionMismatch { expected: da, got: db });
            }
        }
    }
    Ok(())
}

/// Computes the full `a.ncols() x b.ncols()` distance matrix.
pub fn pairwise<M: ColumnMetric>(
    metric: &M,
    a: ColMatrixView<'_, M::Elem>,
    b: ColMatrixView<'_, M::Elem>,
) -> DistResult<ColMatrix<M::Output>> {
    Ok(Pairwise::new(metric, a, b)?.eval())
}

/// Computes the symmetric `a.ncols() x a.ncols()` self-distance matrix.
pub fn pairwise_self<M: ColumnMetric>(
    metric: &M,
    a: ColMatrixView<'_, M::Elem>,
) -> DistResult<ColMatrix<M::Output>> {
    Ok(Pairwise::self_distance(metric, a)?.eval())
}
