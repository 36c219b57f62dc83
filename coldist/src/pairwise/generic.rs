/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use crate::distance::ColumnMetric;
use crate::views::{ColMatrix, ColMatrixView};

/// Evaluates the metric on every column pair, one cell at a time.
///
/// Works for any metric. Columns of `b` address the output columns, so each
/// `b` column is fetched once and streamed against all of `a`.
pub(crate) fn pairwise_into<M: ColumnMetric>(
    metric: &M,
    a: ColMatrixView<'_, M::Elem>,
    b: ColMatrixView<'_, M::Elem>,
    dst: &mut ColMatrix<M::Output>,
) {
    debug_assert_eq!(dst.nrows(), a.ncols());
    debug_assert_eq!(dst.ncols(), b.ncols());

    tracing::trace!(metric = %metric.kind(), "cellwise pairwise evaluation");

    for j in 0..b.ncols() {
        let bj = b.col(j);
        let out = dst.col_mut(j);
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = metric.evaluate(a.col(i), bj);
        }
    }
}
