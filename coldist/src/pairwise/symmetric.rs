/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use num_traits::Zero;

use crate::distance::ColumnMetric;
use crate::views::{ColMatrix, ColMatrixView};

/// Self-distance evaluator for symmetric metrics.
///
/// Only the strict lower triangle is evaluated; the upper triangle is mirrored
/// from cells computed by earlier columns. For positive-definite metrics the
/// diagonal is written as exact zero without evaluating the metric.
pub(crate) fn pairwise_self_into<M: ColumnMetric>(
    metric: &M,
    a: ColMatrixView<'_, M::Elem>,
    dst: &mut ColMatrix<M::Output>,
) {
    let n = a.ncols();
    debug_assert_eq!(dst.nrows(), n);
    debug_assert_eq!(dst.ncols(), n);

    let positive_definite = metric.kind().is_positive_definite();
    tracing::trace!(metric = %metric.kind(), "triangular self-distance evaluation");

    for j in 0..n {
        let aj = a.col(j);

        for i in 0..j {
            let mirrored = dst[(j, i)];
            dst[(i, j)] = mirrored;
        }

        dst[(j, j)] = if positive_definite {
            M::Output::zero()
        } else {
            metric.evaluate(aj, aj)
        };

        for i in (j + 1)..n {
            dst[(i, j)] = metric.evaluate(a.col(i), aj);
        }
    }
}
