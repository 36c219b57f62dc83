/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use crate::distance::ColumnMetric;
use crate::error::{DistError, DistResult};
use crate::pairwise::check_dims;
use crate::views::ColMatrixView;

/// Evaluates the metric on corresponding column pairs instead of all pairs.
///
/// Returns one distance per pair. A single-column input broadcasts against
/// every column of the other side; otherwise column counts must agree.
pub fn colwise<M: ColumnMetric>(
    metric: &M,
    a: ColMatrixView<'_, M::Elem>,
    b: ColMatrixView<'_, M::Elem>,
) -> DistResult<Vec<M::Output>> {
    check_dims(metric, a.nrows(), b.nrows())?;

    let na = a.ncols();
    let nb = b.ncols();

    if na == 1 && nb != 1 {
        let a0 = a.col(0);
        return Ok(b.col_iter().map(|bj| metric.evaluate(a0, bj)).collect());
    }
    if nb == 1 && na != 1 {
        let b0 = b.col(0);
        return Ok(a.col_iter().map(|ai| metric.evaluate(ai, b0)).collect());
    }
    if na != nb {
        return Err(DistError::ColumnCountMismatch { a_cols: na, b_cols: nb });
    }

    Ok(a.col_iter()
        .zip(b.col_iter())
        .map(|(ai, bi)| metric.evaluate(ai, bi))
        .collect())
}
