/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use thiserror::Error;

/// Result alias used throughout the crate.
pub type DistResult<T> = Result<T, DistError>;

/// Errors reported by the precondition checks that run before any distance is computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DistError {
    /// The column length of an input does not match what the metric requires, or the two
    /// inputs disagree with each other.
    #[error("inconsistent dimensions: expected columns of length {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Column-wise evaluation needs equal column counts unless one side is a single column.
    #[error("a and b have different numbers of columns ({a_cols} vs {b_cols}) and neither is a single column")]
    ColumnCountMismatch { a_cols: usize, b_cols: usize },

    /// The Minkowski family is only defined for a positive exponent.
    #[error("minkowski exponent must be positive, got {0}")]
    NonPositiveExponent(f64),
}
