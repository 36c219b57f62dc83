/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Pairwise distance evaluation over the columns of dense column-major matrices.
//!
//! Each sample is a matrix column. [`pairwise`] computes the full distance
//! matrix between two column sets, [`pairwise_self`] exploits symmetry for a
//! single set, and [`colwise`] evaluates corresponding columns with singleton
//! broadcast. Metrics implement [`ColumnMetric`]; the squared Euclidean,
//! Euclidean, and cosine families route their pairwise evaluation through GEMM.

#![cfg_attr(not(test), warn(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

mod colwise;
mod distance;
mod error;
mod pairwise;
mod views;

pub use colwise::colwise;
pub use distance::{
    lp_kind, Chebyshev, CityBlock, ColumnMetric, Cosine, Euclidean, Hamming, MetricKind,
    Minkowski, ParseMetricKindError, SquaredEuclidean, WeightedCityBlock, WeightedEuclidean,
    WeightedHamming, WeightedMinkowski, WeightedSquaredEuclidean,
};
pub use error::{DistError, DistResult};
pub use pairwise::{pairwise, pairwise_self, Pairwise};
pub use views::{ColMatrix, ColMatrixBase, ColMatrixView, DenseData, ShapeError};
