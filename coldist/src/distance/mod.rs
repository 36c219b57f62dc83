/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

mod implementations;
mod kind;
mod metric;

pub use implementations::{
    Chebyshev, CityBlock, Cosine, Euclidean, Hamming, Minkowski, SquaredEuclidean,
    WeightedCityBlock, WeightedEuclidean, WeightedHamming, WeightedMinkowski,
    WeightedSquaredEuclidean,
};
pub use kind::{lp_kind, MetricKind, ParseMetricKindError};
pub use metric::ColumnMetric;
