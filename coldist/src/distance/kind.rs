/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// The family a column metric belongs to.
///
/// The kind drives evaluator selection: symmetric metrics get the triangular
/// self-distance path and positive-definite metrics get an exact-zero diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Euclidean,
    SquaredEuclidean,
    CityBlock,
    Chebyshev,
    Minkowski,
    Hamming,
    Cosine,
}

impl MetricKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::SquaredEuclidean => "sqeuclidean",
            MetricKind::CityBlock => "cityblock",
            MetricKind::Chebyshev => "chebyshev",
            MetricKind::Minkowski => "minkowski",
            MetricKind::Hamming => "hamming",
            MetricKind::Cosine => "cosine",
        }
    }

    /// Whether `d(x, y) == d(y, x)` holds for the family.
    pub const fn is_symmetric(&self) -> bool {
        match self {
            MetricKind::Euclidean
            | MetricKind::SquaredEuclidean
            | MetricKind::CityBlock
            | MetricKind::Chebyshev
            | MetricKind::Minkowski
            | MetricKind::Hamming
            | MetricKind::Cosine => true,
        }
    }

    /// Whether `d(x, x) == 0` holds for the family.
    pub const fn is_positive_definite(&self) -> bool {
        match self {
            MetricKind::Euclidean
            | MetricKind::SquaredEuclidean
            | MetricKind::CityBlock
            | MetricKind::Chebyshev
            | MetricKind::Minkowski
            | MetricKind::Hamming
            | MetricKind::Cosine => true,
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized metric kind \"{0}\"")]
pub struct ParseMetricKindError(String);

impl FromStr for MetricKind {
    type Err = ParseMetricKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(MetricKind::Euclidean),
            "sqeuclidean" => Ok(MetricKind::SquaredEuclidean),
            "cityblock" => Ok(MetricKind::CityBlock),
            "chebyshev" => Ok(MetricKind::Chebyshev),
            "minkowski" => Ok(MetricKind::Minkowski),
            "hamming" => Ok(MetricKind::Hamming),
            "cosine" => Ok(MetricKind::Cosine),
            _ => Err(ParseMetricKindError(s.to_string())),
        }
    }
}

/// Maps a Minkowski exponent to the family that computes it most directly.
pub fn lp_kind(p: f64) -> MetricKind {
    if p == 1.0 {
        MetricKind::CityBlock
    } else if p == 2.0 {
        MetricKind::Euclidean
    } else if p == f64::INFINITY {
        MetricKind::Chebyshev
    } else {
        MetricKind::Minkowski
    }
}
