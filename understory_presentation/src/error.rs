// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by configuration and geometry.

use core::fmt;

use kurbo::Size;

use crate::types::Edge;

/// A [`TransitionConfig`](crate::config::TransitionConfig) was rejected at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Coverage must lie in `(0, 1]`. NaN is rejected too.
    CoverageOutOfRange {
        /// The rejected coverage.
        coverage: f64,
    },
    /// Duration must be strictly positive.
    NonPositiveDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoverageOutOfRange { coverage } => {
                write!(f, "invalid transition config: coverage {coverage} is outside (0, 1]")
            }
            Self::NonPositiveDuration => {
                write!(f, "invalid transition config: duration must be positive")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// The container has no extent along the transition axis.
///
/// Callers recover by treating the animation as immediately complete.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Zero-sized (or non-finite) container along the edge's axis.
    DegenerateGeometry {
        /// Edge whose axis was measured.
        edge: Edge,
        /// The container size at the time of the request.
        container: Size,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { edge, container } => write!(
                f,
                "degenerate geometry: container {}x{} has no extent along the {:?} edge axis",
                container.width, container.height, edge
            ),
        }
    }
}

impl core::error::Error for GeometryError {}
