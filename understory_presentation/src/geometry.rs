// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-parameterized geometry helpers.
//!
//! Every edge is handled by one algorithm: pick the edge's [`Axis`] and
//! multiply by [`Edge::dismiss_sign`]. A *displacement* is the distance a
//! surface has moved from its settled origin toward off-screen; it is positive
//! when moving toward dismissal.

use kurbo::{Point, Rect, Size, Vec2};

use crate::error::GeometryError;
use crate::types::{Axis, BackgroundEffects, Edge};

/// Fraction of the surface's extent a drag must travel for release to dismiss.
///
/// Measured against the surface's own extent (`coverage` of the container),
/// not the container's.
pub const DISMISS_THRESHOLD: f64 = 0.8;

/// Scale applied to the presenting content at full presentation with
/// [`BackgroundEffects::MINIMIZE`].
pub const MINIMIZED_SCALE: f64 = 0.92;

impl Axis {
    /// The component of `v` along this axis.
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }

    /// The extent of `size` along this axis (width for `X`, height for `Y`).
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// A vector of length `len` along this axis.
    pub fn vec(self, len: f64) -> Vec2 {
        match self {
            Self::X => Vec2::new(len, 0.0),
            Self::Y => Vec2::new(0.0, len),
        }
    }
}

/// Signed length of `v` along `edge`'s axis, positive toward dismissal.
pub fn toward_dismissal(edge: Edge, v: Vec2) -> f64 {
    edge.dismiss_sign() * edge.axis().component(v)
}

/// The container's extent along `edge`'s axis, or an error when it is zero.
///
/// Negative and non-finite extents are treated as zero.
pub fn container_extent(edge: Edge, container: Size) -> Result<f64, GeometryError> {
    let extent = edge.axis().extent(container);
    if extent > 0.0 && extent.is_finite() {
        Ok(extent)
    } else {
        Err(GeometryError::DegenerateGeometry { edge, container })
    }
}

/// Origin that places a surface entirely outside the container on `edge`.
///
/// `Bottom`/`Right` put the origin on the container's far edge; `Top`/`Left`
/// move it back by a whole container extent, which clears any surface no
/// larger than the container.
pub fn offscreen_origin(edge: Edge, container: Size) -> Point {
    match edge {
        Edge::Top => Point::new(0.0, -container.height),
        Edge::Bottom => Point::new(0.0, container.height),
        Edge::Left => Point::new(-container.width, 0.0),
        Edge::Right => Point::new(container.width, 0.0),
    }
}

/// `origin` moved entirely outside the container through `edge`.
///
/// Only the coordinate along `edge`'s axis changes, so a surface leaving
/// through an edge on the other axis slides straight out.
pub fn exited_origin(edge: Edge, origin: Point, container: Size) -> Point {
    let off = offscreen_origin(edge, container);
    match edge.axis() {
        Axis::X => Point::new(off.x, origin.y),
        Axis::Y => Point::new(origin.x, off.y),
    }
}

/// Frame of a fully presented surface anchored flush against `edge`.
///
/// The surface spans the whole cross-axis and `coverage` of the edge axis.
pub fn onscreen_frame(edge: Edge, coverage: f64, container: Size) -> Rect {
    let w = container.width;
    let h = container.height;
    match edge {
        Edge::Top => Rect::new(0.0, 0.0, w, coverage * h),
        Edge::Bottom => Rect::new(0.0, h - coverage * h, w, h),
        Edge::Left => Rect::new(0.0, 0.0, coverage * w, h),
        Edge::Right => Rect::new(w - coverage * w, 0.0, w, h),
    }
}

/// Extent of the presented surface along `edge`'s axis.
pub fn surface_extent(edge: Edge, coverage: f64, container: Size) -> f64 {
    coverage * edge.axis().extent(container)
}

/// Displacement of `origin` from `settled`, positive toward dismissal on `edge`.
pub fn displacement(edge: Edge, settled: Point, origin: Point) -> f64 {
    toward_dismissal(edge, origin - settled)
}

/// The origin reached by moving `settled` by `displacement` toward dismissal.
pub fn displaced(edge: Edge, settled: Point, displacement: f64) -> Point {
    settled + edge.axis().vec(edge.dismiss_sign() * displacement)
}

/// How much of the surface is still presented after a displacement, in `[0, 1]`.
///
/// `1` at the settled position, `0` once the surface has moved its own extent.
pub fn presented_fraction(displacement: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (1.0 - displacement / extent).clamp(0.0, 1.0)
}

/// Frame of the presenting content for a given presented fraction.
///
/// With [`BackgroundEffects::PUSH`] the content is moved away from `edge` by
/// `fraction * extent`. With [`BackgroundEffects::MINIMIZE`] it is scaled about
/// its center, reaching [`MINIMIZED_SCALE`] at `fraction == 1`. With no effects
/// this is the container's bounds.
pub fn presenting_frame(
    edge: Edge,
    effects: BackgroundEffects,
    container: Size,
    extent: f64,
    fraction: f64,
) -> Rect {
    let fraction = fraction.clamp(0.0, 1.0);
    let mut frame = container.to_rect();
    if effects.contains(BackgroundEffects::PUSH) {
        frame = frame + edge.axis().vec(-edge.dismiss_sign() * fraction * extent);
    }
    if effects.contains(BackgroundEffects::MINIMIZE) {
        let scale = 1.0 - (1.0 - MINIMIZED_SCALE) * fraction;
        frame = Rect::from_center_size(frame.center(), frame.size() * scale);
    }
    frame
}
