// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adapter a toolkit implements to host a presentation.

use kurbo::{Rect, Size};

/// Host-side handles for one presented surface.
///
/// The controller writes every geometry and opacity change through this trait
/// synchronously with the input that caused it. Implementations forward the
/// calls to the toolkit's surface view, backdrop view, and presenting view.
pub trait PresentationHost {
    /// Size of the container the surface is presented in.
    ///
    /// `None` once the container has been torn down; input arriving then is dropped.
    fn container_size(&self) -> Option<Size>;

    /// Set the presented surface's frame in container coordinates.
    fn set_surface_frame(&mut self, frame: Rect);

    /// Set the backdrop's opacity, in `[0, 1]`.
    fn set_backdrop_opacity(&mut self, opacity: f64);

    /// Set the backdrop's frame. Called once when presentation begins.
    fn set_backdrop_frame(&mut self, _frame: Rect) {}

    /// Set the presenting content's frame.
    ///
    /// Only called when the config has
    /// [`BackgroundEffects`](crate::types::BackgroundEffects) set.
    fn set_presenting_frame(&mut self, _frame: Rect) {}

    /// Remove the surface. Called at most once, when the session ends.
    fn dismiss_presented(&mut self);
}
