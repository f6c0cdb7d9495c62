// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven animations between keyframes, and the present/dismiss animator.
//!
//! ## Driving
//!
//! Animations do not own a clock. The host calls [`Animation::advance`] once per
//! frame with the elapsed time and applies [`Animation::value`]. An animation
//! reports its [`Completion`] exactly once: either [`Completion::Finished`] from
//! the `advance` call that reaches the end, or [`Completion::Interrupted`] from
//! [`Animation::interrupt`] if it is superseded first.

use core::time::Duration;

use kurbo::{Point, Rect, Size};

use crate::config::TransitionConfig;
use crate::easing::ease_in_out;
use crate::error::GeometryError;
use crate::geometry;
use crate::host::PresentationHost;
use crate::types::{Completion, Edge};

/// Duration of the return-to-settled animation after an abandoned drag.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Animated state of a presentation: surface origin and backdrop opacity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Origin of the surface frame in container coordinates.
    pub origin: Point,
    /// Backdrop opacity in `[0, 1]`.
    pub backdrop_opacity: f64,
}

impl Keyframe {
    /// Interpolate toward `other` by `t`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            origin: self.origin.lerp(other.origin, t),
            backdrop_opacity: self.backdrop_opacity
                + (other.backdrop_opacity - self.backdrop_opacity) * t,
        }
    }
}

/// An ease-in-out tween between two keyframes.
#[derive(Clone, Debug)]
pub struct Animation {
    from: Keyframe,
    to: Keyframe,
    duration: Duration,
    elapsed: Duration,
    done: bool,
}

impl Animation {
    /// Create an animation from `from` to `to` over `duration`.
    pub fn new(from: Keyframe, to: Keyframe, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            done: false,
        }
    }

    /// Starting keyframe.
    pub fn from(&self) -> Keyframe {
        self.from
    }

    /// Final keyframe.
    pub fn to(&self) -> Keyframe {
        self.to
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return 1.0;
        }
        self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Current keyframe.
    ///
    /// Returns `to` exactly once the end is reached.
    pub fn value(&self) -> Keyframe {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_in_out(t))
    }

    /// True once a completion has been reported.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance the clock by `elapsed`.
    ///
    /// Returns `Some(Completion::Finished)` from the call that reaches the end,
    /// and `None` otherwise (including every call after a completion).
    pub fn advance(&mut self, elapsed: Duration) -> Option<Completion> {
        if self.done {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(elapsed).min(self.duration);
        if self.elapsed >= self.duration {
            self.done = true;
            return Some(Completion::Finished);
        }
        None
    }

    /// Supersede the animation where it stands.
    ///
    /// Returns `Some(Completion::Interrupted)` unless a completion was already reported.
    pub fn interrupt(&mut self) -> Option<Completion> {
        if self.done {
            return None;
        }
        self.done = true;
        Some(Completion::Interrupted)
    }
}

/// Which half of a presentation an animator drives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TransitionKind {
    /// Bring the surface on screen.
    Present,
    /// Take the surface off screen.
    Dismiss,
}

/// Computes start and end geometry for a presentation or dismissal and builds
/// the animation between them.
///
/// Two animators exist per transition, one per [`TransitionKind`]; see
/// [`create_transition`](crate::create_transition).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PresentationAnimator {
    kind: TransitionKind,
    config: TransitionConfig,
}

impl PresentationAnimator {
    /// Create an animator of `kind` for `config`.
    pub fn new(kind: TransitionKind, config: TransitionConfig) -> Self {
        Self { kind, config }
    }

    /// The half this animator drives.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// The config this animator was built from.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Origin placing the surface fully outside `container` on `edge`.
    ///
    /// See [`geometry::offscreen_origin`].
    pub fn compute_initial_offscreen_position(edge: Edge, container: Size) -> Point {
        geometry::offscreen_origin(edge, container)
    }

    /// Rectangle the fully presented surface occupies.
    ///
    /// See [`geometry::onscreen_frame`].
    pub fn compute_onscreen_frame(edge: Edge, coverage: f64, container: Size) -> Rect {
        geometry::onscreen_frame(edge, coverage, container)
    }

    /// Keyframe of the fully presented surface.
    pub fn settled_keyframe(&self, container: Size) -> Keyframe {
        let frame =
            Self::compute_onscreen_frame(self.config.edge(), self.config.coverage(), container);
        Keyframe {
            origin: frame.origin(),
            backdrop_opacity: self.config.backdrop().max_opacity(),
        }
    }

    /// Keyframe of a surface that has left through `edge`.
    pub fn offscreen_keyframe(edge: Edge, container: Size) -> Keyframe {
        Keyframe {
            origin: Self::compute_initial_offscreen_position(edge, container),
            backdrop_opacity: 0.0,
        }
    }

    /// Start presenting: place the surface off-screen with a clear backdrop and
    /// return the animation to the settled keyframe over the config's duration.
    ///
    /// On a degenerate container nothing is applied to the host.
    pub fn animate_present<H: PresentationHost + ?Sized>(
        &self,
        host: &mut H,
        container: Size,
    ) -> Result<Animation, GeometryError> {
        let edge = self.config.edge();
        geometry::container_extent(edge, container)?;
        let frame = Self::compute_onscreen_frame(edge, self.config.coverage(), container);
        let from = Self::offscreen_keyframe(edge, container);
        let to = self.settled_keyframe(container);
        host.set_surface_frame(frame.with_origin(from.origin));
        host.set_backdrop_opacity(from.backdrop_opacity);
        Ok(Animation::new(from, to, self.config.duration()))
    }

    /// Start dismissing from `from` through the config's dismiss edge.
    pub fn animate_dismiss(
        &self,
        from: Keyframe,
        container: Size,
    ) -> Result<Animation, GeometryError> {
        self.animate_dismiss_through(self.config.dismiss_edge(), from, container)
    }

    /// Start dismissing from `from` through an explicit edge.
    ///
    /// Used when a drag has already carried the surface toward its own edge.
    /// The surface keeps its position on the other axis.
    pub fn animate_dismiss_through(
        &self,
        edge: Edge,
        from: Keyframe,
        container: Size,
    ) -> Result<Animation, GeometryError> {
        geometry::container_extent(edge, container)?;
        let to = Keyframe {
            origin: geometry::exited_origin(edge, from.origin, container),
            backdrop_opacity: 0.0,
        };
        Ok(Animation::new(from, to, self.config.duration()))
    }

    /// The return-to-settled animation, over [`SETTLE_DURATION`].
    pub fn settle(from: Keyframe, to: Keyframe) -> Animation {
        Animation::new(from, to, SETTLE_DURATION)
    }
}
