// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for presentations: edges, axes, backdrop styles, gesture samples, and phases.

use kurbo::Vec2;

/// Screen edge a presented surface slides in from or out to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Surface is anchored to the top edge and leaves upwards.
    Top,
    /// Surface is anchored to the bottom edge and leaves downwards.
    Bottom,
    /// Surface is anchored to the left edge and leaves leftwards.
    Left,
    /// Surface is anchored to the right edge and leaves rightwards.
    Right,
}

impl Edge {
    /// The coordinate that motion toward or away from this edge changes.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }

    /// Sign of motion along [`Edge::axis`] that moves a surface toward off-screen.
    ///
    /// `+1.0` for [`Bottom`](Self::Bottom) and [`Right`](Self::Right),
    /// `-1.0` for [`Top`](Self::Top) and [`Left`](Self::Left).
    pub const fn dismiss_sign(self) -> f64 {
        match self {
            Self::Bottom | Self::Right => 1.0,
            Self::Top | Self::Left => -1.0,
        }
    }
}

/// A single coordinate axis.
///
/// Edge-specific behavior is expressed as an axis plus a sign
/// (see [`Edge::axis`] and [`Edge::dismiss_sign`]).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal; extents are widths.
    X,
    /// Vertical; extents are heights.
    Y,
}

/// Style of the layer placed between the presenting content and the surface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BackdropStyle {
    /// No backdrop; its opacity stays at zero.
    None,
    /// A black layer tinted at [`DIMMED_TINT_ALPHA`].
    #[default]
    Dimmed,
    /// A blur of the presenting content.
    Blurred,
}

/// Alpha of the black tint used by [`BackdropStyle::Dimmed`].
///
/// The animated backdrop opacity multiplies this tint.
pub const DIMMED_TINT_ALPHA: f64 = 0.4;

impl BackdropStyle {
    /// Opacity the backdrop reaches once the surface is fully presented.
    pub const fn max_opacity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Dimmed | Self::Blurred => 1.0,
        }
    }

    /// Alpha of the backdrop's own tint color.
    pub const fn tint_alpha(self) -> f64 {
        match self {
            Self::Dimmed => DIMMED_TINT_ALPHA,
            Self::None | Self::Blurred => 0.0,
        }
    }
}

bitflags::bitflags! {
    /// How the presenting content reacts while the surface is shown.
    ///
    /// Purely geometric; see [`presenting_frame`](crate::geometry::presenting_frame).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BackgroundEffects: u8 {
        /// Presenting content is pushed away from the edge by the surface's extent.
        const PUSH     = 0b0000_0001;
        /// Presenting content is scaled down about its center.
        const MINIMIZE = 0b0000_0010;
    }
}

/// Phase of a drag gesture sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GesturePhase {
    /// The finger went down and the recognizer started tracking.
    Began,
    /// The finger moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The toolkit cancelled the gesture.
    Cancelled,
}

/// One drag sample delivered by the host's gesture recognizer.
///
/// `translation` is cumulative since the gesture began; `velocity` is
/// instantaneous, in points per second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSample {
    /// Translation since the gesture began.
    pub translation: Vec2,
    /// Instantaneous velocity.
    pub velocity: Vec2,
    /// Recognizer phase for this sample.
    pub phase: GesturePhase,
}

impl GestureSample {
    /// A [`Began`](GesturePhase::Began) sample at zero translation.
    pub const fn began() -> Self {
        Self {
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
            phase: GesturePhase::Began,
        }
    }

    /// A [`Changed`](GesturePhase::Changed) sample.
    pub const fn changed(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            translation,
            velocity,
            phase: GesturePhase::Changed,
        }
    }

    /// An [`Ended`](GesturePhase::Ended) sample.
    pub const fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            translation,
            velocity,
            phase: GesturePhase::Ended,
        }
    }

    /// A [`Cancelled`](GesturePhase::Cancelled) sample.
    pub const fn cancelled() -> Self {
        Self {
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
            phase: GesturePhase::Cancelled,
        }
    }
}

/// Phase of a live presentation session.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SessionPhase {
    /// Surface fully presented; no gesture or animation active.
    Settled,
    /// A drag gesture owns the surface's offset.
    Dragging,
    /// Animating back to the settled position (also used while presenting).
    AnimatingToSettled,
    /// Animating off-screen; the session ends when this finishes.
    AnimatingToDismissed,
    /// Terminal. The session has been torn down.
    Dismissed,
}

/// How an animation ended.
///
/// Every [`Animation`](crate::animation::Animation) reports exactly one completion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Completion {
    /// The animation ran to its end.
    Finished,
    /// The animation was superseded before reaching its end.
    Interrupted,
}

impl Completion {
    /// True for [`Completion::Finished`].
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}
