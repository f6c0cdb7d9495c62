// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_presentation --heading-base-level=0

//! Understory Presentation: interactive, edge-anchored presentation transitions.
//!
//! ## Overview
//!
//! A surface is presented from one screen edge, covering a fraction of its
//! container, over a dimmed or blurred backdrop. It can be dismissed
//! programmatically, by tapping the backdrop, or by dragging it back off-screen.
//!
//! The crate owns the geometry and the state machine. It does not draw, recognize
//! gestures, or own a clock. The toolkit implements
//! [`PresentationHost`](crate::host::PresentationHost) to receive frame and
//! opacity updates, feeds drag samples and taps in, and calls
//! [`on_frame`](crate::controller::InteractivePresentationController::on_frame)
//! once per display frame.
//!
//! ## Pieces
//!
//! - [`TransitionConfig`](crate::config::TransitionConfig): validated, immutable style (edge, coverage, duration, backdrop, tap-to-dismiss, background effects).
//! - [`PresentationAnimator`](crate::animation::PresentationAnimator): start/end geometry and ease-in-out animations for presenting and dismissing.
//! - [`InteractivePresentationController`](crate::controller::InteractivePresentationController): the drag/tap state machine; owns the surface offset and backdrop opacity.
//! - [`InputQueue`](crate::input::InputQueue) / [`InputSender`](crate::input::InputSender): the channel from recognizers to the controller.
//!
//! [`create_transition`] wires them together.
//!
//! ## Dragging
//!
//! Only motion toward dismissal moves the surface; the backdrop fades in lockstep.
//! Releasing after travelling at least [`DISMISS_THRESHOLD`](crate::geometry::DISMISS_THRESHOLD)
//! of the surface's extent dismisses, anything less settles back.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_presentation::config::TransitionConfig;
//! use understory_presentation::create_transition;
//! use understory_presentation::host::PresentationHost;
//! use understory_presentation::types::{Edge, GestureSample, SessionPhase};
//!
//! #[derive(Default)]
//! struct Stage { surface: Rect, opacity: f64, removed: bool }
//!
//! impl PresentationHost for Stage {
//!     fn container_size(&self) -> Option<Size> { Some(Size::new(375.0, 1000.0)) }
//!     fn set_surface_frame(&mut self, frame: Rect) { self.surface = frame; }
//!     fn set_backdrop_opacity(&mut self, opacity: f64) { self.opacity = opacity; }
//!     fn dismiss_presented(&mut self) { self.removed = true; }
//! }
//!
//! let config = TransitionConfig::new(Edge::Bottom, 0.8, Duration::from_millis(300)).unwrap();
//! let mut transition = create_transition(config);
//! let mut stage = Stage::default();
//!
//! transition.controller.will_present(&mut stage);
//! transition.controller.on_frame(Duration::from_millis(300), &mut stage);
//! assert_eq!(stage.surface.origin(), Point::new(0.0, 200.0));
//!
//! // Drag most of the way down and let go.
//! let tx = &transition.input;
//! tx.send_gesture(GestureSample::began());
//! tx.send_gesture(GestureSample::changed(Vec2::new(0.0, 850.0), Vec2::new(0.0, 400.0)));
//! tx.send_gesture(GestureSample::ended(Vec2::new(0.0, 850.0), Vec2::ZERO));
//! transition.controller.on_frame(Duration::ZERO, &mut stage);
//! assert_eq!(transition.controller.phase(), SessionPhase::AnimatingToDismissed);
//!
//! transition.controller.on_frame(Duration::from_millis(300), &mut stage);
//! assert!(stage.removed);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod types;

use animation::{PresentationAnimator, TransitionKind};
use config::TransitionConfig;
use controller::InteractivePresentationController;
use input::{InputQueue, InputSender};

/// Everything needed to run one presentation.
///
/// Returned by [`create_transition`].
#[derive(Debug)]
pub struct Transition {
    /// Animator for bringing the surface on screen.
    pub present_animator: PresentationAnimator,
    /// Animator for taking the surface off screen.
    pub dismiss_animator: PresentationAnimator,
    /// The interactive state machine, subscribed to [`Transition::input`].
    pub controller: InteractivePresentationController,
    /// Sending end for gesture samples and backdrop taps.
    pub input: InputSender,
}

/// Build the animators, controller and input channel for `config`.
pub fn create_transition(config: TransitionConfig) -> Transition {
    let present_animator = PresentationAnimator::new(TransitionKind::Present, config);
    let dismiss_animator = PresentationAnimator::new(TransitionKind::Dismiss, config);
    let queue = InputQueue::new();
    let input = queue.sender();
    let controller = InteractivePresentationController::with_animators(
        present_animator,
        dismiss_animator,
        queue,
    );
    Transition {
        present_animator,
        dismiss_animator,
        controller,
        input,
    }
}
