// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive presentation state machine.
//!
//! ## States
//!
//! ```text
//! Settled ──began──▶ Dragging ──ended (< threshold) / cancelled / pulled back──▶ AnimatingToSettled ──▶ Settled
//!    │                  └──ended (≥ threshold)──▶ AnimatingToDismissed ──▶ Dismissed
//!    └──tap (tap-to-dismiss) / will_dismiss──▶ AnimatingToDismissed
//! ```
//!
//! Presenting runs in [`AnimatingToSettled`](SessionPhase::AnimatingToSettled): the
//! surface animates from off-screen to its settled origin.
//!
//! ## Dragging
//!
//! Only motion toward dismissal moves the surface. Displacement is measured
//! along the edge's axis from the settled origin; the backdrop fades with it,
//! reaching zero once the surface has moved its own extent. A sample that is
//! not actively pulling toward dismissal, or that brings the surface back to
//! its settled origin, starts the return-to-settled animation at once.
//!
//! On release the surface dismisses if it travelled at least
//! [`DISMISS_THRESHOLD`] of its extent, and otherwise settles back over
//! [`SETTLE_DURATION`](crate::animation::SETTLE_DURATION).
//!
//! ## Superseding
//!
//! A gesture that starts while a settle (or present) animation is in flight
//! interrupts it and takes over from wherever the surface is. Interrupted
//! animations never produce terminal effects.

use core::time::Duration;

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace, warn};

use crate::animation::{Animation, Keyframe, PresentationAnimator, TransitionKind};
use crate::config::TransitionConfig;
use crate::geometry::{self, DISMISS_THRESHOLD};
use crate::host::PresentationHost;
use crate::input::{InputEvent, InputQueue};
use crate::types::{Completion, Edge, GesturePhase, GestureSample, SessionPhase};

/// The capability interface a host binds to its lifecycle and input hooks.
pub trait Presentation<H: ?Sized> {
    /// The surface is about to be presented.
    fn will_present(&mut self, host: &mut H);
    /// The surface should be dismissed programmatically.
    fn will_dismiss(&mut self, host: &mut H);
    /// A drag sample arrived from the surface's pan recognizer.
    fn on_gesture_sample(&mut self, sample: GestureSample, host: &mut H);
    /// The backdrop was tapped.
    fn on_tap(&mut self, host: &mut H);
    /// A display frame elapsed.
    fn on_frame(&mut self, elapsed: Duration, host: &mut H);
}

/// Live state of one presented surface.
///
/// Owned by [`InteractivePresentationController`]; only the controller mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationSession {
    config: TransitionConfig,
    container: Size,
    surface_size: Size,
    settled: Keyframe,
    current_offset: Point,
    backdrop_opacity: f64,
    phase: SessionPhase,
}

impl PresentationSession {
    fn new(config: TransitionConfig, container: Size) -> Self {
        let frame = geometry::onscreen_frame(config.edge(), config.coverage(), container);
        let start = PresentationAnimator::offscreen_keyframe(config.edge(), container);
        Self {
            config,
            container,
            surface_size: frame.size(),
            settled: Keyframe {
                origin: frame.origin(),
                backdrop_opacity: config.backdrop().max_opacity(),
            },
            current_offset: start.origin,
            backdrop_opacity: start.backdrop_opacity,
            phase: SessionPhase::AnimatingToSettled,
        }
    }

    /// The config the session was presented with.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Container size captured when presentation began.
    pub fn container(&self) -> Size {
        self.container
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current origin of the surface.
    pub fn current_offset(&self) -> Point {
        self.current_offset
    }

    /// Current backdrop opacity, in `[0, 1]`.
    pub fn backdrop_opacity(&self) -> f64 {
        self.backdrop_opacity
    }

    /// Resting origin of the fully presented surface.
    pub fn settled_offset(&self) -> Point {
        self.settled.origin
    }

    /// The surface's current frame.
    pub fn surface_frame(&self) -> Rect {
        Rect::from_origin_size(self.current_offset, self.surface_size)
    }

    /// Extent of the surface along the edge axis.
    pub fn surface_extent(&self) -> f64 {
        geometry::surface_extent(self.config.edge(), self.config.coverage(), self.container)
    }

    /// Distance travelled from the settled origin toward dismissal.
    pub fn displacement(&self) -> f64 {
        geometry::displacement(self.config.edge(), self.settled.origin, self.current_offset)
    }

    fn keyframe(&self) -> Keyframe {
        Keyframe {
            origin: self.current_offset,
            backdrop_opacity: self.backdrop_opacity,
        }
    }

    fn set_keyframe(&mut self, k: Keyframe) {
        self.current_offset = k.origin;
        self.backdrop_opacity = k.backdrop_opacity.clamp(0.0, 1.0);
    }

    fn set_displacement(&mut self, displacement: f64) {
        let extent = self.surface_extent();
        self.current_offset =
            geometry::displaced(self.config.edge(), self.settled.origin, displacement);
        self.backdrop_opacity = self.settled.backdrop_opacity
            * geometry::presented_fraction(displacement, extent);
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "presentation phase");
            self.phase = phase;
        }
    }

    fn apply<H: PresentationHost + ?Sized>(&self, host: &mut H) {
        host.set_surface_frame(self.surface_frame());
        host.set_backdrop_opacity(self.backdrop_opacity);
        let effects = self.config.background_effects();
        if !effects.is_empty() {
            let extent = self.surface_extent();
            let fraction = geometry::presented_fraction(self.displacement(), extent);
            host.set_presenting_frame(geometry::presenting_frame(
                self.config.edge(),
                effects,
                self.container,
                extent,
                fraction,
            ));
        }
    }
}

/// Where a drag measures from.
///
/// `base` is the displacement when the drag took over the surface, `anchor`
/// the translation (toward dismissal) of the sample that took over.
#[derive(Copy, Clone, Debug)]
struct DragTrack {
    base: f64,
    anchor: f64,
}

impl DragTrack {
    fn start(base: f64, edge: Edge, sample: &GestureSample) -> Self {
        Self {
            base,
            anchor: geometry::toward_dismissal(edge, sample.translation),
        }
    }

    fn candidate(&self, edge: Edge, sample: &GestureSample) -> f64 {
        self.base + geometry::toward_dismissal(edge, sample.translation) - self.anchor
    }
}

/// Owns a presented surface's geometry and backdrop for the lifetime of a presentation.
///
/// Consumes drag samples and backdrop taps (directly, or through the
/// [`InputQueue`] passed at construction), drives the present, settle and
/// dismiss animations on [`on_frame`](Self::on_frame), and sends the host a
/// single dismiss command when the session ends.
#[derive(Debug)]
pub struct InteractivePresentationController {
    config: TransitionConfig,
    present: PresentationAnimator,
    dismiss: PresentationAnimator,
    input: InputQueue,
    session: Option<PresentationSession>,
    drag: Option<DragTrack>,
    animation: Option<Animation>,
    dismissed: bool,
}

impl InteractivePresentationController {
    /// Create a controller for `config`, subscribed to `input`.
    pub fn new(config: TransitionConfig, input: InputQueue) -> Self {
        Self::with_animators(
            PresentationAnimator::new(TransitionKind::Present, config),
            PresentationAnimator::new(TransitionKind::Dismiss, config),
            input,
        )
    }

    /// Create a controller that delegates to the given animators.
    ///
    /// The present animator's config is used for the session.
    pub fn with_animators(
        present: PresentationAnimator,
        dismiss: PresentationAnimator,
        input: InputQueue,
    ) -> Self {
        Self {
            config: *present.config(),
            present,
            dismiss,
            input,
            session: None,
            drag: None,
            animation: None,
            dismissed: false,
        }
    }

    /// The transition config.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// The live session, if the surface has been presented and not yet torn down.
    pub fn session(&self) -> Option<&PresentationSession> {
        self.session.as_ref()
    }

    /// Current phase.
    ///
    /// Before [`will_present`](Self::will_present) the controller is
    /// [`Settled`](SessionPhase::Settled) with no session.
    pub fn phase(&self) -> SessionPhase {
        match &self.session {
            Some(session) => session.phase,
            None if self.dismissed => SessionPhase::Dismissed,
            None => SessionPhase::Settled,
        }
    }

    /// Current surface origin, if a session is live.
    pub fn current_offset(&self) -> Option<Point> {
        self.session.as_ref().map(PresentationSession::current_offset)
    }

    /// Current backdrop opacity, if a session is live.
    pub fn backdrop_opacity(&self) -> Option<f64> {
        self.session.as_ref().map(PresentationSession::backdrop_opacity)
    }

    /// True while a present, settle or dismiss animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start presenting in the host's container.
    ///
    /// Ignored if a session already exists or has ended. With a degenerate
    /// container the surface is placed at its settled origin immediately.
    pub fn will_present<H: PresentationHost + ?Sized>(&mut self, host: &mut H) {
        if self.session.is_some() || self.dismissed {
            trace!("present ignored: presentation already started");
            return;
        }
        let Some(container) = host.container_size() else {
            trace!("present dropped: no container");
            return;
        };
        let mut session = PresentationSession::new(self.config, container);
        host.set_backdrop_frame(container.to_rect());
        match self.present.animate_present(host, container) {
            Ok(animation) => {
                self.animation = Some(animation);
            }
            Err(err) => {
                warn!(%err, "skipping present animation");
                session.set_keyframe(session.settled);
                session.set_phase(SessionPhase::Settled);
            }
        }
        session.apply(host);
        debug!(edge = ?self.config.edge(), "presentation started");
        self.session = Some(session);
    }

    /// Dismiss through the config's dismiss edge.
    ///
    /// A no-op while already dismissing or after dismissal.
    pub fn will_dismiss<H: PresentationHost + ?Sized>(&mut self, host: &mut H) {
        self.dismiss_through(self.config.dismiss_edge(), host);
    }

    /// Handle a backdrop tap.
    ///
    /// Dismisses from [`Settled`](SessionPhase::Settled) when tap-to-dismiss is
    /// enabled; otherwise does nothing.
    pub fn on_tap<H: PresentationHost + ?Sized>(&mut self, host: &mut H) {
        if !self.config.tap_to_dismiss() {
            trace!("tap ignored: tap-to-dismiss disabled");
            return;
        }
        if self.session.as_ref().map(PresentationSession::phase) != Some(SessionPhase::Settled) {
            trace!(phase = ?self.phase(), "tap ignored");
            return;
        }
        self.dismiss_through(self.config.dismiss_edge(), host);
    }

    /// Handle one drag sample. Geometry changes reach the host before this returns.
    pub fn on_gesture_sample<H: PresentationHost + ?Sized>(
        &mut self,
        sample: GestureSample,
        host: &mut H,
    ) {
        let Some(session) = self.session.as_mut() else {
            trace!(phase = ?sample.phase, "sample dropped: no live session");
            return;
        };
        if host.container_size().is_none() {
            trace!(phase = ?sample.phase, "sample dropped: container torn down");
            return;
        }
        let edge = self.config.edge();
        let mut dismiss = false;

        match sample.phase {
            GesturePhase::Began => match session.phase {
                SessionPhase::Settled
                | SessionPhase::AnimatingToSettled
                | SessionPhase::Dragging => {
                    supersede(&mut self.animation);
                    let base = session.displacement().max(0.0);
                    self.drag = Some(DragTrack::start(base, edge, &sample));
                    session.set_phase(SessionPhase::Dragging);
                }
                SessionPhase::AnimatingToDismissed | SessionPhase::Dismissed => {
                    trace!("began ignored while dismissing");
                }
            },
            GesturePhase::Changed => {
                let pulling = geometry::toward_dismissal(edge, sample.velocity) > 0.0;
                if session.phase == SessionPhase::AnimatingToSettled {
                    // Only take over while the surface is still displaced.
                    let base = session.displacement();
                    if !(pulling && base > 0.0) {
                        return;
                    }
                    supersede(&mut self.animation);
                    self.drag = Some(DragTrack::start(base, edge, &sample));
                    session.set_phase(SessionPhase::Dragging);
                }
                let (SessionPhase::Dragging, Some(drag)) = (session.phase, self.drag) else {
                    trace!(phase = ?session.phase, "changed ignored");
                    return;
                };
                let candidate = drag.candidate(edge, &sample);
                if !pulling || candidate <= 0.0 {
                    self.drag = None;
                    settle(session, &mut self.animation);
                    return;
                }
                session.set_displacement(candidate);
                session.apply(host);
            }
            GesturePhase::Ended => {
                if session.phase != SessionPhase::Dragging {
                    trace!(phase = ?session.phase, "ended ignored");
                    return;
                }
                self.drag = None;
                // A zero extent (degenerate container) never reaches the threshold.
                let extent = session.surface_extent();
                if extent > 0.0 && session.displacement() >= DISMISS_THRESHOLD * extent {
                    dismiss = true;
                } else {
                    settle(session, &mut self.animation);
                }
            }
            GesturePhase::Cancelled => {
                if session.phase == SessionPhase::Dragging {
                    self.drag = None;
                    settle(session, &mut self.animation);
                }
            }
        }

        if dismiss {
            self.dismiss_through(edge, host);
        }
    }

    /// Advance the in-flight animation by `elapsed`, after draining pending input.
    pub fn on_frame<H: PresentationHost + ?Sized>(&mut self, elapsed: Duration, host: &mut H) {
        self.pump(host);
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        let completion = animation.advance(elapsed);
        let frame = animation.value();
        if let Some(session) = self.session.as_mut() {
            session.set_keyframe(frame);
            session.apply(host);
        }
        if completion == Some(Completion::Finished) {
            self.animation = None;
            self.animation_finished(host);
        }
    }

    /// Deliver every pending event from the input queue.
    pub fn pump<H: PresentationHost + ?Sized>(&mut self, host: &mut H) {
        while let Some(event) = self.input.pop() {
            match event {
                InputEvent::Gesture(sample) => self.on_gesture_sample(sample, host),
                InputEvent::Tap => self.on_tap(host),
            }
        }
    }

    fn animation_finished<H: PresentationHost + ?Sized>(&mut self, host: &mut H) {
        match self.session.as_ref().map(PresentationSession::phase) {
            Some(SessionPhase::AnimatingToSettled) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_phase(SessionPhase::Settled);
                }
            }
            Some(SessionPhase::AnimatingToDismissed) => self.finish_dismissal(host),
            _ => {}
        }
    }

    fn dismiss_through<H: PresentationHost + ?Sized>(&mut self, edge: Edge, host: &mut H) {
        let Some(session) = self.session.as_mut() else {
            trace!("dismiss ignored: nothing presented");
            return;
        };
        if matches!(
            session.phase,
            SessionPhase::AnimatingToDismissed | SessionPhase::Dismissed
        ) {
            trace!("dismiss ignored: already dismissing");
            return;
        }
        supersede(&mut self.animation);
        self.drag = None;
        session.set_phase(SessionPhase::AnimatingToDismissed);
        match self
            .dismiss
            .animate_dismiss_through(edge, session.keyframe(), session.container)
        {
            Ok(animation) => self.animation = Some(animation),
            Err(err) => {
                warn!(%err, "skipping dismiss animation");
                self.finish_dismissal(host);
            }
        }
    }

    fn finish_dismissal<H: PresentationHost + ?Sized>(&mut self, host: &mut H) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.set_phase(SessionPhase::Dismissed);
        if !session.config.background_effects().is_empty() {
            host.set_presenting_frame(session.container.to_rect());
        }
        self.animation = None;
        self.drag = None;
        self.dismissed = true;
        self.input.clear();
        debug!("presentation dismissed");
        host.dismiss_presented();
    }
}

impl<H: PresentationHost + ?Sized> Presentation<H> for InteractivePresentationController {
    fn will_present(&mut self, host: &mut H) {
        Self::will_present(self, host);
    }

    fn will_dismiss(&mut self, host: &mut H) {
        Self::will_dismiss(self, host);
    }

    fn on_gesture_sample(&mut self, sample: GestureSample, host: &mut H) {
        Self::on_gesture_sample(self, sample, host);
    }

    fn on_tap(&mut self, host: &mut H) {
        Self::on_tap(self, host);
    }

    fn on_frame(&mut self, elapsed: Duration, host: &mut H) {
        Self::on_frame(self, elapsed, host);
    }
}

/// Interrupt the in-flight animation, if any. Interruptions have no terminal effect.
fn supersede(animation: &mut Option<Animation>) {
    if let Some(mut superseded) = animation.take()
        && let Some(completion) = superseded.interrupt()
    {
        trace!(?completion, "animation superseded");
    }
}

/// Start returning `session` to its settled keyframe.
fn settle(session: &mut PresentationSession, animation: &mut Option<Animation>) {
    supersede(animation);
    *animation = Some(PresentationAnimator::settle(
        session.keyframe(),
        session.settled,
    ));
    session.set_phase(SessionPhase::AnimatingToSettled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SETTLE_DURATION;
    use crate::types::{BackdropStyle, BackgroundEffects};
    use kurbo::Vec2;

    const CONTAINER: Size = Size::new(400.0, 1000.0);
    const DURATION: Duration = Duration::from_millis(400);

    #[derive(Debug)]
    struct Host {
        container: Option<Size>,
        surface: Rect,
        opacity: f64,
        backdrop_frame: Option<Rect>,
        presenting: Option<Rect>,
        dismiss_calls: usize,
    }

    impl Host {
        fn new(container: Size) -> Self {
            Self {
                container: Some(container),
                surface: Rect::ZERO,
                opacity: -1.0,
                backdrop_frame: None,
                presenting: None,
                dismiss_calls: 0,
            }
        }
    }

    impl PresentationHost for Host {
        fn container_size(&self) -> Option<Size> {
            self.container
        }
        fn set_surface_frame(&mut self, frame: Rect) {
            self.surface = frame;
        }
        fn set_backdrop_opacity(&mut self, opacity: f64) {
            self.opacity = opacity;
        }
        fn set_backdrop_frame(&mut self, frame: Rect) {
            self.backdrop_frame = Some(frame);
        }
        fn set_presenting_frame(&mut self, frame: Rect) {
            self.presenting = Some(frame);
        }
        fn dismiss_presented(&mut self) {
            self.dismiss_calls += 1;
        }
    }

    fn config(edge: Edge, coverage: f64) -> TransitionConfig {
        TransitionConfig::new(edge, coverage, DURATION).unwrap()
    }

    fn controller(config: TransitionConfig) -> InteractivePresentationController {
        InteractivePresentationController::new(config, InputQueue::new())
    }

    /// A controller whose surface has finished presenting.
    fn presented(config: TransitionConfig) -> (InteractivePresentationController, Host) {
        let mut c = controller(config);
        let mut host = Host::new(CONTAINER);
        c.will_present(&mut host);
        c.on_frame(DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        (c, host)
    }

    fn down(y: f64) -> GestureSample {
        GestureSample::changed(Vec2::new(0.0, y), Vec2::new(0.0, 120.0))
    }

    fn release(x: f64, y: f64) -> GestureSample {
        GestureSample::ended(Vec2::new(x, y), Vec2::ZERO)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_settled_without_session() {
        let c = controller(config(Edge::Bottom, 0.8));
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert!(c.session().is_none());
        assert_eq!(c.current_offset(), None);
    }

    #[test]
    fn present_animates_into_settled_position() {
        let mut c = controller(config(Edge::Bottom, 0.8));
        let mut host = Host::new(CONTAINER);
        c.will_present(&mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
        assert_eq!(host.backdrop_frame, Some(CONTAINER.to_rect()));
        assert_eq!(host.surface, Rect::new(0.0, 1000.0, 400.0, 1800.0));
        assert_eq!(host.opacity, 0.0);

        c.on_frame(DURATION / 2, &mut host);
        assert!(host.surface.y0 < 1000.0 && host.surface.y0 > 200.0);
        assert!(host.opacity > 0.0 && host.opacity < 1.0);

        c.on_frame(DURATION / 2, &mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 200.0)));
        assert_eq!(host.surface, Rect::new(0.0, 200.0, 400.0, 1000.0));
        assert_eq!(host.opacity, 1.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn second_present_is_ignored() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.will_present(&mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert!(!c.is_animating());
    }

    #[test]
    fn drag_past_threshold_dismisses() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
        c.on_gesture_sample(down(850.0), &mut host);
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 1050.0)));
        assert_eq!(host.surface.y0, 1050.0);
        assert_eq!(host.opacity, 0.0);

        c.on_gesture_sample(release(0.0, 850.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToDismissed);
        assert_eq!(host.dismiss_calls, 0);

        c.on_frame(DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Dismissed);
        assert!(c.session().is_none());
        assert_eq!(host.dismiss_calls, 1);
        assert_eq!(host.surface.origin(), Point::new(0.0, 1000.0));
    }

    #[test]
    fn short_drag_returns_to_settled() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(500.0), &mut host);
        assert_eq!(host.surface.y0, 700.0);
        assert!(approx(host.opacity, 1.0 - 500.0 / 800.0));

        c.on_gesture_sample(release(0.0, 500.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);

        c.on_frame(SETTLE_DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 200.0)));
        assert_eq!(c.backdrop_opacity(), Some(1.0));
        assert_eq!(host.dismiss_calls, 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.5));
        // Surface extent 500, threshold 400.
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(400.0), &mut host);
        c.on_gesture_sample(release(0.0, 400.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToDismissed);
    }

    #[test]
    fn opposite_drag_never_moves_the_surface() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(
            GestureSample::changed(Vec2::new(0.0, -150.0), Vec2::new(0.0, -300.0)),
            &mut host,
        );
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 200.0)));
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
        c.on_frame(SETTLE_DURATION, &mut host);
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 200.0)));
        assert_eq!(c.phase(), SessionPhase::Settled);
    }

    #[test]
    fn stalled_drag_snaps_back_before_release() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(300.0), &mut host);
        c.on_gesture_sample(
            GestureSample::changed(Vec2::new(0.0, 310.0), Vec2::ZERO),
            &mut host,
        );
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
        // Surface holds its place until the settle animation moves it.
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 500.0)));
        // Release no longer decides anything.
        c.on_gesture_sample(release(0.0, 900.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
    }

    #[test]
    fn opacity_stays_clamped_for_long_drags() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.3));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(5000.0), &mut host);
        assert_eq!(c.backdrop_opacity(), Some(0.0));
        assert_eq!(host.opacity, 0.0);
    }

    #[test]
    fn top_edge_mirrors_bottom() {
        let (mut c, mut host) = presented(config(Edge::Top, 0.5));
        assert_eq!(c.current_offset(), Some(Point::ZERO));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        // Downward motion is toward the screen, not toward dismissal.
        c.on_gesture_sample(down(100.0), &mut host);
        assert_eq!(c.current_offset(), Some(Point::ZERO));

        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(
            GestureSample::changed(Vec2::new(0.0, -300.0), Vec2::new(0.0, -50.0)),
            &mut host,
        );
        assert_eq!(c.current_offset(), Some(Point::new(0.0, -300.0)));
        assert!(approx(host.opacity, 0.4));
        c.on_gesture_sample(release(0.0, -300.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
    }

    #[test]
    fn horizontal_edges_use_width() {
        let (mut c, mut host) = presented(config(Edge::Right, 0.5));
        assert_eq!(c.current_offset(), Some(Point::new(200.0, 0.0)));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(
            GestureSample::changed(Vec2::new(170.0, 40.0), Vec2::new(90.0, 0.0)),
            &mut host,
        );
        // Cross-axis motion is ignored.
        assert_eq!(c.current_offset(), Some(Point::new(370.0, 0.0)));
        c.on_gesture_sample(release(170.0, 40.0), &mut host);
        // 170 >= 0.8 * 200.
        assert_eq!(c.phase(), SessionPhase::AnimatingToDismissed);

        let (mut c, mut host) = presented(config(Edge::Left, 0.5));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(
            GestureSample::changed(Vec2::new(-100.0, 0.0), Vec2::new(-10.0, 0.0)),
            &mut host,
        );
        assert_eq!(c.current_offset(), Some(Point::new(-100.0, 0.0)));
        c.on_gesture_sample(release(-100.0, 0.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
    }

    #[test]
    fn cancelled_gesture_settles() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(790.0), &mut host);
        c.on_gesture_sample(GestureSample::cancelled(), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
        c.on_frame(SETTLE_DURATION, &mut host);
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 200.0)));
        assert_eq!(host.dismiss_calls, 0);
    }

    #[test]
    fn tap_respects_tap_to_dismiss() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        let offset = c.current_offset();
        let surface = host.surface;
        c.on_tap(&mut host);
        c.on_frame(DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert_eq!(c.current_offset(), offset);
        assert_eq!(c.backdrop_opacity(), Some(1.0));
        assert_eq!(host.surface, surface);
        assert_eq!(host.dismiss_calls, 0);

        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8).with_tap_to_dismiss(true));
        c.on_tap(&mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToDismissed);
        c.on_frame(DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Dismissed);
        assert_eq!(host.dismiss_calls, 1);
    }

    #[test]
    fn tap_while_dragging_is_ignored() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8).with_tap_to_dismiss(true));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_tap(&mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
    }

    #[test]
    fn dismissal_is_idempotent() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.will_dismiss(&mut host);
        c.on_frame(DURATION / 2, &mut host);
        let halfway = c.current_offset();
        c.will_dismiss(&mut host);
        assert_eq!(c.current_offset(), halfway);
        c.on_frame(DURATION / 2, &mut host);
        assert_eq!(c.phase(), SessionPhase::Dismissed);
        c.will_dismiss(&mut host);
        c.on_frame(DURATION, &mut host);
        assert_eq!(host.dismiss_calls, 1);
    }

    #[test]
    fn samples_after_teardown_are_dropped() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        host.container = None;
        c.on_gesture_sample(down(300.0), &mut host);
        assert_eq!(c.current_offset(), Some(Point::new(0.0, 200.0)));
        assert_eq!(c.phase(), SessionPhase::Dragging);

        // No session at all: also dropped.
        let mut fresh = controller(config(Edge::Bottom, 0.8));
        fresh.on_gesture_sample(down(300.0), &mut Host::new(CONTAINER));
        assert_eq!(fresh.phase(), SessionPhase::Settled);
    }

    #[test]
    fn new_drag_supersedes_settle_animation() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(400.0), &mut host);
        c.on_gesture_sample(GestureSample::cancelled(), &mut host);
        c.on_frame(SETTLE_DURATION / 3, &mut host);
        let mid = c.session().unwrap().displacement();
        assert!(mid > 0.0 && mid < 400.0);

        c.on_gesture_sample(GestureSample::began(), &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
        assert!(!c.is_animating());
        c.on_gesture_sample(down(50.0), &mut host);
        assert!(approx(c.session().unwrap().displacement(), mid + 50.0));

        // The interrupted settle animation never lands.
        c.on_frame(SETTLE_DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
    }

    #[test]
    fn pulling_again_takes_over_a_snap_back() {
        let (mut c, mut host) = presented(config(Edge::Bottom, 0.8));
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(300.0), &mut host);
        c.on_gesture_sample(
            GestureSample::changed(Vec2::new(0.0, 300.0), Vec2::ZERO),
            &mut host,
        );
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);
        c.on_frame(SETTLE_DURATION / 2, &mut host);
        let mid = c.session().unwrap().displacement();

        c.on_gesture_sample(down(320.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
        assert!(approx(c.session().unwrap().displacement(), mid));
        c.on_gesture_sample(down(340.0), &mut host);
        assert!(approx(c.session().unwrap().displacement(), mid + 20.0));
    }

    #[test]
    fn gesture_during_present_takes_over() {
        let mut c = controller(config(Edge::Bottom, 0.8));
        let mut host = Host::new(CONTAINER);
        c.will_present(&mut host);
        c.on_frame(DURATION / 2, &mut host);
        c.on_gesture_sample(GestureSample::began(), &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
        c.on_frame(DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
    }

    #[test]
    fn degenerate_container_completes_immediately() {
        let mut c = controller(config(Edge::Bottom, 0.8));
        let mut host = Host::new(Size::new(400.0, 0.0));
        c.will_present(&mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert!(!c.is_animating());

        c.will_dismiss(&mut host);
        assert_eq!(c.phase(), SessionPhase::Dismissed);
        assert_eq!(host.dismiss_calls, 1);
    }

    #[test]
    fn release_on_degenerate_container_settles() {
        let mut c = controller(config(Edge::Bottom, 0.8));
        let mut host = Host::new(Size::new(400.0, 0.0));
        c.will_present(&mut host);
        c.on_gesture_sample(GestureSample::began(), &mut host);
        assert_eq!(c.phase(), SessionPhase::Dragging);
        c.on_gesture_sample(release(0.0, 0.0), &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToSettled);

        c.on_frame(SETTLE_DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);
        assert_eq!(host.dismiss_calls, 0);
    }

    #[test]
    fn input_queue_is_drained_on_frame() {
        let queue = InputQueue::new();
        let tx = queue.sender();
        let mut c = InteractivePresentationController::new(
            config(Edge::Bottom, 0.8).with_tap_to_dismiss(true),
            queue,
        );
        let mut host = Host::new(CONTAINER);
        c.will_present(&mut host);
        c.on_frame(DURATION, &mut host);

        tx.send_gesture(GestureSample::began());
        tx.send_gesture(down(100.0));
        c.pump(&mut host);
        assert_eq!(host.surface.y0, 300.0);

        tx.send_gesture(release(0.0, 100.0));
        c.on_frame(SETTLE_DURATION, &mut host);
        assert_eq!(c.phase(), SessionPhase::Settled);

        tx.send_tap();
        c.on_frame(Duration::ZERO, &mut host);
        assert_eq!(c.phase(), SessionPhase::AnimatingToDismissed);
    }

    #[test]
    fn drag_dismissal_leaves_through_drag_edge() {
        let cfg = config(Edge::Bottom, 0.8).with_dismiss_edge(Edge::Left);
        let (mut c, mut host) = presented(cfg);
        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(700.0), &mut host);
        c.on_gesture_sample(release(0.0, 700.0), &mut host);
        c.on_frame(DURATION, &mut host);
        assert_eq!(host.surface.origin(), Point::new(0.0, 1000.0));

        let (mut c, mut host) = presented(cfg);
        c.will_dismiss(&mut host);
        c.on_frame(DURATION, &mut host);
        assert_eq!(host.surface.origin(), Point::new(-400.0, 200.0));
    }

    #[test]
    fn cross_axis_dismiss_edge_slides_straight_out() {
        let cfg = config(Edge::Right, 0.5).with_dismiss_edge(Edge::Top);
        let (mut c, mut host) = presented(cfg);
        assert_eq!(c.current_offset(), Some(Point::new(200.0, 0.0)));

        c.will_dismiss(&mut host);
        c.on_frame(DURATION / 2, &mut host);
        let mid = host.surface.origin();
        assert_eq!(mid.x, 200.0);
        assert!(mid.y < 0.0 && mid.y > -1000.0);

        c.on_frame(DURATION / 2, &mut host);
        assert_eq!(host.surface.origin(), Point::new(200.0, -1000.0));
        assert_eq!(host.dismiss_calls, 1);
    }

    #[test]
    fn background_effects_follow_the_surface() {
        let cfg = config(Edge::Bottom, 0.5)
            .with_background_effects(BackgroundEffects::PUSH)
            .with_backdrop(BackdropStyle::None);
        let (mut c, mut host) = presented(cfg);
        assert_eq!(host.presenting, Some(Rect::new(0.0, -500.0, 400.0, 500.0)));
        assert_eq!(host.opacity, 0.0);

        c.on_gesture_sample(GestureSample::began(), &mut host);
        c.on_gesture_sample(down(250.0), &mut host);
        assert_eq!(host.presenting, Some(Rect::new(0.0, -250.0, 400.0, 750.0)));
        assert_eq!(host.opacity, 0.0);

        c.will_dismiss(&mut host);
        c.on_frame(DURATION, &mut host);
        assert_eq!(host.presenting, Some(CONTAINER.to_rect()));
    }

    #[test]
    fn presentation_trait_is_object_safe() {
        let mut c = controller(config(Edge::Bottom, 0.8));
        let mut host = Host::new(CONTAINER);
        let p: &mut dyn Presentation<Host> = &mut c;
        p.will_present(&mut host);
        p.on_frame(DURATION, &mut host);
        p.will_dismiss(&mut host);
        p.on_frame(DURATION, &mut host);
        assert_eq!(host.dismiss_calls, 1);
    }
}
