// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-to-dismiss with a pushed and minimized background.
//!
//! Presents a side panel from the left over a blurred backdrop, pushing and
//! shrinking the presenting content, then dismisses it with a backdrop tap that
//! exits through the top edge.
//!
//! Run:
//! - `cargo run -p understory_demos --example presentation_tap`

use std::time::Duration;

use kurbo::{Rect, Size};
use understory_presentation::config::TransitionConfig;
use understory_presentation::create_transition;
use understory_presentation::host::PresentationHost;
use understory_presentation::types::{BackdropStyle, BackgroundEffects, Edge, SessionPhase};

const FRAME: Duration = Duration::from_millis(40);

#[derive(Default)]
struct Log {
    removed: bool,
}

impl PresentationHost for Log {
    fn container_size(&self) -> Option<Size> {
        Some(Size::new(800.0, 600.0))
    }
    fn set_surface_frame(&mut self, frame: Rect) {
        println!("  panel     {frame:?}");
    }
    fn set_backdrop_opacity(&mut self, opacity: f64) {
        println!("  blur      {opacity:.2}");
    }
    fn set_backdrop_frame(&mut self, frame: Rect) {
        println!("  backdrop  {frame:?}");
    }
    fn set_presenting_frame(&mut self, frame: Rect) {
        println!("  content   {frame:?}");
    }
    fn dismiss_presented(&mut self) {
        self.removed = true;
    }
}

fn main() {
    let config = TransitionConfig::new(Edge::Left, 0.35, Duration::from_millis(200))
        .expect("valid config")
        .with_backdrop(BackdropStyle::Blurred)
        .with_background_effects(BackgroundEffects::PUSH | BackgroundEffects::MINIMIZE)
        .with_tap_to_dismiss(true)
        .with_dismiss_edge(Edge::Top);
    let mut t = create_transition(config);
    let mut host = Log::default();

    println!("== Present ==");
    t.controller.will_present(&mut host);
    while t.controller.is_animating() {
        t.controller.on_frame(FRAME, &mut host);
    }

    println!("== Tap backdrop ==");
    t.input.send_tap();
    t.controller.on_frame(Duration::ZERO, &mut host);
    while t.controller.is_animating() {
        t.controller.on_frame(FRAME, &mut host);
    }

    assert_eq!(t.controller.phase(), SessionPhase::Dismissed);
    assert!(host.removed);
}
