// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-dismiss walkthrough.
//!
//! Presents a bottom sheet covering 80% of a phone-sized container, drags it
//! part of the way down (it settles back), then drags it past the threshold
//! (it dismisses). Every host update is printed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example presentation_drag`

use std::time::Duration;

use kurbo::{Rect, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_presentation::config::TransitionConfig;
use understory_presentation::create_transition;
use understory_presentation::host::PresentationHost;
use understory_presentation::types::{Edge, GestureSample, SessionPhase};

const FRAME: Duration = Duration::from_millis(16);

struct Console {
    container: Size,
    removed: bool,
}

impl PresentationHost for Console {
    fn container_size(&self) -> Option<Size> {
        (!self.removed).then_some(self.container)
    }
    fn set_surface_frame(&mut self, frame: Rect) {
        println!("  surface  y={:7.2}", frame.y0);
    }
    fn set_backdrop_opacity(&mut self, opacity: f64) {
        println!("  backdrop a={opacity:.3}");
    }
    fn dismiss_presented(&mut self) {
        println!("  -> surface removed");
        self.removed = true;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = TransitionConfig::new(Edge::Bottom, 0.8, Duration::from_millis(96))
        .expect("valid config");
    let mut t = create_transition(config);
    let mut host = Console {
        container: Size::new(375.0, 1000.0),
        removed: false,
    };

    println!("== Present ==");
    t.controller.will_present(&mut host);
    while t.controller.is_animating() {
        t.controller.on_frame(FRAME, &mut host);
    }
    assert_eq!(t.controller.phase(), SessionPhase::Settled);

    println!("== Drag 500pt and release (settles back) ==");
    t.input.send_gesture(GestureSample::began());
    for y in [100.0, 300.0, 500.0] {
        let moved = GestureSample::changed(Vec2::new(0.0, y), Vec2::new(0.0, 900.0));
        t.input.send_gesture(moved);
    }
    let released = GestureSample::ended(Vec2::new(0.0, 500.0), Vec2::ZERO);
    t.input.send_gesture(released);
    t.controller.pump(&mut host);
    while t.controller.is_animating() {
        t.controller.on_frame(FRAME, &mut host);
    }
    assert_eq!(t.controller.phase(), SessionPhase::Settled);

    println!("== Drag 850pt and release (dismisses) ==");
    t.input.send_gesture(GestureSample::began());
    let moved = GestureSample::changed(Vec2::new(0.0, 850.0), Vec2::new(0.0, 1200.0));
    t.input.send_gesture(moved);
    let released = GestureSample::ended(Vec2::new(0.0, 850.0), Vec2::ZERO);
    t.input.send_gesture(released);
    t.controller.pump(&mut host);
    while t.controller.is_animating() {
        t.controller.on_frame(FRAME, &mut host);
    }
    assert_eq!(t.controller.phase(), SessionPhase::Dismissed);
    assert!(host.removed);
}
