// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-threaded input channel from the host's recognizers to the controller.
//!
//! ## Usage
//!
//! 1) Create an [`InputQueue`] and hand it to the controller at construction.
//! 2) Give [`InputQueue::sender`] to the gesture and tap recognizers.
//! 3) The controller drains pending events on every frame, or when
//!    [`pump`](crate::controller::InteractivePresentationController::pump) is called.
//!
//! The sender holds a weak reference: once the controller (and so the queue) is
//! dropped, sends report `false` and the event is discarded.
//!
//! ```
//! use understory_presentation::input::{InputEvent, InputQueue};
//! use understory_presentation::types::GestureSample;
//!
//! let queue = InputQueue::new();
//! let tx = queue.sender();
//! assert!(tx.send_gesture(GestureSample::began()));
//! assert!(tx.send_tap());
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.pop(), Some(InputEvent::Gesture(GestureSample::began())));
//!
//! drop(queue);
//! assert!(!tx.send_tap());
//! ```

use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::types::GestureSample;

/// An input delivered to a presentation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A drag sample from the surface's pan recognizer.
    Gesture(GestureSample),
    /// A single tap on the backdrop.
    Tap,
}

/// Receiving end of the input channel, owned by the controller.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl InputQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new sending handle for this queue.
    pub fn sender(&self) -> InputSender {
        InputSender {
            events: Rc::downgrade(&self.events),
        }
    }

    /// Take the oldest pending event.
    pub fn pop(&self) -> Option<InputEvent> {
        self.events.borrow_mut().pop_front()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Discard every pending event.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Sending end of the input channel, held by the host's recognizers.
#[derive(Clone, Debug)]
pub struct InputSender {
    events: Weak<RefCell<VecDeque<InputEvent>>>,
}

impl InputSender {
    /// Queue an event. Returns `false` if the receiving queue is gone.
    pub fn send(&self, event: InputEvent) -> bool {
        let Some(events) = self.events.upgrade() else {
            return false;
        };
        events.borrow_mut().push_back(event);
        true
    }

    /// Queue a gesture sample.
    pub fn send_gesture(&self, sample: GestureSample) -> bool {
        self.send(InputEvent::Gesture(sample))
    }

    /// Queue a backdrop tap.
    pub fn send_tap(&self) -> bool {
        self.send(InputEvent::Tap)
    }
}
