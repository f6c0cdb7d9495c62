// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated, immutable description of one transition style.

use core::time::Duration;

use crate::error::ConfigError;
use crate::types::{BackdropStyle, BackgroundEffects, Edge};

/// Parameters for one presentation style.
///
/// Built once with [`TransitionConfig::new`], optionally refined with the
/// `with_*` methods, and then shared by value with the animators and the
/// controller. Validation happens in [`TransitionConfig::new`]; the refinements
/// cannot produce an invalid config.
///
/// ```
/// use core::time::Duration;
/// use understory_presentation::config::TransitionConfig;
/// use understory_presentation::types::{BackdropStyle, Edge};
///
/// let config = TransitionConfig::new(Edge::Bottom, 0.8, Duration::from_millis(350))
///     .unwrap()
///     .with_tap_to_dismiss(true)
///     .with_backdrop(BackdropStyle::Blurred);
/// assert_eq!(config.dismiss_edge(), Edge::Bottom);
///
/// assert!(TransitionConfig::new(Edge::Bottom, 1.5, Duration::from_secs(1)).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    edge: Edge,
    dismiss_edge: Edge,
    coverage: f64,
    duration: Duration,
    tap_to_dismiss: bool,
    backdrop: BackdropStyle,
    background: BackgroundEffects,
}

impl TransitionConfig {
    /// Create a config presenting from `edge`, covering `coverage` of the
    /// container, animating over `duration`.
    ///
    /// Defaults: dismissal leaves through `edge`, taps on the backdrop are
    /// ignored, the backdrop is [`BackdropStyle::Dimmed`], and the presenting
    /// content is left untouched.
    pub fn new(edge: Edge, coverage: f64, duration: Duration) -> Result<Self, ConfigError> {
        // Written so that NaN fails.
        if !(coverage > 0.0 && coverage <= 1.0) {
            return Err(ConfigError::CoverageOutOfRange { coverage });
        }
        if duration.is_zero() {
            return Err(ConfigError::NonPositiveDuration);
        }
        Ok(Self {
            edge,
            dismiss_edge: edge,
            coverage,
            duration,
            tap_to_dismiss: false,
            backdrop: BackdropStyle::default(),
            background: BackgroundEffects::empty(),
        })
    }

    /// Whether a tap on the backdrop dismisses the surface.
    #[must_use]
    pub fn with_tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.tap_to_dismiss = enabled;
        self
    }

    /// Set the backdrop style.
    #[must_use]
    pub fn with_backdrop(mut self, backdrop: BackdropStyle) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Set how the presenting content is displaced while the surface is shown.
    #[must_use]
    pub fn with_background_effects(mut self, effects: BackgroundEffects) -> Self {
        self.background = effects;
        self
    }

    /// Edge a programmatic or tap dismissal leaves through.
    ///
    /// Drag dismissals always leave through [`edge`](Self::edge).
    #[must_use]
    pub fn with_dismiss_edge(mut self, edge: Edge) -> Self {
        self.dismiss_edge = edge;
        self
    }

    /// Edge the surface is anchored to and presented from.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Edge used by non-interactive dismissal.
    pub fn dismiss_edge(&self) -> Edge {
        self.dismiss_edge
    }

    /// Fraction of the container's extent along the edge axis that the surface occupies.
    pub fn coverage(&self) -> f64 {
        self.coverage
    }

    /// Duration of the present and dismiss animations.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether tapping the backdrop dismisses.
    pub fn tap_to_dismiss(&self) -> bool {
        self.tap_to_dismiss
    }

    /// The backdrop style.
    pub fn backdrop(&self) -> BackdropStyle {
        self.backdrop
    }

    /// Background displacement flags.
    pub fn background_effects(&self) -> BackgroundEffects {
        self.background
    }

    /// Shorthand for `background_effects().contains(PUSH)`.
    pub fn pushes_background(&self) -> bool {
        self.background.contains(BackgroundEffects::PUSH)
    }

    /// Shorthand for `background_effects().contains(MINIMIZE)`.
    pub fn minimizes_background(&self) -> bool {
        self.background.contains(BackgroundEffects::MINIMIZE)
    }
}
