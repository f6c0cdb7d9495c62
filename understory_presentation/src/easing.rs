// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ease-in-out pacing.
//!
//! The curve is `cubic-bezier(0.42, 0, 0.58, 1)`, the usual "ease-in-out"
//! of CSS and mobile toolkits. It is inverted by bisection so that no libm
//! functions are needed.

const X1: f64 = 0.42;
const X2: f64 = 0.58;
const Y1: f64 = 0.0;
const Y2: f64 = 1.0;

// Each step halves the interval; 48 steps are well below f64 resolution on [0, 1].
const BISECTION_STEPS: usize = 48;

/// One coordinate of a cubic Bézier from 0 to 1 with control values `p1`, `p2`.
fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

/// Map linear progress `t` to eased progress.
///
/// `t` is clamped to `[0, 1]`; the endpoints map exactly to themselves.
pub fn ease_in_out(t: f64) -> f64 {
    if !(t > 0.0) {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // x(s) is monotonic for these control points, so bisection converges.
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if bezier(X1, X2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(Y1, Y2, 0.5 * (lo + hi))
}
