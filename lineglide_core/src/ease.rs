// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for animated transitions.

/// An easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Identity mapping.
    Linear,
    /// A CSS-style cubic bézier with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// The curve runs from `(0, 0)` to `(1, 1)`; `x1` and `x2` must lie in
    /// `[0, 1]` so that the curve stays a function of time.
    CubicBezier {
        /// X of the first control point.
        x1: f64,
        /// Y of the first control point.
        y1: f64,
        /// X of the second control point.
        x2: f64,
        /// Y of the second control point.
        y2: f64,
    },
}

impl Easing {
    /// The CSS `ease` curve.
    pub const STANDARD: Self = Self::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// The Material "fast out, slow in" curve used for the reveal and data
    /// transitions.
    pub const FAST_OUT_SLOW_IN: Self = Self::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Returns eased progress for linear progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`; the endpoints map exactly to `0` and `1`.
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_curve_parameter(t, x1, x2);
                cubic(u, y1, y2)
            }
        }
    }
}

/// Evaluates the 1D cubic bézier `(0, c1, c2, 1)` at parameter `u`.
fn cubic(u: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * c1 + 3.0 * inv * u * u * c2 + u * u * u
}

fn cubic_derivative(u: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * c1 + 6.0 * inv * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
}

/// Finds the curve parameter whose X coordinate equals `x`.
///
/// Newton-Raphson converges in a handful of steps for well-formed control
/// points; a bisection pass handles the flat-derivative cases.
fn solve_curve_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    const TOLERANCE: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = cubic(u, x1, x2) - x;
        if err.abs() < TOLERANCE {
            return u;
        }
        let d = cubic_derivative(u, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        u -= err / d;
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    u = x;
    while hi - lo > TOLERANCE {
        if cubic(u, x1, x2) < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.ease(0.25), 0.25);
        assert_eq!(Easing::Linear.ease(0.75), 0.75);
    }

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::STANDARD, Easing::FAST_OUT_SLOW_IN] {
            assert_eq!(easing.ease(0.0), 0.0);
            assert_eq!(easing.ease(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::FAST_OUT_SLOW_IN.ease(-0.5), 0.0);
        assert_eq!(Easing::FAST_OUT_SLOW_IN.ease(1.5), 1.0);
    }

    #[test]
    fn fast_out_slow_in_is_monotonic() {
        let easing = Easing::FAST_OUT_SLOW_IN;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = easing.ease(f64::from(i) / 100.0);
            // Allow for the solver's convergence tolerance.
            assert!(v >= prev - 1e-6, "eased value regressed at step {i}");
            prev = v;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn midpoint_of_symmetric_curve_is_half() {
        // cubic-bezier(0.5, 0, 0.5, 1) is point-symmetric around (0.5, 0.5).
        let easing = Easing::CubicBezier {
            x1: 0.5,
            y1: 0.0,
            x2: 0.5,
            y2: 1.0,
        };
        assert!((easing.ease(0.5) - 0.5).abs() < 1e-6);
    }
}
