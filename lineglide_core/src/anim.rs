// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal scalar animation primitive.
//!
//! [`AnimVar`] is one animatable channel: a value that converges toward a
//! target over a fixed duration. The widget uses two per node (X and Y run
//! independently and may be mid-transition at the same time with different
//! progress). There is no clock inside; the host advances every channel with
//! explicit `tick(dt)` calls from its frame loop.

use crate::ease::Easing;

/// Timing configuration for one animated transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    duration: f64,
    easing: Easing,
}

impl Tween {
    /// Creates a tween over `duration` seconds with the default reveal curve.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            easing: Easing::FAST_OUT_SLOW_IN,
        }
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns eased progress in `[0, 1]` after `elapsed` seconds.
    ///
    /// Non-positive durations complete immediately.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.ease(elapsed / self.duration)
    }
}

impl Default for Tween {
    /// The data-transition tween: 400 ms, fast out, slow in.
    fn default() -> Self {
        Self::new(0.4)
    }
}

/// One animated scalar channel.
///
/// A channel is either settled (holding its target) or in flight. Retargeting
/// an in-flight channel restarts the tween from the *current interpolated
/// value*, never from the original start, so rapid successive updates stay
/// smooth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimVar {
    start: f64,
    target: f64,
    elapsed: f64,
    tween: Tween,
}

impl AnimVar {
    /// Creates a channel settled at `value`.
    pub fn new(value: f64, tween: Tween) -> Self {
        Self {
            start: value,
            target: value,
            elapsed: tween.duration(),
            tween,
        }
    }

    /// Returns the current interpolated value.
    pub fn value(&self) -> f64 {
        if self.is_settled() {
            return self.target;
        }
        let t = self.tween.progress(self.elapsed);
        self.start + (self.target - self.start) * t
    }

    /// Returns the value this channel is converging toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` once the channel has reached its target.
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.tween.duration() || self.start == self.target
    }

    /// Starts a transition toward `target` from the current value.
    ///
    /// Retargeting to the value already being converged on is a no-op, so the
    /// caller can re-submit unchanged targets every update without restarting
    /// the animation.
    pub fn animate_to(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.start = self.value();
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Jumps to `value` without animating.
    pub fn snap_to(&mut self, value: f64) {
        self.start = value;
        self.target = value;
        self.elapsed = self.tween.duration();
    }

    /// Advances the channel by `dt` seconds; returns `true` while in flight.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        self.elapsed += dt.max(0.0);
        !self.is_settled()
    }
}
