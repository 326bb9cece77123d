// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-mount reveal timeline.
//!
//! A freshly mounted graph reveals itself in two stages: first markers and
//! lines fade in (`alpha` 0→1), then, after a short hold, the chart grows
//! vertically from a flat midline to full amplitude (`factor` 0→1). Both
//! progress values are driven exactly once per widget instance; data updates
//! never replay them.

use crate::ease::Easing;

/// Fade-in duration in seconds.
const FADE_IN_DURATION: f64 = 0.8;
/// Hold between the end of the fade and the start of the growth, in seconds.
const GROWTH_DELAY: f64 = 0.2;
/// Growth duration in seconds.
const GROWTH_DURATION: f64 = 0.8;

/// Where the reveal timeline currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// No tick has been received yet.
    NotStarted,
    /// Markers and lines are fading in.
    FadingIn,
    /// Fade is complete; waiting out the fixed hold before growing.
    DelayingGrowth,
    /// The chart is expanding from the midline to full amplitude.
    Growing,
    /// Both animations have finished; the timeline is inert.
    Settled,
}

/// The mount-time fade/grow sequence.
///
/// Driven by the host frame loop via [`tick`](Self::tick). Surplus time flows
/// across phase boundaries within a single tick, so a coarse first tick still
/// lands in a consistent state.
#[derive(Clone, Copy, Debug)]
pub struct RevealTimeline {
    phase: RevealPhase,
    phase_elapsed: f64,
    easing: Easing,
    alpha: f64,
    factor: f64,
}

impl RevealTimeline {
    /// Creates a timeline that starts fading in on its first tick.
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::NotStarted,
            phase_elapsed: 0.0,
            easing: Easing::FAST_OUT_SLOW_IN,
            alpha: 0.0,
            factor: 0.0,
        }
    }

    /// Marker/line fade-in progress, eased, in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Vertical growth progress, eased, in `[0, 1]`.
    ///
    /// Stays at `0` until the fade-in and the fixed hold have fully elapsed.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Returns `true` once both animations have finished.
    pub fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Settled
    }

    /// Advances the timeline by `dt` seconds; returns `true` while running.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.phase == RevealPhase::Settled {
            return false;
        }
        if self.phase == RevealPhase::NotStarted {
            self.phase = RevealPhase::FadingIn;
        }

        let mut remaining = dt.max(0.0);
        loop {
            match self.phase {
                RevealPhase::FadingIn => {
                    remaining = self.advance_phase(remaining, FADE_IN_DURATION);
                    self.alpha = self.easing.ease(self.phase_elapsed / FADE_IN_DURATION);
                    if self.phase_elapsed < FADE_IN_DURATION {
                        break;
                    }
                    self.alpha = 1.0;
                    self.enter(RevealPhase::DelayingGrowth);
                }
                RevealPhase::DelayingGrowth => {
                    remaining = self.advance_phase(remaining, GROWTH_DELAY);
                    if self.phase_elapsed < GROWTH_DELAY {
                        break;
                    }
                    self.enter(RevealPhase::Growing);
                }
                RevealPhase::Growing => {
                    remaining = self.advance_phase(remaining, GROWTH_DURATION);
                    self.factor = self.easing.ease(self.phase_elapsed / GROWTH_DURATION);
                    if self.phase_elapsed < GROWTH_DURATION {
                        break;
                    }
                    self.factor = 1.0;
                    self.enter(RevealPhase::Settled);
                }
                RevealPhase::NotStarted | RevealPhase::Settled => break,
            }
        }

        !self.is_settled()
    }

    /// Consumes up to `duration - phase_elapsed` out of `remaining`.
    fn advance_phase(&mut self, remaining: f64, duration: f64) -> f64 {
        let step = remaining.min(duration - self.phase_elapsed);
        self.phase_elapsed += step;
        remaining - step
    }

    fn enter(&mut self, phase: RevealPhase) {
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn factor_waits_for_fade_and_hold() {
        let mut t = RevealTimeline::new();
        t.tick(0.8);
        assert_eq!(t.alpha(), 1.0);
        assert_eq!(t.factor(), 0.0);
        assert_eq!(t.phase(), RevealPhase::DelayingGrowth);

        // Mid-hold: still no growth.
        t.tick(0.1);
        assert_eq!(t.factor(), 0.0);

        t.tick(0.1);
        assert_eq!(t.phase(), RevealPhase::Growing);
        t.tick(0.4);
        assert!(t.factor() > 0.0 && t.factor() < 1.0);
    }

    #[test]
    fn surplus_time_flows_across_phases() {
        let mut t = RevealTimeline::new();
        assert!(!t.tick(10.0));
        assert_eq!(t.phase(), RevealPhase::Settled);
        assert_eq!(t.alpha(), 1.0);
        assert_eq!(t.factor(), 1.0);
    }

    #[test]
    fn settled_timeline_never_replays() {
        let mut t = RevealTimeline::new();
        t.tick(2.0);
        assert!(t.is_settled());
        assert!(!t.tick(1.0));
        assert_eq!(t.alpha(), 1.0);
        assert_eq!(t.factor(), 1.0);
    }

    #[test]
    fn alpha_grows_monotonically_during_fade() {
        let mut t = RevealTimeline::new();
        let mut prev = 0.0;
        for _ in 0..16 {
            t.tick(0.05);
            assert!(t.alpha() >= prev, "alpha regressed");
            prev = t.alpha();
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn zero_dt_tick_starts_the_fade_without_progress() {
        let mut t = RevealTimeline::new();
        assert!(t.tick(0.0));
        assert_eq!(t.phase(), RevealPhase::FadingIn);
        assert_eq!(t.alpha(), 0.0);
    }
}
