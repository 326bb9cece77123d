// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trend-based placement of value labels.
//!
//! Each point's label goes on the side away from the line segments meeting at
//! that point: above a local peak, below a local trough, and on the outer
//! diagonal corner along a monotonic run. The decision uses only the
//! neighboring values, so it is computed once per entry per render and is
//! independent of animation progress.

use kurbo::Vec2;

/// Where a value label sits relative to its point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Centered above the point.
    Top,
    /// Centered below the point.
    Bottom,
    /// Below the point, extending to the left.
    LeftBottom,
    /// Below the point, extending to the right.
    RightBottom,
}

impl LabelAnchor {
    /// Picks the anchor for a point from its neighboring values.
    ///
    /// `prev`/`next` are `None` at the ends of the series. First match wins:
    /// rising through the point puts the label on the lower-right, a peak puts
    /// it on top, a trough below, falling through on the lower-left; the
    /// remaining rows cover the series ends, and anything without a trend
    /// signal (flat or a single point) defaults to `Bottom`.
    pub fn resolve(prev: Option<f64>, current: f64, next: Option<f64>) -> Self {
        let was_rising = prev.is_some_and(|p| p < current);
        let was_falling = prev.is_some_and(|p| p > current);
        let is_rising = next.is_some_and(|n| current < n);
        let is_falling = next.is_some_and(|n| current > n);

        if was_rising && is_rising {
            Self::RightBottom
        } else if was_rising && is_falling {
            Self::Top
        } else if was_falling && is_rising {
            Self::Bottom
        } else if was_falling && is_falling {
            Self::LeftBottom
        } else if prev.is_none() && is_rising {
            Self::Bottom
        } else if prev.is_none() && is_falling {
            Self::Top
        } else if was_rising && next.is_none() {
            Self::Top
        } else {
            // Falling into the end of the series, flat, or a single point.
            Self::Bottom
        }
    }

    /// The vertical mirror of this anchor.
    ///
    /// Applied when the Y axis is negated, so the label still lands on the
    /// side away from the line.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::LeftBottom => Self::RightBottom,
            Self::RightBottom => Self::LeftBottom,
        }
    }

    /// Offset of the label's top-left corner from the point position, given
    /// the measured label `width`/`height` and a legibility `margin`.
    pub fn offset(self, width: f64, height: f64, margin: f64) -> Vec2 {
        let dx = match self {
            Self::LeftBottom => -width,
            Self::Top | Self::Bottom => -width / 2.0,
            Self::RightBottom => 0.0,
        };
        let dy = match self {
            Self::Top => -(height + margin),
            Self::Bottom | Self::LeftBottom | Self::RightBottom => margin,
        };
        Vec2::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn monotonic_runs_use_the_outer_diagonal() {
        assert_eq!(
            LabelAnchor::resolve(Some(1.0), 2.0, Some(3.0)),
            LabelAnchor::RightBottom
        );
        assert_eq!(
            LabelAnchor::resolve(Some(3.0), 2.0, Some(1.0)),
            LabelAnchor::LeftBottom
        );
    }

    #[test]
    fn peak_goes_on_top_and_trough_below() {
        assert_eq!(
            LabelAnchor::resolve(Some(1.0), 2.0, Some(1.5)),
            LabelAnchor::Top
        );
        assert_eq!(
            LabelAnchor::resolve(Some(4.3), 2.5, Some(4.6)),
            LabelAnchor::Bottom
        );
    }

    #[test]
    fn series_start_reflects_outgoing_trend() {
        assert_eq!(
            LabelAnchor::resolve(None, 2.0, Some(3.0)),
            LabelAnchor::Bottom
        );
        assert_eq!(LabelAnchor::resolve(None, 2.0, Some(1.0)), LabelAnchor::Top);
    }

    #[test]
    fn series_end_reflects_incoming_trend() {
        assert_eq!(LabelAnchor::resolve(Some(1.0), 2.0, None), LabelAnchor::Top);
        assert_eq!(
            LabelAnchor::resolve(Some(3.0), 2.0, None),
            LabelAnchor::Bottom
        );
    }

    #[test]
    fn no_trend_signal_defaults_to_bottom() {
        assert_eq!(LabelAnchor::resolve(None, 2.0, None), LabelAnchor::Bottom);
        assert_eq!(
            LabelAnchor::resolve(Some(2.0), 2.0, Some(2.0)),
            LabelAnchor::Bottom
        );
    }

    #[test]
    fn mirroring_is_an_involution() {
        for anchor in [
            LabelAnchor::Top,
            LabelAnchor::Bottom,
            LabelAnchor::LeftBottom,
            LabelAnchor::RightBottom,
        ] {
            assert_eq!(anchor.mirrored().mirrored(), anchor);
            assert_ne!(anchor.mirrored(), anchor);
        }
    }

    #[test]
    fn negating_values_mirrors_the_anchor() {
        // Flipping every value upside down swaps rising for falling, so the
        // resolved anchor must be the vertical mirror — for every triple with
        // an actual trend. (Flat triples default to Bottom on both sides.)
        let values = [None, Some(1.0), Some(3.0)];
        for prev in values {
            for next in values {
                if prev.is_none() && next.is_none() {
                    continue;
                }
                let anchor = LabelAnchor::resolve(prev, 2.0, next);
                let flipped = LabelAnchor::resolve(prev.map(|p| -p), -2.0, next.map(|n| -n));
                assert_eq!(flipped, anchor.mirrored(), "prev {prev:?} next {next:?}");
            }
        }
    }

    #[test]
    fn offsets_follow_the_anchor_corner() {
        let (w, h, m) = (30.0, 10.0, 4.0);
        assert_eq!(
            LabelAnchor::Top.offset(w, h, m),
            Vec2::new(-15.0, -(10.0 + 4.0))
        );
        assert_eq!(LabelAnchor::Bottom.offset(w, h, m), Vec2::new(-15.0, 4.0));
        assert_eq!(
            LabelAnchor::LeftBottom.offset(w, h, m),
            Vec2::new(-30.0, 4.0)
        );
        assert_eq!(
            LabelAnchor::RightBottom.offset(w, h, m),
            Vec2::new(0.0, 4.0)
        );
    }
}
