// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget's output: a flat list of primitive draw calls.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;

/// One primitive draw call for the host surface.
///
/// Commands are emitted in paint order (lines, then markers, then labels).
/// `alpha` is a per-call opacity multiplier on top of whatever opacity the
/// paint itself carries.
#[derive(Clone, Debug)]
pub enum DrawCmd {
    /// A straight line segment.
    Line {
        /// Start of the segment.
        from: Point,
        /// End of the segment.
        to: Point,
        /// Stroke paint.
        stroke: Brush,
        /// Stroke width.
        width: f64,
        /// Opacity multiplier in `[0, 1]`.
        alpha: f64,
    },
    /// A filled circle marker.
    Circle {
        /// Center of the marker.
        center: Point,
        /// Radius of the marker.
        radius: f64,
        /// Fill paint.
        fill: Brush,
        /// Opacity multiplier in `[0, 1]`.
        alpha: f64,
    },
    /// A single-line value label.
    Label {
        /// Top-left corner of the label's bounding box.
        top_left: Point,
        /// The label text.
        text: String,
        /// Font size in canvas units.
        font_size: f64,
        /// Fill paint.
        fill: Brush,
        /// Opacity multiplier in `[0, 1]`.
        alpha: f64,
    },
}

/// Formats a value for its label.
///
/// Shortest round-trip decimal form, padded to at least one fractional digit
/// so integral values read as measurements (`1.0`, not `1`).
pub fn format_value(value: f64) -> String {
    let mut out = alloc::format!("{value}");
    if value.is_finite() && !out.contains('.') && !out.contains('e') {
        out.push_str(".0");
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fractional_values_keep_their_shortest_form() {
        assert_eq!(format_value(4.3), "4.3");
        assert_eq!(format_value(2.55), "2.55");
        assert_eq!(format_value(-0.5), "-0.5");
    }

    #[test]
    fn integral_values_get_one_decimal() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(-3.0), "-3.0");
        assert_eq!(format_value(0.0), "0.0");
    }
}
