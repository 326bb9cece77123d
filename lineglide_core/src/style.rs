// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual styling for the graph.

use lineglide_text::LabelStyle;
use peniko::Brush;
use peniko::color::palette::css;

use crate::layout::GRAPH_VERTICAL_PADDING;

/// Paints and metrics for lines, markers, and value labels.
#[derive(Clone, Debug)]
pub struct GraphStyle {
    /// Stroke paint for the connecting line segments.
    pub line_stroke: Brush,
    /// Stroke width of the connecting line segments.
    pub line_width: f64,
    /// Fill paint for the point markers.
    pub point_fill: Brush,
    /// Radius of the point markers.
    pub point_radius: f64,
    /// Fill paint for the value labels.
    pub label_fill: Brush,
    /// Font size of the value labels.
    pub label_font_size: f64,
    /// Gap between a point marker and its label box.
    pub label_margin: f64,
    /// Vertical padding reserve, applied top and bottom, keeping the extreme
    /// values (and their labels) inside the canvas.
    pub vertical_padding: f64,
}

impl GraphStyle {
    /// Sets the line stroke paint.
    pub fn with_line_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.line_stroke = stroke.into();
        self
    }

    /// Sets the line stroke width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the marker fill paint.
    pub fn with_point_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.point_fill = fill.into();
        self
    }

    /// Sets the marker radius.
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    /// Sets the label fill paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Sets the label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the gap between a marker and its label box.
    pub fn with_label_margin(mut self, margin: f64) -> Self {
        self.label_margin = margin;
        self
    }

    /// Sets the vertical padding reserve.
    pub fn with_vertical_padding(mut self, padding: f64) -> Self {
        self.vertical_padding = padding;
        self
    }

    /// The measurement style for value labels.
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle::new(self.label_font_size)
    }
}

impl Default for GraphStyle {
    /// Light gray lines, blue markers, black labels.
    fn default() -> Self {
        Self {
            line_stroke: Brush::Solid(css::LIGHT_GRAY),
            line_width: 10.0,
            point_fill: Brush::Solid(css::BLUE),
            point_radius: 20.0,
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 20.0,
            label_margin: 4.0,
            vertical_padding: GRAPH_VERTICAL_PADDING,
        }
    }
}
