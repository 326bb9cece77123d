// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping data indices and values into canvas coordinates.

use kurbo::{Point, Size};

use crate::data::LineGraphData;

/// Default vertical padding reserve, applied top and bottom, in pixels.
pub(crate) const GRAPH_VERTICAL_PADDING: f64 = 32.0;

/// A pure snapshot of the index/value → canvas mapping.
///
/// X: the canvas width is divided into one equal slot per entry and each point
/// sits at the center of its slot. Y: values are plotted relative to the
/// midline of the value range, scaled so the full range fits inside the canvas
/// minus the vertical padding reserve, and multiplied by the growth `factor` —
/// at factor 0 every point sits on the horizontal centerline, at factor 1 the
/// chart has its true proportions.
///
/// A projection is cheap to build and holds no state; while animations are in
/// flight the caller rebuilds it every frame with the latest factor.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    size: Size,
    len: usize,
    min: f64,
    max: f64,
    vertical_padding: f64,
    negate: bool,
    factor: f64,
}

impl Projection {
    /// Creates a projection for `data` on a canvas of `size` at growth
    /// `factor`.
    pub fn new(size: Size, data: &LineGraphData, factor: f64) -> Self {
        let (min, max) = data.value_range().unwrap_or((0.0, 0.0));
        Self {
            size,
            len: data.len(),
            min,
            max,
            vertical_padding: GRAPH_VERTICAL_PADDING,
            negate: false,
            factor,
        }
    }

    /// Flips which vertical direction corresponds to larger values.
    ///
    /// Without negation, larger values map toward smaller Y (upward on a
    /// Y-down surface); negation inverts that.
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Sets the vertical padding reserve (applied top and bottom).
    pub fn with_vertical_padding(mut self, padding: f64) -> Self {
        self.vertical_padding = padding;
        self
    }

    /// X coordinate of the entry at `index`: the center of its slot.
    pub fn slot_x(&self, index: usize) -> f64 {
        let slot = self.size.width / self.len.max(1) as f64;
        slot * index as f64 + slot / 2.0
    }

    /// Y coordinate of `value` at the projection's growth factor.
    pub fn value_y(&self, value: f64) -> f64 {
        let mid = (self.max + self.min) / 2.0;
        let delta = if self.negate { value - mid } else { mid - value };
        self.size.height / 2.0 + delta * self.factor * self.scale()
    }

    /// Canvas position of the entry at `index` with `value`.
    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.slot_x(index), self.value_y(value))
    }

    /// Pixels per value unit.
    ///
    /// A flat series (`max == min`) degenerates to `1.0`; every value then
    /// maps onto the vertical center regardless of factor.
    pub fn scale(&self) -> f64 {
        if self.max == self.min {
            1.0
        } else {
            (self.size.height - 2.0 * self.vertical_padding) / (self.max - self.min)
        }
    }
}
