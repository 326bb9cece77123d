// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The embeddable widget: data in, draw commands out.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Size;
use lineglide_text::TextMeasurer;

use crate::anchor::LabelAnchor;
use crate::anim::Tween;
use crate::data::LineGraphData;
use crate::layout::Projection;
use crate::reconcile::NodeSet;
use crate::scene::{DrawCmd, format_value};
use crate::style::GraphStyle;
use crate::timeline::RevealTimeline;

/// An animated single-series line graph.
///
/// The host owns the frame loop and the drawing surface; the widget owns all
/// animation state. Per frame the host calls [`tick`](Self::tick) with the
/// elapsed time and, while it returns `true`, redraws from
/// [`frame`](Self::frame). Data updates via [`set_data`](Self::set_data)
/// animate points between positions without replaying the mount reveal.
///
/// Dropping the widget abandons all in-flight animations; there is nothing to
/// cancel or flush.
#[derive(Debug)]
pub struct LineGraph {
    data: LineGraphData,
    style: GraphStyle,
    negate: bool,
    size: Size,
    timeline: RevealTimeline,
    nodes: NodeSet,
}

impl LineGraph {
    /// Creates an empty graph for a canvas of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            data: LineGraphData::default(),
            style: GraphStyle::default(),
            negate: false,
            size,
            timeline: RevealTimeline::new(),
            nodes: NodeSet::new(),
        }
    }

    /// Sets the visual style.
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Flips which vertical direction corresponds to larger values.
    ///
    /// Label anchors are mirrored to match, so labels stay on the side away
    /// from the line.
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Sets the tween applied to data-transition movements.
    pub fn with_tween(mut self, tween: Tween) -> Self {
        self.nodes = NodeSet::new().with_tween(tween);
        self
    }

    /// Returns the current data.
    pub fn data(&self) -> &LineGraphData {
        &self.data
    }

    /// Returns the visual style.
    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Returns the reconciled node set.
    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Marker/line fade-in opacity, in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.timeline.alpha()
    }

    /// Vertical growth progress (and label opacity), in `[0, 1]`.
    pub fn factor(&self) -> f64 {
        self.timeline.factor()
    }

    /// Replaces the data, reconciling nodes by key.
    ///
    /// Entries that keep their key keep their node and glide to their new
    /// position; added keys appear at their target; removed keys disappear
    /// immediately. The mount reveal is not replayed. Keys must be unique
    /// within one update.
    pub fn set_data(&mut self, data: LineGraphData) {
        self.data = data;
        let projection = self.projection();
        self.nodes.reconcile(&self.data, &projection);
    }

    /// Adopts a new canvas size from the host's layout.
    ///
    /// Goes through the same reconcile path as a data update, so points glide
    /// to their rescaled positions.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        let projection = self.projection();
        self.nodes.reconcile(&self.data, &projection);
    }

    /// Advances all animations by `dt` seconds.
    ///
    /// Returns `true` while anything is still moving, i.e. while the host
    /// should keep scheduling frames.
    pub fn tick(&mut self, dt: f64) -> bool {
        let factor_before = self.timeline.factor();
        let timeline_active = self.timeline.tick(dt);
        if self.timeline.factor() != factor_before {
            // The growth factor moved, so every Y target moved with it.
            let projection = self.projection();
            self.nodes.apply_growth(&self.data, &projection);
        }
        let nodes_active = self.nodes.tick(dt);
        timeline_active || nodes_active
    }

    /// Produces this frame's draw calls: line segments and markers at the
    /// fade-in opacity, then value labels at the growth opacity (the
    /// two-stage reveal: structure first, values second).
    ///
    /// Empty data produces no output at all.
    pub fn frame(&self, measurer: &dyn TextMeasurer) -> Vec<DrawCmd> {
        if self.data.is_empty() {
            return Vec::new();
        }

        let alpha = self.timeline.alpha();
        let factor = self.timeline.factor();
        let nodes = self.nodes.nodes();
        let mut out = Vec::with_capacity(nodes.len() * 3);

        for pair in nodes.windows(2) {
            out.push(DrawCmd::Line {
                from: pair[0].position(),
                to: pair[1].position(),
                stroke: self.style.line_stroke.clone(),
                width: self.style.line_width,
                alpha,
            });
        }

        for node in nodes {
            out.push(DrawCmd::Circle {
                center: node.position(),
                radius: self.style.point_radius,
                fill: self.style.point_fill.clone(),
                alpha,
            });
        }

        let label_style = self.style.label_style();
        let entries = self.data.entries();
        for (index, (node, entry)) in nodes.iter().zip(entries).enumerate() {
            let text = format_value(entry.value);
            let metrics = measurer.measure(&text, &label_style);

            let prev = index.checked_sub(1).map(|i| entries[i].value);
            let next = entries.get(index + 1).map(|e| e.value);
            let mut anchor = LabelAnchor::resolve(prev, entry.value, next);
            if self.negate {
                anchor = anchor.mirrored();
            }
            let offset = anchor.offset(metrics.width, metrics.height, self.style.label_margin);

            out.push(DrawCmd::Label {
                top_left: node.position() + offset,
                text,
                font_size: self.style.label_font_size,
                fill: self.style.label_fill.clone(),
                alpha: factor,
            });
        }

        out
    }

    fn projection(&self) -> Projection {
        Projection::new(self.size, &self.data, self.timeline.factor())
            .with_negate(self.negate)
            .with_vertical_padding(self.style.vertical_padding)
    }
}
