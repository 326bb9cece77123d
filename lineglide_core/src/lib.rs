// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An animated single-series line-graph widget.
//!
//! The widget maps an ordered list of keyed data points onto a host-supplied
//! canvas and emits plain draw commands (lines, circles, labels) each frame:
//! - **Projection** maps a data index and value into canvas coordinates,
//!   including the mount-time "growth" factor that expands the chart from a
//!   flat midline to full amplitude.
//! - **Label anchors** place each value label on the side away from the line
//!   segments meeting at its point.
//! - **Keyed reconciliation** keeps one [`AnimatedNode`] alive per data key
//!   across updates, so changed points glide to their new positions while
//!   unchanged points keep their animated continuity.
//!
//! Drawing, text shaping, and the frame clock stay in the host: the widget
//! consumes a [`lineglide_text::TextMeasurer`], is advanced by explicit
//! `tick(dt)` calls, and produces a [`DrawCmd`] list per frame.

#![no_std]

extern crate alloc;

mod anchor;
mod anim;
mod data;
mod ease;
mod graph;
mod layout;
mod reconcile;
mod scene;
mod style;
mod timeline;

pub use anchor::LabelAnchor;
pub use anim::{AnimVar, Tween};
pub use data::{EntryKey, GraphEntry, LineGraphData};
pub use ease::Easing;
pub use graph::LineGraph;
pub use layout::Projection;
pub use reconcile::{AnimatedNode, NodeSet};
pub use scene::{DrawCmd, format_value};
pub use style::GraphStyle;
pub use timeline::{RevealPhase, RevealTimeline};
