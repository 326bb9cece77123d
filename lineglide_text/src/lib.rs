// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for value-label placement.
//!
//! The line-graph widget positions each point's value label relative to the
//! point marker, which requires the label's pixel bounds before anything is
//! drawn. Shaping and glyph layout stay downstream in the host renderer, so
//! the widget depends only on this tiny measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used for label placement.
///
/// The widget measures each value label once per frame to compute its anchor
/// offset. Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine, or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; value labels never contain
    /// newlines.
    fn measure(&self, text: &str, style: &LabelStyle) -> LabelMetrics;
}

/// Label styling inputs relevant to measurement.
///
/// This is deliberately minimal: enough for consistent label placement.
/// Richer typography belongs in the host's text system.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in the widget's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl LabelStyle {
    /// Creates a sans-serif `LabelStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Measured bounds for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMetrics {
    /// The advance width of the line.
    pub width: f64,
    /// The line height (ascent + descent).
    pub height: f64,
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &LabelStyle) -> LabelMetrics {
        let width = 0.6 * style.font_size * text.chars().count() as f64;
        LabelMetrics {
            width,
            height: style.font_size,
        }
    }
}
