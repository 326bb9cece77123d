// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `lineglide_svg_demo`.

use kurbo::Size;
use lineglide_core::DrawCmd;
use peniko::Brush;

/// Renders one frame's draw commands as a standalone SVG element.
pub(crate) fn frame_to_svg(size: Size, cmds: &[DrawCmd]) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {} {}" width="{}" height="{}">"#,
        size.width, size.height, size.width, size.height
    ));
    out.push('\n');

    for cmd in cmds {
        match cmd {
            DrawCmd::Line {
                from,
                to,
                stroke,
                width,
                alpha,
            } => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}" stroke-linecap="round""#,
                    from.x, from.y, to.x, to.y, width
                ));
                write_paint_attr(&mut out, "stroke", stroke);
                write_opacity_attr(&mut out, *alpha);
                out.push_str("/>\n");
            }
            DrawCmd::Circle {
                center,
                radius,
                fill,
                alpha,
            } => {
                out.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    center.x, center.y, radius
                ));
                write_paint_attr(&mut out, "fill", fill);
                write_opacity_attr(&mut out, *alpha);
                out.push_str("/>\n");
            }
            DrawCmd::Label {
                top_left,
                text,
                font_size,
                fill,
                alpha,
            } => {
                // `top_left` is the label box corner; SVG positions text at
                // the baseline, approximated at ~0.8em below the top.
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif""#,
                    top_left.x,
                    top_left.y + 0.8 * font_size,
                    font_size
                ));
                write_paint_attr(&mut out, "fill", fill);
                write_opacity_attr(&mut out, *alpha);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let paint_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, paint_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_opacity_attr(out: &mut String, alpha: f64) {
    if alpha < 1.0 {
        out.push_str(&format!(r#" opacity="{alpha}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
