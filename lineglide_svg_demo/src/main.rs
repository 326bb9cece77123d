// Copyright 2026 the Lineglide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives an animated line graph through its mount reveal and a data update,
//! dumping SVG snapshots of selected frames into one HTML report.

mod svg;

use kurbo::Size;
use lineglide_core::{GraphEntry, LineGraph, LineGraphData};
use lineglide_text::HeuristicTextMeasurer;

const CANVAS: Size = Size::new(640.0, 320.0);
const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    let mut graph = LineGraph::new(CANVAS).with_negate(true);
    graph.set_data(LineGraphData::new(vec![
        GraphEntry::new(0, 4.3),
        GraphEntry::new(1, 2.5),
        GraphEntry::new(2, 4.6),
        GraphEntry::new(3, 1.2),
        GraphEntry::new(4, 5.4),
        GraphEntry::new(5, 1.2),
        GraphEntry::new(6, 1.7),
    ]));

    let mut sections = Vec::new();

    // The mount reveal: fade in, hold, grow out of the midline.
    sections.extend(run_until(&mut graph, 2.0, &[0.1, 0.5, 0.9, 1.2, 1.5, 1.9]));

    // A data update: two points removed, one added, the rest revalued. The
    // reveal must not replay; surviving keys glide to their new slots.
    graph.set_data(LineGraphData::new(vec![
        GraphEntry::new(0, 2.1),
        GraphEntry::new(2, 4.6),
        GraphEntry::new(4, 3.0),
        GraphEntry::new(6, 5.1),
        GraphEntry::new(7, 0.8),
    ]));
    sections.extend(run_until(&mut graph, 0.6, &[0.05, 0.15, 0.3, 0.5]));

    let html = render_report("lineglide demo", &sections);
    std::fs::write("lineglide_demo.html", html).expect("write lineglide_demo.html");
    println!("wrote lineglide_demo.html ({} frames)", sections.len());
}

/// Ticks the graph for `total` seconds, snapshotting at each time in `at`.
fn run_until(graph: &mut LineGraph, total: f64, at: &[f64]) -> Vec<(String, String)> {
    let measurer = HeuristicTextMeasurer;
    let mut sections = Vec::new();
    let mut elapsed = 0.0;
    let mut next_snapshot = at.iter().copied();
    let mut pending = next_snapshot.next();

    while elapsed < total {
        graph.tick(FRAME_DT);
        elapsed += FRAME_DT;
        if let Some(t) = pending
            && elapsed >= t
        {
            let title = format!(
                "t+{t:.2}s (alpha {:.2}, factor {:.2})",
                graph.alpha(),
                graph.factor()
            );
            sections.push((title, svg::frame_to_svg(CANVAS, &graph.frame(&measurer))));
            pending = next_snapshot.next();
        }
    }
    sections
}

fn render_report(title: &str, sections: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str("<style>body{font-family:sans-serif}figure{margin:1em 0}</style>");
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for (caption, svg) in sections {
        out.push_str("<figure>\n");
        out.push_str(svg);
        out.push_str(&format!("<figcaption>{caption}</figcaption>\n"));
        out.push_str("</figure>\n");
    }
    out.push_str("</body></html>\n");
    out
}
