// File: crates/floatchart-svg/src/lib.rs
// Summary: SVG renderer for the float chart primitive tree.

use std::fmt::Write as _;
use std::path::Path;

use floatchart_core::primitive::{ChartTree, Group, Primitive, TextAnchor};
use thiserror::Error;
use tracing::debug;

/// Rendering failure surface. Layout itself cannot fail; only the final
/// write to disk can.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write SVG output: {0}")]
    Io(#[from] std::io::Error),
}

/// Stylesheet for the class tags the layout engine emits.
const STYLE: &str = "\
    svg { font: 10px sans-serif; }\n\
    .bar .even { fill: #ececec; }\n\
    .bar .odd { fill: #f7f7f7; }\n\
    .float { fill: #c7d7e8; }\n\
    .cost { fill: #c0504d; }\n\
    .bond { fill: #4f81bd; }\n\
    .labels, .notes { fill: #666; }\n\
    .y.label { fill: #333; }\n\
    .axis line.tick { stroke: #ddd; stroke-width: 1px; }\n\
    .axis line.line { stroke: #999; stroke-width: 1px; }\n\
    .axis text { fill: #888; }\n";

/// Serialize `tree` to a complete SVG document.
///
/// Deterministic: identical trees yield byte-identical documents.
pub fn render(tree: &ChartTree) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}">"#,
        tree.surface_width, tree.surface_height
    );
    let _ = writeln!(svg, "  <style>\n{STYLE}  </style>");
    for group in &tree.groups {
        write_group(&mut svg, group);
    }
    svg.push_str("</svg>\n");
    debug!(groups = tree.groups.len(), bytes = svg.len(), "rendered chart");
    svg
}

/// Render `tree` and write it to `path`, creating parent directories.
pub fn render_to_file(tree: &ChartTree, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let svg = render(tree);
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    Ok(())
}

fn write_group(svg: &mut String, group: &Group) {
    let _ = writeln!(
        svg,
        r#"  <g{} transform="translate({:.2},{:.2})">"#,
        class_attr(&group.class),
        group.tx,
        group.ty
    );
    for node in &group.nodes {
        match node {
            Primitive::Rect(r) => {
                let _ = writeln!(
                    svg,
                    r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{}/>"#,
                    r.x,
                    r.y,
                    r.width,
                    r.height,
                    class_attr(&r.class)
                );
            }
            Primitive::Text(t) => {
                let _ = writeln!(
                    svg,
                    r#"    <text x="{:.2}" y="{:.2}" dy="{}em" text-anchor="{}"{}>{}</text>"#,
                    t.x,
                    t.y,
                    t.dy_em,
                    anchor_name(t.anchor),
                    class_attr(&t.class),
                    escape_xml(&t.content)
                );
            }
            Primitive::AxisLine(l) => {
                let _ = writeln!(
                    svg,
                    r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                    l.x1,
                    l.y1,
                    l.x2,
                    l.y2,
                    class_attr(&l.class)
                );
            }
        }
    }
    svg.push_str("  </g>\n");
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{class}""#)
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
