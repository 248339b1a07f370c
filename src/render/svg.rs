//! SVG generation
//!
//! Primitives become `svg` crate elements; the document carries the viewport
//! as its `viewBox` and wraps every visible shape in a tagged group.

use svg::Document;
use svg::Node;
use svg::node::element::{self, Group};

use crate::log::debug;
use crate::options::Options;
use crate::shape::{RenderShape, Shape};
use crate::types::Viewport;

use super::grid;
use super::types::{Primitive, Style, TextAnchor};

/// Render the visible shapes into a complete SVG document.
pub fn generate_svg(shapes: &[Shape], viewport: &Viewport, options: &Options) -> String {
    let mut document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", viewport.to_string());

    if options.zoom_to_fit {
        document.assign("width", "100%");
        document.assign("height", "100%");
        document.assign("preserveAspectRatio", "xMidYMid meet");
    } else {
        document.assign("width", fmt_num(options.canvas.width));
        document.assign("height", fmt_num(options.canvas.height));
    }

    if options.show_grid {
        if let Some(grid) = grid::grid(viewport, options) {
            append_primitive(&mut document, &grid);
        }
    }

    for shape in shapes.iter().filter(|shape| shape.visible) {
        let primitives = shape.kind.render();
        if primitives.is_empty() {
            debug!(id = shape.id, "shape rendered no geometry");
            continue;
        }
        let mut group = Group::new()
            .set("class", format!("shape shape-{}", shape.shape_type()))
            .set("data-id", shape.id.to_string());
        for primitive in &primitives {
            append_primitive(&mut group, primitive);
        }
        document.append(group);
    }

    document.to_string()
}

/// Append one primitive, recursively, to an SVG parent node
pub fn append_primitive<N: Node>(parent: &mut N, primitive: &Primitive) {
    match primitive {
        Primitive::Circle {
            center,
            radius,
            style,
        } => {
            let mut circle = element::Circle::new()
                .set("cx", fmt_num(center.x))
                .set("cy", fmt_num(center.y))
                .set("r", fmt_num(*radius));
            apply_style(&mut circle, style);
            parent.append(circle);
        }
        Primitive::Line { from, to, style } => {
            let mut line = element::Line::new()
                .set("x1", fmt_num(from.x))
                .set("y1", fmt_num(from.y))
                .set("x2", fmt_num(to.x))
                .set("y2", fmt_num(to.y));
            apply_style(&mut line, style);
            parent.append(line);
        }
        Primitive::Path {
            d,
            transform,
            style,
        } => {
            let mut path = element::Path::new().set("d", d.as_str());
            if let Some(transform) = transform {
                path.assign("transform", transform.as_str());
            }
            apply_style(&mut path, style);
            parent.append(path);
        }
        Primitive::Text {
            position,
            content,
            size,
            anchor,
            math,
            style,
        } => {
            let mut text = element::Text::new()
                .set("x", fmt_num(position.x))
                .set("y", fmt_num(position.y))
                .set("font-size", fmt_num(*size))
                .add(svg::node::Text::new(escape_xml(content)));
            if *anchor == TextAnchor::Middle {
                text.assign("text-anchor", "middle");
                text.assign("dominant-baseline", "middle");
            }
            if *math {
                text.assign("class", "math");
            }
            apply_style(&mut text, style);
            parent.append(text);
        }
        Primitive::Group {
            class,
            style,
            children,
        } => {
            let mut group = Group::new();
            if let Some(class) = class {
                group.assign("class", class.as_str());
            }
            apply_style(&mut group, style);
            for child in children {
                append_primitive(&mut group, child);
            }
            parent.append(group);
        }
    }
}

fn apply_style<N: Node>(node: &mut N, style: &Style) {
    if let Some(fill) = &style.fill {
        node.assign("fill", escape_xml(fill));
    }
    if let Some(stroke) = &style.stroke {
        node.assign("stroke", escape_xml(stroke));
    }
    if let Some(width) = style.stroke_width {
        node.assign("stroke-width", fmt_num(width));
    }
    if let Some(opacity) = style.opacity {
        node.assign("opacity", fmt_num(opacity));
    }
}

/// Escape the XML special characters of user-supplied text
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(15.0), "15");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_num(1_000_000.0), "1000000");
        assert_eq!(fmt_num(6.283185307179586), "6.28319");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"a<b & "c">"#), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
