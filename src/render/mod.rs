//! SVG rendering for figura shapes
//!
//! This module is organized into submodules:
//! - `defaults`: Default colors and sizes
//! - `types`: Vector primitives and their style
//! - `shapes`: Shape kinds to primitives
//! - `grid`: Background grid overlay
//! - `svg`: SVG document generation

pub mod defaults;
pub mod grid;
pub mod shapes;
pub mod svg;
pub mod types;

pub use types::*;

use crate::options::Options;
use crate::shape::Shape;
use crate::viewport::compute_viewport;

/// Render shapes into an SVG document string.
///
/// The `viewBox` comes from [`compute_viewport`]. Invisible and `unknown`
/// shapes are skipped, as is any geometry that is not finite.
pub fn render_svg(shapes: &[Shape], options: &Options) -> String {
    let viewport = compute_viewport(shapes, options);
    svg::generate_svg(shapes, &viewport, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitMode;

    fn render(source: &str, options: &Options) -> String {
        render_svg(&crate::parse(source, options.unit_mode, options.canvas), options)
    }

    #[test]
    fn document_carries_view_box() {
        let svg = render("circle(r=10)", &Options::default().with_padding(5.0).with_grid(false));
        assert!(svg.contains("<svg"), "{svg}");
        assert!(svg.contains(r#"viewBox="-15 -15 30 30""#), "{svg}");
        assert!(svg.contains(r#"width="100%""#), "{svg}");
        assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#), "{svg}");
    }

    #[test]
    fn fixed_size_document() {
        let options = Options::default().with_zoom_to_fit(false).with_canvas(320.0, 240.0);
        let svg = render("circle()", &options);
        assert!(svg.contains(r#"width="320""#), "{svg}");
        assert!(svg.contains(r#"height="240""#), "{svg}");
    }

    #[test]
    fn shapes_are_tagged_groups() {
        let svg = render(
            "circle() foo() arrow(x1=0, y1=0, x2=10, y2=0)",
            &Options::default().with_grid(false),
        );
        assert!(svg.contains(r#"class="shape shape-circle""#), "{svg}");
        assert!(svg.contains(r#"data-id="0""#), "{svg}");
        assert!(svg.contains(r#"class="shape shape-arrow""#), "{svg}");
        assert!(svg.contains(r#"data-id="2""#), "{svg}");
        assert!(!svg.contains("shape-unknown"), "{svg}");
    }

    #[test]
    fn hidden_shapes_are_not_drawn() {
        let svg = render("circle(visible=false)", &Options::default().with_grid(false));
        assert!(!svg.contains("<circle"), "{svg}");
    }

    #[test]
    fn label_text_is_escaped_and_marked() {
        let svg = render(r#"label(text="a<b & c")"#, &Options::default().with_grid(false));
        assert!(svg.contains("a&lt;b &amp; c"), "{svg}");
        assert!(!svg.contains("&amp;lt;"), "{svg}");
        assert!(svg.contains(r#"class="math""#), "{svg}");

        let plain = render(r#"label(text="t", isMath=false)"#, &Options::default().with_grid(false));
        assert!(!plain.contains(r#"class="math""#), "{plain}");
    }

    #[test]
    fn grid_is_optional() {
        let with = render("circle()", &Options::default());
        assert!(with.contains(r#"class="grid""#));
        let without = render("circle()", &Options::default().with_grid(false));
        assert!(!without.contains(r#"class="grid""#));
    }

    #[test]
    fn degenerate_input_still_renders() {
        let options = Options::default().with_unit_mode(UnitMode::Absolute);
        let svg = render("circle(r=nope) arrow(x1=5,y1=5,x2=5,y2=5)", &options);
        assert!(svg.contains(r#"viewBox="0 0 100 100""#), "{svg}");
        assert!(!svg.contains("<circle"), "{svg}");
        assert!(!svg.contains("<path"), "{svg}");
    }
}
