//! Bounding-box aggregation into the visible window

use crate::log::{debug, warn};
use crate::options::Options;
use crate::shape::Shape;
use crate::types::{BBox, Viewport};

/// Compute the window a renderer should show.
///
/// With auto-fit the window is the union of the boxes of visible, known
/// shapes, padded on every side. Without it, the window is the canvas. Both
/// fall back to `0 0 100 100` when there is nothing sensible to show.
pub fn compute_viewport(shapes: &[Shape], options: &Options) -> Viewport {
    if !options.auto_fit {
        return Viewport {
            x: 0.0,
            y: 0.0,
            width: positive_or_default(options.canvas.width),
            height: positive_or_default(options.canvas.height),
        };
    }

    let union = shapes
        .iter()
        .filter(|shape| shape.visible && !shape.is_unknown())
        .map(|shape| shape.bounding_box)
        .reduce(BBox::union);

    let Some(union) = union else {
        return Viewport::DEFAULT;
    };

    let padded = union.pad(options.padding);
    if !padded.is_finite() {
        warn!(?padded, "non-finite bounds, using default viewport");
        return Viewport::DEFAULT;
    }

    let viewport = Viewport::from_bbox(padded);
    debug!(%viewport, "computed viewport");
    viewport
}

fn positive_or_default(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        Viewport::DEFAULT.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{CanvasSize, UnitMode};

    fn fit(source: &str, padding: f64) -> Viewport {
        let shapes = crate::parse(source, UnitMode::Absolute, CanvasSize::default());
        compute_viewport(&shapes, &Options::default().with_padding(padding))
    }

    #[test]
    fn single_circle() {
        assert_eq!(
            fit("circle(r=10, cx=0, cy=0)", 5.0),
            Viewport {
                x: -15.0,
                y: -15.0,
                width: 30.0,
                height: 30.0
            }
        );
    }

    #[test]
    fn union_of_shapes() {
        let v = fit("circle(r=1) arrow(x1=0, y1=0, x2=10, y2=-20)", 0.0);
        assert_eq!(v.to_string(), "-1 -1 11 21");
    }

    #[test]
    fn hidden_and_unknown_shapes_are_ignored() {
        assert_eq!(fit("circle(r=1) circle(r=50, visible=false) foo()", 0.0).to_string(), "-1 -1 2 2");
        assert_eq!(fit("foo()", 0.0), Viewport::DEFAULT);
        assert_eq!(fit("", 10.0), Viewport::DEFAULT);
    }

    #[test]
    fn nan_geometry_falls_back() {
        assert_eq!(fit("circle(r=abc)", 5.0), Viewport::DEFAULT);
    }

    #[test]
    fn canvas_without_auto_fit() {
        let options = Options::default().with_auto_fit(false).with_canvas(640.0, 480.0);
        assert_eq!(compute_viewport(&[], &options).to_string(), "0 0 640 480");

        let degenerate = Options::default().with_auto_fit(false).with_canvas(0.0, f64::NAN);
        assert_eq!(compute_viewport(&[], &degenerate), Viewport::DEFAULT);
    }

    #[test]
    fn visibility_toggle_changes_fit() {
        let mut shapes = crate::parse("circle(r=1) circle(r=5)", UnitMode::Absolute, CanvasSize::default());
        let options = Options::default().with_padding(0.0);
        assert_eq!(compute_viewport(&shapes, &options).width, 10.0);
        crate::set_visibility(&mut shapes, 1, false);
        assert_eq!(compute_viewport(&shapes, &options).width, 2.0);
    }
}
