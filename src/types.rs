//! Geometric value types shared by the parser, the aggregator and the renderer.
//!
//! All coordinates are absolute drawing units with y growing downwards, i.e.
//! after the y-flip applied at ingestion.

use std::fmt;

use glam::DVec2;

use crate::render::svg::fmt_num;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// The box of shapes that have no extent (`unknown`)
    pub const ZERO: BBox = BBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing both points, min/max taken per axis
    pub fn from_points(a: DVec2, b: DVec2) -> Self {
        // DVec2::min/max drop NaN operands; keep NaN visible instead
        if a.is_nan() || b.is_nan() {
            return BBox::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);
        }
        let min = a.min(b);
        let max = a.max(b);
        BBox::new(min.x, min.y, max.x, max.y)
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: DVec2, width: f64, height: f64) -> Self {
        let half = DVec2::new(width, height) / 2.0;
        BBox::new(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    /// Expand to include another box
    pub fn union(self, other: BBox) -> BBox {
        BBox::new(
            nan_min(self.min_x, other.min_x),
            nan_min(self.min_y, other.min_y),
            nan_max(self.max_x, other.max_x),
            nan_max(self.max_y, other.max_y),
        )
    }

    /// Grow by `padding` on all four sides
    pub fn pad(self, padding: f64) -> BBox {
        BBox::new(
            self.min_x - padding,
            self.min_y - padding,
            self.max_x + padding,
            self.max_y + padding,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// True when `other` lies entirely inside this box (edges included)
    pub fn contains(&self, other: &BBox) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }
}

// f64::min ignores NaN; the aggregator has to see it to fall back.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

/// The visible window in drawing units: SVG `viewBox` order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Fallback window when nothing can be measured
    pub const DEFAULT: Viewport = Viewport {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    pub fn from_bbox(bbox: BBox) -> Self {
        Viewport {
            x: bbox.min_x,
            y: bbox.min_y,
            width: bbox.width(),
            height: bbox.height(),
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::DEFAULT
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}
