//! Default colors and sizes used when a shape leaves them unspecified

pub const CIRCLE_FILL: &str = "white";
pub const STROKE: &str = "black";
pub const TEXT_COLOR: &str = "black";

/// Arrowhead outline with its tip at the origin, pointing along +x.
/// At `scale(1)` the head is 12 units long, so the body stops
/// `ARROW_BASE_PER_HEAD * headSize` before the tip.
pub const ARROW_HEAD_PATH: &str = "M0,0 L-12,-5 L-12,5 z";
pub const ARROW_BASE_PER_HEAD: f64 = 1.2;
pub const ARROW_HEAD_UNIT: f64 = 10.0;

pub const GRID_LINE: &str = "#e0e0e0";
pub const GRID_TEXT: &str = "#a0a0a0";
pub const GRID_ORIGIN: &str = "#aaa";
/// Grid stroke width as a fraction of the viewport height
pub const GRID_LINE_FRACTION: f64 = 1.0 / 1000.0;
/// Grid label font size as a fraction of the viewport height
pub const GRID_TEXT_FRACTION: f64 = 1.0 / 60.0;
/// Upper bound on grid lines per axis
pub const GRID_MAX_LINES: usize = 1000;
