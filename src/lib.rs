//! figura: a tiny command language for math diagrams.
//!
//! Source text is a sequence of function-call commands:
//!
//! ```text
//! axis2d(x1=-10, x2=2*pi*20, xLabel="x", yLabel="y")
//! circle(r=10, cx=40, cy=30, fill="orange")
//! arrow(x1=0, y1=0, x2=40, y2=30, headSize=8)
//! label(text="P", x=55, y=40, isMath=false)
//! ```
//!
//! [`parse`] turns the text into a flat list of [`Shape`]s in absolute
//! coordinates, [`compute_viewport`] folds their bounding boxes into an
//! auto-fit view, and [`render_svg`] draws them.
//!
//! ```rust
//! use figura::{CanvasSize, Options, UnitMode};
//!
//! let shapes = figura::parse("circle(r=10)", UnitMode::Absolute, CanvasSize::default());
//! assert_eq!(shapes.len(), 1);
//!
//! let svg = figura::render_svg(&shapes, &Options::default().with_grid(false));
//! assert!(svg.contains("<circle"));
//! ```

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "figura.pest"]
pub struct FiguraParser;

pub mod ast;
pub mod commands;
pub mod errors;
pub mod eval;
pub mod log;
pub mod options;
pub mod parse;
pub mod render;
pub mod shape;
pub mod templates;
pub mod types;
pub mod units;
pub mod viewport;

pub use commands::parse;
pub use errors::{CommandError, EvalError, OptionError, diagnostics};
pub use eval::{evaluate, try_evaluate};
pub use options::Options;
pub use render::render_svg;
pub use shape::{Shape, ShapeKind, ShapeType, layer_listing, set_visibility};
pub use types::{BBox, Viewport};
pub use units::{CanvasSize, UnitMode};
pub use viewport::compute_viewport;

/// Parse and render command text in one step.
///
/// Never fails: unknown commands and malformed values are carried in the
/// shapes and degrade the drawing instead.
pub fn render(source: &str, options: &Options) -> String {
    let shapes = parse(source, options.unit_mode, options.canvas);
    render_svg(&shapes, options)
}
