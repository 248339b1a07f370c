//! `arrow(x1, y1, x2, y2, headSize, stroke, strokeWidth, opacity, visible)`

use crate::ast::ArgumentList;
use crate::shape::{ArrowShape, Shape};

use super::{ParseContext, Span};

/// Raw user-space arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowArgs {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub head_size: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
}

impl ArrowArgs {
    pub fn from_arguments(args: &ArgumentList) -> Self {
        ArrowArgs {
            x1: args.number("x1"),
            y1: args.number("y1"),
            x2: args.number("x2"),
            y2: args.number("y2"),
            head_size: args.number("headSize"),
            stroke: args.string("stroke"),
            stroke_width: args.number("strokeWidth"),
            opacity: args.number("opacity"),
            visible: args.flag("visible"),
        }
    }
}

pub fn build(ctx: &mut ParseContext, args: &ArrowArgs, span: Span) -> Shape {
    let units = ctx.resolver;
    let x1 = args.x1.unwrap_or_else(|| units.pick(-10.0, 0.1));
    let y1 = args.y1.unwrap_or_else(|| units.pick(0.0, 0.1));
    let x2 = args.x2.unwrap_or_else(|| units.pick(100.0, 0.9));
    let y2 = args.y2.unwrap_or_else(|| units.pick(0.0, 0.9));

    let arrow = ArrowShape {
        start: units.point(x1, y1),
        end: units.point(x2, y2),
        head_size: units.style(args.head_size.unwrap_or(10.0)),
        stroke: args.stroke.clone(),
        stroke_width: units.style(args.stroke_width.unwrap_or(1.0)),
        opacity: args.opacity,
    };
    Shape::new(ctx.allocate_id(), arrow, args.visible.unwrap_or(true), span)
}
