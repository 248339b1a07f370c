//! `circle(r, cx, cy, fill, stroke, strokeWidth, opacity, visible)`

use crate::ast::ArgumentList;
use crate::shape::{CircleShape, Shape};

use super::{ParseContext, Span};

/// Raw user-space arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleArgs {
    pub r: Option<f64>,
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
}

impl CircleArgs {
    pub fn from_arguments(args: &ArgumentList) -> Self {
        CircleArgs {
            r: args.number("r"),
            cx: args.number("cx"),
            cy: args.number("cy"),
            fill: args.string("fill"),
            stroke: args.string("stroke"),
            stroke_width: args.number("strokeWidth"),
            opacity: args.number("opacity"),
            visible: args.flag("visible"),
        }
    }
}

pub fn build(ctx: &mut ParseContext, args: &CircleArgs, span: Span) -> Shape {
    let units = ctx.resolver;
    let r = args.r.unwrap_or_else(|| units.pick(10.0, 0.1));
    let circle = CircleShape {
        center: units.point(args.cx.unwrap_or(0.0), args.cy.unwrap_or(0.0)),
        radius: units.length(r),
        fill: args.fill.clone(),
        stroke: args.stroke.clone(),
        stroke_width: args.stroke_width.map(|w| units.style(w)),
        opacity: args.opacity,
    };
    Shape::new(ctx.allocate_id(), circle, args.visible.unwrap_or(true), span)
}
