//! `axis2d(...)`: expands into two axis arrows and up to two axis labels
//!
//! Numeric keys accept arithmetic (`x2=2*pi*20`). The command itself never
//! appears in the shape list.

use crate::ast::ArgumentList;
use crate::shape::Shape;

use super::arrow::{self, ArrowArgs};
use super::label::{self, LabelArgs};
use super::{ParseContext, Span};

/// Arguments with their defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct Axis2dArgs {
    pub ox: f64,
    pub oy: f64,
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub x_label: String,
    pub y_label: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub head_size: f64,
    pub label_size: f64,
    pub visible: bool,
}

impl Default for Axis2dArgs {
    fn default() -> Self {
        Axis2dArgs {
            ox: 0.0,
            oy: 0.0,
            x1: -10.0,
            x2: 100.0,
            y1: -10.0,
            y2: 100.0,
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            stroke: "black".to_string(),
            stroke_width: 1.0,
            head_size: 20.0,
            label_size: 30.0,
            visible: true,
        }
    }
}

impl Axis2dArgs {
    pub fn from_arguments(args: &ArgumentList) -> Self {
        let d = Axis2dArgs::default();
        Axis2dArgs {
            ox: args.expression("ox").unwrap_or(d.ox),
            oy: args.expression("oy").unwrap_or(d.oy),
            x1: args.expression("x1").unwrap_or(d.x1),
            x2: args.expression("x2").unwrap_or(d.x2),
            y1: args.expression("y1").unwrap_or(d.y1),
            y2: args.expression("y2").unwrap_or(d.y2),
            x_label: args.string("xLabel").unwrap_or(d.x_label),
            y_label: args.string("yLabel").unwrap_or(d.y_label),
            stroke: args.string("stroke").unwrap_or(d.stroke),
            stroke_width: args.expression("strokeWidth").unwrap_or(d.stroke_width),
            head_size: args.expression("headSize").unwrap_or(d.head_size),
            label_size: args.expression("labelSize").unwrap_or(d.label_size),
            visible: args.flag("visible").unwrap_or(d.visible),
        }
    }

    fn axis(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> ArrowArgs {
        ArrowArgs {
            x1: Some(x1),
            y1: Some(y1),
            x2: Some(x2),
            y2: Some(y2),
            head_size: Some(self.head_size),
            stroke: Some(self.stroke.clone()),
            stroke_width: Some(self.stroke_width),
            ..ArrowArgs::default()
        }
    }

    fn label(&self, text: &str, x: f64, y: f64) -> LabelArgs {
        LabelArgs {
            text: Some(text.to_string()),
            x: Some(x),
            y: Some(y),
            color: Some(self.stroke.clone()),
            size: Some(self.label_size),
            ..LabelArgs::default()
        }
    }
}

/// Expand in fixed order: x axis, y axis, x label, y label.
///
/// `visible=false` yields no shapes at all. Labels sit one twentieth of the
/// canvas beyond the arrow tips and are skipped when their text is empty.
pub fn build(ctx: &mut ParseContext, args: &Axis2dArgs, span: Span) -> Vec<Shape> {
    if !args.visible {
        return Vec::new();
    }

    let mut shapes = vec![
        arrow::build(ctx, &args.axis(args.x1, 0.0, args.x2, 0.0), span.clone()),
        arrow::build(ctx, &args.axis(0.0, args.y1, 0.0, args.y2), span.clone()),
    ];

    if !args.x_label.is_empty() {
        let x = args.x2 + ctx.resolver.twentieth_width();
        shapes.push(label::build(ctx, &args.label(&args.x_label, x, args.oy), span.clone()));
    }
    if !args.y_label.is_empty() {
        let y = args.y2 + ctx.resolver.twentieth_height();
        shapes.push(label::build(ctx, &args.label(&args.y_label, args.ox, y), span));
    }
    shapes
}

#[cfg(test)]
mod tests {
    use crate::shape::{PropValue, ShapeKind, ShapeType};
    use crate::{CanvasSize, UnitMode, parse};
    use glam::dvec2;

    fn types(source: &str) -> Vec<ShapeType> {
        parse(source, UnitMode::Absolute, CanvasSize::default())
            .iter()
            .map(|s| s.shape_type())
            .collect()
    }

    #[test]
    fn expansion_counts() {
        use ShapeType::*;
        assert_eq!(types(r#"axis2d(xLabel="x", yLabel="y")"#), vec![Arrow, Arrow, Label, Label]);
        assert_eq!(types(r#"axis2d(xLabel="", yLabel="")"#), vec![Arrow, Arrow]);
        assert_eq!(types(r#"axis2d(yLabel="")"#), vec![Arrow, Arrow, Label]);
        assert!(types("axis2d(visible=false)").is_empty());
    }

    #[test]
    fn defaults_geometry() {
        let shapes = parse("axis2d()", UnitMode::Absolute, CanvasSize::new(200.0, 100.0));
        let ShapeKind::Arrow(x_axis) = &shapes[0].kind else {
            panic!("expected x axis arrow");
        };
        assert_eq!(x_axis.start, dvec2(-10.0, 0.0));
        assert_eq!(x_axis.end, dvec2(100.0, 0.0));
        assert_eq!(x_axis.head_size, 20.0);
        assert_eq!(x_axis.stroke.as_deref(), Some("black"));

        let ShapeKind::Arrow(y_axis) = &shapes[1].kind else {
            panic!("expected y axis arrow");
        };
        assert_eq!(y_axis.start, dvec2(0.0, 10.0));
        assert_eq!(y_axis.end, dvec2(0.0, -100.0));

        // x label: x2 + 200/20, at oy
        assert_eq!(shapes[2].prop("x"), Some(PropValue::Number(110.0)));
        assert_eq!(shapes[2].prop("text"), Some(PropValue::Text("x".into())));
        assert_eq!(shapes[2].prop("size"), Some(PropValue::Number(30.0)));
        assert_eq!(shapes[2].prop("color"), Some(PropValue::Text("black".into())));
        // y label: y2 + 100/20 above the tip
        assert_eq!(shapes[3].prop("y"), Some(PropValue::Number(-105.0)));
    }

    #[test]
    fn expressions_in_numeric_keys() {
        let shapes = parse("axis2d(x2=2*pi, stroke=\"red\")", UnitMode::Absolute, CanvasSize::default());
        let Some(PropValue::Number(x2)) = shapes[0].prop("x2") else {
            panic!("expected x2");
        };
        assert!((x2 - std::f64::consts::TAU).abs() < 1e-12);
        assert_eq!(shapes[2].prop("color"), Some(PropValue::Text("red".into())));
    }

    #[test]
    fn relative_label_offset_is_a_twentieth() {
        let shapes = parse("axis2d(x2=0.5)", UnitMode::Relative, CanvasSize::new(400.0, 200.0));
        // (0.5 + 0.05) * 400
        let Some(PropValue::Number(x)) = shapes[2].prop("x") else {
            panic!("expected label x");
        };
        assert!((x - 220.0).abs() < 1e-9);
    }

    #[test]
    fn sub_shapes_take_consecutive_ids() {
        let shapes = parse("circle() axis2d() circle()", UnitMode::Absolute, CanvasSize::default());
        let ids: Vec<_> = shapes.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }
}
