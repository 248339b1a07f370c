//! `label(text, x, y, fill, color, size, opacity, visible, isMath)`

use crate::ast::ArgumentList;
use crate::shape::{LabelShape, Shape};

use super::{ParseContext, Span};

/// Raw user-space arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelArgs {
    pub text: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub fill: Option<String>,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub is_math: Option<bool>,
}

impl LabelArgs {
    pub fn from_arguments(args: &ArgumentList) -> Self {
        LabelArgs {
            text: args.string("text"),
            x: args.number("x"),
            y: args.number("y"),
            fill: args.string("fill"),
            color: args.string("color"),
            size: args.number("size"),
            opacity: args.number("opacity"),
            visible: args.flag("visible"),
            is_math: args.flag("isMath"),
        }
    }
}

pub fn build(ctx: &mut ParseContext, args: &LabelArgs, span: Span) -> Shape {
    let units = ctx.resolver;
    let x = args.x.unwrap_or_else(|| units.pick(50.0, 0.5));
    let y = args.y.unwrap_or_else(|| units.pick(50.0, 0.5));

    let label = LabelShape {
        text: args.text.clone().unwrap_or_default(),
        position: units.point(x, y),
        size: units.style(args.size.unwrap_or(16.0)),
        fill: args.fill.clone(),
        color: args.color.clone(),
        opacity: args.opacity,
        is_math: args.is_math.unwrap_or(true),
    };
    Shape::new(ctx.allocate_id(), label, args.visible.unwrap_or(true), span)
}

#[cfg(test)]
mod tests {
    use crate::shape::{PropValue, ShapeKind};
    use crate::{CanvasSize, UnitMode, parse};
    use glam::dvec2;

    #[test]
    fn defaults_absolute() {
        let shapes = parse("label()", UnitMode::Absolute, CanvasSize::default());
        let ShapeKind::Label(label) = &shapes[0].kind else {
            panic!("expected a label");
        };
        assert_eq!(label.text, "");
        assert_eq!(label.position, dvec2(50.0, -50.0));
        assert_eq!(label.size, 16.0);
        assert!(label.is_math);
        // empty text: width = size, height = 2.5 * size
        assert_eq!(shapes[0].bounding_box.width(), 16.0);
        assert_eq!(shapes[0].bounding_box.height(), 40.0);
    }

    #[test]
    fn text_with_commas_and_parens() {
        let shapes = parse(
            r#"label(text="f(x, y)", x=0, y=0, isMath=false, color=red)"#,
            UnitMode::Absolute,
            CanvasSize::default(),
        );
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].prop("text"), Some(PropValue::Text("f(x, y)".into())));
        assert_eq!(shapes[0].prop("isMath"), Some(PropValue::Bool(false)));
        assert_eq!(shapes[0].prop("color"), Some(PropValue::Text("red".into())));
    }

    #[test]
    fn relative_position_and_size() {
        let shapes = parse("label(x=0.25, y=0.5, size=10)", UnitMode::Relative, CanvasSize::new(400.0, 200.0));
        let ShapeKind::Label(label) = &shapes[0].kind else {
            panic!("expected a label");
        };
        assert_eq!(label.position, dvec2(100.0, -100.0));
        // 10 * 300 / 100
        assert!((label.size - 30.0).abs() < 1e-9);
    }
}
