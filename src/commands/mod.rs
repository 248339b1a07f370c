//! Command parsers: turn tokenized commands into resolved shapes
//!
//! Each command kind has its own module with an `*Args` struct read from the
//! [`ArgumentList`] and a `build` step that resolves units and allocates ids
//! from the shared [`ParseContext`].

pub mod arrow;
pub mod axis2d;
pub mod circle;
pub mod label;

use std::ops::Range;

use crate::ast::{ArgumentList, Ending};
use crate::eval::evaluate;
use crate::log::{debug, trace};
use crate::parse::{parse_arguments, parse_number, tokenize, unquote};
use crate::shape::Shape;
use crate::units::{CanvasSize, UnitMode, UnitResolver};

/// State threaded through every command parser of one parse call
#[derive(Debug, Clone)]
pub struct ParseContext {
    next_id: usize,
    pub resolver: UnitResolver,
}

impl ParseContext {
    pub fn new(mode: UnitMode, canvas: CanvasSize) -> Self {
        ParseContext {
            next_id: 0,
            resolver: UnitResolver::new(mode, canvas),
        }
    }

    /// Hand out the next shape id; ids start at 0 and never repeat
    pub fn allocate_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Known command names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Circle,
    Arrow,
    Label,
    Axis2d,
}

impl CommandKind {
    fn lookup(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(CommandKind::Circle),
            "arrow" => Some(CommandKind::Arrow),
            "label" => Some(CommandKind::Label),
            "axis2d" => Some(CommandKind::Axis2d),
            // `rect` is reserved and falls through to unknown
            _ => None,
        }
    }
}

/// Parse command text into shapes with absolute coordinates.
///
/// Never fails. Ids run from 0 in list order. Unrecognized, unterminated and
/// over-nested commands become hidden `unknown` shapes carrying an error
/// message.
pub fn parse(text: &str, unit_mode: UnitMode, canvas: CanvasSize) -> Vec<Shape> {
    let mut ctx = ParseContext::new(unit_mode, canvas);
    let mut shapes = Vec::new();

    for command in tokenize(text) {
        let span = command.span.clone();
        if command.ending != Ending::Closed {
            debug!(name = %command.name, ending = ?command.ending, "command not closed");
            shapes.push(Shape::unknown(ctx.allocate_id(), &command.name, command.ending, span));
            continue;
        }

        let Some(kind) = CommandKind::lookup(&command.name) else {
            debug!(name = %command.name, "unknown command");
            shapes.push(Shape::unknown(ctx.allocate_id(), &command.name, Ending::Closed, span));
            continue;
        };

        let args = parse_arguments(&command.arguments);
        trace!(?kind, arguments = args.len(), "parsing command");
        match kind {
            CommandKind::Circle => {
                let args = circle::CircleArgs::from_arguments(&args);
                shapes.push(circle::build(&mut ctx, &args, span));
            }
            CommandKind::Arrow => {
                let args = arrow::ArrowArgs::from_arguments(&args);
                shapes.push(arrow::build(&mut ctx, &args, span));
            }
            CommandKind::Label => {
                let args = label::LabelArgs::from_arguments(&args);
                shapes.push(label::build(&mut ctx, &args, span));
            }
            CommandKind::Axis2d => {
                let args = axis2d::Axis2dArgs::from_arguments(&args);
                shapes.extend(axis2d::build(&mut ctx, &args, span));
            }
        }
    }

    debug!(count = shapes.len(), "parsed shapes");
    shapes
}

/// Typed readers over raw argument values
impl ArgumentList {
    /// Plain numeric key: longest leading float, NaN if present but unreadable
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).map(parse_number)
    }

    /// Numeric key that accepts arithmetic, NaN if it does not evaluate
    pub fn expression(&self, key: &str) -> Option<f64> {
        self.get(key).map(evaluate)
    }

    /// String key with one layer of double quotes removed
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| unquote(value).to_string())
    }

    /// Boolean key: true iff the (unquoted) value is `true`, any case
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key)
            .map(|value| unquote(value).eq_ignore_ascii_case("true"))
    }
}

/// Byte range of a command in the source text
pub type Span = Range<usize>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeType;

    fn types(shapes: &[Shape]) -> Vec<ShapeType> {
        shapes.iter().map(|s| s.shape_type()).collect()
    }

    #[test]
    fn ids_follow_list_order() {
        let shapes = parse(
            "circle() axis2d() foo() label(text=\"a\")",
            UnitMode::Absolute,
            CanvasSize::default(),
        );
        let ids: Vec<_> = shapes.iter().map(|s| s.id).collect();
        assert_eq!(ids, (0..shapes.len()).collect::<Vec<_>>());
        assert_eq!(shapes.len(), 1 + 4 + 1 + 1);
    }

    #[test]
    fn ids_reset_per_parse() {
        let first = parse("circle() circle()", UnitMode::Absolute, CanvasSize::default());
        let second = parse("circle()", UnitMode::Absolute, CanvasSize::default());
        assert_eq!(first[1].id, 1);
        assert_eq!(second[0].id, 0);
    }

    #[test]
    fn rect_is_reserved() {
        let shapes = parse("rect(w=1)", UnitMode::Absolute, CanvasSize::default());
        assert_eq!(types(&shapes), vec![ShapeType::Unknown]);
        assert_eq!(shapes[0].errors, vec!["unknown command: rect".to_string()]);
    }

    #[test]
    fn unknown_does_not_stop_parsing() {
        let shapes = parse("foo(x=1) circle()", UnitMode::Absolute, CanvasSize::default());
        assert_eq!(types(&shapes), vec![ShapeType::Unknown, ShapeType::Circle]);
    }

    #[test]
    fn unterminated_ends_the_list() {
        let shapes = parse("circle() circle(r=(1 arrow()", UnitMode::Absolute, CanvasSize::default());
        assert_eq!(types(&shapes), vec![ShapeType::Circle, ShapeType::Unknown]);
        assert_eq!(shapes[1].errors, vec!["unterminated command: circle".to_string()]);
    }

    #[test]
    fn deep_nesting_is_isolated() {
        for depth in [100, 4000, 20000] {
            let deep = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
            let source = format!("circle(r=1) label(text={deep}) arrow()");
            let shapes = parse(&source, UnitMode::Absolute, CanvasSize::default());
            assert_eq!(
                types(&shapes),
                vec![ShapeType::Circle, ShapeType::Unknown, ShapeType::Arrow],
                "depth {depth}"
            );
            assert_eq!(shapes[1].errors, vec!["nesting too deep: label".to_string()]);
            assert!(!shapes[1].visible);
            assert_eq!(shapes[2].id, 2);
        }
    }

    #[test]
    fn nesting_limit_is_inclusive() {
        // The command's own parentheses count as the first level
        let inner = crate::parse::MAX_NESTING - 1;
        let source = format!("axis2d(x2={}2{}) circle()", "(".repeat(inner), ")".repeat(inner));
        let shapes = parse(&source, UnitMode::Absolute, CanvasSize::default());
        assert_eq!(shapes.len(), 5);
        assert!(shapes.iter().all(|s| s.errors.is_empty()));

        let over = format!("label(text={}x{})", "(".repeat(inner + 1), ")".repeat(inner + 1));
        let shapes = parse(&over, UnitMode::Absolute, CanvasSize::default());
        assert_eq!(types(&shapes), vec![ShapeType::Unknown]);
    }

    #[test]
    fn unclosed_deep_command_ends_the_list() {
        let source = format!("circle() label(text={} arrow()", "(".repeat(500));
        let shapes = parse(&source, UnitMode::Absolute, CanvasSize::default());
        assert_eq!(types(&shapes), vec![ShapeType::Circle, ShapeType::Unknown]);
        assert_eq!(shapes[1].errors, vec!["nesting too deep: label".to_string()]);
        assert_eq!(shapes[1].span.end, source.len());
    }

    #[test]
    fn typed_readers() {
        let args = parse_arguments(r#"a=10px, b=2*pi, c="red", d=TRUE, e="true", f=yes, g=abc"#);
        assert_eq!(args.number("a"), Some(10.0));
        assert!((args.expression("b").unwrap() - std::f64::consts::TAU).abs() < 1e-12);
        assert_eq!(args.string("c").as_deref(), Some("red"));
        assert_eq!(args.flag("d"), Some(true));
        assert_eq!(args.flag("e"), Some(true));
        assert_eq!(args.flag("f"), Some(false));
        assert!(args.number("g").unwrap().is_nan());
        assert_eq!(args.number("missing"), None);
    }
}
