//! Resolved shapes: the output of [`crate::parse`]
//!
//! Each kind of shape is its own type that knows its bounding box, its
//! property view and how to render itself. [`ShapeKind`] dispatches over them.

use std::fmt;
use std::ops::Range;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::ast::Ending;
use crate::render::Primitive;
use crate::types::BBox;

/// Common geometry behavior for all shape kinds
#[enum_dispatch]
pub trait ShapeGeometry {
    fn shape_type(&self) -> ShapeType;

    /// Bounding box in absolute drawing units
    fn bounding_box(&self) -> BBox;

    /// Resolved properties by their source-language key
    fn properties(&self) -> Vec<(&'static str, PropValue)>;
}

/// Conversion of a shape into drawing primitives; pure
#[enum_dispatch]
pub trait RenderShape {
    fn render(&self) -> Vec<Primitive>;
}

/// The closed set of shape tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    /// Reserved; never produced
    Rect,
    Arrow,
    Label,
    /// Expanded during parsing; never appears in a shape list
    Axis2d,
    Unknown,
}

impl ShapeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Rect => "rect",
            ShapeType::Arrow => "arrow",
            ShapeType::Label => "label",
            ShapeType::Axis2d => "axis2d",
            ShapeType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Number(n) => write!(f, "{}", crate::render::svg::fmt_num(*n)),
            PropValue::Text(s) => write!(f, "{s:?}"),
            PropValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[enum_dispatch(ShapeGeometry, RenderShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Circle(CircleShape),
    Arrow(ArrowShape),
    Label(LabelShape),
    Unknown(UnknownShape),
}

/// One entry of the shape list
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Parse-order index, from 0
    pub id: usize,
    pub kind: ShapeKind,
    /// Invisible shapes keep their slot but are neither drawn nor fitted
    pub visible: bool,
    pub bounding_box: BBox,
    /// Human-readable diagnostics; empty when the command was understood
    pub errors: Vec<String>,
    /// Byte range of the producing command in the source text
    pub span: Range<usize>,
}

impl Shape {
    pub fn new(id: usize, kind: impl Into<ShapeKind>, visible: bool, span: Range<usize>) -> Self {
        let kind = kind.into();
        Shape {
            id,
            bounding_box: kind.bounding_box(),
            kind,
            visible,
            errors: Vec::new(),
            span,
        }
    }

    /// Diagnostic placeholder for a command that could not be understood
    pub fn unknown(id: usize, name: &str, ending: Ending, span: Range<usize>) -> Self {
        let error = match ending {
            Ending::Closed => format!("unknown command: {name}"),
            Ending::Unclosed => format!("unterminated command: {name}"),
            Ending::TooDeep => format!("nesting too deep: {name}"),
        };
        Shape {
            id,
            kind: ShapeKind::Unknown(UnknownShape {
                name: name.to_string(),
                ending,
            }),
            visible: false,
            bounding_box: BBox::ZERO,
            errors: vec![error],
            span,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.kind, ShapeKind::Unknown(_))
    }

    pub fn properties(&self) -> Vec<(&'static str, PropValue)> {
        self.kind.properties()
    }

    /// Look up one resolved property by its source-language key
    pub fn prop(&self, name: &str) -> Option<PropValue> {
        self.properties()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// `"<id>: <type>"`, as listed in a layer panel
    pub fn layer_label(&self) -> String {
        format!("{}: {}", self.id, self.shape_type())
    }
}

/// One line per shape; hidden shapes are marked
pub fn layer_listing(shapes: &[Shape]) -> String {
    let mut out = String::new();
    for shape in shapes {
        out.push_str(&shape.layer_label());
        if !shape.visible {
            out.push_str(" (hidden)");
        }
        out.push('\n');
    }
    out
}

/// Toggle visibility of the shape with `id` in place.
///
/// Returns false when no shape has that id. Order and ids never change.
pub fn set_visibility(shapes: &mut [Shape], id: usize, visible: bool) -> bool {
    match shapes.iter_mut().find(|shape| shape.id == id) {
        Some(shape) => {
            shape.visible = visible;
            true
        }
        None => false,
    }
}

// ============================================================================
// Shape kinds
// ============================================================================

fn push_opt_text(props: &mut Vec<(&'static str, PropValue)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        props.push((key, PropValue::Text(value.clone())));
    }
}

fn push_opt_number(props: &mut Vec<(&'static str, PropValue)>, key: &'static str, value: Option<f64>) {
    if let Some(value) = value {
        props.push((key, PropValue::Number(value)));
    }
}

/// A circle in drawing units
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: DVec2,
    pub radius: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl ShapeGeometry for CircleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn bounding_box(&self) -> BBox {
        BBox::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn properties(&self) -> Vec<(&'static str, PropValue)> {
        let mut props = vec![
            ("cx", PropValue::Number(self.center.x)),
            ("cy", PropValue::Number(self.center.y)),
            ("r", PropValue::Number(self.radius)),
        ];
        push_opt_text(&mut props, "fill", &self.fill);
        push_opt_text(&mut props, "stroke", &self.stroke);
        push_opt_number(&mut props, "strokeWidth", self.stroke_width);
        push_opt_number(&mut props, "opacity", self.opacity);
        props
    }
}

/// A straight arrow with a triangular head at `end`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowShape {
    pub start: DVec2,
    pub end: DVec2,
    pub head_size: f64,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub opacity: Option<f64>,
}

impl ShapeGeometry for ArrowShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Arrow
    }

    /// Spans the endpoints only; the head spread is not included.
    fn bounding_box(&self) -> BBox {
        BBox::from_points(self.start, self.end)
    }

    fn properties(&self) -> Vec<(&'static str, PropValue)> {
        let mut props = vec![
            ("x1", PropValue::Number(self.start.x)),
            ("y1", PropValue::Number(self.start.y)),
            ("x2", PropValue::Number(self.end.x)),
            ("y2", PropValue::Number(self.end.y)),
            ("headSize", PropValue::Number(self.head_size)),
            ("strokeWidth", PropValue::Number(self.stroke_width)),
        ];
        push_opt_text(&mut props, "stroke", &self.stroke);
        push_opt_number(&mut props, "opacity", self.opacity);
        props
    }
}

/// A text label centered on `position`
#[derive(Debug, Clone, PartialEq)]
pub struct LabelShape {
    pub text: String,
    pub position: DVec2,
    pub size: f64,
    pub fill: Option<String>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    /// Text is a math expression to be typeset downstream
    pub is_math: bool,
}

impl LabelShape {
    /// Estimated extent: `0.6·size` per character plus one `size` of margin
    /// wide, `2.5·size` tall. Not glyph metrics.
    ///
    /// Characters are counted in UTF-16 code units, so one astral symbol
    /// (`𝔽`) counts as two.
    pub fn estimated_size(&self) -> DVec2 {
        let chars = self.text.encode_utf16().count() as f64;
        DVec2::new(0.6 * self.size * chars + self.size, 2.5 * self.size)
    }
}

impl ShapeGeometry for LabelShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Label
    }

    fn bounding_box(&self) -> BBox {
        let size = self.estimated_size();
        BBox::from_center(self.position, size.x, size.y)
    }

    fn properties(&self) -> Vec<(&'static str, PropValue)> {
        let mut props = vec![
            ("text", PropValue::Text(self.text.clone())),
            ("x", PropValue::Number(self.position.x)),
            ("y", PropValue::Number(self.position.y)),
            ("size", PropValue::Number(self.size)),
            ("isMath", PropValue::Bool(self.is_math)),
        ];
        push_opt_text(&mut props, "fill", &self.fill);
        push_opt_text(&mut props, "color", &self.color);
        push_opt_number(&mut props, "opacity", self.opacity);
        props
    }
}

/// Placeholder for an unrecognized or unterminated command
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownShape {
    pub name: String,
    /// `Closed` when the name itself was not recognized
    pub ending: Ending,
}

impl ShapeGeometry for UnknownShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Unknown
    }

    fn bounding_box(&self) -> BBox {
        BBox::ZERO
    }

    fn properties(&self) -> Vec<(&'static str, PropValue)> {
        vec![("name", PropValue::Text(self.name.clone()))]
    }
}
