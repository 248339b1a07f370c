//! Shape kinds to vector primitives
//!
//! Each shape kind renders itself without touching shared state. Visibility
//! is handled by the document writer, not here.

use glam::DVec2;

use crate::log::warn;
use crate::shape::{ArrowShape, CircleShape, LabelShape, RenderShape, UnknownShape};

use super::defaults;
use super::svg::fmt_num;
use super::types::{Primitive, Style, TextAnchor};

impl RenderShape for CircleShape {
    fn render(&self) -> Vec<Primitive> {
        if !self.center.is_finite() || !self.radius.is_finite() {
            warn!(center = ?self.center, radius = self.radius, "skipping non-finite circle");
            return Vec::new();
        }
        let style = Style::default()
            .fill(self.fill.as_deref().unwrap_or(defaults::CIRCLE_FILL))
            .stroke(self.stroke.as_deref().unwrap_or(defaults::STROKE))
            .stroke_width(self.stroke_width)
            .opacity(self.opacity);
        vec![Primitive::Circle {
            center: self.center,
            radius: self.radius,
            style,
        }]
    }
}

impl RenderShape for ArrowShape {
    fn render(&self) -> Vec<Primitive> {
        // Zero-length arrows have no direction
        let Some(body_end) = arrow_body_end(self).filter(|p| p.is_finite()) else {
            return Vec::new();
        };
        let delta = self.end - self.start;
        let angle = delta.y.atan2(delta.x).to_degrees();
        let color = self.stroke.as_deref().unwrap_or(defaults::STROKE);

        let transform = format!(
            "translate({}, {}) rotate({}) scale({})",
            fmt_num(self.end.x),
            fmt_num(self.end.y),
            fmt_num(angle),
            fmt_num(self.head_size / defaults::ARROW_HEAD_UNIT),
        );

        vec![Primitive::Group {
            class: None,
            style: Style::default()
                .stroke(color)
                .stroke_width(Some(self.stroke_width))
                .opacity(self.opacity),
            children: vec![
                Primitive::Line {
                    from: self.start,
                    to: body_end,
                    style: Style::default(),
                },
                Primitive::Path {
                    d: defaults::ARROW_HEAD_PATH.to_string(),
                    transform: Some(transform),
                    style: Style::default().fill(color),
                },
            ],
        }]
    }
}

impl RenderShape for LabelShape {
    fn render(&self) -> Vec<Primitive> {
        if !self.position.is_finite() || !self.size.is_finite() {
            warn!(position = ?self.position, size = self.size, "skipping non-finite label");
            return Vec::new();
        }
        let color = self
            .color
            .as_deref()
            .or(self.fill.as_deref())
            .unwrap_or(defaults::TEXT_COLOR);
        vec![Primitive::Text {
            position: self.position,
            content: self.text.clone(),
            size: self.size,
            anchor: TextAnchor::Middle,
            math: self.is_math,
            style: Style::default().fill(color).opacity(self.opacity),
        }]
    }
}

impl RenderShape for UnknownShape {
    fn render(&self) -> Vec<Primitive> {
        Vec::new()
    }
}

/// The point where an arrow's body stops, short of its head
pub fn arrow_body_end(arrow: &ArrowShape) -> Option<DVec2> {
    let delta = arrow.end - arrow.start;
    let len = delta.length();
    (len > 0.0 && len.is_finite())
        .then(|| arrow.end - delta / len * (defaults::ARROW_BASE_PER_HEAD * arrow.head_size))
}
