//! Vector primitives produced by shape rendering

use glam::DVec2;

/// Presentation attributes shared by all primitives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl Style {
    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: Option<f64>) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn opacity(mut self, opacity: Option<f64>) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Text alignment relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Centered on the point both ways
    Middle,
    /// Starts at the point, baseline on the point
    Start,
}

/// A drawing primitive in absolute drawing units
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: DVec2,
        radius: f64,
        style: Style,
    },
    Line {
        from: DVec2,
        to: DVec2,
        style: Style,
    },
    Path {
        d: String,
        transform: Option<String>,
        style: Style,
    },
    Text {
        position: DVec2,
        content: String,
        size: f64,
        anchor: TextAnchor,
        /// Marks the text for a downstream typesetter
        math: bool,
        style: Style,
    },
    Group {
        class: Option<String>,
        style: Style,
        children: Vec<Primitive>,
    },
}
