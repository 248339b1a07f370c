//! Rendering configuration

use crate::units::{CanvasSize, UnitMode};

/// Everything a host can configure about a parse + render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Interpretation of numeric arguments
    pub unit_mode: UnitMode,
    /// Canvas dimensions; relative units scale against these
    pub canvas: CanvasSize,
    /// Fit the viewport to the visible shapes instead of the canvas
    pub auto_fit: bool,
    /// Margin added around the fitted shapes
    pub padding: f64,
    /// Stretch the document to its container (`100%`) instead of canvas pixels
    pub zoom_to_fit: bool,
    /// Draw the background grid with tick labels
    pub show_grid: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            unit_mode: UnitMode::Absolute,
            canvas: CanvasSize::default(),
            auto_fit: true,
            padding: 20.0,
            zoom_to_fit: true,
            show_grid: true,
        }
    }
}

impl Options {
    pub fn with_unit_mode(mut self, unit_mode: UnitMode) -> Self {
        self.unit_mode = unit_mode;
        self
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = CanvasSize::new(width, height);
        self
    }

    pub fn with_auto_fit(mut self, auto_fit: bool) -> Self {
        self.auto_fit = auto_fit;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_zoom_to_fit(mut self, zoom_to_fit: bool) -> Self {
        self.zoom_to_fit = zoom_to_fit;
        self
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }
}
