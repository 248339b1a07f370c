//! Unit modes and the resolver that turns user-space values into drawing units
//!
//! User space has y pointing up. In `relative` mode coordinates are fractions
//! of the canvas. Resolution is per property category:
//!
//! | category            | relative            | absolute |
//! |---------------------|---------------------|----------|
//! | x position          | `x * width`         | `x`      |
//! | y position          | `-y * height`       | `-y`     |
//! | length (radius)     | `v * scale`         | `v`      |
//! | style size          | `v * scale / 100`   | `v`      |
//!
//! where `scale = (width + height) / 2`. Style sizes are stroke widths, arrow
//! head sizes and font sizes.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::OptionError;

/// How numeric arguments are interpreted; one mode per parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    #[default]
    Absolute,
    Relative,
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitMode::Absolute => write!(f, "absolute"),
            UnitMode::Relative => write!(f, "relative"),
        }
    }
}

impl FromStr for UnitMode {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "absolute" | "abs" => Ok(UnitMode::Absolute),
            "relative" | "rel" => Ok(UnitMode::Relative),
            _ => Err(OptionError::UnknownUnitMode(s.to_string())),
        }
    }
}

/// Canvas dimensions in drawing units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        CanvasSize { width, height }
    }

    /// Isotropic scale used for radii and style sizes
    pub fn scale(&self) -> f64 {
        (self.width + self.height) / 2.0
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize {
            width: 200.0,
            height: 200.0,
        }
    }
}

/// Resolves user-space values for one parse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitResolver {
    pub mode: UnitMode,
    pub canvas: CanvasSize,
}

impl UnitResolver {
    pub fn new(mode: UnitMode, canvas: CanvasSize) -> Self {
        UnitResolver { mode, canvas }
    }

    fn relative(&self) -> bool {
        self.mode == UnitMode::Relative
    }

    pub fn x(&self, x: f64) -> f64 {
        if self.relative() { x * self.canvas.width } else { x }
    }

    /// Flips y exactly once
    pub fn y(&self, y: f64) -> f64 {
        if self.relative() { -y * self.canvas.height } else { -y }
    }

    pub fn point(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(self.x(x), self.y(y))
    }

    pub fn length(&self, v: f64) -> f64 {
        if self.relative() { v * self.canvas.scale() } else { v }
    }

    pub fn style(&self, v: f64) -> f64 {
        if self.relative() { v * self.canvas.scale() / 100.0 } else { v }
    }

    /// Pick the user-space default for the active mode
    pub fn pick(&self, absolute: f64, relative: f64) -> f64 {
        if self.relative() { relative } else { absolute }
    }

    /// One twentieth of the canvas width, in user-space units
    pub fn twentieth_width(&self) -> f64 {
        self.pick(self.canvas.width / 20.0, 0.05)
    }

    /// One twentieth of the canvas height, in user-space units
    pub fn twentieth_height(&self) -> f64 {
        self.pick(self.canvas.height / 20.0, 0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_mode_from_str() {
        assert_eq!("Relative".parse::<UnitMode>(), Ok(UnitMode::Relative));
        assert_eq!("absolute".parse::<UnitMode>(), Ok(UnitMode::Absolute));
        assert_eq!(
            "polar".parse::<UnitMode>(),
            Err(OptionError::UnknownUnitMode("polar".into()))
        );
        assert_eq!(UnitMode::Relative.to_string(), "relative");
    }

    #[test]
    fn absolute_only_flips_y() {
        let r = UnitResolver::new(UnitMode::Absolute, CanvasSize::new(400.0, 300.0));
        assert_eq!(r.x(12.0), 12.0);
        assert_eq!(r.y(12.0), -12.0);
        assert_eq!(r.length(5.0), 5.0);
        assert_eq!(r.style(2.0), 2.0);
        assert_eq!(r.twentieth_width(), 20.0);
        assert_eq!(r.twentieth_height(), 15.0);
    }

    #[test]
    fn relative_scales_by_category() {
        let r = UnitResolver::new(UnitMode::Relative, CanvasSize::new(200.0, 100.0));
        assert_eq!(r.x(0.5), 100.0);
        assert_eq!(r.y(0.5), -50.0);
        assert_eq!(r.length(0.1), 15.0);
        assert_eq!(r.style(2.0), 3.0);
        assert_eq!(r.twentieth_width(), 0.05);
    }
}
