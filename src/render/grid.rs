//! Background grid with tick labels in user-space values

use glam::dvec2;

use crate::options::Options;
use crate::types::Viewport;
use crate::units::UnitMode;

use super::defaults;
use super::svg::fmt_num;
use super::types::{Primitive, Style, TextAnchor};

/// A readable tick spacing for an axis spanning `range` drawing units.
///
/// `range=150` gives 10, `range=400` gives 25, `range=800` gives 100.
pub fn tick_step(range: f64) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 10.0;
    }
    let base = 10_f64.powf(range.log10().floor());
    let normalized = range / base;
    if normalized < 2.0 {
        base / 10.0
    } else if normalized < 5.0 {
        base / 4.0
    } else {
        base
    }
}

/// Multiples of `step` in `[start, end)`, at most [`defaults::GRID_MAX_LINES`]
fn ticks(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (start / step).ceil();
    (0..defaults::GRID_MAX_LINES)
        .map(move |i| (first + i as f64) * step)
        .take_while(move |v| *v < end)
}

/// The grid for `viewport`, or `None` when the viewport is degenerate
pub fn grid(viewport: &Viewport, options: &Options) -> Option<Primitive> {
    let Viewport {
        x,
        y,
        width,
        height,
    } = *viewport;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return None;
    }

    // Tick labels show user-space values: y points up, relative is a fraction
    let (x_scale, y_scale) = match options.unit_mode {
        UnitMode::Absolute => (1.0, 1.0),
        UnitMode::Relative => (options.canvas.width, options.canvas.height),
    };
    let line_width = height * defaults::GRID_LINE_FRACTION;
    let text_size = height * defaults::GRID_TEXT_FRACTION;
    let line_style = Style::default()
        .stroke(defaults::GRID_LINE)
        .stroke_width(Some(line_width));
    let label_style = Style::default().fill(defaults::GRID_TEXT);

    let mut children = Vec::new();

    for tx in ticks(x, x + width, tick_step(width)) {
        children.push(Primitive::Line {
            from: dvec2(tx, y),
            to: dvec2(tx, y + height),
            style: line_style.clone(),
        });
        children.push(Primitive::Text {
            position: dvec2(tx, y + height - text_size),
            content: fmt_num(tx / x_scale),
            size: text_size,
            anchor: TextAnchor::Start,
            math: false,
            style: label_style.clone(),
        });
    }

    for ty in ticks(y, y + height, tick_step(height)) {
        children.push(Primitive::Line {
            from: dvec2(x, ty),
            to: dvec2(x + width, ty),
            style: line_style.clone(),
        });
        children.push(Primitive::Text {
            position: dvec2(x + width * defaults::GRID_TEXT_FRACTION, ty),
            content: fmt_num(-ty / y_scale),
            size: text_size,
            anchor: TextAnchor::Start,
            math: false,
            style: label_style.clone(),
        });
    }

    children.push(Primitive::Line {
        from: dvec2(0.0, y),
        to: dvec2(0.0, y + height),
        style: Style::default()
            .stroke(defaults::GRID_ORIGIN)
            .stroke_width(Some(width * defaults::GRID_LINE_FRACTION)),
    });
    children.push(Primitive::Line {
        from: dvec2(x, 0.0),
        to: dvec2(x + width, 0.0),
        style: Style::default()
            .stroke(defaults::GRID_ORIGIN)
            .stroke_width(Some(line_width)),
    });

    Some(Primitive::Group {
        class: Some("grid".to_string()),
        style: Style::default(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_steps() {
        assert_eq!(tick_step(150.0), 10.0);
        assert_eq!(tick_step(400.0), 25.0);
        assert_eq!(tick_step(800.0), 100.0);
        assert_eq!(tick_step(0.0), 10.0);
        assert_eq!(tick_step(-3.0), 10.0);
        assert_eq!(tick_step(f64::NAN), 10.0);
    }

    #[test]
    fn ticks_cover_half_open_range() {
        let values: Vec<_> = ticks(-15.0, 15.0, 10.0).collect();
        assert_eq!(values, vec![-10.0, 0.0, 10.0]);
    }

    #[test]
    fn ticks_are_capped() {
        assert_eq!(ticks(0.0, 1e12, 1.0).count(), defaults::GRID_MAX_LINES);
    }

    fn labels(grid: &Primitive) -> Vec<String> {
        let Primitive::Group { children, .. } = grid else {
            return Vec::new();
        };
        children
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn labels_show_user_space() {
        let viewport = Viewport {
            x: -15.0,
            y: -15.0,
            width: 30.0,
            height: 30.0,
        };
        let grid = grid(&viewport, &Options::default()).unwrap();
        // step 2.5 over 30 units; x labels come first, then y labels flipped
        let labels = labels(&grid);
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "-15");
        assert_eq!(labels[11], "12.5");
        assert_eq!(labels[12], "15");
        assert_eq!(labels[23], "-12.5");
    }

    #[test]
    fn relative_labels_are_fractions() {
        let viewport = Viewport {
            x: 0.0,
            y: -200.0,
            width: 200.0,
            height: 200.0,
        };
        let options = Options::default().with_unit_mode(UnitMode::Relative);
        let labels = labels(&grid(&viewport, &options).unwrap());
        // x ticks every 25 over a 200-wide canvas
        assert!(labels.contains(&"0.125".to_string()));
        // y = -200 is one canvas height up
        assert!(labels.contains(&"1".to_string()));
    }

    #[test]
    fn degenerate_viewport_has_no_grid() {
        let viewport = Viewport {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 10.0,
        };
        assert!(grid(&viewport, &Options::default()).is_none());
    }
}
