use serde::{Deserialize, Serialize};

use crate::core::bounds::AxisRange;
use crate::core::scale::horizontal_scale;
use crate::core::types::{ChartFrame, GridSpec, Point};

/// Stroke weight class for a grid segment.
///
/// `Axis` segments are the coordinate axis and its baseline ticks; `Inner`
/// segments are the light background grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridLineKind {
    Axis,
    Inner,
}

/// One straight grid segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
    pub kind: GridLineKind,
}

impl GridLine {
    #[must_use]
    pub const fn new(from: Point, to: Point, kind: GridLineKind) -> Self {
        Self { from, to, kind }
    }
}

/// Grid geometry for one layout pass: the vertical axis segment, one inner
/// vertical line plus baseline tick per horizontal step, and one horizontal
/// line per vertical step (inclusive).
///
/// A horizontal line is promoted to `Axis` weight when it carries the zero
/// value, so mixed-sign charts show their zero crossing.
#[must_use]
pub fn grid_lines(
    sample_count: usize,
    range: AxisRange,
    grid: GridSpec,
    frame: ChartFrame,
) -> Vec<GridLine> {
    let mut lines = Vec::with_capacity(2 * grid.horizontal_steps as usize + grid.vertical_steps as usize + 2);

    // Coordinate axis on the left edge, overshooting the baseline by 3px.
    lines.push(GridLine::new(
        Point::new(frame.margin, frame.margin),
        Point::new(frame.margin, frame.axis_height + frame.margin + 3.0),
        GridLineKind::Axis,
    ));

    let scale = horizontal_scale(sample_count, grid.horizontal_steps);
    let min_bound = range.min_vertical_bound();
    let max_bound = range.max_vertical_bound();

    let horizontal_steps = f64::from(grid.horizontal_steps);
    for i in 0..grid.horizontal_steps {
        let x = f64::from(i + 1) * frame.axis_width / horizontal_steps * scale + frame.margin;

        lines.push(GridLine::new(
            Point::new(x, frame.margin),
            Point::new(x, frame.axis_height + frame.margin),
            GridLineKind::Inner,
        ));
        // Baseline tick under each vertical grid line.
        lines.push(GridLine::new(
            Point::new(x - 0.5, frame.axis_height + frame.margin),
            Point::new(x - 0.5, frame.axis_height + frame.margin + 3.0),
            GridLineKind::Axis,
        ));
    }

    let vertical_steps = f64::from(grid.vertical_steps);
    for i in 0..=grid.vertical_steps {
        // The i = 0 term divides by zero and lands at infinity, so the top
        // line is never promoted to axis weight.
        let value = max_bound - (max_bound - min_bound) / (vertical_steps * f64::from(i));
        let kind = if value == 0.0 {
            GridLineKind::Axis
        } else {
            GridLineKind::Inner
        };

        let y = f64::from(i) * frame.axis_height / vertical_steps + frame.margin;
        lines.push(GridLine::new(
            Point::new(frame.margin, y),
            Point::new(frame.axis_width + frame.margin, y),
            kind,
        ));
    }

    lines
}
