use serde::{Deserialize, Serialize};

use crate::core::types::{ChartFrame, Point};

/// One drawing step of a chart path, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        to: Point,
        ctrl1: Point,
        ctrl2: Point,
    },
}

impl PathCommand {
    /// The point the pen rests at after executing this command.
    #[must_use]
    pub fn end_point(self) -> Point {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point,
            Self::CurveTo { to, .. } => to,
        }
    }
}

/// Ordered command sequence for a stroke or fill path.
///
/// Rebuilt fully on every data or style change; consumers never patch the
/// command list incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
    pub closed: bool,
}

impl PathGeometry {
    #[must_use]
    pub fn empty(closed: bool) -> Self {
        Self {
            commands: Vec::new(),
            closed,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn first_point(&self) -> Option<Point> {
        self.commands.first().map(|command| command.end_point())
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.commands.last().map(|command| command.end_point())
    }
}

/// Maps a sample index to its pixel position at the given vertical scale.
///
/// Out-of-range indices yield the origin as a defensive default, not an
/// error. A series of fewer than two samples pins x to the margin.
#[must_use]
pub fn point_for_index(index: usize, data: &[f64], scale: f64, frame: ChartFrame) -> Point {
    if index >= data.len() {
        return Point::ZERO;
    }

    let value = data[index];
    let y = frame.axis_height + frame.margin - value * scale;
    if data.len() < 2 {
        Point::new(frame.margin, y)
    } else {
        let step = frame.axis_width / (data.len() - 1) as f64;
        Point::new(frame.margin + index as f64 * step, y)
    }
}

/// Builds the stroke (or, with `closed`, fill) path for a series.
///
/// Smoothing emits one cubic-Bezier segment per adjacent sample pair with
/// control points pulled along a Catmull-Rom-like tangent estimate: the
/// tangent at a point is half the chord between its neighbors, scaled by
/// `tension`, falling back to the single available chord at either boundary.
/// The closed variant drops to the zero baseline after the last sample and
/// walks back to the first sample's projection, producing a fillable
/// polygon between curve and baseline.
///
/// An empty series yields zero-length geometry, never an error; the view
/// layer is expected to skip drawing in that case.
#[must_use]
pub fn build_path(
    data: &[f64],
    scale: f64,
    frame: ChartFrame,
    smoothed: bool,
    tension: f64,
    closed: bool,
) -> PathGeometry {
    let mut path = PathGeometry::empty(closed);
    if data.is_empty() {
        return path;
    }

    let point_at = |index: usize| point_for_index(index, data, scale, frame);

    if smoothed {
        for i in 0..data.len().saturating_sub(1) {
            let p = point_at(i);
            let p2 = point_at(i + 1);

            if i == 0 {
                path.commands.push(PathCommand::MoveTo(p));
            }

            // Tangent at the segment start: half the chord around point i,
            // or the forward chord at the left boundary.
            let m1 = if i > 0 {
                let previous = point_at(i - 1);
                Point::new((p2.x - previous.x) / 2.0, (p2.y - previous.y) / 2.0)
            } else {
                Point::new((p2.x - p.x) / 2.0, (p2.y - p.y) / 2.0)
            };
            let ctrl1 = Point::new(p.x + m1.x * tension, p.y + m1.y * tension);

            // Tangent at the segment end, with the symmetric rule at the
            // right boundary.
            let m2 = if i + 2 < data.len() {
                let next = point_at(i + 2);
                Point::new((next.x - p.x) / 2.0, (next.y - p.y) / 2.0)
            } else {
                Point::new((p2.x - p.x) / 2.0, (p2.y - p.y) / 2.0)
            };
            let ctrl2 = Point::new(p2.x - m2.x * tension, p2.y - m2.y * tension);

            path.commands.push(PathCommand::CurveTo {
                to: p2,
                ctrl1,
                ctrl2,
            });
        }
    } else {
        for i in 0..data.len() {
            let point = point_at(i);
            if i == 0 {
                path.commands.push(PathCommand::MoveTo(point));
            } else {
                path.commands.push(PathCommand::LineTo(point));
            }
        }
    }

    if closed {
        // Close against the zero baseline: last point, its baseline
        // projection, the first point's baseline projection, and back up to
        // the first point at the real scale.
        let last = data.len() - 1;
        path.commands.push(PathCommand::LineTo(point_at(last)));
        path.commands
            .push(PathCommand::LineTo(point_for_index(last, data, 0.0, frame)));
        path.commands
            .push(PathCommand::LineTo(point_for_index(0, data, 0.0, frame)));
        path.commands.push(PathCommand::LineTo(point_at(0)));
    }

    path
}

/// Per-sample marker centers with the baseline layer offset applied.
///
/// The renderer positions marker layers in outer-frame coordinates shifted
/// by `min_bound * scale`, matching how the stroke/fill layers are framed.
#[must_use]
pub fn point_markers(data: &[f64], scale: f64, frame: ChartFrame, min_bound: f64) -> Vec<Point> {
    (0..data.len())
        .map(|index| {
            let mut point = point_for_index(index, data, scale, frame);
            point.y += min_bound * scale;
            point
        })
        .collect()
}
