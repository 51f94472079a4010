use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space point. Y grows downward; larger sample values map upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel-space rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawable axis box derived from the outer view frame.
///
/// `axis_width`/`axis_height` are the outer dimensions minus `2 * margin`
/// each; every point and label position produced by this crate is expressed
/// relative to the outer frame origin using these three values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub axis_width: f64,
    pub axis_height: f64,
    pub margin: f64,
}

impl ChartFrame {
    /// Derives the axis box from an outer frame size and margin.
    pub fn from_outer(width: f64, height: f64, margin: f64) -> ChartResult<Self> {
        let frame = Self {
            axis_width: width - 2.0 * margin,
            axis_height: height - 2.0 * margin,
            margin,
        };
        frame.validate()?;
        Ok(frame)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.axis_width.is_finite()
            || !self.axis_height.is_finite()
            || !self.margin.is_finite()
        {
            return Err(ChartError::InvalidData(
                "chart frame dimensions must be finite".to_owned(),
            ));
        }
        if self.axis_width < 0.0 || self.axis_height < 0.0 {
            return Err(ChartError::InvalidData(
                "chart frame axis dimensions must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Requested tick divisions along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub vertical_steps: u32,
    pub horizontal_steps: u32,
}

impl GridSpec {
    pub fn new(vertical_steps: u32, horizontal_steps: u32) -> ChartResult<Self> {
        let spec = Self {
            vertical_steps,
            horizontal_steps,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.vertical_steps == 0 || self.horizontal_steps == 0 {
            return Err(ChartError::InvalidData(
                "grid steps must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Placement policy for value labels along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueLabelPosition {
    Left,
    #[default]
    Right,
    /// Drawn past the anchor instead of toward the axis (offset sign flips).
    Mirrored,
}
