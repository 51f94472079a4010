//! Layout facade tying bounds, scales, paths, grid, and labels together.
//!
//! The engine owns the current series and its cached axis range, and turns
//! every data or geometry change into a fresh [`LayoutFrame`] the rendering
//! layer can paint (or interpolate from the entry paths for intro
//! animation).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    AxisRange, ChartFrame, GridLine, GridSpec, LabelSpec, PathGeometry, Point, TextMeasurer,
    ValueLabelPosition, build_path, compute_bounds, grid_lines, index_labels, point_markers,
    value_labels, vertical_scale,
};
use crate::error::{ChartError, ChartResult};

/// Engine configuration: outer frame size plus styling knobs that affect
/// geometry. Defaults mirror the classic line-chart look: 3x3 grid, half a
/// pixel of margin, smoothing with a gentle tension, labels on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub outer_width: f64,
    pub outer_height: f64,
    pub margin: f64,
    pub grid: GridSpec,
    pub smoothing: bool,
    pub tension: f64,
    pub value_label_position: ValueLabelPosition,
    pub display_data_points: bool,
}

impl LayoutConfig {
    #[must_use]
    pub fn new(outer_width: f64, outer_height: f64) -> Self {
        Self {
            outer_width,
            outer_height,
            margin: 0.5,
            grid: GridSpec {
                vertical_steps: 3,
                horizontal_steps: 3,
            },
            smoothing: true,
            tension: 0.2,
            value_label_position: ValueLabelPosition::Right,
            display_data_points: false,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Sets both tick counts at once.
    #[must_use]
    pub fn with_grid_step(mut self, steps: u32) -> Self {
        self.grid = GridSpec {
            vertical_steps: steps,
            horizontal_steps: steps,
        };
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: bool, tension: f64) -> Self {
        self.smoothing = smoothing;
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn with_value_label_position(mut self, position: ValueLabelPosition) -> Self {
        self.value_label_position = position;
        self
    }

    #[must_use]
    pub fn with_data_points(mut self, display: bool) -> Self {
        self.display_data_points = display;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        self.grid.validate()?;
        if !self.tension.is_finite() {
            return Err(ChartError::InvalidData(
                "smoothing tension must be finite".to_owned(),
            ));
        }
        ChartFrame::from_outer(self.outer_width, self.outer_height, self.margin).map(|_| ())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Host-supplied label formatting callbacks, injected per layout call.
///
/// Leaving a slot empty skips that label family entirely, matching the
/// reference behavior of unset formatter blocks.
#[derive(Default, Clone, Copy)]
pub struct LabelFormatters<'a> {
    pub value: Option<&'a dyn Fn(f64) -> String>,
    pub index: Option<&'a dyn Fn(usize) -> String>,
}

impl<'a> LabelFormatters<'a> {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, format: &'a dyn Fn(f64) -> String) -> Self {
        self.value = Some(format);
        self
    }

    #[must_use]
    pub fn with_index(mut self, format: &'a dyn Fn(usize) -> String) -> Self {
        self.index = Some(format);
        self
    }
}

/// Complete geometry output for one layout pass.
///
/// `entry_stroke`/`entry_fill` are the same constructions evaluated at
/// vertical scale zero; the renderer interpolates between entry and final
/// paths for the intro animation. `baseline_offset` is the vertical layer
/// translation (`min bound x scale`) the renderer applies when framing the
/// stroke, fill, and marker layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrame {
    pub axis_range: AxisRange,
    pub vertical_scale: f64,
    pub baseline_offset: f64,
    pub stroke: PathGeometry,
    pub entry_stroke: PathGeometry,
    pub fill: PathGeometry,
    pub entry_fill: PathGeometry,
    pub grid: Vec<GridLine>,
    pub markers: Vec<Point>,
    pub value_labels: Vec<LabelSpec>,
    pub index_labels: Vec<LabelSpec>,
}

impl LayoutFrame {
    /// Serializes the frame as pretty JSON for fixture-based regression checks.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout frame: {e}")))
    }
}

/// Single-series layout engine.
///
/// Holds exactly one series at a time, replaced wholesale by [`set_data`];
/// the axis range is recomputed on replacement and cached here, not inside
/// the bounds calculator.
///
/// [`set_data`]: LayoutEngine::set_data
pub struct LayoutEngine {
    config: LayoutConfig,
    frame: ChartFrame,
    data: Vec<f64>,
    bounds: Option<AxisRange>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> ChartResult<Self> {
        config.validate()?;
        let frame = ChartFrame::from_outer(config.outer_width, config.outer_height, config.margin)?;
        Ok(Self {
            config,
            frame,
            data: Vec::new(),
            bounds: None,
        })
    }

    /// Replaces the series and recomputes the cached axis range.
    ///
    /// Rejects non-finite samples without touching the current series. An
    /// empty series is accepted and simply clears the cached range.
    pub fn set_data(&mut self, data: Vec<f64>) -> ChartResult<()> {
        if data.is_empty() {
            debug!("cleared chart data");
            self.data = data;
            self.bounds = None;
            return Ok(());
        }

        let bounds = compute_bounds(&data, self.config.grid.vertical_steps)?;
        debug!(
            count = data.len(),
            min = bounds.min_vertical_bound(),
            max = bounds.max_vertical_bound(),
            "set chart data"
        );
        self.data = data;
        self.bounds = Some(bounds);
        Ok(())
    }

    /// Recomputes the axis box after the outer frame changed.
    pub fn resize(&mut self, outer_width: f64, outer_height: f64) -> ChartResult<()> {
        let frame = ChartFrame::from_outer(outer_width, outer_height, self.config.margin)?;
        debug!(outer_width, outer_height, "resized chart frame");
        self.config.outer_width = outer_width;
        self.config.outer_height = outer_height;
        self.frame = frame;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        self.frame
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Cached axis range from the last accepted non-empty series.
    #[must_use]
    pub fn axis_range(&self) -> Option<AxisRange> {
        self.bounds
    }

    #[must_use]
    pub fn min_vertical_bound(&self) -> f64 {
        self.bounds.map_or(0.0, AxisRange::min_vertical_bound)
    }

    #[must_use]
    pub fn max_vertical_bound(&self) -> f64 {
        self.bounds.map_or(0.0, AxisRange::max_vertical_bound)
    }

    /// Produces the full geometry frame for the current series.
    ///
    /// Fails with `EmptyData` when no samples are held; the view layer is
    /// expected to log that and skip the draw pass.
    pub fn layout(
        &self,
        measurer: &dyn TextMeasurer,
        formatters: LabelFormatters<'_>,
    ) -> ChartResult<LayoutFrame> {
        let Some(bounds) = self.bounds else {
            return Err(ChartError::EmptyData);
        };

        let min_bound = bounds.min_vertical_bound();
        let max_bound = bounds.max_vertical_bound();
        let scale = vertical_scale(self.frame.axis_height, min_bound, max_bound);
        trace!(scale, min_bound, max_bound, "layout pass");

        let build = |path_scale: f64, closed: bool| {
            build_path(
                &self.data,
                path_scale,
                self.frame,
                self.config.smoothing,
                self.config.tension,
                closed,
            )
        };

        let markers = if self.config.display_data_points {
            point_markers(&self.data, scale, self.frame, min_bound)
        } else {
            Vec::new()
        };

        let value_label_specs = formatters.value.map_or_else(Vec::new, |format| {
            value_labels(
                bounds,
                self.config.grid,
                self.frame,
                self.config.value_label_position,
                measurer,
                format,
            )
        });
        let index_label_specs = formatters.index.map_or_else(Vec::new, |format| {
            index_labels(self.data.len(), self.config.grid, self.frame, measurer, format)
        });

        Ok(LayoutFrame {
            axis_range: bounds,
            vertical_scale: scale,
            baseline_offset: min_bound * scale,
            stroke: build(scale, false),
            entry_stroke: build(0.0, false),
            fill: build(scale, true),
            entry_fill: build(0.0, true),
            grid: grid_lines(self.data.len(), bounds, self.config.grid, self.frame),
            markers,
            value_labels: value_label_specs,
            index_labels: index_label_specs,
        })
    }

    /// Layout frame serialized as pretty JSON for snapshot tooling.
    pub fn layout_json_pretty(
        &self,
        measurer: &dyn TextMeasurer,
        formatters: LabelFormatters<'_>,
    ) -> ChartResult<String> {
        self.layout(measurer, formatters)?.to_json_pretty()
    }
}
