use serde::{Deserialize, Serialize};

use crate::core::bounds::AxisRange;
use crate::core::scale::horizontal_scale;
use crate::core::types::{ChartFrame, GridSpec, Point, Rect, ValueLabelPosition};

/// Fixed pixel height of a label box.
const LABEL_HEIGHT: f64 = 14.0;
/// Vertical gap between a label anchor and its box.
const LABEL_TOP_OFFSET: f64 = 2.0;
/// Horizontal padding between a value label box and its anchor.
const VALUE_LABEL_PADDING: f64 = 6.0;
/// Leftward shift of an index label box relative to its anchor.
const INDEX_LABEL_OFFSET: f64 = 4.0;

/// Text-width capability supplied by the host (font metrics live there).
pub trait TextMeasurer {
    fn text_width(&self, text: &str) -> f64;
}

/// Measurer assigning every character the same advance width.
///
/// Ships as a deterministic stand-in for host font metrics in tests and
/// headless tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvanceMeasurer {
    pub advance: f64,
}

impl FixedAdvanceMeasurer {
    #[must_use]
    pub const fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// One label ready to be painted at a fixed pixel rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub anchor: Point,
    pub frame: Rect,
}

/// Places one value label per vertical tick.
///
/// The displayed tick value is `min + (max - min) / (steps * (i + 1))`.
/// Anchors are pixel-evenly spaced while the values are not; the formula is
/// kept as-is for output compatibility and pinned by the layout tests.
pub fn value_labels<M, F>(
    range: AxisRange,
    grid: GridSpec,
    frame: ChartFrame,
    position: ValueLabelPosition,
    measurer: &M,
    format: F,
) -> Vec<LabelSpec>
where
    M: TextMeasurer + ?Sized,
    F: Fn(f64) -> String,
{
    let min_bound = range.min_vertical_bound();
    let max_bound = range.max_vertical_bound();
    let vertical_steps = f64::from(grid.vertical_steps);

    let anchor_x = frame.margin
        + if position == ValueLabelPosition::Right {
            frame.axis_width
        } else {
            0.0
        };

    let mut labels = Vec::with_capacity(grid.vertical_steps as usize);
    for i in 0..grid.vertical_steps {
        let tick = f64::from(i + 1);
        let anchor = Point::new(
            anchor_x,
            frame.axis_height + frame.margin - tick * frame.axis_height / vertical_steps,
        );

        let value = min_bound + (max_bound - min_bound) / (vertical_steps * tick);
        let text = format(value);
        let width = measurer.text_width(&text);

        let x_offset = match position {
            ValueLabelPosition::Left | ValueLabelPosition::Right => width + VALUE_LABEL_PADDING,
            ValueLabelPosition::Mirrored => -VALUE_LABEL_PADDING,
        };

        labels.push(LabelSpec {
            text,
            anchor,
            frame: Rect::new(
                anchor.x - x_offset,
                anchor.y + LABEL_TOP_OFFSET,
                width + 2.0,
                LABEL_HEIGHT,
            ),
        });
    }

    labels
}

/// Places one index label per horizontal tick, inclusive of both ends.
///
/// Each tick maps back to a sample index via integer division of the sample
/// count, clamped to the last sample; the host formatter turns that index
/// into display text (dates, units, ...).
pub fn index_labels<M, F>(
    sample_count: usize,
    grid: GridSpec,
    frame: ChartFrame,
    measurer: &M,
    format: F,
) -> Vec<LabelSpec>
where
    M: TextMeasurer + ?Sized,
    F: Fn(usize) -> String,
{
    if sample_count == 0 {
        return Vec::new();
    }

    let scale = horizontal_scale(sample_count, grid.horizontal_steps);
    let q = sample_count / grid.horizontal_steps as usize;
    let horizontal_steps = f64::from(grid.horizontal_steps);

    let mut labels = Vec::with_capacity(grid.horizontal_steps as usize + 1);
    for i in 0..=grid.horizontal_steps {
        let item_index = (q * i as usize).min(sample_count - 1);
        let text = format(item_index);
        let width = measurer.text_width(&text);

        let anchor = Point::new(
            frame.margin + f64::from(i) * (frame.axis_width / horizontal_steps) * scale,
            frame.axis_height + frame.margin,
        );

        labels.push(LabelSpec {
            text,
            anchor,
            frame: Rect::new(
                anchor.x - INDEX_LABEL_OFFSET,
                anchor.y + LABEL_TOP_OFFSET,
                width + 2.0,
                LABEL_HEIGHT,
            ),
        });
    }

    labels
}
