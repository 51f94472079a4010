use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value interval mapped onto the vertical pixel axis.
///
/// `min`/`max` hold the snapped bounds as computed; the displayed axis is
/// clamped so it always includes zero, which is what the bound accessors
/// return and what fill baselines are anchored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn min_vertical_bound(self) -> f64 {
        self.min.min(0.0)
    }

    #[must_use]
    pub fn max_vertical_bound(self) -> f64 {
        self.max.max(0.0)
    }

    #[must_use]
    pub fn spread(self) -> f64 {
        self.max_vertical_bound() - self.min_vertical_bound()
    }
}

/// Computes an axis range snapped to readable round numbers.
///
/// When the series contains a negative value the snapped range is arranged
/// so one grid line lands exactly on zero. The returned value is fresh on
/// every call; callers wanting the last result cache it themselves.
pub fn compute_bounds(data: &[f64], vertical_grid_step: u32) -> ChartResult<AxisRange> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    if vertical_grid_step == 0 {
        return Err(ChartError::InvalidData(
            "vertical grid step must be >= 1".to_owned(),
        ));
    }

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &value in data {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "chart samples must be finite".to_owned(),
            ));
        }
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    // Adjust the maximum (and, for mixed-sign data, the minimum) to nice
    // round steps so the whole chart displays with readable grid values.
    max = upper_round_number(max, vertical_grid_step);

    if min < 0.0 {
        // With a negative minimum one of the steps must be zero so the chart
        // keeps a visible zero line.
        let grid_step = f64::from(vertical_grid_step);
        let mut step = if vertical_grid_step > 3 {
            (max - min).abs() / (grid_step - 1.0)
        } else {
            ((max - min).abs() / 2.0).max(min.abs().max(max.abs()))
        };

        step = upper_round_number(step, vertical_grid_step);

        let sign_of = |value: f64| if value > 0.0 { 1.0 } else { -1.0 };
        let mut new_min;
        let mut new_max;

        if min.abs() > max.abs() {
            let m = (min.abs() / step).ceil();
            new_min = step * m * sign_of(min);
            new_max = step * (grid_step - m) * sign_of(max);
        } else {
            let m = (max.abs() / step).ceil();
            new_max = step * m * sign_of(max);
            new_min = step * (grid_step - m) * sign_of(min);
        }

        // Correction passes for the off-by-one cases the integer ceil can
        // produce: the snapped range must still cover the raw extremes.
        if min < new_min {
            new_min -= step;
            new_max -= step;
        }
        if max > new_max + step {
            new_min += step;
            new_max += step;
        }

        min = new_min;
        max = new_max;

        // All-negative series can land here inverted (the rounded ceiling is
        // zero, so the anchored multiple walks past the other bound).
        // Normalize rather than assert: the input is legitimate.
        if max < min {
            std::mem::swap(&mut min, &mut max);
        }
    }

    // All-zero series produce no positive round number; force a unit ceiling
    // so downstream scale math stays well defined.
    if max.is_nan() {
        max = 1.0;
    }

    Ok(AxisRange { min, max })
}

/// Rounds `value` upward to a tick-friendly number at quarter-decade
/// granularity, adjusted so `grid_step` evenly divides the tick count.
///
/// Produces values like 1, 1.25, 1.5, 2, 2.5, 5, 10 scaled by the input's
/// order of magnitude. Non-positive input maps to 0.
#[must_use]
pub fn upper_round_number(value: f64, grid_step: u32) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }

    // Round numbers are taken in 0.25 steps of the leading decade rather
    // than whole steps.
    let scale = 10f64.powf(value.log10().floor());
    let mut n = (value / scale * 4.0).ceil();

    let grid_step = i64::from(grid_step);
    let remainder = (n as i64) % grid_step;
    if remainder != 0 {
        n += (grid_step - remainder) as f64;
    }

    n * scale / 4.0
}
