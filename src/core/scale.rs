/// Horizontal pixel-per-sample factor.
///
/// Compensates for grid-step counts that do not evenly divide the sample
/// count, keeping the rightmost grid line aligned near the last sample.
/// A series of zero or one samples maps to a neutral factor of 1.
#[must_use]
pub fn horizontal_scale(sample_count: usize, horizontal_grid_step: u32) -> f64 {
    if sample_count <= 1 {
        return 1.0;
    }

    let step = horizontal_grid_step as usize;
    let q = sample_count / step;
    (q * step) as f64 / (sample_count - 1) as f64
}

/// Vertical pixel-per-unit factor for the given axis height and bounds.
///
/// A zero spread (single-value or all-equal series) collapses to factor 0,
/// drawing a flat line instead of dividing by zero.
#[must_use]
pub fn vertical_scale(axis_height: f64, min_bound: f64, max_bound: f64) -> f64 {
    let spread = max_bound - min_bound;
    if spread != 0.0 {
        axis_height / spread
    } else {
        0.0
    }
}
