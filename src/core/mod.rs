pub mod bounds;
pub mod grid;
pub mod labels;
pub mod path;
pub mod scale;
pub mod types;

pub use bounds::{AxisRange, compute_bounds, upper_round_number};
pub use grid::{GridLine, GridLineKind, grid_lines};
pub use labels::{FixedAdvanceMeasurer, LabelSpec, TextMeasurer, index_labels, value_labels};
pub use path::{PathCommand, PathGeometry, build_path, point_for_index, point_markers};
pub use scale::{horizontal_scale, vertical_scale};
pub use types::{ChartFrame, GridSpec, Point, Rect, ValueLabelPosition};
