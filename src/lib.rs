//! linechart-rs: geometry and layout engine for single-series 2D line charts.
//!
//! This crate computes everything a line-chart view needs short of pixels:
//! "nice" axis bounds with round-number snapping, horizontal/vertical scale
//! factors, straight or Bezier-smoothed stroke paths with matching closed
//! fill paths, grid-line geometry, and label placement rectangles. The view
//! layer owning the surface, input handling, and animation timing consumes
//! the output of [`api::LayoutEngine`].

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LabelFormatters, LayoutConfig, LayoutEngine, LayoutFrame};
pub use error::{ChartError, ChartResult};
