//! density-chart: kernel density curves rendered to standalone SVG.
//!
//! The pipeline is split into pure math (`core`), backend-agnostic scene
//! primitives and serialization (`render`) and the chart-level layout API
//! (`api`). Rendering is synchronous and stateless.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DensityChart, DensityChartConfig, render_svg};
pub use crate::core::SeriesSet;
pub use error::{ChartError, ChartResult};
