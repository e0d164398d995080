pub mod axis_grid;
pub mod density_curve;
pub mod kernel;
pub mod series_set;
pub mod transform;
pub mod types;

pub use axis_grid::{
    AXIS_LABEL_DECIMALS, AXIS_LABEL_EXPONENT_THRESHOLD, AxisStep, GRID_CELL_EPSILON, GridSpacing,
    axis_steps, format_axis_value, grid_cell_count,
};
pub use density_curve::{
    CURVE_RESOLUTION_PER_BIN, DensityCurve, DensityCurveParams, build_density_curves,
    sample_density_curve,
};
pub use kernel::{GaussianKernel, KernelDensityEstimator};
pub use series_set::{SeriesSet, validate_series_key};
pub use transform::{AxisTransform, PlotArea, Point};
pub use types::{AxisRange, DisplaySize};
