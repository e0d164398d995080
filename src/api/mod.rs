mod axis_grid_builder;
mod chart_config;
mod curve_path_builder;
mod frame_builder;
mod json_contract;
mod layout_policy;
mod legend_text_builder;
mod validation;

pub use axis_grid_builder::{Axis, AxisPrimitives, build_axis_primitives};
pub use chart_config::{ChartLabels, DensityChartConfig, LegendEntry};
pub use curve_path_builder::{DENSITY_CURVE_CLASS, build_curve_paths};
pub use frame_builder::build_render_frame;
pub use json_contract::{DENSITY_CHART_CONFIG_JSON_SCHEMA_V1, DensityChartConfigJsonContractV1};
pub use layout_policy::LayoutPolicy;
pub use legend_text_builder::{LegendPrimitives, build_chart_texts, build_legend};

use crate::core::{PlotArea, SeriesSet};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, StyleTheme, SvgRenderer};

/// Density chart bound to one renderer and one validated configuration.
///
/// Holds no per-render state: every `render` call is a pure function of the
/// series passed in.
pub struct DensityChart<R: Renderer> {
    renderer: R,
    config: DensityChartConfig,
    policy: LayoutPolicy,
    theme: StyleTheme,
}

impl<R: Renderer> DensityChart<R> {
    pub fn new(renderer: R, config: DensityChartConfig) -> ChartResult<Self> {
        Self::with_layout(renderer, config, LayoutPolicy::default(), StyleTheme::default())
    }

    pub fn with_layout(
        renderer: R,
        config: DensityChartConfig,
        policy: LayoutPolicy,
        theme: StyleTheme,
    ) -> ChartResult<Self> {
        validation::validate_config(&config)?;
        theme.validate()?;
        policy.plot_area(&config.labels)?;

        Ok(Self {
            renderer,
            config,
            policy,
            theme,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DensityChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout_policy(&self) -> &LayoutPolicy {
        &self.policy
    }

    #[must_use]
    pub fn theme(&self) -> &StyleTheme {
        &self.theme
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        self.policy.plot_area(&self.config.labels)
    }

    pub fn build_frame(&self, series: &SeriesSet) -> ChartResult<RenderFrame> {
        build_render_frame(series, &self.config, &self.policy, &self.theme)
    }

    pub fn render(&mut self, series: &SeriesSet) -> ChartResult<R::Output> {
        let frame = self.build_frame(series)?;
        self.renderer.render(&frame)
    }
}

/// Renders `series` with default layout and theme into an SVG document.
pub fn render_svg(series: &SeriesSet, config: &DensityChartConfig) -> ChartResult<String> {
    let frame = build_render_frame(series, config, &LayoutPolicy::default(), &StyleTheme::default())?;
    SvgRenderer.render(&frame)
}
