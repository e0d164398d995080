mod frame;
mod null_renderer;
mod primitives;
mod stylesheet;
mod svg_renderer;
pub mod svg_tree;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{ClassList, PathPrimitive, TextPrimitive, class_list};
pub use stylesheet::{StyleRule, StyleTheme, Stylesheet, validate_color};
pub use svg_renderer::SvgRenderer;
pub use svg_tree::{SvgElement, SvgNode};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from density estimation and layout.
pub trait Renderer {
    type Output;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Self::Output>;
}
