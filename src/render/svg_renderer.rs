use tracing::trace;

use crate::error::ChartResult;
use crate::render::svg_tree::{SvgElement, SvgNode, write_document};
use crate::render::{PathPrimitive, RenderFrame, Renderer, TextPrimitive};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Renders a frame into a standalone SVG document string.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Builds the element tree without serializing it.
    pub fn document_tree(frame: &RenderFrame) -> ChartResult<SvgElement> {
        frame.validate()?;

        let width = frame.display.width;
        let height = frame.display.height;
        let mut root = SvgElement::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("xmlns:xlink", XLINK_NAMESPACE)
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {width} {height}"));

        root.push(
            SvgElement::new("style")
                .attr("type", "text/css")
                .child(SvgNode::CData(frame.stylesheet.to_css())),
        );
        root.push(
            SvgElement::new("rect")
                .attr("width", width)
                .attr("height", height)
                .attr("class", "background"),
        );
        for path in frame.path_layers() {
            root.push(path_element(path));
        }
        for label in &frame.labels {
            root.push(text_element(label));
        }

        trace!(
            paths = frame.path_count(),
            labels = frame.labels.len(),
            "built svg tree"
        );
        Ok(root)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<String> {
        let tree = Self::document_tree(frame)?;
        Ok(write_document(&tree))
    }
}

fn path_element(path: &PathPrimitive) -> SvgElement {
    SvgElement::new("path")
        .attr("class", path.classes().join(" "))
        .attr("d", path.path_data())
}

fn text_element(label: &TextPrimitive) -> SvgElement {
    SvgElement::new("text")
        .attr("x", label.anchor.x)
        .attr("y", label.anchor.y)
        .attr("class", label.classes.join(" "))
        .text(label.text.as_str())
}
