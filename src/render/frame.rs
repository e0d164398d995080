use crate::core::DisplaySize;
use crate::error::ChartResult;
use crate::render::{PathPrimitive, Stylesheet, TextPrimitive};

/// Backend-agnostic scene for one density chart.
///
/// Layers are drawn in field order: minor grid, major grid, ticks, paths
/// (curves, then legend swatches), labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub display: DisplaySize,
    pub stylesheet: Stylesheet,
    pub grid_minor: Vec<PathPrimitive>,
    pub grid_major: Vec<PathPrimitive>,
    pub ticks: Vec<PathPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub labels: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(display: DisplaySize, stylesheet: Stylesheet) -> Self {
        Self {
            display,
            stylesheet,
            grid_minor: Vec::new(),
            grid_major: Vec::new(),
            ticks: Vec::new(),
            paths: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Path layers in draw order.
    pub fn path_layers(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.grid_minor
            .iter()
            .chain(&self.grid_major)
            .chain(&self.ticks)
            .chain(&self.paths)
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.grid_minor.len() + self.grid_major.len() + self.ticks.len() + self.paths.len()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.display.validate()?;
        for path in self.path_layers() {
            path.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_count() == 0 && self.labels.is_empty()
    }
}
