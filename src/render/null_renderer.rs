use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless frame inspection.
///
/// It still validates frame content so invalid geometry is caught without
/// serializing a document.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    type Output = ();

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_path_count = frame.path_count();
        self.last_text_count = frame.labels.len();
        Ok(())
    }
}
