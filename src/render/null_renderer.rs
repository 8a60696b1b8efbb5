use crate::error::TimelineResult;
use crate::render::{Renderer, TimelineFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid cell models
/// before a real surface binds them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_cell_count: usize,
    pub last_range_count: usize,
    pub last_rows: Vec<usize>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &TimelineFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_cell_count = frame.cells.len();
        self.last_range_count = frame.cells.iter().map(|cell| cell.ranges.len()).sum();
        self.last_rows = frame.cells.iter().map(|cell| cell.row).collect();
        Ok(())
    }
}
