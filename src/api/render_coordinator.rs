use tracing::trace;

use crate::error::TimelineResult;
use crate::render::{Renderer, TimelineFrame};

use super::{InvalidationMask, TimelineEngine, TimelineEvent};

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut TimelineEngine<R>) -> TimelineResult<()> {
        let frame = engine.build_render_frame()?;
        engine.renderer.render(&frame)?;
        trace!(
            cells = frame.cells.len(),
            scroll_offset_px = frame.scroll_offset_px,
            "timeline frame rendered"
        );
        engine.core.runtime.pending_invalidation = InvalidationMask::none();
        engine.emit_plugin_event(TimelineEvent::Rendered {
            cells: frame.cells.len(),
        });
        Ok(())
    }
}

impl<R: Renderer> TimelineEngine<R> {
    /// Materializes the visible rows into a backend-agnostic frame.
    pub fn build_render_frame(&mut self) -> TimelineResult<TimelineFrame> {
        let mut frame = TimelineFrame::new(self.viewport(), self.cell_size(), self.cell_count());
        frame.scroll_offset_px = self.scroll_offset_px();
        frame.center_label = self.center_label();
        for row in self.visible_rows() {
            frame.cells.push(self.cell_render_model(row)?);
        }
        Ok(frame)
    }
}
