use crate::extensions::TimelineContext;
use crate::render::Renderer;

use super::{TimelineEngine, TimelineEvent};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn timeline_context(&self) -> TimelineContext {
        let model = &self.core.model;
        TimelineContext {
            viewport: model.viewport,
            level: model.view.level,
            zoom_factor: model.view.zoom_factor,
            time_offset: model.view.time_offset,
            scroll_offset_px: model.view.scroll_offset_px,
            cell_count: model.geometry.cell_count(model.view.level),
            intervals_len: model.intervals.len(),
            zoom_mode: self.core.zoom.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: TimelineEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.timeline_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
