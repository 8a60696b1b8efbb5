use tracing::{debug, warn};

use crate::core::{TimelineGeometry, Viewport};
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::validate_finite;
use super::{InvalidationTopic, TimelineEngine, TimelineEvent};

impl<R: Renderer> TimelineEngine<R> {
    /// Records the surface's live scroll position.
    ///
    /// The anchored time offset is not touched here; it is committed only when
    /// a drag or deceleration ends. Returns `false` when the update is ignored
    /// because a pinch currently owns the input.
    pub fn scroll_offset_changed(&mut self, scroll_offset_px: f64) -> TimelineResult<bool> {
        let scroll_offset_px = validate_finite(scroll_offset_px, "scroll offset")?;
        if !self.core.zoom.scroll_enabled() {
            warn!(scroll_offset_px, "ignoring scroll update while pinching");
            return Ok(false);
        }
        self.core.model.view.scroll_offset_px = scroll_offset_px.max(0.0);
        self.invalidate(InvalidationTopic::Scroll);
        Ok(true)
    }

    /// Commits the time under the center marker after a user drag.
    pub fn drag_ended(&mut self) -> f64 {
        self.commit_time_offset_from_scroll()
    }

    /// Commits the time under the center marker once scrolling momentum stops.
    pub fn deceleration_ended(&mut self) -> f64 {
        self.commit_time_offset_from_scroll()
    }

    /// Time under the center marker at the live scroll position.
    ///
    /// Between drag/deceleration ends this may differ from [`Self::time_offset`].
    #[must_use]
    pub fn center_time(&self) -> f64 {
        let view = self.core.model.view;
        self.core
            .model
            .geometry
            .time_from_scroll_offset(view.scroll_offset_px, view.level, view.zoom_factor)
    }

    /// Programmatic seek: anchors `time_offset` under the center marker.
    pub fn set_time_offset(&mut self, time_offset: f64) -> TimelineResult<()> {
        let time_offset = validate_finite(time_offset, "time offset")?;
        self.core.model.view.time_offset = time_offset;
        self.reanchor_scroll_offset();
        self.invalidate(InvalidationTopic::Scroll);
        self.emit_plugin_event(TimelineEvent::TimeOffsetCommitted { time_offset });
        Ok(())
    }

    /// Resizes the viewport, keeping the anchored time under the (moved) center marker.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        let geometry = TimelineGeometry::new(
            viewport,
            self.core.model.geometry.base_cell_width_px(),
            self.core.model.geometry.padding_cell_count(),
        )?;
        self.core.model.viewport = viewport;
        self.core.model.geometry = geometry;
        self.reanchor_scroll_offset();
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    pub(super) fn reanchor_scroll_offset(&mut self) {
        let view = self.core.model.view;
        self.core.model.view.scroll_offset_px = self.core.model.geometry.scroll_offset_from_time(
            view.time_offset,
            view.level,
            view.zoom_factor,
        );
    }

    fn commit_time_offset_from_scroll(&mut self) -> f64 {
        let time_offset = self.center_time();
        self.core.model.view.time_offset = time_offset;
        debug!(time_offset, "commit time offset");
        self.emit_plugin_event(TimelineEvent::TimeOffsetCommitted { time_offset });
        time_offset
    }
}
