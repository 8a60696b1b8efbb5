use tracing::debug;

use crate::error::TimelineResult;
use crate::interaction::{ZoomConfig, ZoomOutcome};
use crate::render::Renderer;

use super::validation::validate_zoom_config;
use super::{InvalidationTopic, TimelineEngine, TimelineEvent};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        self.core.zoom.config()
    }

    /// Swaps the zoom tuning.
    ///
    /// A zoom factor left outside the new bounds is clamped into them and the
    /// scroll offset is re-anchored, so the next pinch update starts in range.
    pub fn set_zoom_config(&mut self, config: ZoomConfig) -> TimelineResult<()> {
        let config = validate_zoom_config(config)?;
        self.core.zoom.set_config(config);

        let current = self.core.model.view.zoom_factor;
        let zoom_factor = config.clamp_zoom_factor(current);
        if zoom_factor != current {
            self.core.model.view.zoom_factor = zoom_factor;
            self.apply_zoom_outcome(ZoomOutcome::ZoomChanged { zoom_factor });
        }
        Ok(())
    }

    /// Two-finger gesture began with `distance_px` between the touches.
    pub fn pinch_began(&mut self, touch_count: usize, distance_px: f64) -> ZoomOutcome {
        let outcome = self.core.zoom.pinch_began(touch_count, distance_px);
        self.apply_zoom_outcome(outcome);
        outcome
    }

    /// Pinch update; fewer than two touches cancels the pinch.
    pub fn pinch_changed(&mut self, touch_count: usize, distance_px: f64) -> ZoomOutcome {
        let outcome =
            self.core
                .zoom
                .pinch_changed(touch_count, distance_px, &mut self.core.model.view);
        self.apply_zoom_outcome(outcome);
        outcome
    }

    pub fn pinch_ended(&mut self) -> ZoomOutcome {
        let outcome = self.core.zoom.pinch_ended();
        self.apply_zoom_outcome(outcome);
        outcome
    }

    /// Zooms in two levels.
    pub fn double_tap(&mut self) -> ZoomOutcome {
        let outcome = self.core.zoom.double_tap(&mut self.core.model.view);
        self.apply_zoom_outcome(outcome);
        outcome
    }

    /// Returns to the default level with a unit zoom factor.
    pub fn triple_tap(&mut self) -> ZoomOutcome {
        let outcome = self.core.zoom.triple_tap(&mut self.core.model.view);
        self.apply_zoom_outcome(outcome);
        outcome
    }

    /// Re-centers on the anchored time in the same call that changed the
    /// geometry, so no render pass sees a new level with a stale scroll offset.
    fn apply_zoom_outcome(&mut self, outcome: ZoomOutcome) {
        if outcome.changes_geometry() {
            self.reanchor_scroll_offset();
        }

        match outcome {
            ZoomOutcome::Ignored => {}
            ZoomOutcome::PinchStarted => self.emit_plugin_event(TimelineEvent::PinchStarted),
            ZoomOutcome::PinchEnded | ZoomOutcome::Cancelled => {
                self.emit_plugin_event(TimelineEvent::PinchEnded);
            }
            ZoomOutcome::ZoomChanged { zoom_factor } => {
                self.invalidate(InvalidationTopic::Zoom);
                self.emit_plugin_event(TimelineEvent::ZoomChanged { zoom_factor });
            }
            ZoomOutcome::LevelChanged { previous, current } => {
                debug!(
                    previous = previous.minutes(),
                    current = current.minutes(),
                    time_offset = self.core.model.view.time_offset,
                    scroll_offset_px = self.core.model.view.scroll_offset_px,
                    "timeline level changed"
                );
                self.invalidate(InvalidationTopic::Level);
                self.emit_plugin_event(TimelineEvent::LevelChanged { previous, current });
            }
        }
    }
}
