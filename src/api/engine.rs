use crate::core::{IntervalIndex, Level, TimeInterval, Viewport};
use crate::error::TimelineResult;
use crate::interaction::ZoomMode;
use crate::render::{Color, Renderer};

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

/// Main orchestration facade consumed by host surfaces.
///
/// `TimelineEngine` owns the view state (level, zoom factor, time offset,
/// scroll offset), the occupied-interval index and the pinch state machine,
/// and answers the surface's cell count / cell size / cell model requests.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.core.model.view.level
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.core.model.view.zoom_factor
    }

    /// Time (minutes since midnight) anchored under the center marker.
    #[must_use]
    pub fn time_offset(&self) -> f64 {
        self.core.model.view.time_offset
    }

    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        self.core.model.view.scroll_offset_px
    }

    #[must_use]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.core.zoom.mode()
    }

    /// False while a pinch gesture owns the input.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.core.zoom.scroll_enabled()
    }

    #[must_use]
    pub fn highlight_color(&self) -> Color {
        self.core.model.highlight_color
    }

    #[must_use]
    pub fn occupied_intervals(&self) -> &[TimeInterval] {
        self.core.model.intervals.intervals()
    }

    #[must_use]
    pub fn interval_index(&self) -> &IntervalIndex {
        &self.core.model.intervals
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
