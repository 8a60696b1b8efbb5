use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{Level, Viewport};
use crate::error::{TimelineError, TimelineResult};

/// Fixed per-widget constants for the scroll/time transform.
///
/// All methods are pure: level and zoom factor are passed in by the caller,
/// which owns the mutable view state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineGeometry {
    base_cell_width_px: f64,
    padding_cell_count: usize,
    viewport_width_px: f64,
    center_offset_px: f64,
}

impl TimelineGeometry {
    pub fn new(
        viewport: Viewport,
        base_cell_width_px: f64,
        padding_cell_count: usize,
    ) -> TimelineResult<Self> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !base_cell_width_px.is_finite() || base_cell_width_px <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "base cell width must be finite and > 0".to_owned(),
            ));
        }
        if padding_cell_count % 2 != 0 {
            return Err(TimelineError::InvalidConfig(
                "padding cell count must be even".to_owned(),
            ));
        }

        Ok(Self {
            base_cell_width_px,
            padding_cell_count,
            viewport_width_px: f64::from(viewport.width),
            center_offset_px: viewport.center_offset_px(),
        })
    }

    #[must_use]
    pub fn base_cell_width_px(self) -> f64 {
        self.base_cell_width_px
    }

    #[must_use]
    pub fn padding_cell_count(self) -> usize {
        self.padding_cell_count
    }

    #[must_use]
    pub fn center_offset_px(self) -> f64 {
        self.center_offset_px
    }

    #[must_use]
    pub fn viewport_width_px(self) -> f64 {
        self.viewport_width_px
    }

    #[must_use]
    pub fn cell_width(self, zoom_factor: f64) -> f64 {
        self.base_cell_width_px * zoom_factor
    }

    /// Cells between scroll origin and time zero: the leading padding plus half a cell.
    #[must_use]
    pub fn leading_cells(self) -> f64 {
        (self.padding_cell_count / 2) as f64 + 0.5
    }

    #[must_use]
    pub fn cell_count(self, level: Level) -> usize {
        level.cell_count(self.padding_cell_count)
    }

    #[must_use]
    pub fn content_width(self, level: Level, zoom_factor: f64) -> f64 {
        self.cell_count(level) as f64 * self.cell_width(zoom_factor)
    }

    /// Scroll offset that puts `time_offset` under the center marker.
    ///
    /// Offsets that would scroll before the first cell clamp to zero.
    #[must_use]
    pub fn scroll_offset_from_time(self, time_offset: f64, level: Level, zoom_factor: f64) -> f64 {
        let cell_width = self.cell_width(zoom_factor);
        let cells = time_offset / level.cell_window_minutes() + self.leading_cells()
            - self.center_offset_px / cell_width;
        cells.max(0.0) * cell_width
    }

    /// Time offset under the center marker at `scroll_offset_px`.
    #[must_use]
    pub fn time_from_scroll_offset(self, scroll_offset_px: f64, level: Level, zoom_factor: f64) -> f64 {
        let cell_width = self.cell_width(zoom_factor);
        let cells = (scroll_offset_px - self.leading_cells() * cell_width + self.center_offset_px)
            / cell_width;
        cells * level.cell_window_minutes()
    }

    /// Rows whose horizontal extent intersects the viewport at `scroll_offset_px`.
    #[must_use]
    pub fn visible_rows(self, scroll_offset_px: f64, level: Level, zoom_factor: f64) -> Range<usize> {
        let cell_count = self.cell_count(level);
        let cell_width = self.cell_width(zoom_factor);
        if !scroll_offset_px.is_finite() || !cell_width.is_finite() || cell_width <= 0.0 {
            return 0..0;
        }

        let first = (scroll_offset_px.max(0.0) / cell_width).floor() as usize;
        let last = ((scroll_offset_px.max(0.0) + self.viewport_width_px) / cell_width).ceil() as usize;
        first.min(cell_count)..last.min(cell_count)
    }
}
