use std::ops::Range;

use tracing::trace;

use crate::core::{CellSize, Level, TimeInterval, border_window, to_fractional_ranges};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{CellRenderModel, Renderer};

use super::cell_model_cache::{CellModelCacheKey, CellModelCacheStats};
use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Total rows the surface should lay out for the current level.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.core.model.geometry.cell_count(self.core.model.view.level)
    }

    /// Pixel size of every cell: zoomed width, full viewport height.
    #[must_use]
    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: self
                .core
                .model
                .geometry
                .cell_width(self.core.model.view.zoom_factor),
            height: f64::from(self.core.model.viewport.height),
        }
    }

    /// Scrollable content width for the current level and zoom.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        let view = self.core.model.view;
        self.core
            .model
            .geometry
            .content_width(view.level, view.zoom_factor)
    }

    /// Rows intersecting the viewport at the live scroll offset.
    #[must_use]
    pub fn visible_rows(&self) -> Range<usize> {
        let view = self.core.model.view;
        self.core
            .model
            .geometry
            .visible_rows(view.scroll_offset_px, view.level, view.zoom_factor)
    }

    pub fn cell_border_window(&self, row: usize) -> TimelineResult<TimeInterval> {
        self.check_row(row)?;
        Ok(border_window(
            row,
            self.core.model.view.level,
            self.core.model.geometry.padding_cell_count(),
        ))
    }

    /// `HH:MM` readout of the time under the center marker.
    #[must_use]
    pub fn center_label(&self) -> String {
        Level::label_for_time_offset(self.center_time())
    }

    /// Builds the render model for `row` without touching the cache.
    pub fn build_cell_render_model(&self, row: usize) -> TimelineResult<CellRenderModel> {
        let window = self.cell_border_window(row)?;
        let level = self.core.model.view.level;
        let hits = self.core.model.intervals.query(window);

        Ok(CellRenderModel {
            row,
            label: level.format_label(row, self.core.model.geometry.padding_cell_count()),
            window,
            ranges: to_fractional_ranges(&hits, window, level),
            color: self.core.model.highlight_color,
        })
    }

    /// Render model for `row`, served from the cell cache when still valid.
    pub fn cell_render_model(&mut self, row: usize) -> TimelineResult<CellRenderModel> {
        let key = CellModelCacheKey {
            row,
            level: self.core.model.view.level,
            intervals_generation: self.core.model.intervals.generation(),
        };
        if let Some(model) = self.core.runtime.cell_cache.get(key) {
            trace!(row, "cell model cache hit");
            return Ok(model);
        }

        let model = self.build_cell_render_model(row)?;
        self.core.runtime.cell_cache.insert(key, model.clone());
        Ok(model)
    }

    #[must_use]
    pub fn cell_model_cache_stats(&self) -> CellModelCacheStats {
        self.core.runtime.cell_cache.stats()
    }

    fn check_row(&self, row: usize) -> TimelineResult<()> {
        let cell_count = self.cell_count();
        if row >= cell_count {
            return Err(TimelineError::RowOutOfRange { row, cell_count });
        }
        Ok(())
    }
}
