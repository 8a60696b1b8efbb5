use serde::{Deserialize, Serialize};

use crate::core::{CellSize, FractionalRanges, TimeInterval, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

/// Everything a surface needs to bind one timeline cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRenderModel {
    pub row: usize,
    pub label: String,
    /// Absolute time window covered by the cell.
    pub window: TimeInterval,
    pub ranges: FractionalRanges,
    pub color: Color,
}

impl CellRenderModel {
    pub fn validate(&self) -> TimelineResult<()> {
        self.color.validate()?;
        for range in &self.ranges {
            if !range.lower.is_finite() || !range.upper.is_finite() {
                return Err(TimelineError::InvalidData(format!(
                    "cell {} has a non-finite highlight range",
                    self.row
                )));
            }
            if range.upper < range.lower {
                return Err(TimelineError::InvalidData(format!(
                    "cell {} has a negative-width highlight range",
                    self.row
                )));
            }
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one timeline draw pass: the visible cells only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub viewport: Viewport,
    pub scroll_offset_px: f64,
    pub cell_size: CellSize,
    pub cell_count: usize,
    pub cells: Vec<CellRenderModel>,
    /// Readout of the time under the center marker.
    pub center_label: String,
}

impl TimelineFrame {
    #[must_use]
    pub fn new(viewport: Viewport, cell_size: CellSize, cell_count: usize) -> Self {
        Self {
            viewport,
            scroll_offset_px: 0.0,
            cell_size,
            cell_count,
            cells: Vec::new(),
            center_label: String::new(),
        }
    }

    #[must_use]
    pub fn with_cell(mut self, cell: CellRenderModel) -> Self {
        self.cells.push(cell);
        self
    }

    /// Pixel x of `row`'s leading edge relative to the viewport.
    #[must_use]
    pub fn cell_x(&self, row: usize) -> f64 {
        row as f64 * self.cell_size.width - self.scroll_offset_px
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.scroll_offset_px.is_finite() || self.scroll_offset_px < 0.0 {
            return Err(TimelineError::InvalidData(
                "frame scroll offset must be finite and >= 0".to_owned(),
            ));
        }
        if !self.cell_size.width.is_finite() || self.cell_size.width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "frame cell width must be finite and > 0".to_owned(),
            ));
        }

        for cell in &self.cells {
            if cell.row >= self.cell_count {
                return Err(TimelineError::RowOutOfRange {
                    row: cell.row,
                    cell_count: self.cell_count,
                });
            }
            cell.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
