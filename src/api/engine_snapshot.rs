use serde::{Deserialize, Serialize};

use crate::core::{CellSize, Level, Viewport};
use crate::error::TimelineResult;
use crate::interaction::ZoomMode;
use crate::render::{CellRenderModel, Renderer};

use super::TimelineEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub level: Level,
    pub zoom_factor: f64,
    pub time_offset: f64,
    pub scroll_offset_px: f64,
    pub cell_count: usize,
    pub cell_size: CellSize,
    pub intervals_len: usize,
    pub zoom_mode: ZoomMode,
    pub visible_cells: Vec<CellRenderModel>,
}

impl<R: Renderer> TimelineEngine<R> {
    /// Captures the view state plus the models of every visible row.
    pub fn snapshot(&self) -> TimelineResult<EngineSnapshot> {
        let visible_cells = self
            .visible_rows()
            .map(|row| self.build_cell_render_model(row))
            .collect::<TimelineResult<Vec<_>>>()?;

        Ok(EngineSnapshot {
            viewport: self.viewport(),
            level: self.level(),
            zoom_factor: self.zoom_factor(),
            time_offset: self.time_offset(),
            scroll_offset_px: self.scroll_offset_px(),
            cell_count: self.cell_count(),
            cell_size: self.cell_size(),
            intervals_len: self.core.model.intervals.len(),
            zoom_mode: self.zoom_mode(),
            visible_cells,
        })
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
