use tracing::debug;

use crate::core::{IntervalIndex, TimelineGeometry};
use crate::error::TimelineResult;
use crate::interaction::{ViewState, ZoomController};
use crate::render::Renderer;

use super::{
    TimelineEngine, TimelineEngineConfig,
    engine_core::{EngineCore, TimelineModel, TimelineRuntimeState},
    validation::validate_engine_config,
};

impl<R: Renderer> TimelineEngine<R> {
    /// Creates a fully initialized engine centered on the configured time offset.
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = validate_engine_config(config)?;
        let geometry = TimelineGeometry::new(
            config.viewport,
            config.base_cell_width_px,
            config.padding_cell_count,
        )?;

        let mut view = ViewState::new(config.default_level, config.initial_time_offset);
        view.scroll_offset_px =
            geometry.scroll_offset_from_time(view.time_offset, view.level, view.zoom_factor);

        debug!(
            level = view.level.minutes(),
            time_offset = view.time_offset,
            scroll_offset_px = view.scroll_offset_px,
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                model: TimelineModel {
                    viewport: config.viewport,
                    geometry,
                    view,
                    intervals: IntervalIndex::default(),
                    highlight_color: config.highlight_color,
                },
                zoom: ZoomController::new(config.zoom_config()),
                runtime: TimelineRuntimeState::with_full_invalidation(),
            },
        })
    }
}
