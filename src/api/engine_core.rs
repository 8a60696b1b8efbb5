use crate::core::{IntervalIndex, TimelineGeometry, Viewport};
use crate::extensions::TimelinePlugin;
use crate::interaction::{ViewState, ZoomController};
use crate::render::Color;

use super::{InvalidationMask, cell_model_cache::CellModelCache};

/// Domain state: what the timeline shows and where it is scrolled.
pub(super) struct TimelineModel {
    pub(super) viewport: Viewport,
    pub(super) geometry: TimelineGeometry,
    pub(super) view: ViewState,
    pub(super) intervals: IntervalIndex,
    pub(super) highlight_color: Color,
}

/// Runtime orchestration state grouped separately from the model.
pub(super) struct TimelineRuntimeState {
    pub(super) plugins: Vec<Box<dyn TimelinePlugin>>,
    pub(super) pending_invalidation: InvalidationMask,
    pub(super) cell_cache: CellModelCache,
}

impl TimelineRuntimeState {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            plugins: Vec::new(),
            pending_invalidation: InvalidationMask::from_topic(super::InvalidationTopic::Viewport),
            cell_cache: CellModelCache::default(),
        }
    }
}

/// Internal engine core state used by the public facade (`TimelineEngine`).
pub(super) struct EngineCore {
    pub(super) model: TimelineModel,
    pub(super) zoom: ZoomController,
    pub(super) runtime: TimelineRuntimeState,
}
