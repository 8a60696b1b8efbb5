use serde::{Deserialize, Serialize};

use crate::core::{Level, Viewport};
use crate::interaction::ZoomMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineContext {
    pub viewport: Viewport,
    pub level: Level,
    pub zoom_factor: f64,
    pub time_offset: f64,
    pub scroll_offset_px: f64,
    pub cell_count: usize,
    pub intervals_len: usize,
    pub zoom_mode: ZoomMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    IntervalsReplaced { intervals_len: usize },
    LevelChanged { previous: Level, current: Level },
    ZoomChanged { zoom_factor: f64 },
    TimeOffsetCommitted { time_offset: f64 },
    PinchStarted,
    PinchEnded,
    Rendered { cells: usize },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating the
/// view state directly.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TimelineEvent, context: TimelineContext);
}
