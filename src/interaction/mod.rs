use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomMode {
    Idle,
    Pinching,
}

/// Tuning for pinch-driven zoom and level transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Damps the raw finger-distance ratio before it is added to the zoom factor.
    pub sensitivity_divisor: f64,
    /// Level restored by a triple tap.
    pub default_level: Level,
}

impl ZoomConfig {
    /// Pulls `zoom_factor` into `[zoom_min, zoom_max]`.
    #[must_use]
    pub fn clamp_zoom_factor(&self, zoom_factor: f64) -> f64 {
        zoom_factor.clamp(self.zoom_min, self.zoom_max)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.8,
            zoom_max: 2.0,
            sensitivity_divisor: 50.0,
            default_level: Level::Minutes60,
        }
    }
}

/// Mutable view state shared by the zoom controller and viewport mapping.
///
/// `time_offset` is the anchor every zoom or level change re-centers on.
/// It is only refreshed from `scroll_offset_px` when a drag or deceleration ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub level: Level,
    pub zoom_factor: f64,
    pub time_offset: f64,
    pub scroll_offset_px: f64,
}

impl ViewState {
    #[must_use]
    pub fn new(level: Level, time_offset: f64) -> Self {
        Self {
            level,
            zoom_factor: 1.0,
            time_offset,
            scroll_offset_px: 0.0,
        }
    }
}

/// What a gesture did to the view state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomOutcome {
    /// Nothing changed.
    Ignored,
    PinchStarted,
    PinchEnded,
    /// Touch count dropped below two mid-gesture.
    Cancelled,
    ZoomChanged { zoom_factor: f64 },
    LevelChanged { previous: Level, current: Level },
}

impl ZoomOutcome {
    /// True when cell geometry changed and the scroll offset must be re-anchored.
    #[must_use]
    pub fn changes_geometry(self) -> bool {
        matches!(self, Self::ZoomChanged { .. } | Self::LevelChanged { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PinchPhase {
    Idle,
    Pinching { initial_distance_px: f64 },
}

/// Pinch/tap state machine driving level and zoom-factor transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    config: ZoomConfig,
    phase: PinchPhase,
}

impl ZoomController {
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            phase: PinchPhase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ZoomConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        match self.phase {
            PinchPhase::Idle => ZoomMode::Idle,
            PinchPhase::Pinching { .. } => ZoomMode::Pinching,
        }
    }

    /// Scrolling is suspended while a pinch is in progress.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.mode() == ZoomMode::Idle
    }

    pub fn pinch_began(&mut self, touch_count: usize, distance_px: f64) -> ZoomOutcome {
        if touch_count < 2 {
            return self.cancel();
        }
        if !distance_px.is_finite() || distance_px <= 0.0 {
            return ZoomOutcome::Ignored;
        }
        self.phase = PinchPhase::Pinching {
            initial_distance_px: distance_px,
        };
        ZoomOutcome::PinchStarted
    }

    /// Applies one pinch update.
    ///
    /// In-range scales only move the zoom factor. Leaving `[zoom_min, zoom_max]`
    /// steps the level (coarser above the max, finer below the min) and resets
    /// the zoom factor, unless the ladder is already at that end.
    pub fn pinch_changed(
        &mut self,
        touch_count: usize,
        distance_px: f64,
        state: &mut ViewState,
    ) -> ZoomOutcome {
        if touch_count < 2 {
            return self.cancel();
        }
        let PinchPhase::Pinching {
            initial_distance_px,
        } = self.phase
        else {
            return ZoomOutcome::Ignored;
        };
        if !distance_px.is_finite() {
            return ZoomOutcome::Ignored;
        }

        let ratio = distance_px / initial_distance_px;
        let scale = state.zoom_factor + (ratio - 1.0) / self.config.sensitivity_divisor;

        if scale > self.config.zoom_max {
            if state.level.is_max() {
                return ZoomOutcome::Ignored;
            }
            return Self::step_level(state, state.level.forward());
        }
        if scale < self.config.zoom_min {
            if state.level.is_min() {
                return ZoomOutcome::Ignored;
            }
            return Self::step_level(state, state.level.backward());
        }

        trace!(zoom_factor = scale, "pinch zoom");
        state.zoom_factor = scale;
        ZoomOutcome::ZoomChanged { zoom_factor: scale }
    }

    pub fn pinch_ended(&mut self) -> ZoomOutcome {
        match self.phase {
            PinchPhase::Idle => ZoomOutcome::Ignored,
            PinchPhase::Pinching { .. } => {
                self.phase = PinchPhase::Idle;
                ZoomOutcome::PinchEnded
            }
        }
    }

    /// Zooms in two levels; stepping clamps at the finest level.
    pub fn double_tap(&mut self, state: &mut ViewState) -> ZoomOutcome {
        let target = state.level.backward().backward();
        Self::step_level(state, target)
    }

    /// Restores the default level and a unit zoom factor.
    pub fn triple_tap(&mut self, state: &mut ViewState) -> ZoomOutcome {
        Self::step_level(state, self.config.default_level)
    }

    fn cancel(&mut self) -> ZoomOutcome {
        match self.phase {
            PinchPhase::Idle => ZoomOutcome::Ignored,
            PinchPhase::Pinching { .. } => {
                self.phase = PinchPhase::Idle;
                ZoomOutcome::Cancelled
            }
        }
    }

    fn step_level(state: &mut ViewState, target: Level) -> ZoomOutcome {
        let previous = state.level;
        state.level = target;
        state.zoom_factor = 1.0;
        ZoomOutcome::LevelChanged {
            previous,
            current: target,
        }
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}
