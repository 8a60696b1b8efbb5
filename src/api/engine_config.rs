use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PADDING_CELL_COUNT, Level, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ZoomConfig;
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_base_cell_width_px")]
    pub base_cell_width_px: f64,
    #[serde(default = "default_padding_cell_count")]
    pub padding_cell_count: usize,
    #[serde(default = "default_zoom_min")]
    pub zoom_min: f64,
    #[serde(default = "default_zoom_max")]
    pub zoom_max: f64,
    #[serde(default = "default_pinch_sensitivity_divisor")]
    pub pinch_sensitivity_divisor: f64,
    #[serde(default)]
    pub default_level: Level,
    #[serde(default)]
    pub initial_time_offset: f64,
    #[serde(default)]
    pub highlight_color: Color,
}

impl TimelineEngineConfig {
    /// Creates a config with default cell width, zoom bounds and level.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            base_cell_width_px: default_base_cell_width_px(),
            padding_cell_count: default_padding_cell_count(),
            zoom_min: default_zoom_min(),
            zoom_max: default_zoom_max(),
            pinch_sensitivity_divisor: default_pinch_sensitivity_divisor(),
            default_level: Level::default(),
            initial_time_offset: 0.0,
            highlight_color: Color::default(),
        }
    }

    #[must_use]
    pub fn with_base_cell_width(mut self, base_cell_width_px: f64) -> Self {
        self.base_cell_width_px = base_cell_width_px;
        self
    }

    #[must_use]
    pub fn with_padding_cell_count(mut self, padding_cell_count: usize) -> Self {
        self.padding_cell_count = padding_cell_count;
        self
    }

    /// Sets the continuous zoom range within one level.
    #[must_use]
    pub fn with_zoom_bounds(mut self, zoom_min: f64, zoom_max: f64) -> Self {
        self.zoom_min = zoom_min;
        self.zoom_max = zoom_max;
        self
    }

    #[must_use]
    pub fn with_pinch_sensitivity_divisor(mut self, divisor: f64) -> Self {
        self.pinch_sensitivity_divisor = divisor;
        self
    }

    /// Sets the level used at startup and restored by a triple tap.
    #[must_use]
    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Sets the time (minutes since midnight) initially under the center marker.
    #[must_use]
    pub fn with_initial_time_offset(mut self, time_offset: f64) -> Self {
        self.initial_time_offset = time_offset;
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        ZoomConfig {
            zoom_min: self.zoom_min,
            zoom_max: self.zoom_max,
            sensitivity_divisor: self.pinch_sensitivity_divisor,
            default_level: self.default_level,
        }
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidConfig(format!("failed to parse engine config: {e}"))
        })
    }
}

fn default_base_cell_width_px() -> f64 {
    50.0
}

fn default_padding_cell_count() -> usize {
    DEFAULT_PADDING_CELL_COUNT
}

fn default_zoom_min() -> f64 {
    ZoomConfig::default().zoom_min
}

fn default_zoom_max() -> f64 {
    ZoomConfig::default().zoom_max
}

fn default_pinch_sensitivity_divisor() -> f64 {
    ZoomConfig::default().sensitivity_divisor
}
