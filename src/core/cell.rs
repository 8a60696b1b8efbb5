use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Level, TimeInterval};

pub type FractionalRanges = SmallVec<[FractionalRange; 4]>;

/// Highlight extent expressed as a fraction of one cell's width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalRange {
    pub lower: f64,
    pub upper: f64,
}

impl FractionalRange {
    #[must_use]
    pub fn width(self) -> f64 {
        self.upper - self.lower
    }

    /// Cell-local `(x, width)` in pixels for a cell of `cell_width_px`.
    #[must_use]
    pub fn to_pixel_span(self, cell_width_px: f64) -> (f64, f64) {
        (self.lower * cell_width_px, self.width() * cell_width_px)
    }
}

/// Absolute time window covered by `row`.
///
/// Time zero sits at the midpoint of the first real-day cell, hence the
/// extra half cell on top of the leading padding.
#[must_use]
pub fn border_window(row: usize, level: Level, padding_cell_count: usize) -> TimeInterval {
    let minutes = level.cell_window_minutes();
    let offset_rows = row as f64 - (padding_cell_count / 2) as f64 - 0.5;
    let start = minutes * offset_rows;
    TimeInterval {
        start,
        end: start + minutes,
    }
}

/// Converts clipped intervals into fractions of the cell starting at `window.start`.
///
/// Values are not clamped to `[0, 1]`; only `upper >= lower` is enforced so
/// float overshoot never yields a negative width.
#[must_use]
pub fn to_fractional_ranges(
    intervals: &[TimeInterval],
    window: TimeInterval,
    level: Level,
) -> FractionalRanges {
    let minutes = level.cell_window_minutes();
    intervals
        .iter()
        .filter(|interval| interval.start.is_finite() && interval.end.is_finite())
        .map(|interval| {
            let lower = (interval.start - window.start) / minutes;
            let upper = (interval.end - window.start) / minutes;
            FractionalRange {
                lower,
                upper: upper.max(lower),
            }
        })
        .collect()
}
