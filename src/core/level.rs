use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Padding cells split evenly before/after the real day.
pub const DEFAULT_PADDING_CELL_COUNT: usize = 4;

/// Minutes-per-cell granularity of the timeline grid.
///
/// Variants are ordered from finest to coarsest. Stepping is ordinal over
/// [`Level::LADDER`], so no lookup depends on discriminant values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum Level {
    Minutes1,
    Minutes2,
    Minutes5,
    Minutes10,
    Minutes30,
    #[default]
    Minutes60,
    Minutes120,
    Minutes180,
}

impl Level {
    pub const LADDER: [Level; 8] = [
        Level::Minutes1,
        Level::Minutes2,
        Level::Minutes5,
        Level::Minutes10,
        Level::Minutes30,
        Level::Minutes60,
        Level::Minutes120,
        Level::Minutes180,
    ];

    pub const FINEST: Level = Level::Minutes1;
    pub const COARSEST: Level = Level::Minutes180;

    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Minutes1 => 1,
            Self::Minutes2 => 2,
            Self::Minutes5 => 5,
            Self::Minutes10 => 10,
            Self::Minutes30 => 30,
            Self::Minutes60 => 60,
            Self::Minutes120 => 120,
            Self::Minutes180 => 180,
        }
    }

    /// Alias of [`Level::minutes`] as `f64`, the width of one cell's time window.
    #[must_use]
    pub fn cell_window_minutes(self) -> f64 {
        f64::from(self.minutes())
    }

    #[must_use]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::LADDER
            .iter()
            .copied()
            .find(|level| level.minutes() == minutes)
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::LADDER
            .iter()
            .position(|level| *level == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self == Self::FINEST
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self == Self::COARSEST
    }

    /// Next coarser level, or `None` at the coarsest end of the ladder.
    #[must_use]
    pub fn checked_forward(self) -> Option<Self> {
        Self::LADDER.get(self.index() + 1).copied()
    }

    /// Next finer level, or `None` at the finest end of the ladder.
    #[must_use]
    pub fn checked_backward(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::LADDER.get(index).copied())
    }

    /// Steps one level coarser, staying put at the coarsest level.
    #[must_use]
    pub fn forward(self) -> Self {
        self.checked_forward().unwrap_or(self)
    }

    /// Steps one level finer, staying put at the finest level.
    #[must_use]
    pub fn backward(self) -> Self {
        self.checked_backward().unwrap_or(self)
    }

    /// Cells covering one real day, without padding.
    #[must_use]
    pub fn day_cell_count(self) -> usize {
        MINUTES_PER_DAY.div_ceil(self.minutes()) as usize
    }

    /// `ceil(1440 / minutes) + padding_cell_count`.
    #[must_use]
    pub fn cell_count(self, padding_cell_count: usize) -> usize {
        self.day_cell_count() + padding_cell_count
    }

    /// Wall-clock `HH:MM` label of `row`.
    ///
    /// Padding rows before and after the real day wrap around so they show the
    /// adjacent day's time instead of a negative or past-midnight value.
    #[must_use]
    pub fn format_label(self, row: usize, padding_cell_count: usize) -> String {
        let day_cells = self.day_cell_count() as i64;
        let real_row = row as i64 - (padding_cell_count / 2) as i64;
        let wrapped = real_row.rem_euclid(day_cells);
        let minutes = (wrapped * i64::from(self.minutes())).rem_euclid(i64::from(MINUTES_PER_DAY));
        format_minutes_of_day(minutes as u32)
    }

    /// `HH:MM` label for an arbitrary time offset, wrapped into one day.
    #[must_use]
    pub fn label_for_time_offset(time_offset: f64) -> String {
        if !time_offset.is_finite() {
            return format_minutes_of_day(0);
        }
        let minutes = time_offset.floor().rem_euclid(f64::from(MINUTES_PER_DAY));
        format_minutes_of_day(minutes as u32)
    }
}

fn format_minutes_of_day(minutes: u32) -> String {
    NaiveTime::from_num_seconds_from_midnight_opt((minutes % MINUTES_PER_DAY) * 60, 0)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| "00:00".to_owned())
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.minutes()
    }
}

impl TryFrom<u32> for Level {
    type Error = TimelineError;

    fn try_from(minutes: u32) -> TimelineResult<Self> {
        Self::from_minutes(minutes).ok_or_else(|| {
            TimelineError::InvalidData(format!("{minutes} minutes is not a timeline level"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PADDING_CELL_COUNT, Level};

    #[test]
    fn ladder_is_strictly_ascending() {
        assert!(
            Level::LADDER
                .windows(2)
                .all(|pair| pair[0].minutes() < pair[1].minutes())
        );
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        assert_eq!(Level::COARSEST.forward(), Level::COARSEST);
        assert_eq!(Level::FINEST.backward(), Level::FINEST);
        assert_eq!(Level::COARSEST.checked_forward(), None);
        assert_eq!(Level::FINEST.checked_backward(), None);
    }

    #[test]
    fn trailing_padding_rows_wrap_to_next_day() {
        let level = Level::Minutes60;
        // rows 26/27 sit past the real day
        assert_eq!(level.format_label(26, DEFAULT_PADDING_CELL_COUNT), "00:00");
        assert_eq!(level.format_label(27, DEFAULT_PADDING_CELL_COUNT), "01:00");
    }
}
