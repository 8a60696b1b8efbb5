use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{TimelineError, TimelineResult};

/// Query results rarely exceed a handful of intervals per cell.
pub type IntervalHits = SmallVec<[TimeInterval; 4]>;

/// Time range in minutes since local midnight.
///
/// Bounds may be negative or exceed one day; such intervals land in the
/// padding cells of the previous/next day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: f64,
    pub end: f64,
}

impl TimeInterval {
    /// Creates an interval, swapping reversed bounds.
    pub fn new(start: f64, end: f64) -> TimelineResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TimelineError::InvalidData(
                "time interval bounds must be finite".to_owned(),
            ));
        }
        Ok(Self {
            start: start.min(end),
            end: start.max(end),
        })
    }

    /// Re-checks an interval built from a struct literal the way [`Self::new`] would.
    pub fn normalized(self) -> TimelineResult<Self> {
        Self::new(self.start, self.end)
    }

    #[must_use]
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Half-open overlap test; touching endpoints do not overlap.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Intersection with `window`, or `None` when the two do not overlap.
    #[must_use]
    pub fn clip_to(self, window: Self) -> Option<Self> {
        if !self.overlaps(window) {
            return None;
        }
        let start = self.start.max(window.start);
        let end = self.end.min(window.end).max(start);
        Some(Self { start, end })
    }
}

/// Occupied-interval set answering per-cell overlap queries.
///
/// Intervals are kept sorted by start so a query can stop scanning once a
/// stored interval starts at or after the window end.
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    intervals: Vec<TimeInterval>,
    generation: u64,
}

impl IntervalIndex {
    #[must_use]
    pub fn new(intervals: Vec<TimeInterval>) -> Self {
        let mut index = Self::default();
        index.replace(intervals);
        index
    }

    /// Replaces the whole set. Every replacement bumps [`Self::generation`].
    ///
    /// Reversed bounds are swapped; intervals with non-finite bounds are dropped.
    pub fn replace(&mut self, intervals: Vec<TimeInterval>) {
        let mut intervals: Vec<TimeInterval> = intervals
            .into_iter()
            .filter_map(|interval| interval.normalized().ok())
            .collect();
        intervals.sort_by_key(|interval| OrderedFloat(interval.start));
        self.intervals = intervals;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    #[must_use]
    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns every stored interval overlapping `window`, clipped to it.
    #[must_use]
    pub fn query(&self, window: TimeInterval) -> IntervalHits {
        let candidates = self
            .intervals
            .partition_point(|interval| interval.start < window.end);

        self.intervals[..candidates]
            .iter()
            .filter_map(|interval| interval.clip_to(window))
            .collect()
    }
}
