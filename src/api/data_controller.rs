use tracing::debug;

use crate::core::TimeInterval;
use crate::error::TimelineResult;
use crate::render::{Color, Renderer};

use super::{InvalidationTopic, TimelineEngine, TimelineEvent};

impl<R: Renderer> TimelineEngine<R> {
    /// Replaces the occupied-interval set wholesale.
    ///
    /// Reversed bounds are swapped. Any non-finite bound fails the whole call
    /// and keeps the current set. On success every cached cell model is
    /// dropped and a full re-render is requested.
    pub fn set_occupied_intervals(&mut self, intervals: Vec<TimeInterval>) -> TimelineResult<()> {
        let intervals = intervals
            .into_iter()
            .map(TimeInterval::normalized)
            .collect::<TimelineResult<Vec<_>>>()?;
        self.replace_occupied_intervals(intervals);
        Ok(())
    }

    /// Builds intervals from raw `(start, end)` minute pairs and replaces the set.
    ///
    /// Fails without touching the current set when any bound is not finite.
    pub fn set_occupied_interval_pairs(&mut self, pairs: &[(f64, f64)]) -> TimelineResult<()> {
        let intervals = pairs
            .iter()
            .map(|&(start, end)| TimeInterval::new(start, end))
            .collect::<TimelineResult<Vec<_>>>()?;
        self.replace_occupied_intervals(intervals);
        Ok(())
    }

    pub fn clear_occupied_intervals(&mut self) {
        self.replace_occupied_intervals(Vec::new());
    }

    fn replace_occupied_intervals(&mut self, intervals: Vec<TimeInterval>) {
        let intervals_len = intervals.len();
        self.core.model.intervals.replace(intervals);
        debug!(
            count = intervals_len,
            generation = self.core.model.intervals.generation(),
            "replace occupied intervals"
        );
        self.invalidate(InvalidationTopic::Intervals);
        self.emit_plugin_event(TimelineEvent::IntervalsReplaced { intervals_len });
    }

    pub fn set_highlight_color(&mut self, color: Color) -> TimelineResult<()> {
        color.validate()?;
        if self.core.model.highlight_color == color {
            return Ok(());
        }
        self.core.model.highlight_color = color;
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }
}
