pub mod cell;
pub mod interval;
pub mod level;
pub mod types;
pub mod viewport_mapper;

pub use cell::{FractionalRange, FractionalRanges, border_window, to_fractional_ranges};
pub use interval::{IntervalHits, IntervalIndex, TimeInterval};
pub use level::{DEFAULT_PADDING_CELL_COUNT, Level, MINUTES_PER_DAY};
pub use types::{CellSize, Viewport};
pub use viewport_mapper::TimelineGeometry;
