//! timeline-rs: zoomable 24-hour timeline strip engine.
//!
//! The crate maps between scroll pixels and minutes since midnight across a
//! fixed ladder of granularity levels, and builds per-cell render models that
//! highlight occupied intervals. Drawing, cell recycling and gesture
//! recognition stay with the host surface.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
