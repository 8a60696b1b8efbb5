//! Optional hooks layered on top of the engine.
//!
//! Extensions observe the engine; they never feed back into core math.

pub mod plugins;

pub use plugins::{TimelineContext, TimelineEvent, TimelinePlugin};
