mod frame;
mod null_renderer;
mod primitives;

pub use frame::{CellRenderModel, TimelineFrame};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::TimelineResult;

/// Contract implemented by any rendering surface.
///
/// Surfaces receive the fully materialized visible cells so drawing and cell
/// recycling stay isolated from timeline math and gesture state.
pub trait Renderer {
    fn render(&mut self, frame: &TimelineFrame) -> TimelineResult<()>;
}
