use crate::core::actions::trace_boundaries::trace_boundaries::TraceOptions;
use crate::core::data::viewport::{Viewport, ViewportLimits};

/// Snapshot of everything one frame depends on, taken when the render starts.
///
/// Gestures that arrive while a frame is in flight change the live viewport,
/// never the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub limits: ViewportLimits,
    pub width: u32,
    pub height: u32,
    pub trace: TraceOptions,
}

impl RenderRequest {
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
