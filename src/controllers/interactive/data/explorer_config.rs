use crate::core::actions::trace_boundaries::trace_boundaries::TraceOptions;
use crate::core::data::viewport::{Viewport, ViewportLimits};

/// Startup settings for an explorer session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplorerConfig {
    pub viewport: Viewport,
    pub limits: ViewportLimits,
    pub trace: TraceOptions,
}
