/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker delivered a frame or an error.
    ///
    /// The handler still decides whether to request a redraw.
    FrameReady,
}
