use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::{FrameSink, RenderEvent};
use crate::input::gui::GuiEvent;

/// Hands worker frames to the UI thread and wakes its event loop.
///
/// Only the newest event is kept.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FrameSink for PixelsAdapter {
    fn submit(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        // Fails only once the event loop has exited.
        let _ = self
            .event_loop_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(GuiEvent::FrameReady);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
