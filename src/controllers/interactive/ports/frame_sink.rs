use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives finished frames from a [`RenderWorker`](crate::controllers::interactive::RenderWorker).
///
/// Called from the worker thread.
pub trait FrameSink: Send + Sync {
    fn submit(&self, event: RenderEvent);
}
