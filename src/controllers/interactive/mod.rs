//! Interactive exploration: gestures in, frames out.
//!
//! [`ExplorerController`] renders synchronously on the caller's thread and is
//! what a host shell drives directly. [`RenderWorker`] renders the same
//! snapshots on a background thread and delivers them through a
//! [`FrameSink`].

mod explorer;
pub mod data;
pub mod errors;
pub mod events;
pub mod gesture;
pub mod ports;
mod render;
mod worker;

pub use data::explorer_config::ExplorerConfig;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use data::touch_event::{TouchAction, TouchEvent, TouchPoint};
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use explorer::ExplorerController;
pub use gesture::{GestureController, Redraw, TouchState};
pub use ports::frame_sink::FrameSink;
pub use render::render_request;
pub use worker::RenderWorker;
