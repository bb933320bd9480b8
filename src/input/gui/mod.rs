//! Windowed host shell: winit for the window and input, pixels for the
//! framebuffer.

mod app;
mod contacts;
mod events;

pub use app::run_gui;
pub use events::GuiEvent;
