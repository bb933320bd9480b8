//! Host-facing explorer component.
//!
//! The host owns the window and feeds canvas sizes and touch events in;
//! [`ExplorerController`] tracks the viewport and hands back the latest
//! frame. Rendering is synchronous and always works on a snapshot of the
//! viewport taken at the start of [`ExplorerController::render`].

use std::time::Instant;

use log::{debug, info};

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::data::touch_event::TouchEvent;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::gesture::{GestureController, Redraw, TouchState};
use crate::controllers::interactive::render::render_request;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::trace_boundaries::trace_boundaries::TraceOptions;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_table::ColourTable;

pub struct ExplorerController {
    gestures: GestureController,
    colour_table: ColourTable,
    trace: TraceOptions,
    width: u32,
    height: u32,
    buffer: PixelBuffer,
    stale: bool,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            gestures: GestureController::new(config.viewport, config.limits),
            colour_table: ColourTable::build(),
            trace: config.trace,
            width: 0,
            height: 0,
            buffer: PixelBuffer::empty(),
            stale: true,
        }
    }

    /// Updates the canvas size supplied by the host.
    pub fn resize(&mut self, width: u32, height: u32) -> Redraw {
        if (width, height) == (self.width, self.height) {
            return Redraw::NotNeeded;
        }

        debug!("canvas resized to {}x{}", width, height);

        self.width = width;
        self.height = height;
        self.stale = true;
        Redraw::Requested
    }

    pub fn handle_touch(&mut self, event: &TouchEvent) -> Redraw {
        let redraw = self.gestures.handle_touch(event, self.width, self.height);

        if redraw.is_requested() {
            self.stale = true;
        }

        redraw
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Redraw {
        let redraw = self.gestures.set_viewport(viewport);

        if redraw.is_requested() {
            self.stale = true;
        }

        redraw
    }

    /// Snapshot of the current viewport and canvas.
    #[must_use]
    pub fn request(&self) -> RenderRequest {
        RenderRequest {
            viewport: self.gestures.viewport(),
            limits: self.gestures.limits(),
            width: self.width,
            height: self.height,
            trace: self.trace,
        }
    }

    /// Renders the current snapshot and keeps it as the current buffer.
    ///
    /// On failure the previous buffer is kept and the frame stays stale.
    pub fn render(&mut self) -> Result<&PixelBuffer, RenderError> {
        let request = self.request();
        let start = Instant::now();

        self.buffer = render_request(&request, &self.colour_table, &NeverCancel)?;
        self.stale = false;

        info!(
            "rendered {}x{} at magnification {} ({} iterations) in {:?}",
            request.width,
            request.height,
            request.viewport.magnification(),
            request.viewport.max_iterations(),
            start.elapsed()
        );

        Ok(&self.buffer)
    }

    /// Renders only if something changed since the last frame.
    pub fn render_if_stale(&mut self) -> Result<&PixelBuffer, RenderError> {
        if self.stale {
            return self.render();
        }

        Ok(&self.buffer)
    }

    #[must_use]
    pub fn current_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.gestures.viewport()
    }

    #[must_use]
    pub fn touch_state(&self) -> TouchState {
        self.gestures.state()
    }

    #[must_use]
    pub fn colour_table(&self) -> &ColourTable {
        &self.colour_table
    }
}

impl Default for ExplorerController {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}
