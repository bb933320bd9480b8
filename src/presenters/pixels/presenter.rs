use std::sync::Arc;

use log::warn;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::{FrameData, FrameSink, RenderEvent};
use crate::input::gui::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Copies worker frames into a pixels framebuffer and puts it on screen.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
        })
    }

    pub fn share_adapter(&self) -> Arc<dyn FrameSink> {
        Arc::clone(&self.adapter) as Arc<dyn FrameSink>
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.has_frame = false;

        Ok(())
    }

    /// Takes the newest worker event, if any. Returns `true` when a new frame
    /// landed in the framebuffer.
    pub fn poll_frame(&mut self) -> bool {
        match self.adapter.take_render_event() {
            Some(RenderEvent::Frame(frame)) => self.accept_frame(&frame),
            Some(RenderEvent::Error { generation, error }) => {
                warn!("render of generation {} failed: {}", generation, error);
                false
            }
            None => false,
        }
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
                pixel.copy_from_slice(&[0, 0, 0, 255]);
            }
        }

        self.pixels.render()
    }

    fn accept_frame(&mut self, frame: &FrameData) -> bool {
        let buffer = &frame.pixel_buffer;

        if frame.generation <= self.last_presented_generation
            || buffer.width() != self.width
            || buffer.height() != self.height
        {
            return false;
        }

        if let Err(err) = buffer.write_rgba(self.pixels.frame_mut()) {
            warn!("dropping frame {}: {}", frame.generation, err);
            return false;
        }

        self.has_frame = true;
        self.last_presented_generation = frame.generation;
        true
    }
}
