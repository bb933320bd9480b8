mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::{CliController, CliError};
pub use controllers::interactive::{
    ExplorerConfig, ExplorerController, FrameData, FrameSink, GestureController, Redraw,
    RenderError, RenderEvent, RenderRequest, RenderWorker, TouchAction, TouchEvent, TouchPoint,
    TouchState, render_request,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, GenerationToken, NeverCancel};
pub use crate::core::actions::generate_fractal::errors::GenerateFractalError;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::trace_boundaries::trace_boundaries::{TraceOptions, trace_boundaries};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportLimits, ViewportLimitsError, ZoomDirection};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, MandelbrotAlgorithmError};
pub use crate::core::fractals::mandelbrot::colour_table::ColourTable;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::escape_time::{EscapeParams, IN_SET, escape_time, is_in_set};
pub use crate::core::util::viewport_mapping::ViewportMapping;
pub use crate::core::util::wrap_index::wrap_index;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
pub use presenters::file::ppm::PpmFilePresenter;
