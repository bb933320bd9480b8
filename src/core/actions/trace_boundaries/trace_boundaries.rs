//! Boundary tracing: colour rectangle borders first and infer uniform
//! interiors instead of evaluating every pixel.
//!
//! A rectangle whose border consists only of fill values (in-set points for
//! the Mandelbrot set) has its interior flood filled without evaluation.
//! Otherwise the interior is split in two along the longer side and each half
//! is traced the same way. Thin rectangles are evaluated pixel by pixel.
//!
//! The flood fill relies on the set being connected and is not exact: a
//! filament of escaping points that never touches a sampled border pixel is
//! painted over. Everywhere else the output matches direct evaluation.

use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Uniform fills at least this many pixels wide and tall are logged.
const LOGGED_FILL_EXTENT: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Rectangles with at least this many pixels trace their two halves on
    /// separate rayon tasks. `u64::MAX` keeps the whole trace on one thread.
    pub parallel_threshold: u64,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

impl TraceOptions {
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: u64::MAX,
        }
    }
}

/// Frame storage shared by every branch of the trace.
///
/// Branches only ever write the disjoint rectangles they were handed, so
/// relaxed atomic stores are enough and no lock is taken.
struct SharedFrame {
    origin: Point,
    width: usize,
    pixels: Vec<AtomicU32>,
}

impl SharedFrame {
    fn new(frame: PixelRect) -> Self {
        Self {
            origin: frame.top_left(),
            width: frame.width() as usize,
            pixels: (0..frame.size()).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    fn set(&self, pixel: Point, colour: Colour) {
        let col = (pixel.x - self.origin.x) as usize;
        let row = (pixel.y - self.origin.y) as usize;

        self.pixels[row * self.width + col].store(colour.to_packed(), Ordering::Relaxed);
    }

    fn into_colours(self) -> impl Iterator<Item = Colour> {
        self.pixels
            .into_iter()
            .map(|pixel| Colour::from_packed(pixel.into_inner()))
    }
}

struct Tracer<'a, Alg, CMap, C> {
    algorithm: &'a Alg,
    colour_map: &'a CMap,
    cancel: &'a C,
    frame: &'a SharedFrame,
    options: TraceOptions,
}

impl<Alg, CMap, C> Tracer<'_, Alg, CMap, C>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    fn evaluate(&self, pixel: Point) -> Result<bool, GenerateFractalError<Alg::Failure>> {
        let value = self
            .algorithm
            .compute(pixel)
            .map_err(GenerateFractalError::Algorithm)?;
        let is_fill = self.colour_map.is_fill_value(&value);

        self.frame.set(pixel, self.colour_map.map(value));

        Ok(is_fill)
    }

    fn trace(&self, rect: PixelRect) -> Result<(), GenerateFractalError<Alg::Failure>> {
        if rect.is_empty() {
            return Ok(());
        }

        if self.cancel.is_cancelled() {
            return Err(GenerateFractalError::Cancelled(Cancelled));
        }

        if rect.is_thin() {
            for pixel in rect.points() {
                self.evaluate(pixel)?;
            }
            return Ok(());
        }

        let mut uniform = true;
        for pixel in rect.border_points() {
            uniform &= self.evaluate(pixel)?;
        }

        if uniform {
            let interior = rect.interior();
            let fill = self.colour_map.fill_colour();

            for pixel in interior.points() {
                self.frame.set(pixel, fill);
            }

            if rect.width() >= LOGGED_FILL_EXTENT && rect.height() >= LOGGED_FILL_EXTENT {
                debug!("uniform fill of {}x{} interior", interior.width(), interior.height());
            }

            return Ok(());
        }

        let (first, second) = rect.split_interior();

        if rect.size() >= self.options.parallel_threshold {
            let (first, second) = rayon::join(|| self.trace(first), || self.trace(second));
            first.and(second)
        } else {
            self.trace(first)?;
            self.trace(second)
        }
    }
}

/// Boundary-traces `frame` into a buffer of the same size.
///
/// Polls `cancel` once per rectangle.
pub fn trace_boundaries<Alg, CMap, C>(
    frame: PixelRect,
    algorithm: &Alg,
    colour_map: &CMap,
    options: TraceOptions,
    cancel: &C,
) -> Result<PixelBuffer, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    if frame.is_empty() {
        return Ok(PixelBuffer::empty());
    }

    let shared = SharedFrame::new(frame);
    let tracer = Tracer {
        algorithm,
        colour_map,
        cancel,
        frame: &shared,
        options,
    };

    tracer.trace(frame)?;

    let buffer = PixelBuffer::from_colours(frame.width(), frame.height(), shared.into_colours());

    // SharedFrame holds exactly one entry per pixel of `frame`.
    Ok(buffer.unwrap_or_else(|_| PixelBuffer::new(frame.width(), frame.height())))
}
