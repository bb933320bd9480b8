use std::error::Error;
use std::fmt;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportLimits};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::{EscapeParams, escape_time};
use crate::core::util::viewport_mapping::ViewportMapping;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotAlgorithmError {
    PixelOutsideFrame { pixel: Point, frame: PixelRect },
}

impl fmt::Display for MandelbrotAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideFrame { pixel, frame } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} frame",
                    pixel.x,
                    pixel.y,
                    frame.width(),
                    frame.height()
                )
            }
        }
    }
}

impl Error for MandelbrotAlgorithmError {}

/// Smoothed escape time for each pixel of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    frame: PixelRect,
    mapping: ViewportMapping,
    params: EscapeParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;
    type Failure = MandelbrotAlgorithmError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.frame.contains_point(pixel) {
            return Err(MandelbrotAlgorithmError::PixelOutsideFrame {
                pixel,
                frame: self.frame,
            });
        }

        Ok(escape_time(self.mapping.pixel_to_complex(pixel), &self.params))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(frame: PixelRect, mapping: ViewportMapping, params: EscapeParams) -> Self {
        Self {
            frame,
            mapping,
            params,
        }
    }

    /// Derives the mapping and escape parameters for a `width` x `height`
    /// canvas showing `viewport`.
    pub fn for_viewport(
        viewport: &Viewport,
        limits: &ViewportLimits,
        width: u32,
        height: u32,
    ) -> Result<Self, MandelbrotError> {
        let frame = PixelRect::frame(width, height)
            .map_err(|_| MandelbrotError::EmptyCanvas { width, height })?;
        let mapping = ViewportMapping::new(viewport, limits.plane_width, width, height)
            .ok_or(MandelbrotError::EmptyCanvas { width, height })?;
        let params = EscapeParams::new(viewport.max_iterations(), limits.bailout)?;

        Ok(Self::new(frame, mapping, params))
    }

    #[must_use]
    pub fn frame(&self) -> PixelRect {
        self.frame
    }

    #[must_use]
    pub fn mapping(&self) -> ViewportMapping {
        self.mapping
    }

    #[must_use]
    pub fn params(&self) -> EscapeParams {
        self.params
    }
}
