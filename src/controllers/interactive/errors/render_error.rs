use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithmError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    /// A newer request superseded this one.
    Cancelled,
    Mandelbrot(MandelbrotError),
    Algorithm(MandelbrotAlgorithmError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "render cancelled"),
            Self::Mandelbrot(err) => write!(f, "invalid view: {}", err),
            Self::Algorithm(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Mandelbrot(err) => Some(err),
            Self::Algorithm(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<GenerateFractalError<MandelbrotAlgorithmError>> for RenderError {
    fn from(err: GenerateFractalError<MandelbrotAlgorithmError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(_) => Self::Cancelled,
            GenerateFractalError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}
