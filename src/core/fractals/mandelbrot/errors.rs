use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidBailout { bailout: f64 },
    EmptyCanvas { width: u32, height: u32 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidBailout { bailout } => {
                write!(f, "bailout {} must be a finite value greater than 4", bailout)
            }
            Self::EmptyCanvas { width, height } => {
                write!(f, "cannot map a {}x{} canvas onto the plane", width, height)
            }
        }
    }
}

impl Error for MandelbrotError {}
