use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportLimitsError {
    ZeroIterationFloor,
    IterationRatio { min: u32, max: u32 },
    MagnificationBounds { min: f64, max: f64 },
}

impl fmt::Display for ViewportLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationFloor => write!(f, "iteration floor must be positive"),
            Self::IterationRatio { min, max } => write!(
                f,
                "iteration ceiling {} is not a power-of-two multiple of the floor {}",
                max, min
            ),
            Self::MagnificationBounds { min, max } => write!(
                f,
                "magnification bounds must be positive, finite and ordered: [{}, {}]",
                min, max
            ),
        }
    }
}

impl Error for ViewportLimitsError {}

/// Bounds and constants that keep a [`Viewport`] renderable.
///
/// The iteration ceiling is always a power-of-two multiple of the floor, so
/// doubling and halving keep every cap on the same ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    min_iterations: u32,
    max_iterations: u32,
    min_magnification: f64,
    max_magnification: f64,
    /// Finger spacing, in pixels, at or below which a pinch is treated as noise.
    pub pinch_noise_threshold: f64,
    /// Squared escape radius.
    pub bailout: f64,
    /// Width of the visible plane at magnification 1.
    pub plane_width: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_iterations: 128,
            max_iterations: 4096,
            min_magnification: 1.0 / 1024.0,
            max_magnification: (1u64 << 44) as f64,
            pinch_noise_threshold: 10.0,
            bailout: 128.0,
            plane_width: 3.5,
        }
    }
}

impl ViewportLimits {
    /// Default limits with the given iteration and magnification bounds.
    pub fn new(
        min_iterations: u32,
        max_iterations: u32,
        min_magnification: f64,
        max_magnification: f64,
    ) -> Result<Self, ViewportLimitsError> {
        if min_iterations == 0 {
            return Err(ViewportLimitsError::ZeroIterationFloor);
        }

        if max_iterations < min_iterations
            || max_iterations % min_iterations != 0
            || !(max_iterations / min_iterations).is_power_of_two()
        {
            return Err(ViewportLimitsError::IterationRatio {
                min: min_iterations,
                max: max_iterations,
            });
        }

        if !(min_magnification.is_finite() && max_magnification.is_finite())
            || min_magnification <= 0.0
            || min_magnification > max_magnification
        {
            return Err(ViewportLimitsError::MagnificationBounds {
                min: min_magnification,
                max: max_magnification,
            });
        }

        Ok(Self {
            min_iterations,
            max_iterations,
            min_magnification,
            max_magnification,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn min_iterations(&self) -> u32 {
        self.min_iterations
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn min_magnification(&self) -> f64 {
        self.min_magnification
    }

    #[must_use]
    pub fn max_magnification(&self) -> f64 {
        self.max_magnification
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Center, magnification and iteration cap of the visible region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Complex,
    magnification: f64,
    max_iterations: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Complex::new(-0.7, 0.0),
            magnification: 1.0,
            max_iterations: ViewportLimits::default().min_iterations,
        }
    }
}

impl Viewport {
    /// Builds a viewport, clamping magnification and iteration cap into
    /// `limits`. The iteration cap is rounded up to a power-of-two multiple of
    /// the floor, never past the ceiling.
    #[must_use]
    pub fn new(center: Complex, magnification: f64, max_iterations: u32, limits: &ViewportLimits) -> Self {
        let magnification = if magnification.is_finite() && magnification > 0.0 {
            magnification.clamp(limits.min_magnification, limits.max_magnification)
        } else {
            1.0
        };

        let mut iterations = limits.min_iterations;
        while iterations < max_iterations && iterations.saturating_mul(2) <= limits.max_iterations {
            iterations *= 2;
        }

        Self {
            center,
            magnification,
            max_iterations: iterations,
        }
    }

    /// Re-applies [`Self::new`]'s clamping under a different set of limits.
    #[must_use]
    pub fn within(&self, limits: &ViewportLimits) -> Self {
        Self::new(self.center, self.magnification, self.max_iterations, limits)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Moves the center by a plane-space offset. Non-finite results are
    /// rejected and reported as `false`.
    pub fn pan(&mut self, offset: Complex) -> bool {
        let center = self.center + offset;

        if !center.is_finite() {
            return false;
        }

        self.center = center;
        true
    }

    /// Doubles (in) or halves (out) the magnification together with the
    /// iteration cap. Returns `false` without changing anything when the
    /// step would leave the magnification bounds.
    pub fn zoom(&mut self, direction: ZoomDirection, limits: &ViewportLimits) -> bool {
        let (magnification, max_iterations) = match direction {
            ZoomDirection::In => (
                self.magnification * 2.0,
                self.max_iterations.saturating_mul(2).min(limits.max_iterations),
            ),
            ZoomDirection::Out => (
                self.magnification * 0.5,
                (self.max_iterations >> 1).max(limits.min_iterations),
            ),
        };

        if !(limits.min_magnification..=limits.max_magnification).contains(&magnification) {
            return false;
        }

        self.magnification = magnification;
        self.max_iterations = max_iterations;
        true
    }
}
