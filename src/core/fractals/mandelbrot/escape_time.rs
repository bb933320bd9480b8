//! Smoothed escape-time iteration for a single point.

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Returned by [`escape_time`] for points that never escaped.
pub const IN_SET: f64 = -1.0;

/// True for the in-set sentinel and for anything else that cannot be fed to
/// a logarithm.
#[must_use]
pub fn is_in_set(escape: f64) -> bool {
    !(escape.is_finite() && escape > 0.0)
}

/// Iteration cap, squared escape radius and the smoothing constants derived
/// from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeParams {
    max_iterations: u32,
    bailout: f64,
    il: f64,
    lp: f64,
}

impl EscapeParams {
    pub fn new(max_iterations: u32, bailout: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(bailout.is_finite() && bailout > 4.0) {
            return Err(MandelbrotError::InvalidBailout { bailout });
        }

        Ok(Self {
            max_iterations,
            bailout,
            il: 1.0 / 2f64.ln(),
            lp: bailout.ln().ln(),
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bailout(&self) -> f64 {
        self.bailout
    }
}

fn in_main_cardioid(c: Complex) -> bool {
    let x = c.real - 0.25;
    let yy = c.imag * c.imag;
    let q = x * x + yy;

    q * (q + x) < 0.25 * yy
}

fn in_period_two_bulb(c: Complex) -> bool {
    let x = c.real + 1.0;

    x * x + c.imag * c.imag < 0.0625
}

/// Iterates `z <- z² + c` from zero and returns the smoothed iteration count
/// at which `|z|²` reached the bailout, or [`IN_SET`] if it never did within
/// the iteration cap.
///
/// Escaped values are always strictly positive. Points inside the main
/// cardioid or the period-2 bulb are answered without iterating.
#[must_use]
pub fn escape_time(c: Complex, params: &EscapeParams) -> f64 {
    if !c.is_finite() || in_main_cardioid(c) || in_period_two_bulb(c) {
        return IN_SET;
    }

    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() < params.bailout && iteration < params.max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    if iteration == params.max_iterations {
        return IN_SET;
    }

    let smoothed =
        f64::from(iteration) + params.il * params.lp - params.il * z.magnitude().ln().ln();

    smoothed.max(f64::MIN_POSITIVE)
}
