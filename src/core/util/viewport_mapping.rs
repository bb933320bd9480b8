use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Per-render conversion between canvas pixels and the complex plane.
///
/// Derived fresh from a [`Viewport`] snapshot and the canvas size for every
/// frame. Pixel rows grow downwards while the imaginary axis grows upwards,
/// so `plane_y` subtracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMapping {
    pub delta_x: f64,
    pub delta_y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub x_min: f64,
    pub y_max: f64,
}

impl ViewportMapping {
    /// `plane_width` is the visible plane width at magnification 1.
    ///
    /// Returns `None` for a zero-sized canvas.
    #[must_use]
    pub fn new(viewport: &Viewport, plane_width: f64, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let width = f64::from(width);
        let height = f64::from(height);
        let center = viewport.center();

        let delta_x = plane_width / viewport.magnification();
        let delta_y = delta_x * height / width;

        Some(Self {
            delta_x,
            delta_y,
            pixel_x: delta_x / width,
            pixel_y: delta_y / height,
            x_min: center.real - delta_x / 2.0,
            y_max: center.imag + delta_y / 2.0,
        })
    }

    #[must_use]
    pub fn plane_x(&self, col: f64) -> f64 {
        self.x_min + self.pixel_x * col
    }

    #[must_use]
    pub fn plane_y(&self, row: f64) -> f64 {
        self.y_max - self.pixel_y * row
    }

    #[must_use]
    pub fn screen_x(&self, plane_x: f64) -> f64 {
        (plane_x - self.x_min) / self.pixel_x
    }

    #[must_use]
    pub fn screen_y(&self, plane_y: f64) -> f64 {
        (self.y_max - plane_y) / self.pixel_y
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: self.plane_x(f64::from(pixel.x)),
            imag: self.plane_y(f64::from(pixel.y)),
        }
    }

    /// Converts a finger movement in pixels into the center offset that keeps
    /// the plane under the finger.
    #[must_use]
    pub fn drag_offset(&self, dx: f64, dy: f64) -> Complex {
        Complex {
            real: -dx * self.pixel_x,
            imag: dy * self.pixel_y,
        }
    }
}
