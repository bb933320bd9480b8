//! 401-entry colour ramp keyed by the logarithm of the escape time.
//!
//! The gradient follows the palette of the well known
//! `Mandel_zoom_00_mandelbrot_set.jpg` rendering, padded with a few extra
//! control points.

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_time::is_in_set;
use crate::core::util::wrap_index::wrap_index;

pub const TABLE_LEN: usize = 401;

/// Number of distinct colours the lookup cycles through.
const CYCLE_LEN: usize = 400;

/// Table steps per unit of `ln(escape_time)`.
const LOG_SCALE: f64 = 45.0;

/// `(index, colour)` pairs, indices strictly increasing from 0 to 400.
pub const CONTROL_POINTS: [(usize, Colour); 14] = [
    (0, Colour::new(13, 3, 69)),
    (15, Colour::new(3, 4, 83)),
    (28, Colour::new(0, 7, 100)),
    (56, Colour::new(5, 37, 158)),
    (92, Colour::new(32, 107, 203)),
    (142, Colour::new(144, 213, 242)),
    (196, Colour::new(237, 255, 255)),
    (224, Colour::new(248, 246, 191)),
    (254, Colour::new(253, 223, 67)),
    (285, Colour::new(255, 170, 0)),
    (310, Colour::new(225, 101, 5)),
    (341, Colour::new(136, 28, 22)),
    (371, Colour::new(49, 2, 48)),
    (400, Colour::new(69, 3, 12)),
];

fn interpolate_channel(from: u8, to: u8, index: usize, start: usize, end: usize) -> u8 {
    let value = f64::from(from)
        + (index - start) as f64 * (f64::from(to) - f64::from(from)) / (end - start) as f64;

    // Truncation, not rounding: the ramp is defined by it.
    value as u8
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColourTable {
    table: [Colour; TABLE_LEN],
}

impl Default for ColourTable {
    fn default() -> Self {
        Self::build()
    }
}

impl ColourTable {
    /// Places every control point and linearly interpolates each channel
    /// between consecutive points.
    #[must_use]
    pub fn build() -> Self {
        let mut table = [Colour::BLACK; TABLE_LEN];

        for (index, colour) in CONTROL_POINTS {
            table[index] = colour;
        }

        for pair in CONTROL_POINTS.windows(2) {
            let (start, from) = pair[0];
            let (end, to) = pair[1];

            for index in start + 1..end {
                table[index] = Colour {
                    r: interpolate_channel(from.r, to.r, index, start, end),
                    g: interpolate_channel(from.g, to.g, index, start, end),
                    b: interpolate_channel(from.b, to.b, index, start, end),
                };
            }
        }

        Self { table }
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour; TABLE_LEN] {
        &self.table
    }

    /// Black for the in-set sentinel and any value without a real logarithm,
    /// otherwise `table[floor(45 ln v) mod 400]`.
    #[must_use]
    pub fn colour_at(&self, escape: f64) -> Colour {
        if is_in_set(escape) {
            return Colour::BLACK;
        }

        let step = (LOG_SCALE * escape.ln()).floor() as i64;

        self.table[wrap_index(step, CYCLE_LEN)]
    }
}

impl ColourMap<f64> for ColourTable {
    fn map(&self, value: f64) -> Colour {
        self.colour_at(value)
    }

    fn is_fill_value(&self, value: &f64) -> bool {
        is_in_set(*value)
    }

    fn fill_colour(&self) -> Colour {
        Colour::BLACK
    }
}
