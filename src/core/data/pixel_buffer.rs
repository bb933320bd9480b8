use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB frame, three bytes per pixel, index `(row * width + col) * 3`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A black buffer of the given size. Either side may be zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn from_colours(
        width: u32,
        height: u32,
        colours: impl IntoIterator<Item = Colour>,
    ) -> Result<Self, PixelBufferError> {
        let buffer = colours
            .into_iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b])
            .collect();

        Self::from_data(width, height, buffer)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height;

        if !inside {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Expands the RGB data into RGBA with an opaque alpha channel.
    pub fn write_rgba(&self, frame: &mut [u8]) -> Result<(), PixelBufferError> {
        let pixel_count = self.buffer.len() / BYTES_PER_PIXEL;

        if frame.len() != pixel_count * 4 {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size: pixel_count * 4,
                buffer_size: frame.len(),
            });
        }

        for (rgba, rgb) in frame
            .chunks_exact_mut(4)
            .zip(self.buffer.chunks_exact(BYTES_PER_PIXEL))
        {
            rgba[..3].copy_from_slice(rgb);
            rgba[3] = 255;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_black_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_sized_buffer_is_empty() {
        assert!(PixelBuffer::new(0, 480).is_empty());
        assert!(PixelBuffer::empty().is_empty());
        assert_eq!(PixelBuffer::empty().width(), 0);
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), Colour::new(0, 0, 255));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_colours_is_row_major() {
        let colours = (0..6).map(|i| Colour::new(i, 0, 0));
        let buffer = PixelBuffer::from_colours(3, 2, colours).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }).unwrap().r, 2);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap().r, 3);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(3, 3);
        let blue = Colour::new(0, 0, 255);

        buffer.set_pixel(Point { x: 2, y: 2 }, blue).unwrap();

        assert_eq!(&buffer.buffer()[24..27], &[0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3);
        let colour = Colour::new(255, 0, 0);

        for pixel in [Point { x: 3, y: 1 }, Point { x: 1, y: 3 }, Point { x: -1, y: 0 }] {
            assert_eq!(
                buffer.set_pixel(pixel, colour),
                Err(PixelBufferError::PixelOutsideBounds {
                    pixel,
                    width: 3,
                    height: 3
                })
            );
        }
    }

    #[test]
    fn test_write_rgba_adds_opaque_alpha() {
        let buffer = PixelBuffer::from_data(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut frame = vec![0; 8];

        buffer.write_rgba(&mut frame).unwrap();

        assert_eq!(frame, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_write_rgba_rejects_wrong_frame_size() {
        let buffer = PixelBuffer::new(2, 2);
        let mut frame = vec![0; 12];

        assert!(buffer.write_rgba(&mut frame).is_err());
    }
}
