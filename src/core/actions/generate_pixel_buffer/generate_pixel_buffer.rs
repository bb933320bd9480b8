use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub(crate) enum GeneratePixelBufferError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The input did not hold one value per pixel.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours row-major fractal values into a buffer the size of `pixel_rect`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, pixel_rect, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferError::PixelBuffer(err) => err,
        GeneratePixelBufferError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_pixel_buffer`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub(crate) fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(pixel_rect.size() as usize * 3);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(value);

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect.width(), pixel_rect.height(), buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct GreyColourMap {}

    impl ColourMap<u8> for GreyColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }

        fn is_fill_value(&self, value: &u8) -> bool {
            *value == 0
        }

        fn fill_colour(&self) -> Colour {
            Colour::BLACK
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::from_edges(0, 0, 2, 1);
        let expected: PixelBufferData = vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let result = generate_pixel_buffer(input, &GreyColourMap {}, pixel_rect).unwrap();

        assert_eq!(result.buffer(), &expected);
        assert_eq!(result.width(), 3);
        assert_eq!(result.height(), 2);
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::from_edges(0, 0, 1, 1);

        let result = generate_pixel_buffer(input, &GreyColourMap {}, pixel_rect);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 18
            })
        );
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::from_edges(0, 0, 2, 1);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_pixel_buffer_cancelable(input, &GreyColourMap {}, pixel_rect, &cancel_token);

        assert_eq!(result, Err(GeneratePixelBufferError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_error_display() {
        let err = GeneratePixelBufferError::Cancelled(Cancelled);

        assert_eq!(format!("{}", err), "render cancelled");
    }
}
