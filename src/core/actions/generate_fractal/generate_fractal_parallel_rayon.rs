use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Evaluates every pixel of `pixel_rect`, one rayon task per row.
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(pixel_rect, algorithm, &NeverCancel).map_err(|e| {
        match e {
            GenerateFractalError::Algorithm(alg_err) => alg_err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

/// Row-parallel evaluation that polls `cancel` at the start of each row and
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
///
/// Results are row-major, identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub(crate) fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    if pixel_rect.is_empty() {
        return Ok(Vec::new());
    }

    let x_start = pixel_rect.left();
    let x_end = pixel_rect.right();
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> =
        (pixel_rect.top()..=pixel_rect.bottom())
            .into_par_iter()
            .map(|y| {
                let mut row = Vec::with_capacity(row_width);

                for (i, x) in (x_start..=x_end).enumerate() {
                    if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                        return Err(GenerateFractalError::Cancelled(Cancelled));
                    }

                    let result = algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateFractalError::Algorithm)?;
                    row.push(result);
                }

                Ok(row)
            })
            .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
