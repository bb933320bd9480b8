use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Evaluates every pixel of `pixel_rect` in row-major order on the calling
/// thread. This is the reference every faster strategy must reproduce.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for point in pixel_rect.points() {
        results.push(algorithm.compute(point)?);
    }

    Ok(results)
}
