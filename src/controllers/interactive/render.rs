use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::trace_boundaries::trace_boundaries::trace_boundaries;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_table::ColourTable;

/// Renders one snapshot by boundary tracing. A zero-sized canvas yields an
/// empty buffer.
pub fn render_request<C: CancelToken>(
    request: &RenderRequest,
    colour_table: &ColourTable,
    cancel: &C,
) -> Result<PixelBuffer, RenderError> {
    if request.is_degenerate() {
        return Ok(PixelBuffer::empty());
    }

    let algorithm = MandelbrotAlgorithm::for_viewport(
        &request.viewport,
        &request.limits,
        request.width,
        request.height,
    )?;

    Ok(trace_boundaries(
        algorithm.frame(),
        &algorithm,
        colour_table,
        request.trace,
        cancel,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
    use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
    use crate::core::actions::trace_boundaries::trace_boundaries::TraceOptions;
    use crate::core::data::viewport::{Viewport, ViewportLimits};

    fn request(width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            viewport: Viewport::default(),
            limits: ViewportLimits::default(),
            width,
            height,
            trace: TraceOptions::default(),
        }
    }

    #[test]
    fn test_degenerate_canvas_renders_empty_buffer() {
        let table = ColourTable::build();

        for (width, height) in [(0, 0), (0, 10), (10, 0)] {
            let buffer = render_request(&request(width, height), &table, &NeverCancel).unwrap();

            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn test_default_view_matches_direct_evaluation() {
        let table = ColourTable::build();
        let request = request(96, 64);
        let algorithm = MandelbrotAlgorithm::for_viewport(
            &request.viewport,
            &request.limits,
            request.width,
            request.height,
        )
        .unwrap();

        let values = generate_fractal_parallel_rayon(algorithm.frame(), &algorithm).unwrap();
        let direct = generate_pixel_buffer(values, &table, algorithm.frame()).unwrap();
        let traced = render_request(&request, &table, &NeverCancel).unwrap();

        assert_eq!(traced, direct);
    }

    #[test]
    fn test_cancelled_render_reports_cancelled() {
        let table = ColourTable::build();
        let cancel = || true;

        let result = render_request(&request(32, 32), &table, &cancel);

        assert_eq!(result, Err(RenderError::Cancelled));
    }
}
