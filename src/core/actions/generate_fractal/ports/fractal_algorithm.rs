use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel evaluation shared by direct generation and boundary tracing.
///
/// `compute` must be pure: the tracer may call it for any pixel of the frame,
/// in any order and from several threads.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
