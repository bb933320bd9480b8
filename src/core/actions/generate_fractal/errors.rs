use std::error::Error;
use std::fmt;
use crate::core::actions::cancellation::Cancelled;

/// Failure of a cancel-aware fractal evaluation.
///
/// Cancellation is expected control flow for interactive rendering and is
/// kept apart from algorithm failures so callers can drop it quietly.
#[derive(Debug, PartialEq)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: fmt::Display> fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(e) => Some(e),
        }
    }
}
