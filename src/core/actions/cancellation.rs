//! Cooperative cancellation for long renders.
//!
//! Renders poll a [`CancelToken`] between units of work (rows for direct
//! evaluation, rectangles for boundary tracing) and give up with
//! [`Cancelled`] once it fires.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Direct evaluation polls the token at the start of every row and again
/// after this many pixels.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Fires once `latest` moves past the generation the token was issued for,
/// or once `shutdown` is raised.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generation: u64,
    latest: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> GenerationToken<'a> {
    pub fn new(generation: u64, latest: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            latest,
            shutdown,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no newer generation has been issued.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation == self.latest.load(Ordering::Acquire)
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.generation != self.latest.load(Ordering::Relaxed)
    }
}
