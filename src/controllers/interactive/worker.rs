use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, info, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::controllers::interactive::render::render_request;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::fractals::mandelbrot::colour_table::ColourTable;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    colour_table: ColourTable,
    frame_sink: Arc<dyn FrameSink>,
}

/// Renders snapshots on a background thread.
///
/// Only the most recent submission is kept. Submitting bumps the generation,
/// which cancels the render in flight at its next rectangle, and frames of
/// superseded generations are never delivered.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(frame_sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            colour_table: ColourTable::build(),
            frame_sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request not yet started, and returns
    /// its generation.
    pub fn submit(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                GenerationToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = render_request(&request, &shared.colour_table, &cancel_token);
            let render_duration = start.elapsed();

            if !cancel_token.is_current() {
                debug!("dropping stale render of generation {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    info!(
                        "generation {}: rendered {}x{} in {:?}",
                        job_generation, request.width, request.height, render_duration
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        viewport: request.viewport,
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(RenderError::Cancelled) => {
                    debug!("render of generation {} cancelled", job_generation);
                    continue;
                }
                Err(error) => RenderEvent::Error {
                    generation: job_generation,
                    error,
                },
            };

            shared.frame_sink.submit(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::actions::trace_boundaries::trace_boundaries::TraceOptions;
    use crate::core::data::complex::Complex;
    use crate::core::data::viewport::{Viewport, ViewportLimits};

    #[derive(Default)]
    struct MockFrameSink {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockFrameSink {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl FrameSink for MockFrameSink {
        fn submit(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_generation(worker: &RenderWorker, generation: u64, timeout: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if worker.last_completed_generation() >= generation {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        false
    }

    fn request(viewport: Viewport, width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            viewport,
            limits: ViewportLimits::default(),
            width,
            height,
            trace: TraceOptions::default(),
        }
    }

    #[test]
    fn test_submit_emits_frame() {
        let sink = Arc::new(MockFrameSink::default());
        let worker = RenderWorker::new(Arc::clone(&sink) as Arc<dyn FrameSink>);

        let generation = worker.submit(request(Viewport::default(), 24, 16));

        assert!(wait_for_generation(&worker, generation, Duration::from_secs(5)));

        let events = sink.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Frame(frame) => {
                assert_eq!(frame.generation, generation);
                assert_eq!(frame.viewport, Viewport::default());
                assert_eq!(frame.pixel_buffer.width(), 24);
                assert_eq!(frame.pixel_buffer.height(), 16);
            }
            RenderEvent::Error { error, .. } => panic!("unexpected render error: {}", error),
        }
    }

    #[test]
    fn test_only_latest_generation_is_last_delivered() {
        let sink = Arc::new(MockFrameSink::default());
        let worker = RenderWorker::new(Arc::clone(&sink) as Arc<dyn FrameSink>);
        let limits = ViewportLimits::default();

        let mut latest = 0;
        for step in 0..5 {
            let viewport = Viewport::new(Complex::new(-0.7 + 0.01 * step as f64, 0.0), 1.0, 128, &limits);
            latest = worker.submit(request(viewport, 64, 48));
        }

        assert!(wait_for_generation(&worker, latest, Duration::from_secs(5)));

        let events = sink.take_events();
        let generations: Vec<u64> = events
            .iter()
            .map(|event| match event {
                RenderEvent::Frame(frame) => frame.generation,
                RenderEvent::Error { generation, .. } => *generation,
            })
            .collect();

        assert_eq!(generations.last(), Some(&latest));
        assert!(generations.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_degenerate_canvas_delivers_empty_frame() {
        let sink = Arc::new(MockFrameSink::default());
        let worker = RenderWorker::new(Arc::clone(&sink) as Arc<dyn FrameSink>);

        let generation = worker.submit(request(Viewport::default(), 0, 10));

        assert!(wait_for_generation(&worker, generation, Duration::from_secs(5)));
        match sink.take_events().pop() {
            Some(RenderEvent::Frame(frame)) => assert!(frame.pixel_buffer.is_empty()),
            other => panic!("expected an empty frame, got {:?}", other),
        }
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let sink = Arc::new(MockFrameSink::default());
        let mut worker = RenderWorker::new(sink as Arc<dyn FrameSink>);

        worker.shutdown();
        worker.shutdown();

        assert_eq!(worker.last_completed_generation(), 0);
    }
}
