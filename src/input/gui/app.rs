//! Main GUI application loop.

use std::error::Error;

use log::{debug, error};
use winit::dpi::LogicalSize;
use winit::event::{
    ElementState, Event, MouseButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::event_loop::{EventLoopBuilder, EventLoopProxy};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::{
    ExplorerConfig, GestureController, RenderRequest, RenderWorker, TouchEvent, TouchPoint,
};
use crate::core::actions::trace_boundaries::trace_boundaries::TraceOptions;
use crate::input::gui::contacts::{ContactTracker, MOUSE_CONTACT, wheel_pinch};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;

struct App {
    presenter: PixelsPresenter,
    worker: RenderWorker,
    gestures: GestureController,
    contacts: ContactTracker,
    cursor: TouchPoint,
    trace: TraceOptions,
    width: u32,
    height: u32,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: ExplorerConfig,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let presenter = PixelsPresenter::new(window, event_loop_proxy)?;
        let worker = RenderWorker::new(presenter.share_adapter());

        Ok(Self {
            presenter,
            worker,
            gestures: GestureController::new(config.viewport, config.limits),
            contacts: ContactTracker::default(),
            cursor: TouchPoint::default(),
            trace: config.trace,
            width: size.width,
            height: size.height,
        })
    }

    fn request_render(&self) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let generation = self.worker.submit(RenderRequest {
            viewport: self.gestures.viewport(),
            limits: self.gestures.limits(),
            width: self.width,
            height: self.height,
            trace: self.trace,
        });

        debug!("submitted generation {}", generation);
    }

    fn apply(&mut self, event: Option<TouchEvent>) {
        let Some(event) = event else {
            return;
        };

        if self
            .gestures
            .handle_touch(&event, self.width, self.height)
            .is_requested()
        {
            self.request_render();
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize(width, height)?;
        self.width = width;
        self.height = height;
        self.request_render();

        Ok(())
    }

    fn handle_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = TouchPoint::new(position.x, position.y);
                let event = self.contacts.moved(MOUSE_CONTACT, self.cursor);
                self.apply(event);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let event = match state {
                    ElementState::Pressed => self.contacts.press(MOUSE_CONTACT, self.cursor),
                    ElementState::Released => self.contacts.release(MOUSE_CONTACT),
                };
                self.apply(event);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !self.contacts.is_idle() {
                    return;
                }

                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };

                for event in wheel_pinch(self.cursor, steps).into_iter().flatten() {
                    self.apply(Some(event));
                }
            }
            WindowEvent::Touch(Touch {
                phase,
                location,
                id,
                ..
            }) => {
                let position = TouchPoint::new(location.x, location.y);
                let event = match phase {
                    TouchPhase::Started => self.contacts.press(*id, position),
                    TouchPhase::Moved => self.contacts.moved(*id, position),
                    TouchPhase::Ended | TouchPhase::Cancelled => self.contacts.release(*id),
                };
                self.apply(event);
            }
            _ => {}
        }
    }
}

/// Opens the explorer window and runs until it is closed.
pub fn run_gui(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, event_loop.create_proxy(), config)?;
    app.request_render();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.presenter.render() {
                    error!("render error: {err}");
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = app.resize(size.width, size.height) {
                    error!("resize error: {err}");
                    elwt.exit();
                }
                window.request_redraw();
            }
            other => app.handle_input(other),
        },
        Event::UserEvent(GuiEvent::FrameReady) => {
            if app.presenter.poll_frame() {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
