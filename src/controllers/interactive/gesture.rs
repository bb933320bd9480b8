//! Touch gesture handling for the explorer view.
//!
//! One contact drags the view, two contacts pinch zoom it. Each move turns
//! into at most one viewport change and reports whether the image is stale.

use log::{debug, trace};

use crate::controllers::interactive::data::touch_event::{TouchAction, TouchEvent, TouchPoint};
use crate::core::data::viewport::{Viewport, ViewportLimits, ZoomDirection};
use crate::core::util::viewport_mapping::ViewportMapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    #[default]
    None,
    Drag,
    Zoom,
}

/// Whether the last input invalidated the displayed frame.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Requested,
    NotNeeded,
}

impl Redraw {
    pub fn is_requested(self) -> bool {
        self == Redraw::Requested
    }
}

impl From<bool> for Redraw {
    fn from(changed: bool) -> Self {
        if changed {
            Redraw::Requested
        } else {
            Redraw::NotNeeded
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureController {
    viewport: Viewport,
    limits: ViewportLimits,
    state: TouchState,
    last_position: TouchPoint,
    reference_spacing: f64,
}

impl GestureController {
    pub fn new(viewport: Viewport, limits: ViewportLimits) -> Self {
        Self {
            viewport: viewport.within(&limits),
            limits,
            state: TouchState::None,
            last_position: TouchPoint::default(),
            reference_spacing: 0.0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    #[must_use]
    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Replaces the viewport outright and abandons any gesture in progress.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Redraw {
        self.state = TouchState::None;
        let viewport = viewport.within(&self.limits);

        if viewport == self.viewport {
            return Redraw::NotNeeded;
        }

        self.viewport = viewport;
        Redraw::Requested
    }

    /// Applies one touch event to a `width` x `height` canvas.
    pub fn handle_touch(&mut self, event: &TouchEvent, width: u32, height: u32) -> Redraw {
        match event.action() {
            TouchAction::Start => {
                self.begin_drag(event.primary());
                Redraw::NotNeeded
            }
            TouchAction::SecondaryStart => {
                self.begin_zoom(event);
                Redraw::NotNeeded
            }
            TouchAction::Move => match self.state {
                TouchState::Drag => self.drag(event.primary(), width, height),
                TouchState::Zoom => self.pinch(event),
                TouchState::None => Redraw::NotNeeded,
            },
            TouchAction::End | TouchAction::SecondaryEnd => {
                if self.state != TouchState::None {
                    trace!("{:?} -> None", self.state);
                }
                self.state = TouchState::None;
                Redraw::NotNeeded
            }
        }
    }

    fn begin_drag(&mut self, position: TouchPoint) {
        trace!("{:?} -> Drag at ({:.1}, {:.1})", self.state, position.x, position.y);

        self.state = TouchState::Drag;
        self.last_position = position;
    }

    fn begin_zoom(&mut self, event: &TouchEvent) {
        let Some(spacing) = event.spacing() else {
            return;
        };

        if spacing <= self.limits.pinch_noise_threshold {
            trace!("ignoring second contact {:.1}px away", spacing);
            return;
        }

        trace!("{:?} -> Zoom with spacing {:.1}", self.state, spacing);

        self.state = TouchState::Zoom;
        self.reference_spacing = spacing;
    }

    fn drag(&mut self, position: TouchPoint, width: u32, height: u32) -> Redraw {
        let dx = position.x - self.last_position.x;
        let dy = position.y - self.last_position.y;
        self.last_position = position;

        if dx == 0.0 && dy == 0.0 {
            return Redraw::NotNeeded;
        }

        let Some(mapping) =
            ViewportMapping::new(&self.viewport, self.limits.plane_width, width, height)
        else {
            return Redraw::NotNeeded;
        };

        self.viewport.pan(mapping.drag_offset(dx, dy)).into()
    }

    fn pinch(&mut self, event: &TouchEvent) -> Redraw {
        let Some(spacing) = event.spacing() else {
            return Redraw::NotNeeded;
        };

        if spacing <= self.limits.pinch_noise_threshold {
            return Redraw::NotNeeded;
        }

        let direction = if spacing > self.reference_spacing {
            ZoomDirection::In
        } else if spacing < self.reference_spacing {
            ZoomDirection::Out
        } else {
            return Redraw::NotNeeded;
        };

        if !self.viewport.zoom(direction, &self.limits) {
            debug!(
                "zoom {:?} rejected at magnification {}",
                direction,
                self.viewport.magnification()
            );
            return Redraw::NotNeeded;
        }

        trace!(
            "zoom {:?}: magnification {}, {} iterations",
            direction,
            self.viewport.magnification(),
            self.viewport.max_iterations()
        );

        Redraw::Requested
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(Viewport::default(), ViewportLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    const WIDTH: u32 = 400;
    const HEIGHT: u32 = 300;

    fn pair(spacing: f64) -> (TouchPoint, TouchPoint) {
        (TouchPoint::new(100.0, 100.0), TouchPoint::new(100.0 + spacing, 100.0))
    }

    fn zooming(spacing: f64) -> GestureController {
        let mut gestures = GestureController::default();
        let (a, b) = pair(spacing);

        let _ = gestures.handle_touch(&TouchEvent::start(a.x, a.y), WIDTH, HEIGHT);
        let _ = gestures.handle_touch(&TouchEvent::secondary_start(a, b), WIDTH, HEIGHT);
        assert_eq!(gestures.state(), TouchState::Zoom);

        gestures
    }

    fn pinch_to(gestures: &mut GestureController, spacing: f64) -> Redraw {
        let (a, b) = pair(spacing);
        gestures.handle_touch(&TouchEvent::pinch_moved(a, b), WIDTH, HEIGHT)
    }

    #[test]
    fn test_start_enters_drag_without_redraw() {
        let mut gestures = GestureController::default();

        let redraw = gestures.handle_touch(&TouchEvent::start(10.0, 10.0), WIDTH, HEIGHT);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.state(), TouchState::Drag);
    }

    #[test]
    fn test_drag_moves_center_against_finger_motion() {
        let mut gestures = GestureController::default();
        let before = gestures.viewport().center();
        // 400 px across 3.5 units.
        let pixel = 3.5 / 400.0;

        let _ = gestures.handle_touch(&TouchEvent::start(100.0, 100.0), WIDTH, HEIGHT);
        let redraw = gestures.handle_touch(&TouchEvent::moved(110.0, 96.0), WIDTH, HEIGHT);
        let after = gestures.viewport().center();

        assert_eq!(redraw, Redraw::Requested);
        assert!((after.real - (before.real - 10.0 * pixel)).abs() < 1e-12);
        assert!((after.imag - (before.imag - 4.0 * pixel)).abs() < 1e-12);
    }

    #[test]
    fn test_drag_is_incremental() {
        let mut gestures = GestureController::default();
        let before = gestures.viewport().center();

        let _ = gestures.handle_touch(&TouchEvent::start(0.0, 0.0), WIDTH, HEIGHT);
        let _ = gestures.handle_touch(&TouchEvent::moved(40.0, 0.0), WIDTH, HEIGHT);
        let _ = gestures.handle_touch(&TouchEvent::moved(80.0, 0.0), WIDTH, HEIGHT);

        let moved = before.real - gestures.viewport().center().real;
        assert!((moved - 80.0 * 3.5 / 400.0).abs() < 1e-12);
    }

    #[test]
    fn test_stationary_move_does_not_redraw() {
        let mut gestures = GestureController::default();

        let _ = gestures.handle_touch(&TouchEvent::start(5.0, 5.0), WIDTH, HEIGHT);
        let redraw = gestures.handle_touch(&TouchEvent::moved(5.0, 5.0), WIDTH, HEIGHT);

        assert_eq!(redraw, Redraw::NotNeeded);
    }

    #[test]
    fn test_drag_on_empty_canvas_is_ignored() {
        let mut gestures = GestureController::default();

        let _ = gestures.handle_touch(&TouchEvent::start(0.0, 0.0), 0, 0);
        let redraw = gestures.handle_touch(&TouchEvent::moved(30.0, 30.0), 0, 0);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.viewport(), Viewport::default());
    }

    #[test]
    fn test_move_without_contact_is_ignored() {
        let mut gestures = GestureController::default();

        let redraw = gestures.handle_touch(&TouchEvent::moved(30.0, 30.0), WIDTH, HEIGHT);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.state(), TouchState::None);
    }

    #[test]
    fn test_close_second_contact_is_noise() {
        let mut gestures = GestureController::default();
        let (a, b) = pair(10.0);

        let _ = gestures.handle_touch(&TouchEvent::start(a.x, a.y), WIDTH, HEIGHT);
        let redraw = gestures.handle_touch(&TouchEvent::secondary_start(a, b), WIDTH, HEIGHT);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.state(), TouchState::Drag);
    }

    #[test]
    fn test_spreading_zooms_in() {
        let mut gestures = zooming(50.0);

        let redraw = pinch_to(&mut gestures, 80.0);

        assert_eq!(redraw, Redraw::Requested);
        assert_eq!(gestures.viewport().magnification(), 2.0);
        assert_eq!(gestures.viewport().max_iterations(), 256);
    }

    #[test]
    fn test_pinching_zooms_out_with_iteration_floor() {
        let mut gestures = zooming(50.0);

        let redraw = pinch_to(&mut gestures, 30.0);

        assert_eq!(redraw, Redraw::Requested);
        assert_eq!(gestures.viewport().magnification(), 0.5);
        assert_eq!(gestures.viewport().max_iterations(), 128);
    }

    #[test]
    fn test_iterations_capped_at_ceiling() {
        let mut gestures = zooming(20.0);

        for step in 1..=8 {
            let _ = pinch_to(&mut gestures, 20.0 + 10.0 * step as f64);
        }

        assert_eq!(gestures.viewport().magnification(), 256.0);
        assert_eq!(gestures.viewport().max_iterations(), 4096);
    }

    #[test]
    fn test_pinch_compares_against_spacing_at_gesture_start() {
        let mut gestures = zooming(50.0);

        assert_eq!(pinch_to(&mut gestures, 80.0), Redraw::Requested);
        assert_eq!(gestures.viewport().magnification(), 2.0);

        // Closing from 80 to 70 is still wider than the initial 50.
        assert_eq!(pinch_to(&mut gestures, 70.0), Redraw::Requested);
        assert_eq!(gestures.viewport().magnification(), 4.0);
        assert_eq!(gestures.viewport().max_iterations(), 512);
    }

    #[test]
    fn test_equal_spacing_leaves_viewport_unchanged() {
        let mut gestures = zooming(50.0);
        let before = gestures.viewport();

        let redraw = pinch_to(&mut gestures, 50.0);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.viewport(), before);
    }

    #[test]
    fn test_pinch_below_noise_threshold_is_ignored() {
        let mut gestures = zooming(50.0);
        let before = gestures.viewport();

        let redraw = pinch_to(&mut gestures, 8.0);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.viewport(), before);
        assert_eq!(gestures.state(), TouchState::Zoom);
    }

    #[test]
    fn test_zoom_out_stops_at_magnification_floor() {
        let limits = ViewportLimits::default();
        let viewport = Viewport::new(Complex::new(-0.7, 0.0), limits.min_magnification(), 128, &limits);
        let mut gestures = GestureController::new(viewport, limits);
        let (a, b) = pair(60.0);
        let _ = gestures.handle_touch(&TouchEvent::start(a.x, a.y), WIDTH, HEIGHT);
        let _ = gestures.handle_touch(&TouchEvent::secondary_start(a, b), WIDTH, HEIGHT);

        let redraw = pinch_to(&mut gestures, 40.0);

        assert_eq!(redraw, Redraw::NotNeeded);
        assert_eq!(gestures.viewport().magnification(), limits.min_magnification());
    }

    #[test]
    fn test_lifting_contacts_returns_to_none() {
        let mut gestures = zooming(50.0);
        let (a, b) = pair(50.0);

        let _ = gestures.handle_touch(&TouchEvent::secondary_end(a, b), WIDTH, HEIGHT);
        assert_eq!(gestures.state(), TouchState::None);

        let _ = gestures.handle_touch(&TouchEvent::start(0.0, 0.0), WIDTH, HEIGHT);
        let _ = gestures.handle_touch(&TouchEvent::end(0.0, 0.0), WIDTH, HEIGHT);
        assert_eq!(gestures.state(), TouchState::None);
    }

    #[test]
    fn test_custom_limits_keep_pinch_iterations_on_ladder() {
        let limits = ViewportLimits::new(100, 800, 0.125, 1024.0).unwrap();
        let mut gestures = GestureController::new(Viewport::default(), limits);
        assert_eq!(gestures.viewport().max_iterations(), 200);

        let (a, b) = pair(50.0);
        let _ = gestures.handle_touch(&TouchEvent::start(a.x, a.y), WIDTH, HEIGHT);
        let _ = gestures.handle_touch(&TouchEvent::secondary_start(a, b), WIDTH, HEIGHT);
        for spacing in [60.0, 70.0, 80.0] {
            let _ = pinch_to(&mut gestures, spacing);
        }

        assert_eq!(gestures.viewport().magnification(), 8.0);
        assert_eq!(gestures.viewport().max_iterations(), 800);
    }

    #[test]
    fn test_set_viewport_reports_change() {
        let mut gestures = GestureController::default();
        let limits = ViewportLimits::default();
        let viewport = Viewport::new(Complex::new(0.25, 0.0), 4.0, 512, &limits);

        assert_eq!(gestures.set_viewport(viewport), Redraw::Requested);
        assert_eq!(gestures.set_viewport(viewport), Redraw::NotNeeded);
        assert_eq!(gestures.viewport(), viewport);
    }
}
