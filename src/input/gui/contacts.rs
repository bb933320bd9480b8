use crate::controllers::interactive::{TouchEvent, TouchPoint};

/// Contact id used for the left mouse button.
pub const MOUSE_CONTACT: u64 = u64::MAX;

/// Finger spacing used when a wheel notch is replayed as a pinch.
const WHEEL_PINCH_SPACING: f64 = 100.0;

/// Turns per-contact press, move and release input into [`TouchEvent`]s.
///
/// Only the first two contacts take part in a gesture; any further contacts
/// are ignored until one of the tracked ones lifts.
#[derive(Debug, Default)]
pub struct ContactTracker {
    contacts: Vec<(u64, TouchPoint)>,
}

impl ContactTracker {
    pub fn is_idle(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn press(&mut self, id: u64, position: TouchPoint) -> Option<TouchEvent> {
        if self.contacts.iter().any(|(contact, _)| *contact == id) {
            return None;
        }

        match self.contacts.as_slice() {
            [] => {
                self.contacts.push((id, position));
                Some(TouchEvent::start(position.x, position.y))
            }
            [(_, primary)] => {
                let primary = *primary;
                self.contacts.push((id, position));
                Some(TouchEvent::secondary_start(primary, position))
            }
            _ => None,
        }
    }

    pub fn moved(&mut self, id: u64, position: TouchPoint) -> Option<TouchEvent> {
        let (_, tracked) = self.contacts.iter_mut().find(|(contact, _)| *contact == id)?;
        *tracked = position;

        match self.contacts.as_slice() {
            [(_, primary)] => Some(TouchEvent::moved(primary.x, primary.y)),
            [(_, primary), (_, secondary)] => Some(TouchEvent::pinch_moved(*primary, *secondary)),
            _ => None,
        }
    }

    pub fn release(&mut self, id: u64) -> Option<TouchEvent> {
        let index = self.contacts.iter().position(|(contact, _)| *contact == id)?;
        let (_, lifted) = self.contacts.remove(index);

        match self.contacts.as_slice() {
            [] => Some(TouchEvent::end(lifted.x, lifted.y)),
            [(_, remaining)] => Some(TouchEvent::secondary_end(*remaining, lifted)),
            _ => None,
        }
    }
}

/// Replays one wheel step at `cursor` as a short two-finger pinch: spreading
/// for positive steps, pinching for negative ones.
pub fn wheel_pinch(cursor: TouchPoint, steps: f64) -> Option<[TouchEvent; 3]> {
    if steps == 0.0 || !steps.is_finite() {
        return None;
    }

    let second = |spacing: f64| TouchPoint::new(cursor.x + spacing, cursor.y);
    let target = if steps > 0.0 {
        WHEEL_PINCH_SPACING * 2.0
    } else {
        WHEEL_PINCH_SPACING / 2.0
    };

    Some([
        TouchEvent::secondary_start(cursor, second(WHEEL_PINCH_SPACING)),
        TouchEvent::pinch_moved(cursor, second(target)),
        TouchEvent::secondary_end(cursor, second(target)),
    ])
}
