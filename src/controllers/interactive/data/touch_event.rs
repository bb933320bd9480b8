#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// First contact went down.
    Start,
    Move,
    /// Every contact lifted.
    End,
    /// A second contact went down while the first is held.
    SecondaryStart,
    /// One of two contacts lifted.
    SecondaryEnd,
}

/// Contact position in canvas pixels, origin top left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(&self, other: &TouchPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One host input event carrying one or two active contacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    action: TouchAction,
    primary: TouchPoint,
    secondary: Option<TouchPoint>,
}

impl TouchEvent {
    #[must_use]
    pub fn new(action: TouchAction, primary: TouchPoint, secondary: Option<TouchPoint>) -> Self {
        Self {
            action,
            primary,
            secondary,
        }
    }

    #[must_use]
    pub fn start(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Start, TouchPoint::new(x, y), None)
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Move, TouchPoint::new(x, y), None)
    }

    #[must_use]
    pub fn end(x: f64, y: f64) -> Self {
        Self::new(TouchAction::End, TouchPoint::new(x, y), None)
    }

    #[must_use]
    pub fn secondary_start(primary: TouchPoint, secondary: TouchPoint) -> Self {
        Self::new(TouchAction::SecondaryStart, primary, Some(secondary))
    }

    #[must_use]
    pub fn pinch_moved(primary: TouchPoint, secondary: TouchPoint) -> Self {
        Self::new(TouchAction::Move, primary, Some(secondary))
    }

    #[must_use]
    pub fn secondary_end(primary: TouchPoint, secondary: TouchPoint) -> Self {
        Self::new(TouchAction::SecondaryEnd, primary, Some(secondary))
    }

    #[must_use]
    pub fn action(&self) -> TouchAction {
        self.action
    }

    #[must_use]
    pub fn primary(&self) -> TouchPoint {
        self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> Option<TouchPoint> {
        self.secondary
    }

    /// Distance between the two contacts, if there are two.
    #[must_use]
    pub fn spacing(&self) -> Option<f64> {
        self.secondary.map(|secondary| self.primary.distance(&secondary))
    }
}
