use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of pixels. Row 0 is the top of the canvas.
///
/// A rectangle whose `top_left` lies right of or below its `bottom_right`
/// is empty; recursive subdivision produces these and treats them as no-ops.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    #[must_use]
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    #[must_use]
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(Point { x: left, y: top }, Point { x: right, y: bottom })
    }

    /// The whole canvas, `(0, 0)` to `(width - 1, height - 1)`.
    pub fn frame(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self::from_edges(0, 0, width as i32 - 1, height as i32 - 1))
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    #[must_use]
    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    #[must_use]
    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left() > self.right() || self.top() > self.bottom()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }

        (i64::from(self.right()) - i64::from(self.left()) + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }

        (i64::from(self.bottom()) - i64::from(self.top()) + 1) as u32
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// True when the rectangle is at most two pixels wide or tall, so it has
    /// no interior once its border is drawn.
    #[must_use]
    pub fn is_thin(&self) -> bool {
        self.width() <= 2 || self.height() <= 2
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    /// Every pixel on the outer ring, each exactly once, top and bottom rows
    /// first (corners included) and then the remaining column pixels.
    pub fn border_points(&self) -> impl Iterator<Item = Point> + '_ {
        let (left, top, right, bottom) = (self.left(), self.top(), self.right(), self.bottom());
        let has_bottom = !self.is_empty() && bottom > top;
        let has_right = !self.is_empty() && right > left;

        let rows = (left..=right).flat_map(move |x| {
            std::iter::once(Point { x, y: top })
                .chain(has_bottom.then_some(Point { x, y: bottom }))
        });
        let columns = (top + 1..bottom).flat_map(move |y| {
            std::iter::once(Point { x: left, y })
                .chain(has_right.then_some(Point { x: right, y }))
        });

        rows.chain(columns).filter(move |_| !self.is_empty())
    }

    /// The rectangle shrunk by one pixel on every side.
    #[must_use]
    pub fn interior(&self) -> Self {
        Self::from_edges(self.left() + 1, self.top() + 1, self.right() - 1, self.bottom() - 1)
    }

    /// Splits the interior in two along the longer side. The halves are
    /// disjoint and together cover exactly [`PixelRect::interior`].
    #[must_use]
    pub fn split_interior(&self) -> (Self, Self) {
        let inner = self.interior();

        if self.right() - self.left() > self.bottom() - self.top() {
            let middle = (self.left() + self.right()).div_euclid(2);
            (
                Self::from_edges(inner.left(), inner.top(), middle, inner.bottom()),
                Self::from_edges(middle + 1, inner.top(), inner.right(), inner.bottom()),
            )
        } else {
            let middle = (self.top() + self.bottom()).div_euclid(2);
            (
                Self::from_edges(inner.left(), inner.top(), inner.right(), middle),
                Self::from_edges(inner.left(), middle + 1, inner.right(), inner.bottom()),
            )
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (self.top()..=self.bottom())
            .flat_map(move |y| (self.left()..=self.right()).map(move |x| Point { x, y }))
    }
}
