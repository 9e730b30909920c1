//! Cell geometry.
//!
//! Terminal coordinates: 0-indexed, origin at top-left, one unit per cell.
//! Collapse layout only ever splits along the x axis, so [`Rect`] carries the
//! horizontal helpers ([`Rect::take_left`], [`Rect::skip_left`]) the row
//! renderer uses to hand out item slots.

/// A rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The single-cell-high row at the top of this rectangle.
    #[inline]
    pub const fn first_row(&self) -> Rect {
        let height = if self.height > 0 { 1 } else { 0 };
        Self::new(self.x, self.y, self.width, height)
    }

    /// The leftmost `width` columns, clipped to this rectangle.
    #[inline]
    pub const fn take_left(&self, width: u16) -> Rect {
        let width = if width < self.width { width } else { self.width };
        Self::new(self.x, self.y, width, self.height)
    }

    /// Everything right of the first `width` columns.
    ///
    /// Returns a zero-width rectangle at the right edge once `width` covers
    /// the whole rectangle.
    #[inline]
    pub const fn skip_left(&self, width: u16) -> Rect {
        let width = if width < self.width { width } else { self.width };
        Self::new(
            self.x.saturating_add(width),
            self.y,
            self.width - width,
            self.height,
        )
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Compute the intersection, returning `None` if there is no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}
