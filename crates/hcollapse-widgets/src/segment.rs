//! Row segments.
//!
//! A [`Segment`] is a widget with a fixed display width. The collapse widget
//! measures and draws segments through the same trait, so the measured width
//! is the drawn width.

use crate::{Widget, cells};
use hcollapse_core::geometry::Rect;
use hcollapse_render::buffer::Buffer;
use hcollapse_render::cell::{Cell, StyleFlags};
use hcollapse_render::display_width;

/// A single-row widget with an intrinsic width in cells.
pub trait Segment: Widget {
    /// Display width in terminal cells.
    fn width(&self) -> u16;
}

impl<S: Segment + ?Sized> Segment for &S {
    fn width(&self) -> u16 {
        (**self).width()
    }
}

impl Widget for str {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.draw_str(area.x, area.y, self, StyleFlags::empty(), area.right());
    }
}

impl Segment for str {
    fn width(&self) -> u16 {
        cells(display_width(self))
    }
}

impl Widget for String {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.as_str().render(area, buf);
    }
}

impl Segment for String {
    fn width(&self) -> u16 {
        self.as_str().width()
    }
}

/// A text label with padding and style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label<'a> {
    text: &'a str,
    flags: StyleFlags,
    pad_left: u16,
    pad_right: u16,
}

impl<'a> Label<'a> {
    /// Create an unpadded, unstyled label.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            flags: StyleFlags::empty(),
            pad_left: 0,
            pad_right: 0,
        }
    }

    /// Set the style flags for the label and its padding.
    #[must_use]
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the left/right padding in cells.
    #[must_use]
    pub fn with_padding(mut self, left: u16, right: u16) -> Self {
        self.pad_left = left;
        self.pad_right = right;
        self
    }

    /// Label text.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    fn render_spaces(&self, buf: &mut Buffer, mut x: u16, y: u16, n: u16, max_x: u16) -> u16 {
        let cell = Cell::from_char(' ').with_flags(self.flags);
        for _ in 0..n {
            if x >= max_x {
                break;
            }
            buf.set(x, y, cell);
            x = x.saturating_add(1);
        }
        x
    }
}

impl Widget for Label<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        let max_x = area.right();
        let mut x = area.x;

        x = self.render_spaces(buf, x, y, self.pad_left, max_x);
        x = buf.draw_str(x, y, self.text, self.flags, max_x);
        let _ = self.render_spaces(buf, x, y, self.pad_right, max_x);
    }
}

impl Segment for Label<'_> {
    fn width(&self) -> u16 {
        cells(display_width(self.text))
            .saturating_add(self.pad_left)
            .saturating_add(self.pad_right)
    }
}
