//! Buffer grid storage.
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A wide character at column `x` with width `w` owns columns
//!    `x + 1 .. x + w`, which hold [`Cell::CONTINUATION`]

use crate::cell::{Cell, StyleFlags};
use crate::grapheme_width;
use hcollapse_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use hcollapse_render::buffer::Buffer;
/// use hcollapse_render::cell::StyleFlags;
///
/// let mut buffer = Buffer::new(8, 1);
/// let end = buffer.draw_str(0, 0, "Child1", StyleFlags::empty(), 8);
/// assert_eq!(end, 6);
/// assert_eq!(buffer.row_text(0), "Child1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer filled with empty cells.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Add `flags` to every cell of `area`, preserving content.
    pub fn apply_flags(&mut self, area: Rect, flags: StyleFlags) {
        if flags.is_empty() {
            return;
        }
        let area = area.intersection(&self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.flags |= flags;
                }
            }
        }
    }

    /// Draw `text` starting at (x, y), stopping before `max_x` (exclusive).
    ///
    /// Zero-width clusters are skipped. A wide cluster that would straddle
    /// `max_x` is not drawn. Returns the x position after the last drawn
    /// cluster.
    pub fn draw_str(&mut self, mut x: u16, y: u16, text: &str, flags: StyleFlags, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        for grapheme in text.graphemes(true) {
            if x >= max_x {
                break;
            }
            let w = grapheme_width(grapheme);
            if w == 0 {
                continue;
            }
            if x as usize + w > max_x as usize {
                break;
            }
            if let Some(c) = grapheme.chars().next() {
                self.set(x, y, Cell::from_char(c).with_flags(flags));
                for offset in 1..w as u16 {
                    self.set(x + offset, y, Cell::CONTINUATION);
                }
            }
            x = x.saturating_add(w as u16);
        }
        x
    }

    /// Plain-text rendering of row `y`, trailing blanks trimmed.
    ///
    /// Empty cells become spaces and continuation cells are skipped, so wide
    /// characters occupy their natural display width in the output.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            let Some(cell) = self.get(x, y) else {
                break;
            };
            if cell.is_continuation() {
                continue;
            }
            out.push(cell.content.as_char().unwrap_or(' '));
        }
        out.truncate(out.trim_end().len());
        out
    }
}
