//! Cell types.
//!
//! A [`Cell`] holds one terminal column: a character (or a continuation marker
//! for the trailing columns of a wide character) plus style flags. Multi-char
//! grapheme clusters keep their first scalar; the width of the whole cluster
//! is still honored by the buffer.

/// Cell content: empty, a direct char, or a wide-character continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellContent {
    /// No character.
    #[default]
    Empty,
    /// A single Unicode scalar.
    Char(char),
    /// Trailing column owned by the wide character to its left.
    Continuation,
}

impl CellContent {
    /// Extract the character, if any.
    #[inline]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::Empty | Self::Continuation => None,
        }
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
    }
}

/// One terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Character content.
    pub content: CellContent,
    /// Style flags.
    pub flags: StyleFlags,
}

impl Cell {
    /// A continuation cell (trailing column of a wide character).
    pub const CONTINUATION: Self = Self {
        content: CellContent::Continuation,
        flags: StyleFlags::empty(),
    };

    /// Create a cell from a single character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            flags: StyleFlags::empty(),
        }
    }

    /// Return a copy with the given flags added.
    #[inline]
    #[must_use]
    pub fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Check if this is a continuation cell.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        matches!(self.content, CellContent::Continuation)
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }
}
