#![forbid(unsafe_code)]

//! Render kernel: cells, a cell buffer, and the grapheme width rules every
//! measurement in the workspace goes through.

pub mod buffer;
pub mod cell;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in cells, summed per grapheme cluster.
///
/// This is the single sizing rule shared by drawing ([`buffer::Buffer::draw_str`])
/// and measuring, so a measured width always equals the drawn width.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Display width of one grapheme cluster.
///
/// Control clusters (tabs, line breaks) occupy no cells and are never drawn.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(char::is_control) {
        return 0;
    }
    UnicodeWidthStr::width(grapheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_is_len() {
        assert_eq!(display_width("Child10"), 7);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn control_chars_have_no_width() {
        assert_eq!(display_width("a\tb"), 2);
        assert_eq!(display_width("\u{e9}\tz"), 2);
        assert_eq!(display_width("日\r\n"), 2);
        assert_eq!(grapheme_width("\r\n"), 0);
    }

    #[test]
    fn wide_graphemes_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("a日"), 3);
    }

    #[test]
    fn combining_marks_stay_in_cluster() {
        // e + combining acute accent renders as one cell
        assert_eq!(display_width("e\u{301}"), 1);
    }
}
