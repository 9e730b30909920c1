#![forbid(unsafe_code)]

//! Test and demo harness for horizontal collapse.
//!
//! - **Text capture**: [`buffer_to_text`] turns a rendered `Buffer` into a
//!   plain string for assertions.
//! - **Story**: the reference ten-child row ([`story::Story`]).
//! - **Resize storms**: deterministic width sequences replayed through a
//!   [`CollapseState`](hcollapse_widgets::CollapseState) with per-step
//!   invariant checks and JSONL logs ([`resize_storm`]).

pub mod resize_storm;
pub mod story;

use hcollapse_render::buffer::Buffer;

// Re-export types useful for harness users.
pub use hcollapse_core::geometry::Rect;
pub use hcollapse_render::buffer;
pub use hcollapse_render::cell;

/// Plain-text rendering of the whole buffer, one line per row.
///
/// Empty cells become spaces; continuation cells of wide characters are
/// skipped. Rows are not trimmed.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 1) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else {
                continue;
            };
            if cell.is_continuation() {
                continue;
            }
            out.push(cell.content.as_char().unwrap_or(' '));
        }
    }
    out
}
