#![forbid(unsafe_code)]

//! Terminal widgets for horizontal collapse.
//!
//! [`HorizontalCollapse`] lays out a row of [`Segment`]s and hides interior
//! segments (optionally behind a placeholder) until the row fits its area.

pub mod collapse;
pub mod oracle;
pub mod segment;

pub use collapse::{CollapseState, HorizontalCollapse};
pub use oracle::SegmentOracle;
pub use segment::{Label, Segment};

use hcollapse_core::geometry::Rect;
use hcollapse_render::buffer::Buffer;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect` and must
/// not touch cells outside it.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

impl<W: Widget + ?Sized> Widget for &W {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        (**self).render(area, buf);
    }
}

/// Clamp a `usize` cell count to `u16`.
#[inline]
pub(crate) fn cells(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}
