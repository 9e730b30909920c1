//! Horizontal collapse widget.
//!
//! Renders a row of segments left to right. When the row is wider than its
//! area, interior segments are hidden (keeping `keep_initial` leading and
//! `keep_last` trailing segments) and an optional placeholder is drawn where
//! they were.
//!
//! Each render reports the area width and then the visible content width to
//! a [`CollapseController`] held in [`CollapseState`]; the controller decides
//! whether to re-solve before the row is drawn.
//!
//! # Example
//!
//! ```
//! use hcollapse_core::geometry::Rect;
//! use hcollapse_render::buffer::Buffer;
//! use hcollapse_widgets::{CollapseState, HorizontalCollapse, StatefulWidget};
//!
//! let items = ["one", "two", "three", "four"];
//! let widget = HorizontalCollapse::new(&items).placeholder(&"..");
//! let mut state = CollapseState::default();
//! let mut buf = Buffer::new(12, 1);
//!
//! widget.render(Rect::from_size(12, 1), &mut buf, &mut state);
//! assert_eq!(buf.row_text(0), "one..four");
//! assert_eq!(state.skipped(), 2);
//! ```

use crate::oracle::SegmentOracle;
use crate::{Segment, StatefulWidget, Widget};
use hcollapse_core::geometry::Rect;
use hcollapse_layout::{
    CollapseController, ControllerStats, FitConfig, GeometryEvent, Projection,
};
use hcollapse_render::buffer::Buffer;
use hcollapse_render::cell::StyleFlags;

/// A single row that hides interior segments to fit its area.
pub struct HorizontalCollapse<'a, S> {
    items: &'a [S],
    placeholder: Option<&'a dyn Segment>,
    keep_initial: usize,
    keep_last: usize,
    attrs: StyleFlags,
}

impl<'a, S: Segment> HorizontalCollapse<'a, S> {
    /// Create a collapse row keeping one segment at each end.
    #[must_use]
    pub fn new(items: &'a [S]) -> Self {
        Self {
            items,
            placeholder: None,
            keep_initial: 1,
            keep_last: 1,
            attrs: StyleFlags::empty(),
        }
    }

    /// Segment drawn in place of hidden segments.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a dyn Segment) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Number of leading segments that are never hidden.
    #[must_use]
    pub fn keep_initial(mut self, keep_initial: usize) -> Self {
        self.keep_initial = keep_initial;
        self
    }

    /// Number of trailing segments that are never hidden.
    #[must_use]
    pub fn keep_last(mut self, keep_last: usize) -> Self {
        self.keep_last = keep_last;
        self
    }

    /// Style flags added to every cell of the row.
    ///
    /// Applied after drawing; has no effect on which segments are shown.
    #[must_use]
    pub fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Fit configuration this widget renders with.
    #[must_use]
    pub fn config(&self) -> FitConfig {
        FitConfig::new()
            .with_keep_initial(self.keep_initial)
            .with_keep_last(self.keep_last)
            .with_placeholder(self.placeholder.is_some())
    }

    fn draw(&self, row: Rect, buf: &mut Buffer, projection: &Projection) {
        let mut cursor = row;
        for (_, item) in projection.select(self.items) {
            if cursor.is_empty() {
                break;
            }
            let segment: &dyn Segment = match (item, self.placeholder) {
                (Some(item), _) => item,
                (None, Some(placeholder)) => placeholder,
                (None, None) => continue,
            };
            let width = segment.width();
            segment.render(cursor.take_left(width), buf);
            cursor = cursor.skip_left(width);
        }
        buf.apply_flags(row, self.attrs);
    }
}

impl<S: Segment> StatefulWidget for HorizontalCollapse<'_, S> {
    type State = CollapseState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let _span = hcollapse_core::debug_span!(
            "widget_render",
            widget = "HorizontalCollapse",
            items = self.items.len(),
            width = area.width
        )
        .entered();

        let row = area.intersection(&buf.bounds()).first_row();
        let mut oracle = SegmentOracle::new(self.items, self.placeholder);
        if row.is_empty() {
            state.controller.handle(GeometryEvent::Detached, &oracle);
            return;
        }
        oracle.attach(row);

        state.controller.set_config(self.config());
        state
            .controller
            .handle(GeometryEvent::ContainerResized(f32::from(row.width)), &oracle);

        let content = oracle.visible_content_width(&state.projection(self.items.len()));
        state
            .controller
            .handle(GeometryEvent::ContentResized(f32::from(content)), &oracle);

        let projection = state.projection(self.items.len());
        self.draw(row, buf, &projection);
    }
}

impl<S: Segment> Widget for HorizontalCollapse<'_, S> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut state = CollapseState::default();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

impl<S> std::fmt::Debug for HorizontalCollapse<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizontalCollapse")
            .field("items", &self.items.len())
            .field("placeholder", &self.placeholder.is_some())
            .field("keep_initial", &self.keep_initial)
            .field("keep_last", &self.keep_last)
            .field("attrs", &self.attrs)
            .finish()
    }
}

/// Retained collapse decision for a [`HorizontalCollapse`].
#[derive(Debug, Clone, Default)]
pub struct CollapseState {
    controller: CollapseController,
}

impl CollapseState {
    /// State with nothing hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hidden segments.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.controller.skipped()
    }

    /// Projection of `len` segments under the retained decision.
    pub fn projection(&self, len: usize) -> Projection {
        self.controller.projection(len)
    }

    /// Controller counters.
    #[inline]
    pub fn stats(&self) -> ControllerStats {
        self.controller.stats()
    }

    /// The underlying controller.
    #[inline]
    pub fn controller(&self) -> &CollapseController {
        &self.controller
    }

    /// Forget the retained decision and observed geometry.
    pub fn reset(&mut self) {
        self.controller.reset();
    }
}
