//! The reference story: ten `ChildN` segments, a `...` placeholder, and a
//! row that starts 25 cells wide.

use hcollapse_core::geometry::Rect;
use hcollapse_layout::{FitConfig, MeasurementSnapshot, WidthOracle};
use hcollapse_render::buffer::Buffer;
use hcollapse_widgets::{
    CollapseState, HorizontalCollapse, Segment, SegmentOracle, StatefulWidget,
};

/// Starting row width of the story, in cells.
pub const STORY_START_WIDTH: u16 = 25;

/// Default placeholder text.
pub const STORY_PLACEHOLDER: &str = "...";

/// A collapse row with owned segment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Segment texts in display order.
    pub items: Vec<String>,
    /// Placeholder text; `None` hides skipped segments without a marker.
    pub placeholder: Option<String>,
    /// Leading segments never hidden.
    pub keep_initial: usize,
    /// Trailing segments never hidden.
    pub keep_last: usize,
}

impl Default for Story {
    fn default() -> Self {
        Self::with_items(10)
    }
}

impl Story {
    /// `count` segments named `Child1..=ChildN` with the default placeholder.
    pub fn with_items(count: usize) -> Self {
        Self {
            items: (1..=count).map(|i| format!("Child{i}")).collect(),
            placeholder: Some(STORY_PLACEHOLDER.to_string()),
            keep_initial: 1,
            keep_last: 1,
        }
    }

    /// Replace the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the keep counts.
    #[must_use]
    pub fn with_keep(mut self, keep_initial: usize, keep_last: usize) -> Self {
        self.keep_initial = keep_initial;
        self.keep_last = keep_last;
        self
    }

    /// Widget over this story's segments.
    pub fn widget(&self) -> HorizontalCollapse<'_, String> {
        let widget = HorizontalCollapse::new(&self.items)
            .keep_initial(self.keep_initial)
            .keep_last(self.keep_last);
        match &self.placeholder {
            Some(placeholder) => widget.placeholder(placeholder),
            None => widget,
        }
    }

    /// Fit configuration the widget renders with.
    pub fn config(&self) -> FitConfig {
        self.widget().config()
    }

    /// Render one row `width` cells wide.
    ///
    /// A zero width renders into a one-cell buffer with an empty area, which
    /// detaches the state's watchers.
    pub fn render(&self, width: u16, state: &mut CollapseState) -> Buffer {
        let mut buf = Buffer::new(width.max(1), 1);
        self.widget().render(Rect::from_size(width, 1), &mut buf, state);
        buf
    }

    /// Measure the story in a row `width` cells wide.
    pub fn measure(&self, width: u16) -> Option<MeasurementSnapshot> {
        let placeholder = self.placeholder.as_ref().map(|p| p as &dyn Segment);
        let mut oracle = SegmentOracle::new(&self.items, placeholder);
        oracle.attach(Rect::from_size(width, 1));
        oracle.snapshot()
    }
}
