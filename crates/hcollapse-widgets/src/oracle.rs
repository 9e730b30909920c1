//! Width oracle over terminal segments.
//!
//! Measures every segment (hidden or not) and the placeholder with
//! [`Segment::width`], the same rule their `render` uses. Measuring never
//! touches a buffer.

use crate::Segment;
use hcollapse_core::geometry::Rect;
use hcollapse_layout::{MeasurementSnapshot, Projection, Slot, WidthOracle};

/// [`WidthOracle`] for a row of [`Segment`]s in a terminal area.
pub struct SegmentOracle<'a, S> {
    items: &'a [S],
    placeholder: Option<&'a dyn Segment>,
    container: Option<u16>,
}

impl<'a, S: Segment> SegmentOracle<'a, S> {
    /// Detached oracle over `items` and an optional placeholder.
    #[must_use]
    pub fn new(items: &'a [S], placeholder: Option<&'a dyn Segment>) -> Self {
        Self {
            items,
            placeholder,
            container: None,
        }
    }

    /// Attach to `area`. An empty area leaves the oracle detached.
    pub fn attach(&mut self, area: Rect) {
        self.container = (!area.is_empty()).then_some(area.width);
    }

    /// Visible container width, if attached.
    #[inline]
    pub fn container_width(&self) -> Option<u16> {
        self.container
    }

    /// Width of one slot in cells.
    pub fn slot_width(&self, slot: Slot) -> u16 {
        match slot {
            Slot::Item(index) => self.items.get(index).map_or(0, |item| item.width()),
            Slot::Placeholder => self.placeholder.map_or(0, |p| p.width()),
        }
    }

    /// Width of the visible row under `projection`.
    pub fn visible_content_width(&self, projection: &Projection) -> u16 {
        projection
            .iter()
            .fold(0u16, |acc, slot| acc.saturating_add(self.slot_width(slot)))
    }
}

impl<S: Segment> WidthOracle for SegmentOracle<'_, S> {
    fn snapshot(&self) -> Option<MeasurementSnapshot> {
        let container = self.container?;
        Some(MeasurementSnapshot::new(
            f32::from(container),
            self.items.iter().map(|item| f32::from(item.width())),
            self.placeholder.map_or(0.0, |p| f32::from(p.width())),
        ))
    }
}

impl<S> std::fmt::Debug for SegmentOracle<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentOracle")
            .field("items", &self.items.len())
            .field("placeholder", &self.placeholder.is_some())
            .field("container", &self.container)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Label;
    use hcollapse_layout::FitConfig;

    #[test]
    fn detached_until_attached_to_nonempty_area() {
        let items = ["a", "bb"];
        let mut oracle = SegmentOracle::new(&items, None);
        assert!(oracle.snapshot().is_none());

        oracle.attach(Rect::new(0, 0, 0, 1));
        assert!(oracle.snapshot().is_none());

        oracle.attach(Rect::new(3, 0, 10, 1));
        let snapshot = oracle.snapshot().unwrap();
        assert_eq!(snapshot.container_width(), 10.0);
        assert_eq!(snapshot.item_widths(), &[1.0, 2.0]);
        assert_eq!(snapshot.placeholder_width(), 0.0);
    }

    #[test]
    fn measures_placeholder_and_wide_text() {
        let items = [Label::new("日本").with_padding(1, 1), Label::new("x")];
        let placeholder = Label::new("…");
        let mut oracle = SegmentOracle::new(&items, Some(&placeholder));
        oracle.attach(Rect::from_size(8, 1));

        let snapshot = oracle.snapshot().unwrap();
        assert_eq!(snapshot.item_widths(), &[6.0, 1.0]);
        assert_eq!(snapshot.placeholder_width(), 1.0);
    }

    #[test]
    fn visible_width_follows_projection() {
        let items = ["aaa", "bb", "c", "dddd"];
        let placeholder = "..";
        let oracle = SegmentOracle::new(&items, Some(&placeholder));
        let config = FitConfig::default().with_placeholder(true);

        assert_eq!(
            oracle.visible_content_width(&Projection::new(4, &config, 0)),
            10
        );
        // "aaa" + ".." + "dddd"
        assert_eq!(
            oracle.visible_content_width(&Projection::new(4, &config, 2)),
            9
        );
    }
}
