//! Render projection: which slots are visible for a given skip count.
//!
//! ```text
//! items[0 .. keep_initial)
//!   ++ [Placeholder]            (only if skipped > 0 and a placeholder exists)
//!   ++ items[keep_initial + skipped .. len)
//! ```

use std::ops::Range;

use crate::config::FitConfig;

/// One visible position in the collapsed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The item at this index of the original sequence.
    Item(usize),
    /// The placeholder standing in for all hidden items.
    Placeholder,
}

/// Visible layout of a row of `len` items with `skipped` interior items hidden.
///
/// Counts are clamped to `len`, so any `(len, config, skipped)` combination
/// yields a well-formed projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Projection {
    len: usize,
    keep_initial: usize,
    skipped: usize,
    placeholder: bool,
}

impl Projection {
    /// Project `len` items under `config` with `skipped` hidden.
    ///
    /// `skipped` is clamped to the interior, so a decision retained across a
    /// configuration change never hides a kept item.
    pub fn new(len: usize, config: &FitConfig, skipped: usize) -> Self {
        let (keep_initial, keep_last) = config.clamp(len);
        Self {
            len,
            keep_initial,
            skipped: skipped.min(len - keep_initial - keep_last),
            placeholder: config.has_placeholder,
        }
    }

    /// Number of hidden items after clamping.
    #[inline]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Whether the placeholder slot is present.
    #[inline]
    pub const fn placeholder_shown(&self) -> bool {
        self.placeholder && self.skipped > 0
    }

    /// Indices of the hidden items.
    #[inline]
    pub fn hidden(&self) -> Range<usize> {
        self.keep_initial..self.keep_initial + self.skipped
    }

    /// Whether the item at `index` is drawn.
    #[inline]
    pub fn is_visible(&self, index: usize) -> bool {
        index < self.len && !self.hidden().contains(&index)
    }

    /// Number of items drawn (placeholder excluded).
    #[inline]
    pub const fn visible_items(&self) -> usize {
        self.len - self.skipped
    }

    /// Number of slots, placeholder included.
    #[inline]
    pub const fn slot_count(&self) -> usize {
        self.visible_items() + self.placeholder_shown() as usize
    }

    /// Iterate the visible slots in display order.
    pub fn iter(&self) -> impl Iterator<Item = Slot> + use<> {
        let head = 0..self.keep_initial;
        let tail = self.keep_initial + self.skipped..self.len;
        let placeholder = self.placeholder_shown().then_some(Slot::Placeholder);
        head.map(Slot::Item)
            .chain(placeholder)
            .chain(tail.map(Slot::Item))
    }

    /// Pair each slot with its item from `items` (`None` for the placeholder).
    ///
    /// Indices beyond `items` are dropped.
    pub fn select<'a, T>(
        &self,
        items: &'a [T],
    ) -> impl Iterator<Item = (Slot, Option<&'a T>)> + use<'a, T> {
        self.iter().filter_map(move |slot| match slot {
            Slot::Item(index) => items.get(index).map(|item| (slot, Some(item))),
            Slot::Placeholder => Some((slot, None)),
        })
    }
}
