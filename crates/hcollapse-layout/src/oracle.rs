//! Width measurement.
//!
//! A [`WidthOracle`] measures the full, unabridged item row (plus the
//! placeholder) using the same sizing rules as the visible output, without
//! drawing anything. Rendering surfaces implement it; headless callers use
//! [`StaticOracle`] with pre-supplied widths.

use crate::projection::{Projection, Slot};

/// Widths of one layout pass.
///
/// # Invariants
///
/// - `item_widths().len()` equals the item count the oracle was built for
/// - every width is finite and `>= 0` (negative or NaN inputs become `0.0`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementSnapshot {
    container_width: f32,
    item_widths: Vec<f32>,
    placeholder_width: f32,
}

#[inline]
fn sanitize(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else if width == f32::INFINITY {
        f32::MAX
    } else {
        0.0
    }
}

impl MeasurementSnapshot {
    /// Build a snapshot, sanitizing every width.
    pub fn new(
        container_width: f32,
        item_widths: impl IntoIterator<Item = f32>,
        placeholder_width: f32,
    ) -> Self {
        Self {
            container_width: sanitize(container_width),
            item_widths: item_widths.into_iter().map(sanitize).collect(),
            placeholder_width: sanitize(placeholder_width),
        }
    }

    /// Width of the visible container.
    #[inline]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// One width per item, in original order.
    #[inline]
    pub fn item_widths(&self) -> &[f32] {
        &self.item_widths
    }

    /// Width of the placeholder, `0.0` when none is configured.
    #[inline]
    pub fn placeholder_width(&self) -> f32 {
        self.placeholder_width
    }

    /// Number of measured items.
    #[inline]
    pub fn len(&self) -> usize {
        self.item_widths.len()
    }

    /// Whether no items were measured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_widths.is_empty()
    }

    /// Width of the unabridged row.
    pub fn total_width(&self) -> f32 {
        self.item_widths.iter().sum()
    }

    /// Width the visible row occupies under `projection`.
    pub fn projected_width(&self, projection: &Projection) -> f32 {
        projection
            .iter()
            .map(|slot| match slot {
                Slot::Item(index) => self.item_widths.get(index).copied().unwrap_or(0.0),
                Slot::Placeholder => self.placeholder_width,
            })
            .sum()
    }
}

/// Source of [`MeasurementSnapshot`]s.
pub trait WidthOracle {
    /// Measure the container, every item and the placeholder.
    ///
    /// Returns `None` while the measurement context is not attached to a
    /// surface; callers must then skip solving rather than use stale numbers.
    fn snapshot(&self) -> Option<MeasurementSnapshot>;
}

impl<O: WidthOracle + ?Sized> WidthOracle for &O {
    fn snapshot(&self) -> Option<MeasurementSnapshot> {
        (**self).snapshot()
    }
}

/// Oracle over pre-supplied widths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticOracle {
    item_widths: Vec<f32>,
    placeholder_width: f32,
    container_width: Option<f32>,
}

impl StaticOracle {
    /// Detached oracle over `item_widths`; call [`StaticOracle::attach`]
    /// before it produces snapshots.
    pub fn new(item_widths: impl IntoIterator<Item = f32>) -> Self {
        Self {
            item_widths: item_widths.into_iter().collect(),
            placeholder_width: 0.0,
            container_width: None,
        }
    }

    /// Set the placeholder width.
    #[must_use]
    pub fn with_placeholder_width(mut self, width: f32) -> Self {
        self.placeholder_width = width;
        self
    }

    /// Attach to a container of the given width (also used to resize).
    pub fn attach(&mut self, container_width: f32) {
        self.container_width = Some(container_width);
    }

    /// Detach from the surface; snapshots return `None` afterwards.
    pub fn detach(&mut self) {
        self.container_width = None;
    }

    /// Current container width, if attached.
    pub fn container_width(&self) -> Option<f32> {
        self.container_width
    }
}

impl WidthOracle for StaticOracle {
    fn snapshot(&self) -> Option<MeasurementSnapshot> {
        let container = self.container_width?;
        Some(MeasurementSnapshot::new(
            container,
            self.item_widths.iter().copied(),
            self.placeholder_width,
        ))
    }
}
