//! Re-evaluation watchers.
//!
//! Two independent watchers observe the same geometry signal:
//!
//! - [`GrowthTrigger`] fires when the container grows while something is
//!   hidden (more room may let items back in).
//! - [`OverflowTrigger`] fires whenever the visible content is wider than the
//!   container (shrink, or first layout before any solve).
//!
//! Overflow fires even before any solve has run; growth only fires from a
//! collapsed state.

bitflags::bitflags! {
    /// Which watchers asked for a re-solve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Fired: u8 {
        /// Container grew while items were hidden.
        const GROWTH   = 0b0001;
        /// Content wider than the container.
        const OVERFLOW = 0b0010;
        /// Configuration changed since the last solve.
        const CONFIG   = 0b0100;
        /// Explicit request, or the first notification after a detach.
        const FORCED   = 0b1000;
    }
}

/// Fires on container growth while collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrowthTrigger {
    previous: Option<f32>,
}

impl GrowthTrigger {
    /// Create a watcher with no observed width.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Record a container width; `true` if a previous width exists, the
    /// container grew, and `skipped > 0`.
    pub fn observe(&mut self, container_width: f32, skipped: usize) -> bool {
        let grew = matches!(self.previous, Some(previous) if container_width > previous);
        self.previous = Some(container_width);
        grew && skipped > 0
    }

    /// Last observed container width.
    #[inline]
    pub const fn previous(&self) -> Option<f32> {
        self.previous
    }

    /// Forget the observed width.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Fires while content overflows the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverflowTrigger {
    container: Option<f32>,
    content: Option<f32>,
}

impl OverflowTrigger {
    /// Create a watcher with no observed geometry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            container: None,
            content: None,
        }
    }

    /// Record the visible container width; `true` if the content overflows it.
    pub fn observe_container(&mut self, width: f32) -> bool {
        self.container = Some(width);
        self.is_overflowing()
    }

    /// Record the visible content width; `true` if it overflows the container.
    pub fn observe_content(&mut self, width: f32) -> bool {
        self.content = Some(width);
        self.is_overflowing()
    }

    /// Whether both widths are known and content is wider than the container.
    #[inline]
    pub fn is_overflowing(&self) -> bool {
        matches!(
            (self.content, self.container),
            (Some(content), Some(container)) if content > container
        )
    }

    /// Last observed `(container, content)` widths.
    #[inline]
    pub const fn observed(&self) -> (Option<f32>, Option<f32>) {
        (self.container, self.content)
    }

    /// Forget the observed geometry.
    pub fn reset(&mut self) {
        self.container = None;
        self.content = None;
    }
}
