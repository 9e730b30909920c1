//! Fit configuration.

use std::fmt;

/// Caller-supplied collapse options.
///
/// `keep_initial + keep_last <= item count` is expected. When it does not
/// hold, [`FitConfig::clamp`] shrinks the counts so the kept ranges never
/// overlap: `keep_initial` is honored first, `keep_last` gets what is left.
/// [`FitConfig::check`] reports the condition for callers that want to treat
/// it as a mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FitConfig {
    /// Minimum number of leading items always shown.
    pub keep_initial: usize,
    /// Minimum number of trailing items always shown.
    pub keep_last: usize,
    /// Whether a placeholder stands in for hidden items.
    pub has_placeholder: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            keep_initial: 1,
            keep_last: 1,
            has_placeholder: false,
        }
    }
}

impl FitConfig {
    /// Default configuration: keep one item at each end, no placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leading items always shown.
    #[must_use]
    pub fn with_keep_initial(mut self, keep_initial: usize) -> Self {
        self.keep_initial = keep_initial;
        self
    }

    /// Set the number of trailing items always shown.
    #[must_use]
    pub fn with_keep_last(mut self, keep_last: usize) -> Self {
        self.keep_last = keep_last;
        self
    }

    /// Enable or disable the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, has_placeholder: bool) -> Self {
        self.has_placeholder = has_placeholder;
        self
    }

    /// Effective `(keep_initial, keep_last)` for `len` items.
    #[inline]
    #[must_use]
    pub fn clamp(&self, len: usize) -> (usize, usize) {
        let keep_initial = self.keep_initial.min(len);
        let keep_last = self.keep_last.min(len - keep_initial);
        (keep_initial, keep_last)
    }

    /// Number of interior items (the only ones that may be hidden).
    #[inline]
    #[must_use]
    pub fn interior(&self, len: usize) -> usize {
        let (keep_initial, keep_last) = self.clamp(len);
        len - keep_initial - keep_last
    }

    /// Verify that the kept ranges fit in `len` items.
    pub fn check(&self, len: usize) -> Result<(), FitConfigError> {
        match self.keep_initial.checked_add(self.keep_last) {
            Some(kept) if kept <= len => Ok(()),
            _ => Err(FitConfigError::OverAllocated {
                keep_initial: self.keep_initial,
                keep_last: self.keep_last,
                items: len,
            }),
        }
    }
}

/// A [`FitConfig`] that cannot be honored as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitConfigError {
    /// More items are pinned at the ends than exist.
    OverAllocated {
        /// Requested leading items.
        keep_initial: usize,
        /// Requested trailing items.
        keep_last: usize,
        /// Items actually present.
        items: usize,
    },
}

impl fmt::Display for FitConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverAllocated {
                keep_initial,
                keep_last,
                items,
            } => write!(
                f,
                "keep_initial ({keep_initial}) + keep_last ({keep_last}) exceeds item count ({items})"
            ),
        }
    }
}

impl std::error::Error for FitConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_one_each_side() {
        let config = FitConfig::default();
        assert_eq!(config.keep_initial, 1);
        assert_eq!(config.keep_last, 1);
        assert!(!config.has_placeholder);
        assert_eq!(config, FitConfig::new());
    }

    #[test]
    fn builder_sets_fields() {
        let config = FitConfig::new()
            .with_keep_initial(2)
            .with_keep_last(3)
            .with_placeholder(true);
        assert_eq!(
            config,
            FitConfig {
                keep_initial: 2,
                keep_last: 3,
                has_placeholder: true,
            }
        );
    }

    #[test]
    fn clamp_is_identity_when_valid() {
        let config = FitConfig::new().with_keep_initial(2).with_keep_last(3);
        assert_eq!(config.clamp(10), (2, 3));
        assert_eq!(config.interior(10), 5);
    }

    #[test]
    fn clamp_prefers_initial() {
        let config = FitConfig::new().with_keep_initial(4).with_keep_last(4);
        assert_eq!(config.clamp(6), (4, 2));
        assert_eq!(config.clamp(3), (3, 0));
        assert_eq!(config.interior(6), 0);
    }

    #[test]
    fn clamp_zero_items() {
        assert_eq!(FitConfig::default().clamp(0), (0, 0));
        assert_eq!(FitConfig::default().interior(0), 0);
    }

    #[test]
    fn check_reports_over_allocation() {
        let config = FitConfig::new().with_keep_initial(3).with_keep_last(2);
        assert!(config.check(5).is_ok());
        let err = config.check(4).unwrap_err();
        assert_eq!(
            err,
            FitConfigError::OverAllocated {
                keep_initial: 3,
                keep_last: 2,
                items: 4,
            }
        );
        assert_eq!(
            err.to_string(),
            "keep_initial (3) + keep_last (2) exceeds item count (4)"
        );
    }

    #[test]
    fn check_survives_overflowing_counts() {
        let config = FitConfig::new()
            .with_keep_initial(usize::MAX)
            .with_keep_last(usize::MAX);
        assert!(config.check(10).is_err());
        assert_eq!(config.clamp(10), (10, 0));
    }
}
