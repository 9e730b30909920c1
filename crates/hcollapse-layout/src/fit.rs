//! The fit solver.
//!
//! # Algorithm
//!
//! Start with every interior item hidden, then restore items one at a time
//! from the skip boundary inward (the hidden item closest to the trailing
//! kept range first), while
//!
//! ```text
//! used + width[keep_initial + skipped - 1] + reserve < container
//! ```
//!
//! where `reserve` is the placeholder width while more than one item is still
//! hidden, and `0` for the last one (restoring it removes the placeholder).
//!
//! # Invariants
//!
//! 1. Result is in `[0, interior]`
//! 2. Non-increasing as the container grows
//! 3. Same inputs, same result
//!
//! The comparison is strict: an item that exactly fills the remaining space
//! stays hidden. Widths should be rounded consistently by the oracle (cells
//! are integral, so the terminal oracle always is).

use crate::config::FitConfig;
use crate::oracle::MeasurementSnapshot;

/// Retained outcome of the solver: how many interior items are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FitDecision {
    /// Number of hidden interior items.
    pub skipped: usize,
}

impl FitDecision {
    /// Nothing hidden.
    pub const NONE: Self = Self { skipped: 0 };

    /// Whether any item is hidden.
    #[inline]
    pub const fn is_collapsed(&self) -> bool {
        self.skipped > 0
    }
}

/// Compute how many interior items must be hidden.
///
/// `keep_initial` and `keep_last` are clamped to the item count (see
/// [`FitConfig::clamp`]), so an over-allocated configuration hides nothing
/// and never sums an item twice.
///
/// ```
/// use hcollapse_layout::solve;
///
/// let widths = [50.0; 10];
/// assert_eq!(solve(&widths, 1000.0, 0.0, 1, 1), 0);
/// assert_eq!(solve(&widths, 260.0, 0.0, 1, 1), 5);
/// assert_eq!(solve(&widths, 260.0, 40.0, 1, 1), 6);
/// ```
pub fn solve(
    item_widths: &[f32],
    container_width: f32,
    placeholder_width: f32,
    keep_initial: usize,
    keep_last: usize,
) -> usize {
    let len = item_widths.len();
    let (keep_initial, keep_last) = FitConfig::new()
        .with_keep_initial(keep_initial)
        .with_keep_last(keep_last)
        .clamp(len);

    let _span = hcollapse_core::debug_span!(
        "collapse_solve",
        items = len,
        container = container_width,
        keep_initial,
        keep_last
    )
    .entered();

    let initial_width: f32 = item_widths[..keep_initial].iter().sum();
    let final_width: f32 = item_widths[len - keep_last..].iter().sum();

    let mut skipped = len - keep_initial - keep_last;
    let mut used = initial_width + final_width;

    while skipped > 0 {
        let candidate = item_widths[keep_initial + skipped - 1];
        let reserve = if skipped > 1 { placeholder_width } else { 0.0 };
        if used + candidate + reserve < container_width {
            used += candidate;
            skipped -= 1;
        } else {
            break;
        }
    }

    hcollapse_core::trace!(skipped, used, "solved");
    skipped
}

/// Solve for a snapshot under `config`.
///
/// The placeholder width only counts when `config.has_placeholder` is set.
pub fn solve_snapshot(snapshot: &MeasurementSnapshot, config: &FitConfig) -> FitDecision {
    let placeholder_width = if config.has_placeholder {
        snapshot.placeholder_width()
    } else {
        0.0
    };
    FitDecision {
        skipped: solve(
            snapshot.item_widths(),
            snapshot.container_width(),
            placeholder_width,
            config.keep_initial,
            config.keep_last,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_BY_FIFTY: [f32; 10] = [50.0; 10];

    #[test]
    fn everything_fits() {
        assert_eq!(solve(&TEN_BY_FIFTY, 1000.0, 0.0, 1, 1), 0);
    }

    #[test]
    fn exact_fit_is_not_restored() {
        // 100 kept, restores to 150 and 200; 250 < 250 fails.
        assert_eq!(solve(&TEN_BY_FIFTY, 250.0, 0.0, 1, 1), 6);
    }

    #[test]
    fn placeholder_reserve_costs_an_item() {
        assert_eq!(solve(&TEN_BY_FIFTY, 260.0, 0.0, 1, 1), 5);
        assert_eq!(solve(&TEN_BY_FIFTY, 260.0, 40.0, 1, 1), 6);
    }

    #[test]
    fn restoring_last_hidden_item_frees_placeholder() {
        // Only one interior item; reserve never applies to it.
        let widths = [10.0, 10.0, 10.0];
        assert_eq!(solve(&widths, 31.0, 1000.0, 1, 1), 0);
        assert_eq!(solve(&widths, 30.0, 1000.0, 1, 1), 1);
    }

    #[test]
    fn restores_from_the_boundary_inward() {
        // Interior widths: 5, 5, 100. The wide item sits at the boundary and
        // blocks restoration even though the narrow ones would fit.
        let widths = [10.0, 5.0, 5.0, 100.0, 10.0];
        assert_eq!(solve(&widths, 60.0, 0.0, 1, 1), 3);
        // Once the boundary item fits, the rest follow.
        let widths = [10.0, 5.0, 5.0, 20.0, 10.0];
        assert_eq!(solve(&widths, 60.0, 0.0, 1, 1), 0);
    }

    #[test]
    fn kept_items_wider_than_container_hide_all_interior() {
        let widths = [300.0, 10.0, 10.0, 300.0];
        assert_eq!(solve(&widths, 100.0, 0.0, 1, 1), 2);
    }

    #[test]
    fn zero_items() {
        assert_eq!(solve(&[], 100.0, 10.0, 1, 1), 0);
        assert_eq!(solve(&[], 0.0, 0.0, 0, 0), 0);
    }

    #[test]
    fn over_allocated_keep_counts_hide_nothing() {
        let widths = [50.0; 3];
        assert_eq!(solve(&widths, 10.0, 0.0, 2, 2), 0);
        assert_eq!(solve(&widths, 10.0, 0.0, 7, 0), 0);
    }

    #[test]
    fn zero_keep_counts_make_all_items_interior() {
        let widths = [10.0; 4];
        assert_eq!(solve(&widths, 25.0, 0.0, 0, 0), 2);
        assert_eq!(solve(&widths, 0.0, 0.0, 0, 0), 4);
    }

    #[test]
    fn zero_width_container_hides_all_interior() {
        assert_eq!(solve(&TEN_BY_FIFTY, 0.0, 0.0, 1, 1), 8);
    }

    #[test]
    fn solve_snapshot_ignores_placeholder_when_disabled() {
        let snapshot = MeasurementSnapshot::new(260.0, TEN_BY_FIFTY, 40.0);
        let without = solve_snapshot(&snapshot, &FitConfig::default());
        let with = solve_snapshot(&snapshot, &FitConfig::default().with_placeholder(true));
        assert_eq!(without.skipped, 5);
        assert_eq!(with.skipped, 6);
        assert!(with.is_collapsed());
        assert!(!FitDecision::NONE.is_collapsed());
    }
}
