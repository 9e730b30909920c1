//! Collapse controller: the retained [`FitDecision`] plus its watchers.
//!
//! The controller is fed geometry notifications from the rendering surface.
//! Each notification runs both watchers; if either fires, the oracle is asked
//! for a fresh [`MeasurementSnapshot`](crate::MeasurementSnapshot) and the
//! solver runs once, synchronously, before `handle` returns. The new decision
//! is therefore visible to the next projection.
//!
//! # Example
//!
//! ```
//! use hcollapse_layout::{CollapseController, FitConfig, GeometryEvent, StaticOracle};
//!
//! let mut oracle = StaticOracle::new([50.0; 10]);
//! let mut controller = CollapseController::new(FitConfig::default());
//!
//! // Mounted at 1000: all 10 items (500 wide) fit.
//! oracle.attach(1000.0);
//! controller.handle(GeometryEvent::ContainerResized(1000.0), &oracle);
//! controller.handle(GeometryEvent::ContentResized(500.0), &oracle);
//! assert_eq!(controller.skipped(), 0);
//!
//! // Shrink to 400: content overflows, so the solver runs.
//! oracle.attach(400.0);
//! controller.handle(GeometryEvent::ContainerResized(400.0), &oracle);
//! assert_eq!(controller.skipped(), 3);
//! ```

use crate::config::FitConfig;
use crate::fit::{FitDecision, solve_snapshot};
use crate::oracle::WidthOracle;
use crate::projection::Projection;
use crate::trigger::{Fired, GrowthTrigger, OverflowTrigger};

/// A geometry change reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryEvent {
    /// The visible container now has this width.
    ContainerResized(f32),
    /// The visible (collapsed) content now has this width.
    ContentResized(f32),
    /// The surface went away. Observed geometry is forgotten and the next
    /// notification re-solves.
    Detached,
}

/// Outcome of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reevaluation {
    /// No watcher fired.
    Idle,
    /// A watcher fired but the oracle could not measure; decision kept.
    Unmeasured {
        /// Watchers that fired.
        fired: Fired,
    },
    /// The solver ran.
    Solved {
        /// Watchers that fired.
        fired: Fired,
        /// Skip count before the solve.
        previous: usize,
        /// Skip count after the solve.
        skipped: usize,
    },
}

impl Reevaluation {
    /// Whether the solver ran.
    #[inline]
    pub const fn solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Whether the decision changed.
    #[inline]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Solved { previous, skipped, .. } if *previous != *skipped)
    }
}

/// Counters since creation or the last [`CollapseController::reset_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerStats {
    /// Notifications handled.
    pub events: u64,
    /// Solver runs.
    pub solves: u64,
    /// Times the growth watcher fired.
    pub growth_triggers: u64,
    /// Times the overflow watcher fired.
    pub overflow_triggers: u64,
    /// Solves skipped because the oracle was detached.
    pub unmeasured: u64,
}

/// Owns the retained skip count and decides when to re-solve.
#[derive(Debug, Clone, Default)]
pub struct CollapseController {
    config: FitConfig,
    decision: FitDecision,
    growth: GrowthTrigger,
    overflow: OverflowTrigger,
    pending: Fired,
    warned_len: Option<usize>,
    stats: ControllerStats,
}

impl CollapseController {
    /// Create a controller with nothing hidden.
    pub fn new(config: FitConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A change forces a solve on the next notification. Returns whether the
    /// configuration changed.
    pub fn set_config(&mut self, config: FitConfig) -> bool {
        if config == self.config {
            return false;
        }
        hcollapse_core::debug!(
            keep_initial = config.keep_initial,
            keep_last = config.keep_last,
            has_placeholder = config.has_placeholder,
            "collapse config changed"
        );
        self.config = config;
        self.pending |= Fired::CONFIG;
        true
    }

    /// Retained decision.
    #[inline]
    pub fn decision(&self) -> FitDecision {
        self.decision
    }

    /// Number of hidden interior items.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.decision.skipped
    }

    /// Projection of `len` items under the retained decision.
    pub fn projection(&self, len: usize) -> Projection {
        Projection::new(len, &self.config, self.decision.skipped)
    }

    /// Counters.
    #[inline]
    pub fn stats(&self) -> ControllerStats {
        self.stats
    }

    /// Zero the counters.
    pub fn reset_stats(&mut self) {
        self.stats = ControllerStats::default();
    }

    /// Feed one geometry notification; solves at most once.
    pub fn handle<O: WidthOracle + ?Sized>(
        &mut self,
        event: GeometryEvent,
        oracle: &O,
    ) -> Reevaluation {
        let _span = hcollapse_core::debug_span!("collapse_handle", event = ?event).entered();
        self.stats.events += 1;

        let mut fired = Fired::empty();
        match event {
            GeometryEvent::ContainerResized(width) => {
                if self.growth.observe(width, self.decision.skipped) {
                    fired |= Fired::GROWTH;
                }
                if self.overflow.observe_container(width) {
                    fired |= Fired::OVERFLOW;
                }
            }
            GeometryEvent::ContentResized(width) => {
                if self.overflow.observe_content(width) {
                    fired |= Fired::OVERFLOW;
                }
            }
            GeometryEvent::Detached => {
                self.growth.reset();
                self.overflow.reset();
                self.pending |= Fired::FORCED;
                return Reevaluation::Idle;
            }
        }
        fired |= self.pending;
        if fired.is_empty() {
            return Reevaluation::Idle;
        }

        if fired.contains(Fired::GROWTH) {
            self.stats.growth_triggers += 1;
        }
        if fired.contains(Fired::OVERFLOW) {
            self.stats.overflow_triggers += 1;
        }
        self.resolve(fired, oracle)
    }

    /// Solve now regardless of the watchers.
    pub fn force_solve<O: WidthOracle + ?Sized>(&mut self, oracle: &O) -> Reevaluation {
        self.resolve(Fired::FORCED, oracle)
    }

    /// Drop the retained decision and observed geometry.
    pub fn reset(&mut self) {
        self.decision = FitDecision::NONE;
        self.growth.reset();
        self.overflow.reset();
        self.pending = Fired::empty();
        self.warned_len = None;
    }

    fn resolve<O: WidthOracle + ?Sized>(&mut self, fired: Fired, oracle: &O) -> Reevaluation {
        let Some(snapshot) = oracle.snapshot() else {
            hcollapse_core::debug!(?fired, "collapse solve skipped: oracle detached");
            self.stats.unmeasured += 1;
            return Reevaluation::Unmeasured { fired };
        };

        if let Err(_err) = self.config.check(snapshot.len()) {
            if self.warned_len != Some(snapshot.len()) {
                hcollapse_core::warn!(error = %_err, "clamping collapse keep counts");
                self.warned_len = Some(snapshot.len());
            }
        }

        let previous = self.decision.skipped;
        self.decision = solve_snapshot(&snapshot, &self.config);
        self.pending = Fired::empty();
        self.stats.solves += 1;

        hcollapse_core::debug!(
            ?fired,
            previous,
            skipped = self.decision.skipped,
            container = snapshot.container_width(),
            "collapse re-solved"
        );
        Reevaluation::Solved {
            fired,
            previous,
            skipped: self.decision.skipped,
        }
    }
}
