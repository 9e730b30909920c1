#![forbid(unsafe_code)]

//! Horizontal collapse layout.
//!
//! Given a container width and an ordered row of fixed-width items, decide how
//! many *interior* items to hide (optionally behind a single placeholder) so
//! the visible row fits.
//!
//! - [`oracle`] - [`WidthOracle`] and the [`MeasurementSnapshot`] it produces
//! - [`fit`] - the pure [`solve`] function
//! - [`projection`] - maps a skip count onto visible [`Slot`]s
//! - [`trigger`] - growth and overflow watchers
//! - [`controller`] - [`CollapseController`], the retained decision plus triggers
//!
//! # Example
//!
//! ```
//! use hcollapse_layout::{solve, FitConfig, Projection, Slot};
//!
//! let widths = [50.0; 10];
//! let skipped = solve(&widths, 250.0, 0.0, 1, 1);
//! assert_eq!(skipped, 6);
//!
//! let config = FitConfig::default();
//! let slots: Vec<Slot> = Projection::new(widths.len(), &config, skipped).iter().collect();
//! assert_eq!(
//!     slots,
//!     [Slot::Item(0), Slot::Item(7), Slot::Item(8), Slot::Item(9)]
//! );
//! ```

pub mod config;
pub mod controller;
pub mod fit;
pub mod oracle;
pub mod projection;
pub mod trigger;

pub use config::{FitConfig, FitConfigError};
pub use controller::{CollapseController, ControllerStats, GeometryEvent, Reevaluation};
pub use fit::{FitDecision, solve, solve_snapshot};
pub use hcollapse_core::geometry::Rect;
pub use oracle::{MeasurementSnapshot, StaticOracle, WidthOracle};
pub use projection::{Projection, Slot};
pub use trigger::{Fired, GrowthTrigger, OverflowTrigger};
