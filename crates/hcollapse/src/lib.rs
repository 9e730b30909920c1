#![forbid(unsafe_code)]

//! Horizontal collapse public facade crate.
//!
//! Re-exports the headless layout types (solver, projection, controller),
//! the terminal widget, and a prelude.
//!
//! ```
//! use hcollapse::prelude::*;
//!
//! let items = ["Child1", "Child2", "Child3", "Child4", "Child5"];
//! let widget = HorizontalCollapse::new(&items).placeholder(&"...");
//! let mut state = CollapseState::default();
//! let mut buf = Buffer::new(20, 1);
//! widget.render(Rect::from_size(20, 1), &mut buf, &mut state);
//!
//! assert_eq!(buf.row_text(0), "Child1...Child5");
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use hcollapse_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use hcollapse_render::buffer::Buffer;
pub use hcollapse_render::cell::{Cell, StyleFlags};
pub use hcollapse_render::display_width;

// --- Layout re-exports -----------------------------------------------------

pub use hcollapse_layout::{
    CollapseController, ControllerStats, Fired, FitConfig, FitConfigError, FitDecision,
    GeometryEvent, GrowthTrigger, MeasurementSnapshot, OverflowTrigger, Projection, Reevaluation,
    Slot, StaticOracle, WidthOracle, solve, solve_snapshot,
};

// --- Widget re-exports -----------------------------------------------------

pub use hcollapse_widgets::{
    CollapseState, HorizontalCollapse, Label, Segment, SegmentOracle, StatefulWidget, Widget,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for hcollapse users.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while presenting output.
    Io(std::io::Error),
    /// A fit configuration that cannot be honored for the item count.
    Config(FitConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "invalid collapse config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<FitConfigError> for Error {
    fn from(err: FitConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for hcollapse APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Strict counterpart of the solver's clamping: reject `config` if its kept
/// ranges do not fit in `len` items.
pub fn validate(config: &FitConfig, len: usize) -> Result<()> {
    config.check(len)?;
    Ok(())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Buffer, CollapseController, CollapseState, Error, FitConfig, GeometryEvent,
        HorizontalCollapse, Label, Projection, Rect, Result, Segment, Slot, StatefulWidget,
        StyleFlags, WidthOracle,
    };

    pub use crate::{core, layout, render, widgets};
}

pub use hcollapse_core as core;
pub use hcollapse_layout as layout;
pub use hcollapse_render as render;
pub use hcollapse_widgets as widgets;
