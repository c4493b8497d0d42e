//! heatgrid - heatmap tables for any 2D drawing surface
//!
//! Lays out tabular data as a grid of colored, labeled rectangular cells and
//! submits it to a caller-supplied drawing surface:
//! - Pure geometry engine (positions, sizes, text anchors) with no drawing
//!   dependency
//! - Row-header column with its own width, alignment, and font weight
//! - Optional synthesized header row of column names
//! - Pluggable [`DrawSurface`] backends; a [`RecordingSurface`] ships for
//!   tests and as a reference implementation
//!
//! # Usage
//!
//! ```
//! use heatgrid::{render_table, PlotParams, RecordingSurface, Table};
//!
//! let table = Table::new(
//!     vec!["description".into(), "q1".into(), "q2".into()],
//!     vec![
//!         vec!["Signups".into(), "12%".into(), "38%".into()],
//!         vec!["Churn".into(), "4%".into(), "2%".into()],
//!     ],
//!     vec![
//!         vec!["#f2f2f2".into(), "#fee08b".into(), "#66bd63".into()],
//!         vec!["#f2f2f2".into(), "#d9ef8b".into(), "#1a9850".into()],
//!     ],
//! );
//!
//! let mut surface = RecordingSurface::new();
//! render_table(&mut surface, &table, &PlotParams::default())?;
//! # Ok::<(), heatgrid::HeatgridError>(())
//! ```

pub mod error;
pub mod params;
pub mod types;

// Geometry and compositing
pub mod layout;
pub mod render;

pub use error::{HeatgridError, Result};
pub use layout::{CellRect, ResolvedCell, TableLayout};
pub use params::{CellSizes, Colors, Display, FontSettings, FontSizes, PlotParams, Spacing};
pub use render::{render_table, DrawOp, DrawSurface, RecordingSurface};
pub use types::{FontWeight, HAlign, RowStyle, Table, TextStyle, VAlign};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
