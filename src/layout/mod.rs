//! Layout engine for computing cell geometry and style resolution.
//!
//! This module handles:
//! - Pre-computing cell positions from per-column widths and heights
//! - The per-column alignment and text-inset policy (row-header column vs.
//!   value columns)
//! - Resolving individual cells to absolute geometry plus text styling
//!
//! Everything here is pure computation; no drawing surface is involved.

mod cell;
mod table_layout;

pub use cell::{resolve_cell, ResolvedCell};
pub use table_layout::{CellRect, TableLayout};
