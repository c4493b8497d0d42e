//! Compositing onto pluggable drawing surfaces.
//!
//! This module provides:
//! - The backend-agnostic [`DrawSurface`] trait
//! - The row compositor, which owns the data-row/header-row policy switch
//! - A [`RecordingSurface`] that captures submitted operations for tests
//! - Color helpers for callers building color matrices

pub mod colors;
pub mod compositor;
pub mod recording;
pub mod surface;

// Re-export commonly used types
pub use colors::{parse_color, readable_font_color, Rgb, EMPTY_CELL};
pub use compositor::render_table;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::DrawSurface;
