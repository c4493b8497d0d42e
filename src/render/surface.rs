//! Drawing-surface trait for pluggable rendering implementations.
//!
//! This module defines the `DrawSurface` trait that abstracts the two
//! primitives the compositor needs (filled rectangles and anchored text),
//! allowing different surfaces (vector, raster, test recorders) to be used
//! interchangeably.

use crate::types::TextStyle;

/// Trait for drawing surfaces
///
/// The surface is owned by the caller and mutated in place; the compositor
/// only appends to it. Coordinates are in the surface's abstract units with
/// y growing toward later-stacked rows.
pub trait DrawSurface {
    /// Add a filled rectangle with the given origin, size, and opacity.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, opacity: f64);

    /// Add text at an anchor point. Horizontal alignment, size, color, and
    /// weight come from `style`; the compositor always requests vertical
    /// centering.
    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle);

    /// Hide axis decorations (ticks, spines/border lines on all four sides).
    fn hide_axis_chrome(&mut self);

    /// Tighten the surface's view bounds to the drawn content's extent.
    fn autoscale_to_content(&mut self);
}
