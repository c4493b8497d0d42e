//! Per-cell geometry and style resolution.

use crate::layout::TableLayout;
use crate::types::{RowStyle, TextStyle, VAlign};

/// A cell resolved to absolute geometry and final text styling.
///
/// Created fresh for every cell of every render call and handed straight to
/// the drawing surface; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Drawn width (gap already applied)
    pub width: f64,
    /// Drawn height
    pub height: f64,
    /// Rectangle fill color
    pub fill: String,
    /// Cell text
    pub text: String,
    /// Text anchor, offset into the cell by the column's inset fraction
    pub text_x: f64,
    /// Text anchor, vertically centered
    pub text_y: f64,
    /// Resolved text styling
    pub style: TextStyle,
    /// Rectangle opacity
    pub opacity: f64,
}

/// Resolve one cell's geometry and style.
///
/// Pure function over the precomputed layout and the row's style; the text
/// anchor offsets are fractions of the drawn width, so the anchor stays
/// inside the visible rectangle.
#[allow(clippy::too_many_arguments)]
pub fn resolve_cell(
    layout: &TableLayout,
    row: usize,
    col: usize,
    text: &str,
    fill: &str,
    font_color: &str,
    row_style: &RowStyle,
    opacity: f64,
) -> ResolvedCell {
    let rect = layout.cell_rect(row, col);

    ResolvedCell {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        fill: fill.to_string(),
        text: text.to_string(),
        text_x: rect.x + layout.text_offset(col) * rect.width,
        text_y: rect.y + 0.5 * rect.height,
        style: TextStyle {
            align: layout.col_align(col),
            valign: VAlign::Center,
            size: row_style.font_size(),
            color: font_color.to_string(),
            weight: row_style.weight_for(col),
        },
        opacity,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::params::PlotParams;
    use crate::types::{FontWeight, HAlign};

    #[test]
    fn test_row_header_cell_anchor() {
        let params = PlotParams::default();
        let layout = TableLayout::new(&params, 3, 2, true);
        let style = RowStyle::data(&params);

        let cell = resolve_cell(&layout, 0, 0, "desc", "#f2f2f2", "black", &style, 0.85);

        // Left-aligned, anchored a fixed fraction into the drawn width.
        assert_eq!(cell.style.align, HAlign::Left);
        assert_eq!(cell.text_x, 0.02 * (1.0 - 0.01));
        assert_eq!(cell.text_y, 0.25);
        assert_eq!(cell.style.weight, FontWeight::Normal);
        assert_eq!(cell.style.size, 18.0);
    }

    #[test]
    fn test_value_cell_anchor_is_centered() {
        let params = PlotParams::default();
        let layout = TableLayout::new(&params, 3, 2, true);
        let style = RowStyle::data(&params);

        let cell = resolve_cell(&layout, 1, 2, "38%", "#66bd63", "black", &style, 0.85);

        assert_eq!(cell.style.align, HAlign::Center);
        assert_eq!(cell.text_x, 1.4 + 0.5 * (0.4 - 0.01));
        assert!((cell.text_y - (0.53 + 0.25)).abs() < 1e-12);
        assert_eq!(cell.style.weight, FontWeight::Bold);
    }

    #[test]
    fn test_vertical_centering_is_unconditional() {
        let mut params = PlotParams::default();
        params.cell_sizes.numb_col_height = 0.8;
        let layout = TableLayout::new(&params, 2, 1, false);
        let style = RowStyle::data(&params);

        let cell = resolve_cell(&layout, 0, 1, "x", "red", "black", &style, 1.0);
        assert_eq!(cell.style.valign, VAlign::Center);
        assert_eq!(cell.text_y, 0.4);
    }

    #[test]
    fn test_header_cell_styling() {
        let params = PlotParams::default();
        let layout = TableLayout::new(&params, 3, 2, true);
        let style = RowStyle::header(&params);

        let cell = resolve_cell(&layout, 2, 0, "description", "red", "white", &style, 0.85);

        // Header styling is uniform; only geometry follows the column.
        assert_eq!(cell.style.weight, FontWeight::Bold);
        assert_eq!(cell.style.size, 25.0);
        assert_eq!(cell.style.align, HAlign::Left);
        assert!((cell.y - 1.06).abs() < 1e-12);
    }
}
