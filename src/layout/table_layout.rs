//! Pre-computed layout data for a table.
//!
//! Computes cell positions once per render call from the configured column
//! sizes. Positions are prefix sums of the logical column widths; the
//! configured column gap only shrinks each cell's drawn width, so it never
//! shifts a neighbor's position.

use crate::params::PlotParams;
use crate::types::HAlign;

/// Pre-computed layout data for a table
#[derive(Debug, Clone)]
pub struct TableLayout {
    /// Cumulative column positions (`col_positions[i]` = x of column i's
    /// left edge; final entry = right edge of the table)
    col_positions: Vec<f64>,
    /// Logical column widths (position-contributing, gap not applied)
    col_widths: Vec<f64>,
    /// Drawn cell heights per column
    col_heights: Vec<f64>,
    /// Horizontal alignment per column
    col_aligns: Vec<HAlign>,
    /// Text anchor offset fraction per column
    col_text_offsets: Vec<f64>,
    /// Row positions (`row_positions[r]` = y of row r's bottom edge)
    row_positions: Vec<f64>,
    /// Amount shaved off each drawn width
    col_gap: f64,
    /// Number of rows with geometry, header row included when emitted
    n_rows: usize,
    header_row: bool,
}

impl TableLayout {
    /// Create a layout for `n_data_rows` data rows and, when `header_row` is
    /// set, one header row stacked after them (greatest y).
    pub fn new(params: &PlotParams, n_cols: usize, n_data_rows: usize, header_row: bool) -> Self {
        let sizes = &params.cell_sizes;

        let mut col_positions = Vec::with_capacity(n_cols + 1);
        let mut col_widths = Vec::with_capacity(n_cols);
        let mut col_heights = Vec::with_capacity(n_cols);
        let mut col_aligns = Vec::with_capacity(n_cols);
        let mut col_text_offsets = Vec::with_capacity(n_cols);
        let mut x = 0.0;

        for col in 0..n_cols {
            col_positions.push(x);
            let (w, h, align, offset) = if col == 0 {
                (
                    sizes.row_header_col_width,
                    sizes.row_header_col_height,
                    params.font_settings.row_header_align,
                    params.spacing.txt_disp_offset,
                )
            } else {
                (
                    sizes.numb_col_width,
                    sizes.numb_col_height,
                    params.font_settings.value_align,
                    params.spacing.value_disp_offset,
                )
            };
            col_widths.push(w);
            col_heights.push(h);
            col_aligns.push(align);
            col_text_offsets.push(offset);
            x += w;
        }
        col_positions.push(x); // Final edge

        let n_rows = n_data_rows + usize::from(header_row);
        let mut row_positions = Vec::with_capacity(n_rows);
        for row in 0..n_rows {
            let r = row as f64;
            row_positions.push(r * sizes.height + params.spacing.row * r);
        }

        TableLayout {
            col_positions,
            col_widths,
            col_heights,
            col_aligns,
            col_text_offsets,
            row_positions,
            col_gap: params.spacing.col,
            n_rows,
            header_row,
        }
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.col_widths.len()
    }

    /// Number of rows with geometry, header row included when emitted.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Whether a header row is part of this layout.
    pub fn has_header_row(&self) -> bool {
        self.header_row
    }

    /// X position of a column's left edge.
    pub fn col_x(&self, col: usize) -> f64 {
        self.col_positions.get(col).copied().unwrap_or(0.0)
    }

    /// Y position of a row's bottom edge.
    pub fn row_y(&self, row: usize) -> f64 {
        self.row_positions.get(row).copied().unwrap_or(0.0)
    }

    /// Logical (position-contributing) width of a column.
    pub fn col_width(&self, col: usize) -> f64 {
        self.col_widths.get(col).copied().unwrap_or(0.0)
    }

    /// Drawn cell height for a column.
    pub fn col_height(&self, col: usize) -> f64 {
        self.col_heights.get(col).copied().unwrap_or(0.0)
    }

    /// Horizontal alignment for a column's text.
    pub fn col_align(&self, col: usize) -> HAlign {
        self.col_aligns.get(col).copied().unwrap_or(HAlign::Center)
    }

    /// Text anchor offset fraction for a column.
    pub fn text_offset(&self, col: usize) -> f64 {
        self.col_text_offsets.get(col).copied().unwrap_or(0.5)
    }

    /// Cell bounds with the drawn (gap-shrunk) width.
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        CellRect {
            x: self.col_x(col),
            y: self.row_y(row),
            width: self.col_width(col) - self.col_gap,
            height: self.col_height(col),
        }
    }

    /// Total width of the table (logical widths, gaps excluded).
    pub fn total_width(&self) -> f64 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Y extent of the drawn content: top edge of the last (greatest-y) row.
    pub fn total_height(&self) -> f64 {
        let max_height = self.col_heights.iter().copied().fold(0.0, f64::max);
        self.row_positions.last().copied().unwrap_or(0.0) + max_height
    }
}

/// Rectangle covering one cell's drawn area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Drawn width (logical width minus the column gap)
    pub width: f64,
    /// Drawn height
    pub height: f64,
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

    fn default_layout(n_cols: usize, n_data_rows: usize, header_row: bool) -> TableLayout {
        TableLayout::new(&PlotParams::default(), n_cols, n_data_rows, header_row)
    }

    #[test]
    fn test_basic_layout() {
        let layout = default_layout(3, 2, true);

        assert_eq!(layout.n_cols(), 3);
        assert_eq!(layout.n_rows(), 3);
        assert!(layout.has_header_row());
        assert_eq!(layout.total_width(), 1.0 + 0.4 + 0.4);
    }

    #[test]
    fn test_column_positions_are_prefix_sums() {
        let layout = default_layout(3, 2, true);

        assert_eq!(layout.col_x(0), 0.0);
        assert_eq!(layout.col_x(1), 1.0);
        assert_eq!(layout.col_x(2), 1.4);

        for col in 0..2 {
            let step = layout.col_x(col + 1) - layout.col_x(col);
            assert!((step - layout.col_width(col)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gap_shrinks_drawn_width_only() {
        let layout = default_layout(3, 1, false);

        let rect = layout.cell_rect(0, 1);
        assert!((rect.width - (0.4 - 0.01)).abs() < 1e-12);
        // Positions still use the logical width.
        assert!((layout.col_x(2) - layout.col_x(1) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_row_positions() {
        let layout = default_layout(3, 2, true);

        assert_eq!(layout.row_y(0), 0.0);
        assert!((layout.row_y(1) - 0.53).abs() < 1e-12);
        assert!((layout.row_y(2) - 1.06).abs() < 1e-12);
    }

    #[test]
    fn test_header_row_has_greatest_y() {
        let layout = default_layout(3, 4, true);
        let header_y = layout.row_y(layout.n_rows() - 1);
        for row in 0..layout.n_rows() - 1 {
            assert!(layout.row_y(row) < header_y);
        }
    }

    #[test]
    fn test_disabling_header_removes_one_row_of_extent() {
        let with_header = default_layout(3, 2, true);
        let without = default_layout(3, 2, false);

        let diff = with_header.total_height() - without.total_height();
        assert!((diff - (0.5 + 0.03)).abs() < 1e-12);
    }

    #[test]
    fn test_row_header_column_policy() {
        let layout = default_layout(4, 1, false);

        assert_eq!(layout.col_align(0), HAlign::Left);
        assert_eq!(layout.text_offset(0), 0.02);
        for col in 1..4 {
            assert_eq!(layout.col_align(col), HAlign::Center);
            assert_eq!(layout.text_offset(col), 0.5);
        }
    }

    #[test]
    fn test_custom_widths_shift_following_columns() {
        let mut params = PlotParams::default();
        params.cell_sizes.row_header_col_width = 2.0;
        let layout = TableLayout::new(&params, 3, 1, false);

        assert_eq!(layout.col_x(1), 2.0);
        assert_eq!(layout.col_x(2), 2.4);
    }
}
