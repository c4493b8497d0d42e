//! Geometry tests for heatgrid
//!
//! Tests for cell coverage, prefix-sum column positions, gap handling, row
//! stacking, and the worked 2x3 example from the documentation.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{rects, render_ops, sample_table};
use heatgrid::{DrawOp, PlotParams, TableLayout};
use test_case::test_case;

const EPS: f64 = 1e-9;

// =============================================================================
// CELL COVERAGE
// =============================================================================

#[test_case(1, 1 ; "single cell")]
#[test_case(2, 3 ; "two by three")]
#[test_case(5, 4 ; "five by four")]
#[test_case(1, 6 ; "wide single row")]
fn cell_count_with_headers(n_rows: usize, n_cols: usize) {
    let ops = render_ops(&sample_table(n_rows, n_cols), &PlotParams::default());
    let expected = n_rows * n_cols + n_cols;
    assert_eq!(rects(&ops).len(), expected);
}

#[test_case(2, 3 ; "two by three")]
#[test_case(4, 2 ; "four by two")]
fn cell_count_without_headers(n_rows: usize, n_cols: usize) {
    let mut params = PlotParams::default();
    params.display.column_headers = false;
    let ops = render_ops(&sample_table(n_rows, n_cols), &params);
    assert_eq!(rects(&ops).len(), n_rows * n_cols);
}

#[test]
fn test_no_duplicate_or_missing_cells() {
    let n_rows = 3;
    let n_cols = 4;
    let ops = render_ops(&sample_table(n_rows, n_cols), &PlotParams::default());

    let mut origins: Vec<(String, String)> = rects(&ops)
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { x, y, .. } => Some((format!("{x:.9}"), format!("{y:.9}"))),
            _ => None,
        })
        .collect();
    let before = origins.len();
    origins.sort();
    origins.dedup();

    // Every (row, col) origin exactly once: header row included.
    assert_eq!(before, origins.len(), "duplicate cell origins");
    assert_eq!(before, n_rows * n_cols + n_cols);
}

// =============================================================================
// COLUMN POSITIONS
// =============================================================================

#[test]
fn test_column_positions_independent_of_gap() {
    let mut wide_gap = PlotParams::default();
    wide_gap.spacing.col = 0.2;

    let narrow = TableLayout::new(&PlotParams::default(), 4, 2, true);
    let wide = TableLayout::new(&wide_gap, 4, 2, true);

    for col in 0..4 {
        assert_eq!(narrow.col_x(col), wide.col_x(col));
    }
    // Only the drawn width shrinks.
    assert!((wide.cell_rect(0, 1).width - (0.4 - 0.2)).abs() < EPS);
}

#[test]
fn test_column_steps_equal_logical_widths() {
    let layout = TableLayout::new(&PlotParams::default(), 5, 2, true);

    for col in 0..4 {
        let step = layout.col_x(col + 1) - layout.col_x(col);
        assert!(
            (step - layout.col_width(col)).abs() < EPS,
            "step between columns {} and {} should equal the logical width",
            col,
            col + 1
        );
        assert!(step > 0.0, "x positions must be strictly increasing");
    }
}

// =============================================================================
// ROW POSITIONS
// =============================================================================

#[test]
fn test_row_positions_strictly_increasing_header_last() {
    let ops = render_ops(&sample_table(4, 3), &PlotParams::default());

    // One y per row, taken from the first column's rect.
    let ys: Vec<f64> = rects(&ops)
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { x, y, .. } if *x == 0.0 => Some(*y),
            _ => None,
        })
        .collect();

    assert_eq!(ys.len(), 5);
    for pair in ys.windows(2) {
        assert!(pair[0] < pair[1], "row y positions must strictly increase");
    }
    // Header row is submitted last and sits at the greatest y.
    let max = ys.iter().copied().fold(f64::MIN, f64::max);
    assert_eq!(ys.last().copied().unwrap(), max);
}

#[test]
fn test_disabling_headers_shrinks_extent_by_one_row() {
    let mut no_headers = PlotParams::default();
    no_headers.display.column_headers = false;

    let with = TableLayout::new(&PlotParams::default(), 3, 2, true);
    let without = TableLayout::new(&no_headers, 3, 2, false);

    let diff = with.total_height() - without.total_height();
    assert!((diff - (0.5 + 0.03)).abs() < EPS);
}

// =============================================================================
// WORKED EXAMPLE: 2 DATA ROWS x 3 COLUMNS, DEFAULT CONFIG
// =============================================================================

#[test]
fn test_two_by_three_reference_positions() {
    let ops = render_ops(&sample_table(2, 3), &PlotParams::default());
    let rect_ops = rects(&ops);

    assert_eq!(rect_ops.len(), 9, "6 data cells + 3 header cells");

    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for op in &rect_ops {
        if let DrawOp::Rect { x, y, .. } = op {
            xs.push(*x);
            ys.push(*y);
        }
    }
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    ys.sort_by(f64::total_cmp);
    ys.dedup();

    let expected_xs = [0.0, 1.0, 1.4];
    let expected_ys = [0.0, 0.53, 1.06];
    assert_eq!(xs.len(), 3);
    assert_eq!(ys.len(), 3);
    for (got, want) in xs.iter().zip(expected_xs) {
        assert!((got - want).abs() < EPS, "x {got} != {want}");
    }
    for (got, want) in ys.iter().zip(expected_ys) {
        assert!((got - want).abs() < EPS, "y {got} != {want}");
    }
}

#[test]
fn test_drawn_widths_are_gap_shrunk() {
    let ops = render_ops(&sample_table(2, 3), &PlotParams::default());

    for op in rects(&ops) {
        if let DrawOp::Rect { x, width, .. } = op {
            let logical = if *x == 0.0 { 1.0 } else { 0.4 };
            assert!((width - (logical - 0.01)).abs() < EPS);
        }
    }
}
