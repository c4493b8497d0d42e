//! Common test utilities for the heatgrid integration suites.
//!
//! Builders for sample tables and a shortcut for rendering into a
//! `RecordingSurface` and grabbing the op log.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use heatgrid::{render_table, DrawOp, PlotParams, RecordingSurface, Table};

/// Build an `n_rows` x `n_cols` table with predictable contents:
/// columns `row_header, col_1, ..`, values `r{row}c{col}`, fills
/// `#f2f2f2` for the row-header column and `#RRGGBB`-style greens elsewhere.
pub fn sample_table(n_rows: usize, n_cols: usize) -> Table {
    let columns: Vec<String> = (0..n_cols)
        .map(|c| {
            if c == 0 {
                "row_header".to_string()
            } else {
                format!("col_{c}")
            }
        })
        .collect();

    let values: Vec<Vec<String>> = (0..n_rows)
        .map(|r| (0..n_cols).map(|c| format!("r{r}c{c}")).collect())
        .collect();

    let colors: Vec<Vec<String>> = (0..n_rows)
        .map(|r| {
            (0..n_cols)
                .map(|c| {
                    if c == 0 {
                        "#f2f2f2".to_string()
                    } else {
                        format!("#{:02X}BD{:02X}", 0x30 + r * 16, 0x30 + c * 16)
                    }
                })
                .collect()
        })
        .collect();

    Table::new(columns, values, colors)
}

/// Render `table` with `params` into a fresh recording surface and return
/// the op log.
pub fn render_ops(table: &Table, params: &PlotParams) -> Vec<DrawOp> {
    let mut surface = RecordingSurface::new();
    render_table(&mut surface, table, params).expect("render should succeed");
    surface.into_ops()
}

/// Rectangle fills from an op log, in submission order.
pub fn rects(ops: &[DrawOp]) -> Vec<&DrawOp> {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::Rect { .. }))
        .collect()
}

/// Text operations from an op log, in submission order.
pub fn texts(ops: &[DrawOp]) -> Vec<&DrawOp> {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::Text { .. }))
        .collect()
}
