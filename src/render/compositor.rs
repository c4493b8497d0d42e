//! Row compositor: resolves each row against the layout and submits it to
//! the drawing surface.
//!
//! Owns the data-row/header-row policy switch. Validation runs first, so a
//! shape mismatch produces zero surface mutations rather than a half-drawn
//! table.

use crate::error::{HeatgridError, Result};
use crate::layout::{resolve_cell, TableLayout};
use crate::params::PlotParams;
use crate::render::surface::DrawSurface;
use crate::types::{RowStyle, Table};

/// Render a table onto a drawing surface.
///
/// Data rows are drawn in insertion order at increasing y, followed by the
/// header row of column names unless `display.column_headers` is off (a
/// structural skip: no geometry is computed for it). Each cell submits its
/// rectangle fill and then its text, columns left to right. After the last
/// row the surface is told to hide its axis chrome and tighten its view
/// bounds to the drawn extent.
///
/// # Errors
/// Returns [`HeatgridError::ShapeMismatch`] when the value, color, and
/// font-color matrices disagree on shape, before anything is drawn.
pub fn render_table<S: DrawSurface + ?Sized>(
    surface: &mut S,
    table: &Table,
    params: &PlotParams,
) -> Result<()> {
    check_shape(table)?;

    let n_cols = table.n_cols();
    let n_data_rows = table.n_rows();
    let header_row = params.display.column_headers;
    let layout = TableLayout::new(params, n_cols, n_data_rows, header_row);

    // Data rows 0..n, then the header row at the greatest y when emitted.
    for row in 0..layout.n_rows() {
        let is_header = header_row && row == n_data_rows;
        let style = if is_header {
            RowStyle::header(params)
        } else {
            RowStyle::data(params)
        };

        for col in 0..n_cols {
            let (text, fill, font_color) = match &style {
                RowStyle::Data(_) => (
                    matrix_cell(&table.values, row, col),
                    matrix_cell(&table.colors, row, col),
                    table
                        .font_colors
                        .as_deref()
                        .map_or(params.colors.table_font.as_str(), |m| {
                            matrix_cell(m, row, col)
                        }),
                ),
                RowStyle::Header(heading) => (
                    table.columns.get(col).map_or("", String::as_str),
                    heading.fill.as_str(),
                    heading.font_color.as_str(),
                ),
            };

            let cell = resolve_cell(
                &layout,
                row,
                col,
                text,
                fill,
                font_color,
                &style,
                params.display.cell_opacity,
            );
            surface.fill_rect(cell.x, cell.y, cell.width, cell.height, &cell.fill, cell.opacity);
            surface.draw_text(cell.text_x, cell.text_y, &cell.text, &cell.style);
        }
    }

    surface.hide_axis_chrome();
    surface.autoscale_to_content();
    Ok(())
}

/// Look up a matrix cell. Shapes are validated before any lookup, so the
/// empty-string fallback is unreachable on the render path.
fn matrix_cell(matrix: &[Vec<String>], row: usize, col: usize) -> &str {
    matrix
        .get(row)
        .and_then(|r| r.get(col))
        .map_or("", String::as_str)
}

/// Validate that the value, color, and (optional) font-color matrices all
/// match the column-name list's width and agree on row count.
fn check_shape(table: &Table) -> Result<()> {
    let n_cols = table.n_cols();

    if table.colors.len() != table.values.len() {
        return Err(HeatgridError::ShapeMismatch(format!(
            "cell_values has {} rows but cell_colors has {}",
            table.values.len(),
            table.colors.len()
        )));
    }

    check_matrix_width("cell_values", &table.values, n_cols)?;
    check_matrix_width("cell_colors", &table.colors, n_cols)?;

    if let Some(font_colors) = &table.font_colors {
        if font_colors.len() != table.values.len() {
            return Err(HeatgridError::ShapeMismatch(format!(
                "cell_values has {} rows but font_colors has {}",
                table.values.len(),
                font_colors.len()
            )));
        }
        check_matrix_width("font_colors", font_colors, n_cols)?;
    }

    Ok(())
}

fn check_matrix_width(name: &str, matrix: &[Vec<String>], n_cols: usize) -> Result<()> {
    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != n_cols {
            return Err(HeatgridError::ShapeMismatch(format!(
                "{name} row {row} has {} columns, expected {n_cols}",
                cells.len()
            )));
        }
    }
    Ok(())
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

    fn square(text: &str, n: usize) -> Vec<Vec<String>> {
        vec![vec![text.to_string(); n]; n]
    }

    #[test]
    fn test_check_shape_accepts_matching_matrices() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            square("v", 2),
            square("#fff", 2),
        );
        assert!(check_shape(&table).is_ok());
    }

    #[test]
    fn test_check_shape_rejects_row_count_mismatch() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            square("v", 2),
            vec![vec!["#fff".into(), "#fff".into()]],
        );
        assert!(matches!(
            check_shape(&table),
            Err(HeatgridError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_check_shape_rejects_ragged_rows() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec!["v".into(), "v".into()], vec!["v".into()]],
            square("#fff", 2),
        );
        assert!(matches!(
            check_shape(&table),
            Err(HeatgridError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_check_shape_rejects_bad_font_colors() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            square("v", 2),
            square("#fff", 2),
        )
        .with_font_colors(vec![vec!["black".into(); 3]; 2]);
        assert!(matches!(
            check_shape(&table),
            Err(HeatgridError::ShapeMismatch(_))
        ));
    }
}
