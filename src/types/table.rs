use serde::{Deserialize, Serialize};

/// Tabular input for a heatmap table.
///
/// Three aligned matrices of equal shape plus an ordered list of column
/// names. Column 0 is the row-header column: a text description of each row
/// rather than a value, sized and aligned by its own policy.
///
/// A `Table` is a plain data carrier; shape validation happens when it is
/// rendered, before any drawing-surface call.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Ordered column names; also the synthesized header row's cell values
    pub columns: Vec<String>,
    /// Pre-formatted cell text, one row per table row
    pub values: Vec<Vec<String>>,
    /// Cell fill colors, same shape as `values`
    pub colors: Vec<Vec<String>>,
    /// Per-cell font colors; a uniform fill of the configured table font
    /// color is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_colors: Option<Vec<Vec<String>>>,
}

impl Table {
    /// Create a table from column names, cell values, and cell fill colors.
    pub fn new(columns: Vec<String>, values: Vec<Vec<String>>, colors: Vec<Vec<String>>) -> Self {
        Table {
            columns,
            values,
            colors,
            font_colors: None,
        }
    }

    /// Attach an explicit per-cell font-color matrix.
    #[must_use]
    pub fn with_font_colors(mut self, font_colors: Vec<Vec<String>>) -> Self {
        self.font_colors = Some(font_colors);
        self
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.values.len()
    }

    /// Number of columns, including the row-header column.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }
}
