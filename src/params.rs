//! Plot configuration.
//!
//! An immutable bundle of colors, font sizes, spacing, and cell sizes passed
//! into every render call. All dimensional quantities share the drawing
//! surface's abstract coordinate units; positions are purely additive from
//! widths and heights, so widening one column shifts every column to its
//! right.
//!
//! Every group and field is independently overridable; `#[serde(default)]`
//! means a partial JSON override deserializes against the documented
//! defaults:
//!
//! ```
//! use heatgrid::PlotParams;
//!
//! let params: PlotParams =
//!     serde_json::from_str(r#"{ "cellSizes": { "numbColWidth": 0.6 } }"#)?;
//! assert_eq!(params.cell_sizes.numb_col_width, 0.6);
//! assert_eq!(params.cell_sizes.row_header_col_width, 1.0);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{FontWeight, HAlign};

/// Color defaults for cells and text
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Colors {
    /// Fill color for header-row cells
    pub heading_fill: String,
    /// Font color for header-row text
    pub heading_font: String,
    /// Font color for data-row text when no font-color matrix is supplied
    pub table_font: String,
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            heading_fill: "red".to_string(),
            heading_font: "white".to_string(),
            table_font: "black".to_string(),
        }
    }
}

/// Font sizes for the two row kinds
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizes {
    pub heading: f64,
    pub table: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            heading: 25.0,
            table: 18.0,
        }
    }
}

/// Text alignment and weight policy per column kind
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSettings {
    /// Alignment for the row-header column (both row kinds)
    pub row_header_align: HAlign,
    /// Alignment for value columns (both row kinds)
    pub value_align: HAlign,
    /// Weight for the row-header column in data rows
    pub row_header_weight: FontWeight,
    /// Weight for value columns in data rows
    pub table_weight: FontWeight,
    /// Weight for every column of the header row
    pub heading_weight: FontWeight,
}

impl Default for FontSettings {
    fn default() -> Self {
        FontSettings {
            row_header_align: HAlign::Left,
            value_align: HAlign::Center,
            row_header_weight: FontWeight::Normal,
            table_weight: FontWeight::Bold,
            heading_weight: FontWeight::Bold,
        }
    }
}

/// Gaps between cells and fractional text insets
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacing {
    /// Vertical gap between adjacent rows
    pub row: f64,
    /// Amount shaved off each cell's drawn width; never shifts positions
    pub col: f64,
    /// Fraction of the drawn width between a text cell's left edge and its
    /// anchor
    pub txt_disp_offset: f64,
    /// Anchor fraction for value cells; 0.5 centers the anchor
    pub value_disp_offset: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            row: 0.03,
            col: 0.01,
            txt_disp_offset: 0.02,
            value_disp_offset: 0.5,
        }
    }
}

/// Cell dimensions per column kind
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
pub struct CellSizes {
    pub row_header_col_width: f64,
    pub row_header_col_height: f64,
    pub numb_col_width: f64,
    pub numb_col_height: f64,
    /// Generic row height; drives every row's y position
    pub height: f64,
}

impl Default for CellSizes {
    fn default() -> Self {
        CellSizes {
            row_header_col_width: 1.0,
            row_header_col_height: 0.5,
            numb_col_width: 0.4,
            numb_col_height: 0.5,
            height: 0.5,
        }
    }
}

/// Display toggles and rectangle styling
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
pub struct Display {
    /// Emit the header row of column names; disabling it skips the row
    /// entirely rather than hiding it
    pub column_headers: bool,
    /// Opacity applied to every cell rectangle
    pub cell_opacity: f64,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            column_headers: true,
            cell_opacity: 0.85,
        }
    }
}

/// Complete plot configuration with documented defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotParams {
    pub colors: Colors,
    pub font_sizes: FontSizes,
    pub font_settings: FontSettings,
    pub spacing: Spacing,
    pub cell_sizes: CellSizes,
    pub display: Display,
}
