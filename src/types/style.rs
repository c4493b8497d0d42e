use serde::{Deserialize, Serialize};

use crate::params::PlotParams;

/// Horizontal text alignment within a cell
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment within a cell
///
/// The compositor always anchors text at the vertical center; the enum
/// exists so drawing surfaces expose the full vocabulary.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Font weight for cell text
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Fully resolved text styling handed to the drawing surface
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub align: HAlign,
    pub valign: VAlign,
    pub size: f64,
    pub color: String,
    pub weight: FontWeight,
}

/// Style attributes shared by every cell of a data row
#[derive(Debug, Clone)]
pub struct DataRowStyle {
    pub font_size: f64,
    /// Weight for the row-header column (column 0)
    pub row_header_weight: FontWeight,
    /// Weight for all value columns
    pub table_weight: FontWeight,
}

/// Style attributes shared by every cell of the header row
///
/// Uniform across all columns: the row-header column gets heading styling
/// like everything else when it appears in the header row.
#[derive(Debug, Clone)]
pub struct HeaderRowStyle {
    pub fill: String,
    pub font_color: String,
    pub weight: FontWeight,
    pub font_size: f64,
}

/// Per-row style policy, resolved once before the row's cells are laid out.
#[derive(Debug, Clone)]
pub enum RowStyle {
    Data(DataRowStyle),
    Header(HeaderRowStyle),
}

impl RowStyle {
    /// Resolve the style for a data row.
    pub fn data(params: &PlotParams) -> Self {
        RowStyle::Data(DataRowStyle {
            font_size: params.font_sizes.table,
            row_header_weight: params.font_settings.row_header_weight,
            table_weight: params.font_settings.table_weight,
        })
    }

    /// Resolve the style for the header row.
    pub fn header(params: &PlotParams) -> Self {
        RowStyle::Header(HeaderRowStyle {
            fill: params.colors.heading_fill.clone(),
            font_color: params.colors.heading_font.clone(),
            weight: params.font_settings.heading_weight,
            font_size: params.font_sizes.heading,
        })
    }

    /// Font size shared by the whole row.
    pub fn font_size(&self) -> f64 {
        match self {
            RowStyle::Data(s) => s.font_size,
            RowStyle::Header(s) => s.font_size,
        }
    }

    /// Font weight for the given column.
    pub fn weight_for(&self, col: usize) -> FontWeight {
        match self {
            RowStyle::Data(s) => {
                if col == 0 {
                    s.row_header_weight
                } else {
                    s.table_weight
                }
            }
            RowStyle::Header(s) => s.weight,
        }
    }
}
