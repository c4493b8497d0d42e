//! In-memory drawing surface that records submitted operations.
//!
//! Stands in for a real surface in tests (the op log replaces golden-image
//! comparison) and doubles as the reference `DrawSurface` implementation.

use serde::{Deserialize, Serialize};

use crate::render::surface::DrawSurface;
use crate::types::TextStyle;

/// One recorded drawing operation, in submission order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum DrawOp {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
        opacity: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
    },
    HideAxisChrome,
    AutoscaleToContent,
}

/// Drawing surface that appends every operation to a log.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations in submission order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consume the surface, returning the op log.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Recorded rectangle fills, in submission order.
    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
    }

    /// Recorded text operations, in submission order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, opacity: f64) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
            opacity,
        });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn hide_axis_chrome(&mut self) {
        self.ops.push(DrawOp::HideAxisChrome);
    }

    fn autoscale_to_content(&mut self) {
        self.ops.push(DrawOp::AutoscaleToContent);
    }
}
