//! Structured error types for heatgrid.
//!
//! Validation runs before the first drawing-surface call, so an error here
//! always means zero surface mutations happened.

/// All errors that can occur while laying out and compositing a table.
#[derive(Debug, thiserror::Error)]
pub enum HeatgridError {
    /// The value, color, and font-color matrices disagree on shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeatgridError>;
