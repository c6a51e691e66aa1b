//! Data model for decoded `.lines` pages.
//!
//! - `document` - the record tree (Document, Layer, Stroke, Segment)
//! - `color` - color modes and their tables

pub mod color;
pub mod document;

// Re-export main types for convenience
pub use color::{ANNOTATED_COLORS, ColorMode, ColorTable, STANDARD_COLORS};
pub use document::{Document, DocumentStats, Layer, Segment, Stroke, Version};
