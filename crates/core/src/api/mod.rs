//! High-level API module for `.lines` decoding.
//!
//! # Example
//!
//! ```ignore
//! use rmlines_core::api::{decode, DecodeOptions};
//!
//! let bytes = std::fs::read("page.rm")?;
//! let drawing = decode(&bytes, &DecodeOptions::default())?;
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::DecoderBuilder;
pub use high_level::{DecodeOptions, decode, decode_to_fp, decode_to_svg, parse_document};
