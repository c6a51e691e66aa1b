//! rmlines - a decoder for reMarkable `.lines` stroke files.
//!
//! Parses the versioned binary page format into layers, strokes and
//! segments, applies the per-pen width/opacity model, and emits ordered
//! polylines on a configurable canvas. Rendering to markup lives in
//! `converter` and only consumes the decoded `Drawing`.

pub mod api;
pub mod converter;
pub mod emitter;
pub mod error;
pub mod model;
pub mod parser;
pub mod pen;
pub mod transform;

pub use api::{DecodeOptions, DecoderBuilder, decode, decode_to_svg, parse_document};
pub use emitter::{Drawing, Polyline};
pub use error::{ConfigError, FormatError, LinesError, Result};
pub use model::ColorMode;
