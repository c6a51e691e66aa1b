//! High-level decoding API.
//!
//! Provides the main public entry points:
//! - `parse_document()` - Decode the record tree only
//! - `decode()` - Decode a `.lines` buffer into a `Drawing`
//! - `decode_to_svg()` / `decode_to_fp()` - Decode and render as SVG

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::converter::{SvgConverter, render_svg};
use crate::emitter::{Drawing, PrimitiveEmitter};
use crate::error::{ConfigError, Result};
use crate::model::{ColorMode, Document};
use crate::parser;
use crate::transform::{CanvasMapper, NATIVE_HEIGHT, NATIVE_WIDTH};

/// Options for a decode call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Color table used to name stroke colors.
    pub color_mode: ColorMode,

    /// Output canvas width. Defaults to the native 1404.
    pub target_width: f64,

    /// Output canvas height. Defaults to the native 1872.
    pub target_height: f64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Standard,
            target_width: NATIVE_WIDTH,
            target_height: NATIVE_HEIGHT,
        }
    }
}

impl DecodeOptions {
    /// Check the options and build the coordinate mapper they describe.
    pub fn validate(&self) -> std::result::Result<CanvasMapper, ConfigError> {
        CanvasMapper::new(self.target_width, self.target_height)
    }
}

/// Decode the header and record tree of a `.lines` buffer.
pub fn parse_document(data: &[u8]) -> Result<Document> {
    Ok(parser::parse_document(data)?)
}

/// Decode a `.lines` buffer into polylines on the configured canvas.
///
/// Options are validated before any byte is read. The buffer is parsed in
/// full before anything is emitted, so a malformed file yields an error and
/// no polylines at all.
pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<Drawing> {
    let mapper = options.validate()?;
    let doc = parse_document(data)?;

    let stats = doc.stats();
    tracing::debug!(
        "decoded v{} document: {} layers, {} strokes, {} segments",
        doc.version,
        stats.layers,
        stats.strokes,
        stats.segments
    );

    let mut emitter = PrimitiveEmitter::new(mapper, options.color_mode);
    emitter.emit_document(&doc);
    let drawing = emitter.finish();
    tracing::debug!("emitted {} polylines", drawing.polylines.len());
    Ok(drawing)
}

/// Decode a `.lines` buffer and render it as an SVG string.
pub fn decode_to_svg(data: &[u8], options: &DecodeOptions) -> Result<String> {
    let drawing = decode(data, options)?;
    render_svg(&drawing)
}

/// Decode a `.lines` buffer and write the SVG to `outfp`.
pub fn decode_to_fp<W: Write>(data: &[u8], outfp: W, options: &DecodeOptions) -> Result<()> {
    let drawing = decode(data, options)?;
    SvgConverter::new(outfp).receive_drawing(&drawing)
}
