//! Builder pattern for `.lines` decoding.
//!
//! Provides a fluent API for configuring and running a decode.
//!
//! # Example
//! ```ignore
//! use rmlines_core::api::DecoderBuilder;
//!
//! let svg = DecoderBuilder::new()
//!     .coloured_annotations(true)
//!     .canvas(1404.0, 1872.0)
//!     .decode_file_to_svg("page.rm")?;
//! ```

use std::path::Path;

use crate::emitter::Drawing;
use crate::error::Result;
use crate::model::ColorMode;

use super::high_level::{DecodeOptions, decode, decode_to_svg};

/// A builder for configuring `.lines` decoding.
///
/// Wraps `DecodeOptions`; the options are validated when a decode runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderBuilder {
    options: DecodeOptions,
}

impl DecoderBuilder {
    /// Creates a builder with the default options: standard colors on the
    /// native 1404x1872 canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color table used to name stroke colors.
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.options.color_mode = mode;
        self
    }

    /// Switches between the annotated and the standard color table.
    ///
    /// # Example
    /// ```ignore
    /// let builder = DecoderBuilder::new().coloured_annotations(true);
    /// ```
    pub fn coloured_annotations(self, enabled: bool) -> Self {
        self.color_mode(if enabled {
            ColorMode::Annotated
        } else {
            ColorMode::Standard
        })
    }

    /// Sets the output canvas size.
    ///
    /// # Arguments
    /// * `width` - Target width, must be positive.
    /// * `height` - Target height, must be positive.
    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.options.target_width = width;
        self.options.target_height = height;
        self
    }

    /// The options this builder describes.
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decodes an in-memory `.lines` buffer.
    ///
    /// # Errors
    /// Returns an error if the options are invalid or the buffer is malformed.
    pub fn decode(&self, data: &[u8]) -> Result<Drawing> {
        decode(data, &self.options)
    }

    /// Decodes an in-memory `.lines` buffer and renders it as SVG.
    pub fn decode_to_svg(&self, data: &[u8]) -> Result<String> {
        decode_to_svg(data, &self.options)
    }

    /// Reads and decodes a `.lines` file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the options are invalid
    /// or the file is malformed.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Drawing> {
        let data = std::fs::read(path)?;
        self.decode(&data)
    }

    /// Reads a `.lines` file and renders it as SVG.
    pub fn decode_file_to_svg(&self, path: impl AsRef<Path>) -> Result<String> {
        let data = std::fs::read(path)?;
        self.decode_to_svg(&data)
    }
}
