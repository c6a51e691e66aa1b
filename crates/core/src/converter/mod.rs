//! Output converters for decoded drawings.
//!
//! Converters only consume a `Drawing`; they never touch the binary format.
//! - SvgConverter: SVG page output

mod svg;

pub use svg::{SvgConverter, render_svg};
