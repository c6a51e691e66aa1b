//! `.lines` binary parsing.
//!
//! - `header`: magic string and version detection
//! - `reader`: little-endian record cursor
//! - `walker`: layer / stroke / segment records

pub mod header;
pub mod reader;
pub mod walker;

// Re-export main types for convenience
pub use header::{HEADER_LEN, Header, parse_header};
pub use reader::RecordReader;
pub use walker::{StructureWalker, parse_document};
