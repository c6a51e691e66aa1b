//! `.lines` file header parsing.
//!
//! A header is the 43-byte magic string
//! `reMarkable .lines file, version=N          ` followed by a little-endian
//! u32 layer count.

use crate::error::FormatError;
use crate::model::Version;

use super::reader::RecordReader;

/// Magic template; `#` marks the version character.
pub const HEADER_TEMPLATE: &[u8; 43] = b"reMarkable .lines file, version=#          ";

/// Offset of the version character inside the magic string.
pub const VERSION_OFFSET: usize = 32;

/// Length of the magic string plus the layer count.
pub const HEADER_LEN: usize = HEADER_TEMPLATE.len() + 4;

/// Parsed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub layer_count: u32,
    /// Offset of the first layer record
    pub body_offset: usize,
}

/// Parse and validate the file header.
pub fn parse_header(data: &[u8]) -> Result<Header, FormatError> {
    if data.len() < HEADER_LEN {
        return Err(FormatError::TooShort { len: data.len() });
    }

    let magic = &data[..HEADER_TEMPLATE.len()];
    let fixed_matches = magic
        .iter()
        .zip(HEADER_TEMPLATE.iter())
        .enumerate()
        .all(|(i, (got, want))| i == VERSION_OFFSET || got == want);
    if !fixed_matches {
        return Err(FormatError::InvalidHeader(format!(
            "unexpected magic {:?}",
            String::from_utf8_lossy(magic)
        )));
    }

    let version_char = magic[VERSION_OFFSET] as char;
    if !matches!(version_char, '3'..='5') {
        return Err(FormatError::InvalidHeader(format!(
            "unexpected version character {:?}",
            version_char
        )));
    }

    let mut reader = RecordReader::at(data, HEADER_TEMPLATE.len());
    let layer_count = reader.read_u32("layer count")?;
    if layer_count < 1 {
        return Err(FormatError::InvalidHeader(
            "file declares no layers".to_string(),
        ));
    }

    let version = match version_char {
        '3' => Version::V3,
        '5' => Version::V5,
        other => return Err(FormatError::UnsupportedVersion(other)),
    };

    tracing::debug!("header: version={} layers={}", version, layer_count);

    Ok(Header {
        version,
        layer_count,
        body_offset: reader.offset(),
    })
}
