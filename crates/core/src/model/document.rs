//! Decoded `.lines` records: Document, Layer, Stroke, Segment.

/// Supported `.lines` format versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V3,
    V5,
}

impl Version {
    /// The version character as it appears in the file header.
    pub const fn as_char(self) -> char {
        match self {
            Version::V3 => '3',
            Version::V5 => '5',
        }
    }

    /// Number of u32 fields between `base_width` and `segment_count` in a
    /// stroke record.
    pub const fn extra_stroke_fields(self) -> usize {
        match self {
            Version::V3 => 0,
            Version::V5 => 1,
        }
    }

    /// Size in bytes of a stroke record header (everything before the segments).
    pub const fn stroke_header_len(self) -> usize {
        (5 + self.extra_stroke_fields()) * 4
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One sampled point along a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Device x coordinate (nominally 0..1404)
    pub x: f32,
    /// Device y coordinate (nominally 0..1872)
    pub y: f32,
    /// Pen pressure, expected 0..1 but never clamped
    pub pressure: f32,
    pub tilt: f32,
    pub reserved1: f32,
    pub reserved2: f32,
}

/// Size in bytes of one segment record.
pub const SEGMENT_LEN: usize = 6 * 4;

/// One continuous pen gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Pen identifier; unknown values render with the default pen
    pub pen: u32,
    /// Index into the active color table
    pub color_index: u32,
    /// Unused flag, carried as read
    pub reserved_flag: u32,
    pub base_width: f32,
    /// Extra field present in version 5 records only
    pub extra: Option<u32>,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layer {
    pub strokes: Vec<Stroke>,
}

/// A fully decoded `.lines` page.
///
/// Always holds at least one layer: the header parser rejects files that
/// declare none.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: Version,
    pub layers: Vec<Layer>,
}

/// Record counts for a decoded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub layers: usize,
    pub strokes: usize,
    pub segments: usize,
}

impl Document {
    /// Iterate over every stroke in layer order.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.layers.iter().flat_map(|layer| layer.strokes.iter())
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            layers: self.layers.len(),
            strokes: self.strokes().count(),
            segments: self.strokes().map(|s| s.segments.len()).sum(),
        }
    }
}
