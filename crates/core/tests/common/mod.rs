//! Shared fixture builder for `.lines` test buffers.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};

pub const MAGIC_PREFIX: &[u8] = b"reMarkable .lines file, version=";
pub const MAGIC_PADDING: &[u8] = b"          ";

/// Segment fields written by the builder: (x, y, pressure, tilt).
pub type Seg = (f32, f32, f32, f32);

/// Writes a `.lines` buffer record by record.
pub struct LinesWriter {
    buf: Vec<u8>,
    version: u8,
}

impl LinesWriter {
    /// Start a file with version character `version` and `layer_count` layers.
    pub fn new(version: u8, layer_count: u32) -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC_PREFIX);
        buf.push(version);
        buf.extend_from_slice(MAGIC_PADDING);
        buf.write_u32::<LittleEndian>(layer_count).unwrap();
        Self { buf, version }
    }

    pub fn stroke_count(mut self, count: u32) -> Self {
        self.buf.write_u32::<LittleEndian>(count).unwrap();
        self
    }

    /// Stroke record header; writes the extra v5 field when needed.
    pub fn stroke(mut self, pen: u32, color: u32, width: f32, segment_count: u32) -> Self {
        self.buf.write_u32::<LittleEndian>(pen).unwrap();
        self.buf.write_u32::<LittleEndian>(color).unwrap();
        self.buf.write_u32::<LittleEndian>(0).unwrap();
        self.buf.write_f32::<LittleEndian>(width).unwrap();
        if self.version == b'5' {
            self.buf.write_u32::<LittleEndian>(0xdead_beef).unwrap();
        }
        self.buf.write_u32::<LittleEndian>(segment_count).unwrap();
        self
    }

    pub fn segment(mut self, (x, y, pressure, tilt): Seg) -> Self {
        for v in [x, y, pressure, tilt, 0.0, 0.0] {
            self.buf.write_f32::<LittleEndian>(v).unwrap();
        }
        self
    }

    /// Stroke header followed by all of its segments.
    pub fn stroke_with(self, pen: u32, color: u32, width: f32, segments: &[Seg]) -> Self {
        let mut w = self.stroke(pen, color, width, segments.len() as u32);
        for &seg in segments {
            w = w.segment(seg);
        }
        w
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// A version 3 file with one layer holding one stroke.
pub fn single_stroke(pen: u32, color: u32, width: f32, segments: &[Seg]) -> Vec<u8> {
    LinesWriter::new(b'3', 1)
        .stroke_count(1)
        .stroke_with(pen, color, width, segments)
        .finish()
}

/// `count` segments walking diagonally, with constant pressure and tilt.
pub fn diagonal(count: usize, pressure: f32, tilt: f32) -> Vec<Seg> {
    (0..count)
        .map(|i| (i as f32 * 10.0, i as f32 * 20.0, pressure, tilt))
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
