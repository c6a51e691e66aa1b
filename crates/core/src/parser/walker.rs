//! Structural walk over the `.lines` body: layers, strokes, segments.

use crate::error::FormatError;
use crate::model::document::SEGMENT_LEN;
use crate::model::{Document, Layer, Segment, Stroke, Version};

use super::header::{Header, parse_header};
use super::reader::RecordReader;

/// Walks the layer/stroke/segment records following a parsed header.
pub struct StructureWalker<'a> {
    reader: RecordReader<'a>,
    version: Version,
}

impl<'a> StructureWalker<'a> {
    pub fn new(data: &'a [u8], header: &Header) -> Self {
        Self {
            reader: RecordReader::at(data, header.body_offset),
            version: header.version,
        }
    }

    /// Read `layer_count` layers. Any short record aborts the whole walk.
    pub fn read_layers(&mut self, layer_count: u32) -> Result<Vec<Layer>, FormatError> {
        // Each layer needs at least its stroke count.
        let mut layers = Vec::with_capacity(bounded(layer_count, self.reader.remaining() / 4));
        for index in 0..layer_count {
            let layer = self.read_layer()?;
            tracing::debug!("layer {}: {} strokes", index, layer.strokes.len());
            layers.push(layer);
        }
        Ok(layers)
    }

    fn read_layer(&mut self) -> Result<Layer, FormatError> {
        let stroke_count = self.reader.read_u32("stroke count")?;
        let header_len = self.version.stroke_header_len();
        let mut strokes =
            Vec::with_capacity(bounded(stroke_count, self.reader.remaining() / header_len));
        for _ in 0..stroke_count {
            strokes.push(self.read_stroke()?);
        }
        Ok(Layer { strokes })
    }

    fn read_stroke(&mut self) -> Result<Stroke, FormatError> {
        self.reader
            .require(self.version.stroke_header_len(), "stroke record")?;
        let pen = self.reader.read_u32("stroke record")?;
        let color_index = self.reader.read_u32("stroke record")?;
        let reserved_flag = self.reader.read_u32("stroke record")?;
        let base_width = self.reader.read_f32("stroke record")?;
        let extra = match self.version {
            Version::V3 => None,
            Version::V5 => Some(self.reader.read_u32("stroke record")?),
        };
        let segment_count = self.reader.read_u32("stroke record")?;

        let available = self.reader.remaining() / SEGMENT_LEN;
        if segment_count as usize > available {
            return Err(FormatError::Truncated {
                offset: self.reader.offset() + available * SEGMENT_LEN,
                context: "segment record",
            });
        }

        let mut segments = Vec::with_capacity(segment_count as usize);
        for _ in 0..segment_count {
            segments.push(self.read_segment()?);
        }

        Ok(Stroke {
            pen,
            color_index,
            reserved_flag,
            base_width,
            extra,
            segments,
        })
    }

    fn read_segment(&mut self) -> Result<Segment, FormatError> {
        Ok(Segment {
            x: self.reader.read_f32("segment record")?,
            y: self.reader.read_f32("segment record")?,
            pressure: self.reader.read_f32("segment record")?,
            tilt: self.reader.read_f32("segment record")?,
            reserved1: self.reader.read_f32("segment record")?,
            reserved2: self.reader.read_f32("segment record")?,
        })
    }

    /// Bytes left unread after the walk.
    pub fn trailing(&self) -> usize {
        self.reader.remaining()
    }
}

/// Cap a declared record count by what the buffer could actually hold.
fn bounded(declared: u32, fits: usize) -> usize {
    (declared as usize).min(fits)
}

/// Parse a complete `.lines` buffer into a `Document`.
pub fn parse_document(data: &[u8]) -> Result<Document, FormatError> {
    let header = parse_header(data)?;
    let mut walker = StructureWalker::new(data, &header);
    let layers = walker.read_layers(header.layer_count)?;

    let trailing = walker.trailing();
    if trailing > 0 {
        tracing::debug!("ignoring {} trailing bytes", trailing);
    }

    Ok(Document {
        version: header.version,
        layers,
    })
}
