//! Little-endian record reader over an in-memory `.lines` buffer.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::FormatError;

/// Bounds-checked cursor that reports short reads as `FormatError::Truncated`.
#[derive(Debug)]
pub struct RecordReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> RecordReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Start reading at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        let mut reader = Self::new(data);
        reader.cursor.set_position(offset as u64);
        reader
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.cursor.position() as usize
    }

    /// Bytes left after the current offset.
    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.offset())
    }

    /// Fail unless `len` more bytes are available.
    pub fn require(&self, len: usize, context: &'static str) -> Result<(), FormatError> {
        if self.remaining() < len {
            return Err(self.truncated(context));
        }
        Ok(())
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, FormatError> {
        let offset = self.offset();
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| FormatError::Truncated { offset, context })
    }

    pub fn read_f32(&mut self, context: &'static str) -> Result<f32, FormatError> {
        let offset = self.offset();
        self.cursor
            .read_f32::<LittleEndian>()
            .map_err(|_| FormatError::Truncated { offset, context })
    }

    fn truncated(&self, context: &'static str) -> FormatError {
        FormatError::Truncated {
            offset: self.offset(),
            context,
        }
    }
}
