//! Checked positional writes.
//!
//! Every writer validates its whole range before touching a byte, so a
//! rejected write leaves the buffer exactly as it was.

use super::FixedBuffer;
use crate::codec::encode_fixed512;
use crate::error::{BufferError, Result};

impl FixedBuffer {
    /// Copy `src` into the buffer at `offset`, or fail without writing.
    fn write_bytes(&mut self, src: &[u8], offset: usize) -> Result<()> {
        let len = self.len();
        let width = src.len();
        match offset.checked_add(width) {
            Some(end) if end <= len => {
                self.bytes[offset..end].copy_from_slice(src);
                Ok(())
            }
            _ => {
                tracing::debug!(offset, width, len, "rejected out-of-bounds write");
                Err(BufferError::OutOfBounds { offset, width, len })
            }
        }
    }

    /// Write one byte at `offset`.
    pub fn write_uint8(&mut self, value: u8, offset: usize) -> Result<()> {
        self.write_bytes(&[value], offset)
    }

    /// Little-endian 16-bit write.
    pub fn write_uint16_le(&mut self, value: u16, offset: usize) -> Result<()> {
        self.write_bytes(&value.to_le_bytes(), offset)
    }

    /// Little-endian 32-bit write of the low 32 bits of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::NegativeValue`] if `value < 0`, and
    /// [`BufferError::OutOfBounds`] if four bytes do not fit at `offset`.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_buffer::{BufferError, FixedBuffer};
    ///
    /// let mut buf = FixedBuffer::alloc(4);
    /// buf.write_int32_le(0x0102_0304, 0).unwrap();
    /// assert_eq!(buf.as_bytes(), &[4, 3, 2, 1]);
    ///
    /// assert_eq!(buf.write_int32_le(-1, 0), Err(BufferError::NegativeValue(-1)));
    /// ```
    pub fn write_int32_le(&mut self, value: i64, offset: usize) -> Result<()> {
        if value < 0 {
            tracing::debug!(value, offset, "rejected negative 32-bit write");
            return Err(BufferError::NegativeValue(value));
        }
        let word = (value & 0xFFFF_FFFF) as u32;
        self.write_bytes(&word.to_le_bytes(), offset)
    }

    /// Same as [`write_int32_le`](Self::write_int32_le), negative rejection included.
    #[inline]
    pub fn write_uint32_le(&mut self, value: i64, offset: usize) -> Result<()> {
        self.write_int32_le(value, offset)
    }

    /// Write an 8-byte 512-scale fixed-point value.
    ///
    /// See [`codec::fixed_point`](crate::codec::fixed_point) for the format.
    pub fn write_double_le(&mut self, value: f64, offset: usize) -> Result<()> {
        self.write_bytes(&encode_fixed512(value), offset)
    }
}
