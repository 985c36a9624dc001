//! Fixed-length byte buffer with positional field access.
//!
//! Uses `bytes::BytesMut` as owned storage. The length is set when the
//! buffer is built and no operation changes it afterwards.
//!
//! Access policy:
//! - Reads are saturating: a byte outside the buffer reads as `0`, and
//!   multi-byte reads inherit this per byte. Reads never fail.
//! - Writes are checked: a write that does not fit returns
//!   [`BufferError::OutOfBounds`](crate::BufferError::OutOfBounds) and
//!   leaves the buffer untouched.
//!
//! # Example
//!
//! ```
//! use fixed_buffer::FixedBuffer;
//!
//! let mut buf = FixedBuffer::alloc(8);
//! buf.write_uint32_le(0xDEAD, 0).unwrap();
//! buf.write_uint16_le(7, 4).unwrap();
//!
//! assert_eq!(buf.read_uint32_le(0), 0xDEAD);
//! assert_eq!(buf.read_int16_le(4), 7);
//! assert_eq!(buf.read_uint8(100), 0);
//! ```

mod read;
mod write;

use bytes::{Bytes, BytesMut};

/// An owned, fixed-length byte sequence with positional accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedBuffer {
    bytes: BytesMut,
}

impl FixedBuffer {
    /// Allocate `size` zero-filled bytes. A size of 0 yields an empty buffer.
    pub fn alloc(size: usize) -> Self {
        Self {
            bytes: BytesMut::zeroed(size),
        }
    }

    /// Create a zero-length buffer.
    pub fn empty() -> Self {
        Self {
            bytes: BytesMut::new(),
        }
    }

    /// Take ownership of an existing byte sequence.
    ///
    /// A uniquely owned `Vec<u8>` or `Bytes` is adopted without copying.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: BytesMut::from(bytes.into()),
        }
    }

    /// Copy several buffers, in order, into one new buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_buffer::FixedBuffer;
    ///
    /// let a = FixedBuffer::from_bytes(vec![1, 2]);
    /// let b = FixedBuffer::from_bytes(vec![3]);
    /// let joined = FixedBuffer::concat(&[a, b]);
    /// assert_eq!(joined.as_bytes(), &[1, 2, 3]);
    /// ```
    pub fn concat(buffers: &[FixedBuffer]) -> Self {
        Self::concat_iter(buffers)
    }

    /// Same as [`concat`](Self::concat), over any iterator of buffer references.
    pub fn concat_iter<'a, I>(buffers: I) -> Self
    where
        I: IntoIterator<Item = &'a FixedBuffer>,
        I::IntoIter: Clone,
    {
        let buffers = buffers.into_iter();
        let size = buffers.clone().map(FixedBuffer::len).sum();

        // Single allocation for the whole result
        let mut bytes = BytesMut::with_capacity(size);
        for buffer in buffers {
            bytes.extend_from_slice(&buffer.bytes);
        }

        tracing::trace!(len = size, "concatenated buffers");
        Self { bytes }
    }

    /// Copy the half-open range `start..end` into a new buffer.
    ///
    /// `end` defaults to the buffer length and is clamped to it. A `start`
    /// at or past `end` yields an empty buffer.
    pub fn slice(&self, start: usize, end: Option<usize>) -> Self {
        let end = end.unwrap_or(self.len()).min(self.len());
        if start >= end {
            return Self::empty();
        }

        tracing::trace!(start, end, "sliced buffer");
        Self {
            bytes: BytesMut::from(&self.bytes[start..end]),
        }
    }

    /// Number of bytes owned. Fixed at construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Position of the first byte equal to `value`, if any.
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.bytes.iter().position(|&b| b == value)
    }

    /// Get a reference to the raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Freeze into immutable `Bytes` (zero-copy) for hand-off to a transport.
    pub fn into_bytes(self) -> Bytes {
        self.bytes.freeze()
    }
}

impl AsRef<[u8]> for FixedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for FixedBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for FixedBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: BytesMut::from(bytes),
        }
    }
}

impl From<Bytes> for FixedBuffer {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}
