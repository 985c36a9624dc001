//! Error types for fixed-buffer.

use thiserror::Error;

/// Main error type for all buffer write operations.
///
/// Reads never fail: out-of-range bytes read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A 32-bit integer writer was handed a negative value.
    #[error("value cannot be less than 0: {0}")]
    NegativeValue(i64),

    /// A write would run past the end of the buffer.
    #[error("write of {width} bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds {
        /// Offset the write started at.
        offset: usize,
        /// Number of bytes the write needed.
        width: usize,
        /// Length of the buffer.
        len: usize,
    },
}

/// Result type alias using BufferError.
pub type Result<T> = std::result::Result<T, BufferError>;
