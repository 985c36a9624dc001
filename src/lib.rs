//! # fixed-buffer
//!
//! Fixed-size byte buffer with positional access to multi-byte fields, for
//! encoding and decoding binary records whose field offsets are known up
//! front.
//!
//! ## Layout
//!
//! - [`FixedBuffer`] - owned, fixed-length storage with saturating reads and
//!   checked writes, little and big endian
//! - [`codec`] - the sign-in-top-byte conventions and the 8-byte,
//!   512-scale fixed-point "double" format
//!
//! ## Example
//!
//! ```
//! use fixed_buffer::FixedBuffer;
//!
//! let header = FixedBuffer::from_bytes(vec![0x00, 0x2A]);
//! let mut body = FixedBuffer::alloc(12);
//! body.write_uint32_le(1_000, 0).unwrap();
//! body.write_double_le(3.5, 4).unwrap();
//!
//! let record = FixedBuffer::concat(&[header, body]);
//! assert_eq!(record.read_uint16_be(0), 42);
//! assert_eq!(record.read_uint32_le(2), 1_000);
//! assert_eq!(record.read_double_le(6), 3.5);
//! ```

pub mod codec;
pub mod error;

mod buffer;

pub use buffer::FixedBuffer;
pub use error::{BufferError, Result};
