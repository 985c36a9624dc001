//! Codec module - field encodings that are not plain integers.
//!
//! - [`sign`] - sign-in-top-byte conventions shared by the signed readers
//!   and the fixed-point codec
//! - [`fixed_point`] - the 8-byte, 512-scale fixed-point "double" format
//!
//! # Design
//!
//! Both are pure functions over bytes and words, kept out of
//! [`FixedBuffer`](crate::FixedBuffer) so the unusual conventions can be
//! tested and replaced independently of buffer positioning.
//!
//! # Example
//!
//! ```
//! use fixed_buffer::codec::{decode_fixed512, encode_fixed512};
//!
//! let bytes = encode_fixed512(3.5);
//! assert_eq!(decode_fixed512(u64::from_le_bytes(bytes)), 3.5);
//! ```

pub mod fixed_point;
pub mod sign;

pub use fixed_point::{decode_fixed512, encode_fixed512, FIXED_POINT_SCALE, FIXED_POINT_SIZE};
pub use sign::{
    decode_signed_top_byte, encode_signed_top_byte, is_negative_double_top_byte, SignedTopByte,
    SIGN_BIT,
};
