//! 512-scale fixed-point codec used for "double" fields.
//!
//! Layout (8 bytes, little endian):
//! ```text
//! ┌──────────────────────────────────────┬──────────────┐
//! │ bytes 0..7                           │ byte 7       │
//! │ low 56 bits of |value| * 512         │ top byte +   │
//! │                                      │ folded sign  │
//! └──────────────────────────────────────┴──────────────┘
//! ```
//!
//! This is not IEEE 754. The stored integer is the magnitude scaled by 512
//! (9 fractional bits), truncated toward zero. The sign is folded into the
//! top byte with [`encode_signed_top_byte`] on the way in and tested with
//! [`is_negative_double_top_byte`] on the way out. Decoding divides the full
//! 64-bit word, sign bit included, by 512.
//!
//! The two directions are not inverses for every input. Small negative
//! values come back as large positive ones, and positive values whose top
//! byte exceeds 128 come back negative.

use super::sign::{encode_signed_top_byte, is_negative_double_top_byte};

/// Scale factor between the real value and the stored integer.
pub const FIXED_POINT_SCALE: f64 = 512.0;

/// Encoded width in bytes.
pub const FIXED_POINT_SIZE: usize = 8;

/// Encode a value into its 8-byte little-endian fixed-point form.
///
/// Magnitudes are truncated toward zero after scaling. Magnitudes too large
/// for 64 bits saturate, and NaN encodes as zero.
///
/// # Example
///
/// ```
/// use fixed_buffer::codec::encode_fixed512;
///
/// // 3.5 * 512 == 1792 == 0x0700
/// assert_eq!(encode_fixed512(3.5), [0x00, 0x07, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn encode_fixed512(value: f64) -> [u8; FIXED_POINT_SIZE] {
    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };

    // `as` truncates, saturates and maps NaN to 0.
    let scaled = (magnitude * FIXED_POINT_SCALE) as u64;

    let mut bytes = scaled.to_le_bytes();
    bytes[FIXED_POINT_SIZE - 1] = encode_signed_top_byte(bytes[FIXED_POINT_SIZE - 1], negative);
    bytes
}

/// Decode a raw 64-bit word (already assembled little endian) into a value.
///
/// # Example
///
/// ```
/// use fixed_buffer::codec::decode_fixed512;
///
/// assert_eq!(decode_fixed512(0x0700), 3.5);
/// ```
pub fn decode_fixed512(raw: u64) -> f64 {
    let top = (raw >> 56) as u8;
    let magnitude = raw as f64 / FIXED_POINT_SCALE;
    if is_negative_double_top_byte(top) {
        -magnitude
    } else {
        magnitude
    }
}
