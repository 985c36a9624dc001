//! Sign conventions for the most-significant byte of a field.
//!
//! These are not two's-complement. The high bit of the top byte flags the
//! sign, and its weight (128) is removed from the byte before the byte is
//! combined into the magnitude.
//!
//! The encode and decode sides are deliberately kept apart: the fixed-point
//! writer folds the sign in with [`encode_signed_top_byte`], but the
//! fixed-point reader tests it with [`is_negative_double_top_byte`], which
//! uses a strict `> 128` comparison. The pair is not an exact inverse.

/// Weight of the sign bit inside the top byte.
pub const SIGN_BIT: u8 = 0b1000_0000;

/// A top byte split into sign flag and remaining magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedTopByte {
    /// Sign bit was set.
    pub negative: bool,
    /// Byte value with the sign weight removed.
    pub magnitude: u8,
}

/// Split a top byte into sign and magnitude.
///
/// A byte `>= 128` is negative and has 128 subtracted.
///
/// # Example
///
/// ```
/// use fixed_buffer::codec::decode_signed_top_byte;
///
/// let top = decode_signed_top_byte(200);
/// assert!(top.negative);
/// assert_eq!(top.magnitude, 72);
/// ```
#[inline]
pub fn decode_signed_top_byte(byte: u8) -> SignedTopByte {
    if byte >= SIGN_BIT {
        SignedTopByte {
            negative: true,
            magnitude: byte - SIGN_BIT,
        }
    } else {
        SignedTopByte {
            negative: false,
            magnitude: byte,
        }
    }
}

/// Fold a sign flag into a top byte.
///
/// Adds 128 when `negative`. If that sum exceeds 256 the sign weight is
/// subtracted from the byte instead. A sum of exactly 256 is stored as a
/// byte and so wraps to 0.
#[inline]
pub fn encode_signed_top_byte(magnitude: u8, negative: bool) -> u8 {
    let weight = if negative { u16::from(SIGN_BIT) } else { 0 };
    let combined = u16::from(magnitude) + weight;
    let adjusted = if combined > 256 {
        combined - u16::from(SIGN_BIT)
    } else {
        combined
    };
    // Only the low 8 bits survive a byte store.
    (adjusted & 0xFF) as u8
}

/// Sign test used when decoding a fixed-point value.
///
/// Strictly greater than 128, so a top byte of exactly 128 reads as positive.
#[inline]
pub fn is_negative_double_top_byte(byte: u8) -> bool {
    byte > SIGN_BIT
}
