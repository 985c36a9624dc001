//! Saturating positional reads.

use super::FixedBuffer;
use crate::codec::{decode_fixed512, decode_signed_top_byte, SignedTopByte};

impl FixedBuffer {
    /// Read one byte. Out-of-range positions read as `0`.
    #[inline]
    pub fn read_uint8(&self, pos: usize) -> u8 {
        self.bytes.get(pos).copied().unwrap_or(0)
    }

    /// Alias of [`read_uint8`](Self::read_uint8).
    #[inline]
    pub fn at(&self, pos: usize) -> u8 {
        self.read_uint8(pos)
    }

    /// Read `N` consecutive bytes starting at `pos`, each one saturating.
    fn read_array<const N: usize>(&self, pos: usize) -> [u8; N] {
        let mut out = [0u8; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = pos.checked_add(i).map_or(0, |p| self.read_uint8(p));
        }
        out
    }

    /// Little-endian 16-bit read.
    ///
    /// No sign extension is applied, so the result is the unsigned value.
    pub fn read_int16_le(&self, pos: usize) -> u16 {
        u16::from_le_bytes(self.read_array(pos))
    }

    /// Big-endian 16-bit unsigned read.
    pub fn read_uint16_be(&self, pos: usize) -> u16 {
        u16::from_be_bytes(self.read_array(pos))
    }

    /// Little-endian 32-bit unsigned read.
    pub fn read_uint32_le(&self, pos: usize) -> u32 {
        u32::from_le_bytes(self.read_array(pos))
    }

    /// Little-endian 32-bit sign-magnitude read.
    ///
    /// The byte at `pos + 3` carries the sign in its high bit; see
    /// [`decode_signed_top_byte`].
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_buffer::FixedBuffer;
    ///
    /// let buf = FixedBuffer::from_bytes(vec![0x01, 0x00, 0x00, 0x80]);
    /// assert_eq!(buf.read_int32_le(0), -1);
    /// ```
    pub fn read_int32_le(&self, pos: usize) -> i32 {
        let [b0, b1, b2, b3] = self.read_array::<4>(pos);
        combine_sign_magnitude([b0, b1, b2], decode_signed_top_byte(b3))
    }

    /// Big-endian 32-bit sign-magnitude read.
    ///
    /// Same convention as [`read_int32_le`](Self::read_int32_le), with the
    /// sign byte at `pos`.
    pub fn read_int32_be(&self, pos: usize) -> i32 {
        let [b3, b2, b1, b0] = self.read_array::<4>(pos);
        combine_sign_magnitude([b0, b1, b2], decode_signed_top_byte(b3))
    }

    /// Little-endian 64-bit unsigned read.
    pub fn read_uint64_le(&self, pos: usize) -> u64 {
        u64::from_le_bytes(self.read_array(pos))
    }

    /// Read an 8-byte 512-scale fixed-point value.
    ///
    /// See [`codec::fixed_point`](crate::codec::fixed_point) for the format.
    pub fn read_double_le(&self, pos: usize) -> f64 {
        decode_fixed512(self.read_uint64_le(pos))
    }
}

/// Combine three low bytes (least significant first) with a decoded top byte.
fn combine_sign_magnitude(low: [u8; 3], top: SignedTopByte) -> i32 {
    let magnitude = i32::from_le_bytes([low[0], low[1], low[2], top.magnitude]);
    if top.negative {
        -magnitude
    } else {
        magnitude
    }
}
