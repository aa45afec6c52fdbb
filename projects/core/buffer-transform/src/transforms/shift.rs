//! Arithmetic bit shift of the whole buffer.
//!
//! The buffer is interpreted as a single signed big-endian two's-complement
//! integer, shifted arithmetically, and re-serialized as the minimal
//! big-endian two's-complement encoding of the result. Because that encoding
//! can be shorter or longer than the input (sign-extension bytes appear and
//! disappear), the output is always a freshly allocated buffer and the owned
//! path never mutates in place.
//!
//! Consequences worth spelling out:
//!
//! - Right-shifting a negative value floors, as two's-complement arithmetic
//!   shift requires: `[0xFF] >> 1` stays `[0xFF]` (-1 >> 1 == -1).
//! - Shifting by 0 preserves the numeric value but re-encodes it minimally,
//!   so redundant sign bytes are dropped: `[0x00, 0x01] << 0` is `[0x01]`.
//! - A negative `shift_count` reverses the direction, mirroring the sign
//!   behavior of big-integer shift operations.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::vec::Vec;
use derive_enum_all_values::AllValues;
use num_bigint::BigInt;

/// Direction of a [`ShiftTransformer`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues, Hash)]
pub enum ShiftDirection {
    /// Shift toward the most significant bit (multiply by powers of two).
    Left = 0,
    /// Arithmetic shift toward the least significant bit (floor division by
    /// powers of two).
    Right = 1,
}

/// Shifts the buffer, viewed as a signed big-endian integer, by a fixed
/// number of bit positions.
///
/// # Examples
///
/// ```
/// use buffer_transform::{ByteTransformer, ShiftDirection, ShiftTransformer};
///
/// let doubled = ShiftTransformer::new(1, ShiftDirection::Left).transform(&[0x01])?;
/// assert_eq!(doubled, vec![0x02]);
///
/// // Crossing a byte boundary grows the encoding.
/// let grown = ShiftTransformer::new(8, ShiftDirection::Left).transform(&[0x01])?;
/// assert_eq!(grown, vec![0x01, 0x00]);
/// # Ok::<(), buffer_transform::TransformError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShiftTransformer {
    shift_count: i32,
    direction: ShiftDirection,
}

impl ShiftTransformer {
    /// Creates a transformer shifting by `shift_count` bits in `direction`.
    ///
    /// A negative `shift_count` shifts in the opposite direction.
    pub fn new(shift_count: i32, direction: ShiftDirection) -> Self {
        Self {
            shift_count,
            direction,
        }
    }
}

impl ByteTransformer for ShiftTransformer {
    fn transform_owned(&self, buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        self.transform(&buffer)
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        let value = BigInt::from_signed_bytes_be(input);

        // Fold direction and sign into one signed bit count; left is positive.
        let bits = match self.direction {
            ShiftDirection::Left => i64::from(self.shift_count),
            ShiftDirection::Right => -i64::from(self.shift_count),
        };

        let shifted = if bits >= 0 {
            value << (bits as usize)
        } else {
            value >> ((-bits) as usize)
        };

        Ok(shifted.to_signed_bytes_be())
    }
}
