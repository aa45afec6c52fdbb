//! Elementwise bitwise AND / OR / XOR against a fixed second buffer.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::vec::Vec;
use derive_enum_all_values::AllValues;

/// Selects which bitwise operator a [`BitwiseTransformer`] applies.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues, Hash)]
pub enum BitwiseMode {
    /// Elementwise `&`.
    And = 0,
    /// Elementwise `|`.
    Or = 1,
    /// Elementwise `^`.
    Xor = 2,
}

/// Combines the input elementwise with a second buffer fixed at construction.
///
/// The second buffer must have the same length as the input; the check runs
/// at application time, before any byte is written. Output length always
/// equals input length, so the owned path mutates in place.
///
/// # Examples
///
/// ```
/// use buffer_transform::{BitwiseMode, BitwiseTransformer, ByteTransformer};
///
/// let masked = BitwiseTransformer::new(vec![0xFF, 0x0F], BitwiseMode::And)
///     .transform(&[0x0F, 0xF0])?;
/// assert_eq!(masked, vec![0x0F, 0x00]);
/// # Ok::<(), buffer_transform::TransformError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitwiseTransformer {
    second: Vec<u8>,
    mode: BitwiseMode,
}

impl BitwiseTransformer {
    /// Creates a transformer combining inputs with `second` under `mode`.
    pub fn new(second: Vec<u8>, mode: BitwiseMode) -> Self {
        Self { second, mode }
    }
}

impl ByteTransformer for BitwiseTransformer {
    fn transform_owned(&self, mut buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        if buffer.len() != self.second.len() {
            return Err(TransformError::LengthMismatch {
                expected: self.second.len(),
                actual: buffer.len(),
            });
        }

        for (out, second) in buffer.iter_mut().zip(&self.second) {
            *out = match self.mode {
                BitwiseMode::And => *out & second,
                BitwiseMode::Or => *out | second,
                BitwiseMode::Xor => *out ^ second,
            };
        }

        Ok(buffer)
    }
}
