//! Per-byte one's complement.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::vec::Vec;

/// Flips every bit of every byte (`out[i] = !input[i]`).
///
/// Length-preserving and in-place capable. Note that negation applies per
/// byte; the buffer is not treated as a single integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegateTransformer;

impl ByteTransformer for NegateTransformer {
    fn transform_owned(&self, mut buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        for byte in buffer.iter_mut() {
            *byte = !*byte;
        }
        Ok(buffer)
    }
}
