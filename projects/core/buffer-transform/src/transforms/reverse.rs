//! Byte-order reversal.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::vec::Vec;

/// Reverses the order of the bytes in the buffer.
///
/// Length-preserving; the owned path swaps pairwise within the existing
/// allocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseTransformer;

impl ByteTransformer for ReverseTransformer {
    fn transform_owned(&self, mut buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        let len = buffer.len();
        for i in 0..len / 2 {
            buffer.swap(i, len - 1 - i);
        }
        Ok(buffer)
    }
}
