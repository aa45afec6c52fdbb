//! Sub-range extraction.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::vec::Vec;

/// Extracts `input[offset..offset + length]` into a new buffer.
///
/// Bounds are checked at application time: the range must lie entirely
/// within the input or the transform fails with
/// [`TransformError::IndexOutOfRange`]. The result is always newly
/// allocated, since a sub-range at a nonzero offset cannot reuse the source
/// allocation.
#[derive(Debug, Clone, Copy)]
pub struct CopyTransformer {
    offset: usize,
    length: usize,
}

impl CopyTransformer {
    /// Creates a transformer extracting `length` bytes starting at `offset`.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }
}

impl ByteTransformer for CopyTransformer {
    fn transform_owned(&self, buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        self.transform(&buffer)
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        let end = self
            .offset
            .checked_add(self.length)
            .filter(|&end| end <= input.len())
            .ok_or(TransformError::IndexOutOfRange {
                offset: self.offset,
                length: self.length,
                buffer_len: input.len(),
            })?;

        Ok(input[self.offset..end].to_vec())
    }
}
