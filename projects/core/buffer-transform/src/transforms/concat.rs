//! Concatenation with a fixed second buffer.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use crate::util;
use alloc::vec::Vec;

/// Appends a second buffer, fixed at construction, after the input.
///
/// The result is always newly allocated: the output is longer than the
/// input, so the owned path cannot reuse the incoming allocation.
#[derive(Debug, Clone)]
pub struct ConcatTransformer {
    second: Vec<u8>,
}

impl ConcatTransformer {
    /// Creates a transformer appending `second` to every input.
    pub fn new(second: Vec<u8>) -> Self {
        Self { second }
    }
}

impl ByteTransformer for ConcatTransformer {
    fn transform_owned(&self, buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        self.transform(&buffer)
    }

    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        Ok(util::concat(input, &self.second))
    }
}
