//! Numeric-value-preserving resize.
//!
//! The buffer is treated as a big-endian value: growing pads zero bytes on
//! the LEFT (most-significant side), keeping the numeric value unchanged, and
//! shrinking drops bytes from the LEFT, truncating high-order bytes. This is
//! deliberately different from plain "extend the array" semantics, which
//! would pad on the right; callers rely on the numeric contract.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::vec;
use alloc::vec::Vec;

/// Resizes the buffer to a fixed target size with big-endian zero padding
/// and truncation.
///
/// Resizing to the current length is the identity (the owned path hands the
/// same allocation back); any other target yields a new buffer. The target
/// size is signed so that a negative target fails with
/// [`TransformError::InvalidSize`] instead of wrapping.
///
/// # Examples
///
/// ```
/// use buffer_transform::{ByteTransformer, ResizeTransformer};
///
/// let grown = ResizeTransformer::new(4).transform(&[0x01, 0x02])?;
/// assert_eq!(grown, vec![0x00, 0x00, 0x01, 0x02]);
///
/// let shrunk = ResizeTransformer::new(2).transform(&grown)?;
/// assert_eq!(shrunk, vec![0x01, 0x02]);
/// # Ok::<(), buffer_transform::TransformError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResizeTransformer {
    new_size: isize,
}

impl ResizeTransformer {
    /// Creates a transformer resizing every input to `new_size` bytes.
    pub fn new(new_size: isize) -> Self {
        Self { new_size }
    }
}

impl ByteTransformer for ResizeTransformer {
    fn transform_owned(&self, buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        if self.new_size < 0 {
            return Err(TransformError::InvalidSize(self.new_size));
        }

        let new_size = self.new_size as usize;
        if buffer.len() == new_size {
            return Ok(buffer);
        }
        if new_size == 0 {
            return Ok(Vec::new());
        }

        let mut resized = vec![0u8; new_size];
        if new_size > buffer.len() {
            // Grow: content moves to the right, zero padding on the left.
            resized[new_size - buffer.len()..].copy_from_slice(&buffer);
        } else {
            // Shrink: keep the least significant bytes.
            resized.copy_from_slice(&buffer[buffer.len() - new_size..]);
        }

        Ok(resized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0x01, 0x02], 4, &[0x00, 0x00, 0x01, 0x02])]
    #[case(&[0x00, 0x00, 0x01, 0x02], 2, &[0x01, 0x02])]
    #[case(&[0xAA, 0xBB, 0xCC], 1, &[0xCC])]
    #[case(&[], 2, &[0x00, 0x00])]
    #[case(&[1, 2, 3], 0, &[])]
    fn pads_and_truncates_on_the_left(
        #[case] input: &[u8],
        #[case] new_size: isize,
        #[case] expected: &[u8],
    ) {
        let out = ResizeTransformer::new(new_size).transform(input).unwrap();
        assert_eq!(out, expected);
    }

    #[rstest]
    fn resize_to_current_length_is_identity() {
        let input = vec![1u8, 2, 3];
        let ptr = input.as_ptr();
        let out = ResizeTransformer::new(3).transform_owned(input).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[rstest]
    fn grow_then_shrink_restores_the_original() {
        let original = vec![0x01u8, 0x02, 0x03];
        let grown = ResizeTransformer::new(8).transform(&original).unwrap();
        let restored = ResizeTransformer::new(3).transform_owned(grown).unwrap();
        assert_eq!(restored, original);
    }

    #[rstest]
    #[case(-1)]
    #[case(isize::MIN)]
    fn rejects_negative_targets(#[case] new_size: isize) {
        let err = ResizeTransformer::new(new_size)
            .transform(&[1, 2])
            .unwrap_err();
        assert_eq!(err, TransformError::InvalidSize(new_size));
    }
}
