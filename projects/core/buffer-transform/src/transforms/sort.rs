//! Byte sorting, by signed value or by a caller comparator.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Comparator over two byte values.
pub type ByteComparator = Box<dyn Fn(u8, u8) -> Ordering>;

/// Sorts the buffer's bytes.
///
/// Without a comparator, bytes are ordered by their **signed** (`i8`)
/// numeric value, so `0x80..=0xFF` sort before `0x00..=0x7F`; the owned path
/// sorts within the existing allocation. With a comparator, sorting goes
/// through a freshly allocated scratch buffer regardless of which path is
/// used; the comparator path has no in-place implementation. That asymmetry
/// is intentional and kept as-is.
///
/// # Examples
///
/// ```
/// use buffer_transform::{ByteTransformer, SortTransformer};
///
/// let sorted = SortTransformer::new().transform(&[0x01, 0xFF, 0x00])?;
/// // 0xFF is -1 as a signed byte, so it sorts first.
/// assert_eq!(sorted, vec![0xFF, 0x00, 0x01]);
/// # Ok::<(), buffer_transform::TransformError>(())
/// ```
#[derive(Default)]
pub struct SortTransformer {
    comparator: Option<ByteComparator>,
}

impl SortTransformer {
    /// Creates a transformer sorting by signed byte value.
    pub fn new() -> Self {
        Self { comparator: None }
    }

    /// Creates a transformer sorting with a caller-supplied comparator.
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(u8, u8) -> Ordering + 'static,
    {
        Self {
            comparator: Some(Box::new(comparator)),
        }
    }
}

impl fmt::Debug for SortTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortTransformer")
            .field("comparator", &self.comparator.is_some())
            .finish()
    }
}

impl ByteTransformer for SortTransformer {
    fn transform_owned(&self, mut buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        match &self.comparator {
            None => {
                buffer.sort_unstable_by_key(|&byte| byte as i8);
                Ok(buffer)
            }
            Some(comparator) => {
                // No in-place path with a comparator; sort a scratch copy.
                let mut scratch = buffer.clone();
                scratch.sort_by(|&a, &b| comparator(a, b));
                Ok(scratch)
            }
        }
    }
}
