//! Error types for buffer transform operations.

use thiserror::Error;

/// Errors that can occur while applying a transform.
///
/// Every error is surfaced before any byte of an in-place buffer is written,
/// so a failed transform never leaves a partially mutated buffer behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// A bitwise binary operation was applied to buffers of differing lengths.
    #[error("buffer length mismatch: operand is {expected} bytes but input is {actual} bytes; bitwise operations require equal lengths")]
    LengthMismatch {
        /// Length of the operand buffer fixed at construction.
        expected: usize,
        /// Length of the input buffer the transform was applied to.
        actual: usize,
    },

    /// A sub-range copy reaches past the end of the input buffer.
    #[error("sub-range out of bounds: offset {offset} + length {length} exceeds buffer of {buffer_len} bytes")]
    IndexOutOfRange {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        length: usize,
        /// Length of the buffer the range was requested from.
        buffer_len: usize,
    },

    /// A resize was requested with a negative target size.
    #[error("cannot resize to smaller than 0, got {0}")]
    InvalidSize(isize),
}
