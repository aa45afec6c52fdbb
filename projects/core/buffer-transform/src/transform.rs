//! The shared transform contract.
//!
//! Every transform in this crate is an immutable descriptor implementing
//! [`ByteTransformer`]. The in-place versus copy duality of the engine is
//! modeled as an ownership decision at the call boundary rather than a hidden
//! mutation: a caller either hands the buffer over ([`transform_owned`]) or
//! lends it ([`transform`]) and receives an independently owned result.
//!
//! ## Length-changing transforms
//!
//! When a transform's output length necessarily differs from its input length
//! (shift, concat, sub-range copy, resize to a different size), the owned path
//! cannot reuse the incoming allocation and returns a newly allocated buffer
//! instead. This is a documented part of the contract that implementations
//! must preserve.
//!
//! [`transform`]: ByteTransformer::transform
//! [`transform_owned`]: ByteTransformer::transform_owned

use crate::error::TransformError;
use alloc::vec::Vec;

/// A single, self-contained transformation of a byte buffer.
///
/// Implementations hold only immutable configuration fixed at construction
/// and observe nothing beyond the buffers explicitly passed to them. A
/// descriptor may be applied any number of times.
pub trait ByteTransformer {
    /// Applies the transform to an owned buffer, mutating it in place.
    ///
    /// Whenever the output length equals the input length, the returned
    /// buffer is the same allocation that was passed in, with its contents
    /// overwritten. Length-changing transforms return a new allocation and
    /// drop `buffer`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] if an application-time precondition fails;
    /// in that case `buffer` is dropped without being partially mutated.
    fn transform_owned(&self, buffer: Vec<u8>) -> Result<Vec<u8>, TransformError>;

    /// Applies the transform to a borrowed buffer, returning a fresh result.
    ///
    /// The input is never modified. The default implementation copies the
    /// input and delegates to [`transform_owned`](Self::transform_owned).
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] if an application-time precondition fails.
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        self.transform_owned(input.to_vec())
    }
}
