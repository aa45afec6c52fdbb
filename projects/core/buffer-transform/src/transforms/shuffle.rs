//! Reproducible Fisher-Yates shuffle.

use crate::error::TransformError;
use crate::transform::ByteTransformer;
use crate::util;
use alloc::vec::Vec;
use core::cell::RefCell;
use rand::RngCore;

/// Permutes the buffer with a Fisher-Yates shuffle driven by a caller-seeded
/// generator.
///
/// The caller seeds the generator, so the permutation is fully reproducible
/// given the same seed, generator algorithm and input. The generator advances
/// on every application; it sits behind a [`RefCell`] so the transformer can
/// stay shared-reference applied, which also makes this the one transformer
/// that is not `Sync`. Length-preserving and in-place capable.
///
/// # Examples
///
/// ```
/// use buffer_transform::{ByteTransformer, ShuffleTransformer};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let shuffled = ShuffleTransformer::new(StdRng::seed_from_u64(42))
///     .transform(&[1, 2, 3, 4, 5])?;
/// let replayed = ShuffleTransformer::new(StdRng::seed_from_u64(42))
///     .transform(&[1, 2, 3, 4, 5])?;
/// assert_eq!(shuffled, replayed);
/// # Ok::<(), buffer_transform::TransformError>(())
/// ```
#[derive(Debug)]
pub struct ShuffleTransformer<R: RngCore> {
    rng: RefCell<R>,
}

impl<R: RngCore> ShuffleTransformer<R> {
    /// Creates a transformer drawing swap indices from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl<R: RngCore> ByteTransformer for ShuffleTransformer<R> {
    fn transform_owned(&self, mut buffer: Vec<u8>) -> Result<Vec<u8>, TransformError> {
        util::shuffle(&mut buffer, &mut *self.rng.borrow_mut());
        Ok(buffer)
    }
}
