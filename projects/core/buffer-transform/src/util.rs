//! Small buffer helpers shared by the transforms.

use alloc::vec::Vec;
use rand::{Rng, RngCore};

/// Returns the ordered concatenation of two byte slices as a new buffer.
pub fn concat(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}

/// Shuffles `bytes` in place with a Fisher-Yates walk driven by `rng`.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `[0, i]`. Given the same generator state and
/// input, the resulting permutation is fully reproducible.
pub fn shuffle<R: RngCore>(bytes: &mut [u8], rng: &mut R) {
    for i in (1..bytes.len()).rev() {
        let j = rng.gen_range(0..=i);
        bytes.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[], &[])]
    #[case(&[1, 2], &[], &[1, 2])]
    #[case(&[], &[3], &[3])]
    #[case(&[1, 2], &[3, 4, 5], &[1, 2, 3, 4, 5])]
    fn concat_joins_in_order(#[case] a: &[u8], #[case] b: &[u8], #[case] expected: &[u8]) {
        assert_eq!(concat(a, b), expected);
    }

    #[rstest]
    fn shuffle_is_reproducible_for_same_seed(
        #[values(0u64, 1, 0xDEAD_BEEF)] seed: u64,
    ) {
        let mut first: Vec<u8> = (0..64).collect();
        let mut second = first.clone();

        shuffle(&mut first, &mut StdRng::seed_from_u64(seed));
        shuffle(&mut second, &mut StdRng::seed_from_u64(seed));

        assert_eq!(first, second);
    }

    #[rstest]
    fn shuffle_preserves_the_multiset_of_bytes() {
        let original: Vec<u8> = (0..=255).collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut StdRng::seed_from_u64(7));

        let mut restored = shuffled.clone();
        restored.sort_unstable();
        assert_eq!(restored, original);
    }

    #[rstest]
    #[case(&mut [])]
    #[case(&mut [42])]
    fn shuffle_of_trivial_buffers_is_identity(#[case] bytes: &mut [u8]) {
        let before = bytes.to_vec();
        shuffle(bytes, &mut StdRng::seed_from_u64(0));
        assert_eq!(bytes, before.as_slice());
    }
}
