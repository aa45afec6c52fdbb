//! The transform variants.
//!
//! Each submodule hosts one self-contained transform. Variants do not depend
//! on each other; they share only the [`crate::util`] helpers and the
//! [`crate::transform::ByteTransformer`] contract.

pub mod bitwise;
pub mod concat;
pub mod copy_range;
pub mod negate;
pub mod resize;
pub mod reverse;
pub mod shift;
pub mod shuffle;
pub mod sort;
