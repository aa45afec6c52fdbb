#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
pub mod error;
pub mod transform;
pub mod transforms;
pub mod util;

// Re-export main functionality at crate root
pub use error::TransformError;
pub use transform::ByteTransformer;
pub use transforms::bitwise::{BitwiseMode, BitwiseTransformer};
pub use transforms::concat::ConcatTransformer;
pub use transforms::copy_range::CopyTransformer;
pub use transforms::negate::NegateTransformer;
pub use transforms::resize::ResizeTransformer;
pub use transforms::reverse::ReverseTransformer;
pub use transforms::shift::{ShiftDirection, ShiftTransformer};
pub use transforms::shuffle::ShuffleTransformer;
pub use transforms::sort::SortTransformer;
