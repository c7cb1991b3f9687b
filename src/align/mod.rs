//! Pairwise alignment: DP forward passes and traceback.

pub mod banded;
pub mod matrix;
pub mod result;
pub mod traceback;
pub mod unrestricted;

pub use banded::banded_align;
pub use result::{Alignment, PairAlignment, PairwiseGrid, Score};
pub use unrestricted::unrestricted_align;
