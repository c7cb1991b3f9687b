//! nwpair: pairwise edit-distance alignment over a sequence collection.
//!
//! Computes minimum-cost global alignments between every pair of sequences
//! in a collection, either over the full dynamic-programming matrix or
//! restricted to a fixed diagonal band, and reconstructs printable alignment
//! strings from the recorded per-cell predecessors.
//!
//! The crate is a pure computation core: sequence loading and result
//! presentation belong to the caller, which receives scores through the
//! [`driver::ResultsSink`] trait and the returned [`align::PairwiseGrid`].

pub mod align;
pub mod driver;
pub mod scoring;

pub use align::{banded_align, unrestricted_align};
pub use align::{Alignment, PairAlignment, PairwiseGrid, Score};
pub use align::result::{DISPLAY_LIMIT, NO_ALIGNMENT};
pub use driver::{align_with_scheme, ResultsSink};
pub use driver::align as align_collection;
pub use scoring::ScoringScheme;
