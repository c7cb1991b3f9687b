//! Scoring constants for edit-distance alignment.

/// Scoring scheme for pairwise edit-distance alignment.
///
/// Costs are minimized: a match carries a negative bonus, substitutions and
/// indels carry positive penalties. `band_halfwidth` bounds the diagonal
/// drift considered by the banded aligner.
///
/// One immutable value is built per alignment run and injected into both
/// aligners; nothing here is process-wide mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    /// Bonus added when the aligned characters are identical (negative)
    pub match_bonus: i32,
    /// Penalty for aligning two different characters
    pub sub_penalty: i32,
    /// Penalty for inserting or deleting one character
    pub indel_penalty: i32,
    /// Maximum diagonal drift allowed in banded mode
    pub band_halfwidth: usize,
}

impl Default for ScoringScheme {
    /// Needleman-Wunsch-style scoring used throughout:
    /// match -3, substitution +1, indel +5, band half-width 3.
    fn default() -> Self {
        Self {
            match_bonus: -3,
            sub_penalty: 1,
            indel_penalty: 5,
            band_halfwidth: 3,
        }
    }
}
