//! Alignment result types and the pairwise results grid.

use std::fmt;

/// Display cap for alignment strings. Scores always reflect the full
/// bounded alignment; only the stored strings are truncated.
pub const DISPLAY_LIMIT: usize = 100;

/// Sentinel alignment text reported when the band cannot cover a pair.
pub const NO_ALIGNMENT: &str = "No Alignment Possible";

/// Alignment score: a finite edit cost, or the explicit "no alignment
/// possible" infinity reported by the banded aligner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Finite(i32),
    Infinite,
}

impl Score {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Score::Infinite)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Finite(score) => write!(f, "{score}"),
            Score::Infinite => write!(f, "inf"),
        }
    }
}

/// Raw output of one pairwise alignment, before display truncation.
///
/// `horizontal` and `vertical` are the two aligned sequences with `-` gap
/// markers, in the orientation the aligner was called with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub score: Score,
    pub horizontal: String,
    pub vertical: String,
}

impl Alignment {
    /// The sentinel returned when no alignment exists within the band.
    pub fn infeasible() -> Self {
        Self {
            score: Score::Infinite,
            horizontal: NO_ALIGNMENT.to_string(),
            vertical: NO_ALIGNMENT.to_string(),
        }
    }
}

/// One populated grid entry: the score plus display-truncated alignment
/// strings, in (i, j) collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairAlignment {
    pub score: Score,
    pub seq_i: String,
    pub seq_j: String,
}

impl PairAlignment {
    /// Build a grid entry, truncating both strings to the display cap.
    pub fn new(score: Score, seq_i: &str, seq_j: &str) -> Self {
        Self {
            score,
            seq_i: truncate(seq_i),
            seq_j: truncate(seq_j),
        }
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(DISPLAY_LIMIT).collect()
}

/// N x N upper-triangular table of pairwise results.
///
/// Entries with row > column are never computed and stay `None`; the
/// relationship is symmetric and the lower triangle is the caller's to
/// infer or leave blank.
#[derive(Debug, Clone)]
pub struct PairwiseGrid {
    cells: Vec<Option<PairAlignment>>,
    n: usize,
}

impl PairwiseGrid {
    pub fn new(n: usize) -> Self {
        Self {
            cells: vec![None; n * n],
            n,
        }
    }

    /// Collection size N (the grid is N x N).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&PairAlignment> {
        self.cells[i * self.n + j].as_ref()
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, entry: PairAlignment) {
        self.cells[i * self.n + j] = Some(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_display() {
        assert_eq!(Score::Finite(-21).to_string(), "-21");
        assert_eq!(Score::Finite(0).to_string(), "0");
        assert_eq!(Score::Infinite.to_string(), "inf");
        assert!(Score::Infinite.is_infinite());
        assert!(!Score::Finite(5).is_infinite());
    }

    #[test]
    fn test_pair_alignment_truncates_display_strings() {
        let long = "A".repeat(150);
        let entry = PairAlignment::new(Score::Finite(-450), &long, &long);
        assert_eq!(entry.seq_i.len(), DISPLAY_LIMIT);
        assert_eq!(entry.seq_j.len(), DISPLAY_LIMIT);
        assert_eq!(entry.score, Score::Finite(-450));
    }

    #[test]
    fn test_short_strings_kept_whole() {
        let entry = PairAlignment::new(Score::Finite(-3), "AATCC", "ACACA");
        assert_eq!(entry.seq_i, "AATCC");
        assert_eq!(entry.seq_j, "ACACA");
    }

    #[test]
    fn test_infeasible_sentinel() {
        let aln = Alignment::infeasible();
        assert_eq!(aln.score, Score::Infinite);
        assert_eq!(aln.horizontal, NO_ALIGNMENT);
        assert_eq!(aln.vertical, NO_ALIGNMENT);
    }

    #[test]
    fn test_grid_lower_triangle_stays_unset() {
        let mut grid = PairwiseGrid::new(3);
        grid.set(0, 2, PairAlignment::new(Score::Finite(1), "A", "C"));
        assert_eq!(grid.len(), 3);
        assert!(grid.get(0, 2).is_some());
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(1, 1).is_none());
    }
}
