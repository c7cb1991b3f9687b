//! Collection-level driver: aligns every pair (i, j) with i <= j and
//! forwards each score to the caller's results sink.

use log::{debug, info};

use crate::align::banded::banded_align;
use crate::align::result::{PairAlignment, PairwiseGrid, Score};
use crate::align::unrestricted::unrestricted_align;
use crate::scoring::ScoringScheme;

/// Receives per-cell results as they are computed.
///
/// The display itself (table widget, terminal, file) is the implementor's
/// concern; the driver only pushes scores and redraw hints and never retries
/// a sink.
pub trait ResultsSink {
    /// Record the score for pair (i, j). `Score::Infinite` marks a pair the
    /// band could not cover.
    fn set_cell(&mut self, i: usize, j: usize, score: Score);

    /// Hint that the sink may redraw; called once per computed cell.
    fn refresh(&mut self);
}

/// Align every pair (i, j), i <= j, of `sequences` truncated to
/// `align_length` characters, under the default scoring constants.
///
/// Pairs are computed strictly in row-major order, single-threaded, with one
/// cost matrix live at a time. The lower triangle of the returned grid is
/// left unset; it is the symmetric mirror of the upper triangle.
pub fn align(
    sequences: &[Vec<u8>],
    sink: &mut dyn ResultsSink,
    banded: bool,
    align_length: usize,
) -> PairwiseGrid {
    align_with_scheme(sequences, sink, banded, align_length, &ScoringScheme::default())
}

/// [`align`] with an explicit scoring scheme instead of the defaults.
pub fn align_with_scheme(
    sequences: &[Vec<u8>],
    sink: &mut dyn ResultsSink,
    banded: bool,
    align_length: usize,
    scheme: &ScoringScheme,
) -> PairwiseGrid {
    let n = sequences.len();
    info!(
        "aligning {n} sequences pairwise ({} mode, bound {align_length})",
        if banded { "banded" } else { "unrestricted" }
    );

    let mut grid = PairwiseGrid::new(n);
    for i in 0..n {
        for j in i..n {
            let entry = align_pair(sequences, i, j, banded, align_length, scheme);
            debug!("pair ({i}, {j}): score {}", entry.score);
            sink.set_cell(i, j, entry.score);
            sink.refresh();
            grid.set(i, j, entry);
        }
    }
    grid
}

fn align_pair(
    sequences: &[Vec<u8>],
    i: usize,
    j: usize,
    banded: bool,
    align_length: usize,
    scheme: &ScoringScheme,
) -> PairAlignment {
    if i == j {
        return self_alignment(&sequences[i], align_length, scheme);
    }
    let (seq_i, seq_j) = (&sequences[i], &sequences[j]);
    if banded {
        // The band assumes the horizontal sequence is the one that may run
        // ahead: pass the longer of the two first, then swap the aligned
        // strings back into (i, j) order.
        if seq_i.len() >= seq_j.len() {
            let aln = banded_align(seq_i, seq_j, align_length, scheme);
            PairAlignment::new(aln.score, &aln.horizontal, &aln.vertical)
        } else {
            let aln = banded_align(seq_j, seq_i, align_length, scheme);
            PairAlignment::new(aln.score, &aln.vertical, &aln.horizontal)
        }
    } else {
        let aln = unrestricted_align(seq_i, seq_j, align_length, scheme);
        PairAlignment::new(aln.score, &aln.horizontal, &aln.vertical)
    }
}

/// Diagonal pairs have a closed form: every bounded character matches
/// itself, and the display strings are the sequence itself.
fn self_alignment(sequence: &[u8], align_length: usize, scheme: &ScoringScheme) -> PairAlignment {
    let bounded = sequence.len().min(align_length);
    let score = Score::Finite(scheme.match_bonus * bounded as i32);
    let text = String::from_utf8_lossy(sequence);
    PairAlignment::new(score, &text, &text)
}
