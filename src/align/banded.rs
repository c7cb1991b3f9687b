//! Band-restricted edit-distance alignment.
//!
//! Only cells within `band_halfwidth` of the main diagonal are computed.
//! Row `i` is stored compacted to `2 * band_halfwidth + 1` columns, where
//! compacted column `j` maps to true column `j + i - band_halfwidth`. In
//! this encoding a diagonal step keeps the compacted column constant, an
//! insertion reads from `(i-1, j+1)` and a deletion from `(i, j-1)`.

use super::matrix::{pick_move, CostMatrix, Origin, INF};
use super::result::{Alignment, Score};
use super::traceback::reconstruct_banded;
use crate::scoring::ScoringScheme;

/// Align the bounded prefixes of two sequences inside a diagonal band.
///
/// Linear time and space in the bounded length, at the price of missing any
/// alignment whose diagonal drift exceeds `scheme.band_halfwidth`. When the
/// bounded lengths alone rule out an in-band alignment the sentinel
/// [`Alignment::infeasible`] is returned; that is an expected outcome for
/// pairs of very different length, not an error. Callers aligning two
/// sequences of unequal length should pass the longer one as `horizontal`.
pub fn banded_align(
    horizontal: &[u8],
    vertical: &[u8],
    align_length: usize,
    scheme: &ScoringScheme,
) -> Alignment {
    let k = scheme.band_halfwidth;
    let max_j = horizontal.len().min(align_length);
    let cols_full = max_j + 1;
    let rows = vertical.len().min(align_length) + 1;

    // The band can never reach the far corner when the horizontal sequence
    // outruns the vertical one by more than the half-width.
    if cols_full > rows + k {
        return Alignment::infeasible();
    }

    let (matrix, ret_j) = band_forward(horizontal, vertical, rows, max_j, scheme);

    // No in-band cell in the final row: the vertical sequence outran the
    // band instead. Same sentinel, discovered during the fill.
    if ret_j == 0 {
        return Alignment::infeasible();
    }
    let terminal = matrix.cost(rows - 1, ret_j - 1);
    if terminal > INF / 2 {
        return Alignment::infeasible();
    }

    matrix.assert_start(0, k);
    let (horizontal_aln, vertical_aln) =
        reconstruct_banded(&matrix, horizontal, vertical, ret_j - 1, k);

    Alignment {
        score: Score::Finite(terminal),
        horizontal: horizontal_aln,
        vertical: vertical_aln,
    }
}

/// Forward pass over the compacted band. Returns the filled matrix and
/// `ret_j`, one past the last in-band compacted column visited in the final
/// row; `ret_j - 1` is the terminal cell for traceback and 0 means the
/// final row was never entered.
fn band_forward(
    horizontal: &[u8],
    vertical: &[u8],
    rows: usize,
    max_j: usize,
    scheme: &ScoringScheme,
) -> (CostMatrix, usize) {
    let k = scheme.band_halfwidth;
    let band_cols = 2 * k + 1;

    let mut matrix = CostMatrix::new(rows, band_cols);
    matrix.set(0, k, 0, Origin::Start);

    // A single-row matrix terminates at its own start cell.
    let mut ret_j = if rows == 1 { k + 1 } else { 0 };

    for i in 0..rows {
        for j in 0..band_cols {
            if i == 0 && j <= k {
                continue;
            }
            let adjust_j = (j + i) as isize - k as isize;
            if adjust_j < 0 || adjust_j as usize > max_j {
                continue;
            }
            let adjust_j = adjust_j as usize;
            if i == rows - 1 {
                ret_j = j + 1;
            }

            let diagonal = if i > 0 && adjust_j > 0 {
                let step = if horizontal[adjust_j - 1] == vertical[i - 1] {
                    scheme.match_bonus
                } else {
                    scheme.sub_penalty
                };
                matrix.cost(i - 1, j) + step
            } else {
                INF
            };
            let above = if i > 0 && j + 1 < band_cols {
                matrix.cost(i - 1, j + 1) + scheme.indel_penalty
            } else {
                INF
            };
            let left = if j > 0 {
                matrix.cost(i, j - 1) + scheme.indel_penalty
            } else {
                INF
            };
            let (cost, origin) = pick_move(diagonal, above, left);
            matrix.set(i, j, cost, origin);
        }
    }

    (matrix, ret_j)
}
