//! Full-matrix edit-distance alignment.

use super::matrix::{pick_move, CostMatrix, Origin, INF};
use super::result::{Alignment, Score};
use super::traceback::reconstruct_unrestricted;
use crate::scoring::ScoringScheme;

/// Align the bounded prefixes of two sequences over the full DP grid.
///
/// `horizontal` spans the matrix columns and `vertical` the rows; both are
/// truncated to `align_length` characters before alignment. Every possible
/// alignment is considered, so this runs in O(rows * cols) time and space.
/// The returned strings carry `-` gap markers and are not display-truncated.
pub fn unrestricted_align(
    horizontal: &[u8],
    vertical: &[u8],
    align_length: usize,
    scheme: &ScoringScheme,
) -> Alignment {
    let cols = horizontal.len().min(align_length) + 1;
    let rows = vertical.len().min(align_length) + 1;

    let mut matrix = CostMatrix::new(rows, cols);
    matrix.set(0, 0, 0, Origin::Start);

    for i in 0..rows {
        for j in 0..cols {
            if i == 0 && j == 0 {
                continue;
            }
            let diagonal = if i > 0 && j > 0 {
                let step = if horizontal[j - 1] == vertical[i - 1] {
                    scheme.match_bonus
                } else {
                    scheme.sub_penalty
                };
                matrix.cost(i - 1, j - 1) + step
            } else {
                INF
            };
            let above = if i > 0 {
                matrix.cost(i - 1, j) + scheme.indel_penalty
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

    matrix.assert_start(0, 0);
    let (horizontal_aln, vertical_aln) = reconstruct_unrestricted(&matrix, horizontal, vertical);

    Alignment {
        score: Score::Finite(matrix.cost(rows - 1, cols - 1)),
        horizontal: horizontal_aln,
        vertical: vertical_aln,
    }
}
