//! Backtrace from a filled predecessor matrix to alignment strings.

use super::matrix::{CostMatrix, Origin};

const GAP: u8 = b'-';

/// Walk the unrestricted matrix backward from its bottom-right corner to the
/// start cell, returning the `(horizontal, vertical)` alignment strings with
/// `-` gap markers.
pub(crate) fn reconstruct_unrestricted(
    matrix: &CostMatrix,
    horizontal: &[u8],
    vertical: &[u8],
) -> (String, String) {
    let mut horizontal_aln: Vec<u8> = Vec::new();
    let mut vertical_aln: Vec<u8> = Vec::new();
    let mut v = matrix.rows() - 1;
    let mut h = matrix.cols() - 1;

    loop {
        match matrix.origin(v, h) {
            Origin::Start => break,
            Origin::Left => {
                vertical_aln.push(GAP);
                horizontal_aln.push(horizontal[h - 1]);
                h -= 1;
            }
            Origin::Above => {
                vertical_aln.push(vertical[v - 1]);
                horizontal_aln.push(GAP);
                v -= 1;
            }
            Origin::Diagonal => {
                vertical_aln.push(vertical[v - 1]);
                horizontal_aln.push(horizontal[h - 1]);
                v -= 1;
                h -= 1;
            }
            Origin::Unset => {
                panic!("predecessor matrix corrupt at ({v}, {h}): cell never filled")
            }
        }
    }

    finish(horizontal_aln, vertical_aln)
}

/// Banded variant. `terminal_col` is the compacted column recorded during
/// the forward pass; compacted column `h` in row `v` maps to true horizontal
/// position `v + h - band_halfwidth`. In this encoding a deletion keeps the
/// row, an insertion moves up and one compacted column right, and a diagonal
/// step moves up with the compacted column unchanged.
pub(crate) fn reconstruct_banded(
    matrix: &CostMatrix,
    horizontal: &[u8],
    vertical: &[u8],
    terminal_col: usize,
    band_halfwidth: usize,
) -> (String, String) {
    let mut horizontal_aln: Vec<u8> = Vec::new();
    let mut vertical_aln: Vec<u8> = Vec::new();
    let mut v = matrix.rows() - 1;
    let mut h = terminal_col;

    loop {
        let adjust_h = v + h - band_halfwidth;
        match matrix.origin(v, h) {
            Origin::Start => break,
            Origin::Left => {
                vertical_aln.push(GAP);
                horizontal_aln.push(horizontal[adjust_h - 1]);
                h -= 1;
            }
            Origin::Above => {
                vertical_aln.push(vertical[v - 1]);
                horizontal_aln.push(GAP);
                v -= 1;
                h += 1;
            }
            Origin::Diagonal => {
                vertical_aln.push(vertical[v - 1]);
                horizontal_aln.push(horizontal[adjust_h - 1]);
                v -= 1;
            }
            Origin::Unset => {
                panic!("predecessor matrix corrupt at ({v}, {h}): cell never filled")
            }
        }
    }

    finish(horizontal_aln, vertical_aln)
}

/// The walk emits characters end-to-start; flip both buffers once.
fn finish(mut horizontal_aln: Vec<u8>, mut vertical_aln: Vec<u8>) -> (String, String) {
    horizontal_aln.reverse();
    vertical_aln.reverse();
    (
        String::from_utf8_lossy(&horizontal_aln).into_owned(),
        String::from_utf8_lossy(&vertical_aln).into_owned(),
    )
}
