//! Cost and predecessor storage for the DP forward pass.

/// Cost sentinel for unreachable or not-yet-computed cells.
///
/// Half of `i32::MAX` so that adding a step penalty to an unreachable
/// neighbor cannot overflow; real alignment costs stay far below `INF / 2`.
pub const INF: i32 = i32::MAX / 2;

/// Predecessor direction recorded per DP cell, consumed during traceback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The alignment origin; exactly one cell per matrix
    Start,
    /// Gap on the vertical sequence (horizontal character consumed)
    Left,
    /// Gap on the horizontal sequence (vertical character consumed)
    Above,
    /// Match or substitution
    Diagonal,
    /// Not computed / outside the band
    Unset,
}

/// Dense cost + predecessor matrix, row-major over flat buffers.
///
/// The unrestricted aligner dimensions it `rows x cols`; the banded aligner
/// dimensions it `rows x (2 * band_halfwidth + 1)` in compacted coordinates.
/// Built fresh per aligned pair, consumed once by traceback, then dropped.
pub struct CostMatrix {
    cost: Vec<i32>,
    origin: Vec<Origin>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cost: vec![INF; rows * cols],
            origin: vec![Origin::Unset; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> i32 {
        self.cost[row * self.cols + col]
    }

    #[inline]
    pub fn origin(&self, row: usize, col: usize) -> Origin {
        self.origin[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cost: i32, origin: Origin) {
        let idx = row * self.cols + col;
        self.cost[idx] = cost;
        self.origin[idx] = origin;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Start invariant: after the forward pass the origin cell must hold
    /// cost 0 and `Origin::Start`. Anything else means the fill is defective.
    pub fn assert_start(&self, row: usize, col: usize) {
        assert!(
            self.cost(row, col) == 0 && self.origin(row, col) == Origin::Start,
            "start cell ({}, {}) holds cost {} / {:?} after forward pass",
            row,
            col,
            self.cost(row, col),
            self.origin(row, col),
        );
    }
}

/// Pick the cheapest move with the fixed preference diagonal > above > left.
///
/// The preference is observable behavior: it decides which of several
/// equally-costed alignments the traceback reproduces.
#[inline]
pub(crate) fn pick_move(diagonal: i32, above: i32, left: i32) -> (i32, Origin) {
    if diagonal <= above && diagonal <= left {
        (diagonal, Origin::Diagonal)
    } else if above <= left {
        (above, Origin::Above)
    } else {
        (left, Origin::Left)
    }
}
