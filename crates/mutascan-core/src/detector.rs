use crate::grid::Grid;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::trace;

/// Identical bases needed to form one sequence.
pub const RUN_LENGTH: usize = 4;

/// A grid is mutant once the sequence count exceeds this.
pub const MUTANT_THRESHOLD: usize = 1;

/// Scan directions, in the order they are tested for every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Down and to the right.
    DiagonalDown,
    /// Up and to the right.
    DiagonalUp,
}

impl Direction {
    /// Whether a run starting at `(r, c)` stays inside an `n x n` grid.
    #[inline(always)]
    pub fn fits(self, r: usize, c: usize, n: usize) -> bool {
        let Some(last) = n.checked_sub(RUN_LENGTH) else {
            return false;
        };
        match self {
            Direction::Horizontal => c <= last,
            Direction::Vertical => r <= last,
            Direction::DiagonalDown => r <= last && c <= last,
            Direction::DiagonalUp => r >= RUN_LENGTH - 1 && c <= last,
        }
    }

    #[inline(always)]
    fn step(self, r: usize, c: usize, k: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (r, c + k),
            Direction::Vertical => (r + k, c),
            Direction::DiagonalDown => (r + k, c + k),
            Direction::DiagonalUp => (r - k, c + k),
        }
    }
}

/// One run of `RUN_LENGTH` identical bases, identified by where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub base: char,
}

#[inline(always)]
fn run_at(grid: &Grid, r: usize, c: usize, dir: Direction) -> bool {
    let base = grid.get(r, c);
    (1..RUN_LENGTH).all(|k| {
        let (rr, cc) = dir.step(r, c, k);
        grid.get(rr, cc) == base
    })
}

/// Lazily yields every sequence in row-major order, testing
/// horizontal, vertical, diagonal-down, diagonal-up per cell.
///
/// Windows are counted per start cell and direction, never merged: a run of
/// five identical bases yields two overlapping sequences.
pub fn scan(grid: &Grid) -> impl Iterator<Item = Sequence> + '_ {
    let n = grid.size();
    (0..n)
        .flat_map(move |r| (0..n).map(move |c| (r, c)))
        .flat_map(move |(r, c)| {
            Direction::iter()
                .filter(move |dir| dir.fits(r, c, n) && run_at(grid, r, c, *dir))
                .map(move |direction| Sequence {
                    row: r,
                    col: c,
                    direction,
                    base: grid.get(r, c) as char,
                })
        })
}

/// Returns true as soon as a second sequence is confirmed; the rest of the
/// grid is never visited.
pub fn is_mutant(grid: &Grid) -> bool {
    if grid.size() < RUN_LENGTH {
        return false;
    }

    let mut found = 0;
    for seq in scan(grid) {
        found += 1;
        if found > MUTANT_THRESHOLD {
            trace!(
                "Mutant: sequence #{} {} at ({}, {})",
                found,
                seq.direction,
                seq.row,
                seq.col
            );
            return true;
        }
    }
    false
}

/// Entry point for unvalidated rows. Invalid input is simply not mutant.
pub fn is_mutant_rows<S: AsRef<str>>(rows: &[S]) -> bool {
    match Grid::from_rows(rows) {
        Ok(g) => is_mutant(&g),
        Err(e) => {
            trace!("Rejected before scan: {}", e);
            false
        }
    }
}

/// Full scan without early termination. Diagnostic only.
pub fn count_sequences(grid: &Grid) -> usize {
    scan(grid).count()
}

/// Cells covered by a sequence, starting cell first.
pub fn cells_of(seq: &Sequence) -> [(usize, usize); RUN_LENGTH] {
    let mut out = [(seq.row, seq.col); RUN_LENGTH];
    for (k, cell) in out.iter_mut().enumerate().skip(1) {
        *cell = seq.direction.step(seq.row, seq.col, k);
    }
    out
}
