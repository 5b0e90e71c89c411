use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells taking part in at least one horizontal or vertical run of three or
/// more equal gems. A cell shared by two runs is marked once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMask {
    mask: Array2<bool>,
    count: CellCount,
}

impl MatchMask {
    pub fn from_mask(mask: Array2<bool>) -> Self {
        let count = mask
            .iter()
            .filter(|&&marked| marked)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self { mask, count }
    }

    pub fn len(&self) -> CellCount {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Marked positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mask
            .indexed_iter()
            .filter(|&(_, &marked)| marked)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MatchMask {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mask[coords.to_nd_index()]
    }
}

/// Start of every length-3 window, in one direction, whose cells all hold the same gem.
fn runs(board: &Board, horizontal: bool) -> impl Iterator<Item = [Coord2; 3]> + '_ {
    let (rows, cols) = board.size();
    let (outer, inner) = if horizontal { (rows, cols) } else { (cols, rows) };
    let at = move |line: Coord, offset: Coord| {
        if horizontal {
            (line, offset)
        } else {
            (offset, line)
        }
    };

    (0..outer).flat_map(move |line| {
        (0..inner.saturating_sub(2)).filter_map(move |offset| {
            let window = [at(line, offset), at(line, offset + 1), at(line, offset + 2)];
            let first = board[window[0]];
            (first.matches(board[window[1]]) && first.matches(board[window[2]])).then_some(window)
        })
    })
}

fn all_runs(board: &Board) -> impl Iterator<Item = [Coord2; 3]> + '_ {
    runs(board, true).chain(runs(board, false))
}

pub fn find_matches(board: &Board) -> MatchMask {
    let mut mask: Array2<bool> = Array2::default(board.size().to_nd_index());
    for window in all_runs(board) {
        for coords in window {
            mask[coords.to_nd_index()] = true;
        }
    }
    MatchMask::from_mask(mask)
}

pub fn has_any_match(board: &Board) -> bool {
    all_runs(board).next().is_some()
}
