use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells, indexed by `(row, col)` with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_array(cells)
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Board {
    /// Fills every cell independently from `generator`, row by row.
    pub fn generate(size: Coord2, generator: &mut impl CellGenerator) -> Self {
        let cells = Array2::from_shape_simple_fn(size.to_nd_index(), || generator.next_cell());
        Self { cells }
    }

    pub fn from_array(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }

        let flat: Vec<Cell> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let cells = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_array(cells)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions are bounded by `Coord::MAX` on every construction path
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = cell;
        Ok(())
    }

    /// Exchanges two cells without any adjacency or legality check.
    pub fn swap(&mut self, a: Coord2, b: Coord2) -> Result<()> {
        let a = self.validate_coords(a)?;
        let b = self.validate_coords(b)?;
        self.swap_unchecked(a, b);
        Ok(())
    }

    pub(crate) fn swap_unchecked(&mut self, a: Coord2, b: Coord2) {
        self.cells.swap(a.to_nd_index(), b.to_nd_index());
    }

    pub(crate) fn clear(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()] = Cell::Empty;
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// All cells in row-major order together with their position.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Gravity: packs every column's gems to the bottom, keeping their
    /// top-to-bottom order, and leaves the vacated slots empty at the top.
    /// Returns how many gems moved.
    pub fn collapse(&mut self) -> CellCount {
        let (rows, cols) = self.cells.dim();
        let mut moved: CellCount = 0;

        for col in 0..cols {
            let mut column = self.cells.column_mut(col);
            let mut landing = rows;
            for row in (0..rows).rev() {
                if column[row].is_empty() {
                    continue;
                }
                landing -= 1;
                if landing != row {
                    let cell = column[row];
                    column[landing] = cell;
                    column[row] = Cell::Empty;
                    moved = moved.saturating_add(1);
                }
            }
        }

        moved
    }

    /// Assigns a fresh gem to every empty cell. Returns how many were filled.
    pub fn refill(&mut self, generator: &mut impl CellGenerator) -> CellCount {
        let mut filled: CellCount = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_empty()) {
            *cell = generator.next_cell();
            filled = filled.saturating_add(1);
        }
        filled
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
