/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for cell counts across a whole board.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`, row 0 at the top.
pub type Coord2 = (Coord, Coord);

/// Running score of an engine.
pub type Score = u64;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// True iff `a` and `b` are orthogonal neighbours (Manhattan distance exactly 1).
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    (a.0 == b.0 && a.1.abs_diff(b.1) == 1) || (a.1 == b.1 && a.0.abs_diff(b.0) == 1)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Moves `coords` one cell in this direction, returning a value only when it remains in bounds.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        let (row, col) = coords;
        let (dr, dc) = self.delta();
        let (rows, cols) = bounds;

        let next_row = row.checked_add_signed(dr)?;
        if next_row >= rows {
            return None;
        }

        let next_col = col.checked_add_signed(dc)?;
        if next_col >= cols {
            return None;
        }

        Some((next_row, next_col))
    }
}
