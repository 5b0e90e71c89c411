use crate::*;

/// True iff `a` and `b` share an edge. Diagonal or distant pairs are never swappable.
pub const fn is_valid_swap(a: Coord2, b: Coord2) -> bool {
    is_adjacent(a, b)
}

/// Swaps two cells for the lifetime of the probe and swaps them back on drop.
struct SwapProbe<'a> {
    board: &'a mut Board,
    a: Coord2,
    b: Coord2,
}

impl<'a> SwapProbe<'a> {
    fn new(board: &'a mut Board, a: Coord2, b: Coord2) -> Self {
        board.swap_unchecked(a, b);
        Self { board, a, b }
    }

    fn creates_match(&self) -> bool {
        has_any_match(self.board)
    }
}

impl Drop for SwapProbe<'_> {
    fn drop(&mut self) {
        self.board.swap_unchecked(self.a, self.b);
    }
}

fn swap_creates_match(board: &mut Board, a: Coord2, b: Coord2) -> bool {
    SwapProbe::new(board, a, b).creates_match()
}

/// Start-of-game move check. Only swaps towards the upper and left
/// neighbours are probed, and only from cells off the matching board edges;
/// the reverse directions are covered by symmetry.
fn has_opening_move(board: &mut Board) -> bool {
    let (rows, cols) = board.size();
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            if row > 0 && row < rows - 1 && swap_creates_match(board, coords, (row - 1, col)) {
                log::trace!("opening move {:?} <-> {:?}", coords, (row - 1, col));
                return true;
            }
            if col > 0 && col < cols - 1 && swap_creates_match(board, coords, (row, col - 1)) {
                log::trace!("opening move {:?} <-> {:?}", coords, (row, col - 1));
                return true;
            }
        }
    }
    false
}

/// First neighbour swap, scanning row-major towards the right and downwards, that would form a match.
fn first_move(board: &mut Board) -> Option<(Coord2, Coord2)> {
    let size = board.size();
    for row in 0..size.0 {
        for col in 0..size.1 {
            let coords = (row, col);
            for direction in [Direction::Right, Direction::Down] {
                let Some(other) = direction.step(coords, size) else {
                    continue;
                };
                if swap_creates_match(board, coords, other) {
                    return Some((coords, other));
                }
            }
        }
    }
    None
}

/// Generates boards until one has no runs, then makes sure it offers a move.
fn fair_board(size: Coord2, generator: &mut impl CellGenerator) -> Board {
    let mut board = Board::generate(size, generator);
    let mut attempts: u32 = 1;
    while has_any_match(&board) {
        log::trace!("generated board #{} already has a match, regenerating", attempts);
        board = Board::generate(size, generator);
        attempts += 1;
    }
    log::debug!(
        "generated {}x{} board of {} gems without matches after {} attempt(s)",
        size.0,
        size.1,
        generator.palette().size(),
        attempts
    );

    if !has_opening_move(&mut board) {
        if board.rows() >= 1 && board.cols() >= 2 {
            // Not re-checked: the forced swap may still leave no move.
            log::warn!("No opening move found, forcing swap of (0, 0) and (0, 1)");
            board.swap_unchecked((0, 0), (0, 1));
        } else {
            log::warn!("No opening move found and board is too narrow to force one");
        }
    }

    board
}

/// Owns one board and its score. Every mutating call runs to completion,
/// so callers never observe empty cells or pending matches.
#[derive(Clone, Debug)]
pub struct MatchEngine<G = RandomCellGenerator> {
    board: Board,
    score: Score,
    tile_reward: Score,
    generator: G,
}

impl MatchEngine<RandomCellGenerator> {
    pub fn new(config: EngineConfig) -> Self {
        let generator = RandomCellGenerator::new(config.seed, config.palette);
        Self::with_generator(config, generator)
    }
}

impl<G: CellGenerator> MatchEngine<G> {
    /// Builds a fair board from `generator`. `config.seed` and
    /// `config.palette` are ignored; the generator decides both.
    pub fn with_generator(config: EngineConfig, mut generator: G) -> Self {
        let board = fair_board(config.board_size(), &mut generator);
        Self {
            board,
            score: 0,
            tile_reward: config.tile_reward,
            generator,
        }
    }

    /// Adopts an explicit board as-is, without the start-of-game checks.
    /// Runs already present stay until the next cascade.
    pub fn from_board(board: Board, generator: G, tile_reward: Score) -> Self {
        Self {
            board,
            score: 0,
            tile_reward,
            generator,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tile_reward(&self) -> Score {
        self.tile_reward
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.get(coords)
    }

    /// Player move. Out-of-range positions are an error and non-neighbours
    /// are rejected, both without touching the board. Any neighbour swap is
    /// committed, whether or not it forms a match, and then resolved.
    pub fn attempt_swap(&mut self, a: Coord2, b: Coord2) -> Result<SwapOutcome> {
        let a = self.board.validate_coords(a)?;
        let b = self.board.validate_coords(b)?;

        if !is_valid_swap(a, b) {
            log::debug!("rejected swap {:?} <-> {:?}", a, b);
            return Ok(SwapOutcome::Rejected);
        }

        self.board.swap_unchecked(a, b);
        let report = self.resolve();
        log::debug!("swap {:?} <-> {:?} resolved: {:?}", a, b, report);
        Ok(SwapOutcome::Committed(report))
    }

    /// Removes every run, drops the remaining gems, refills from the top,
    /// and repeats until the board is stable.
    pub fn resolve(&mut self) -> CascadeReport {
        let mut report = CascadeReport::default();

        loop {
            let matches = find_matches(&self.board);
            if matches.is_empty() {
                break;
            }

            for coords in matches.iter() {
                self.board.clear(coords);
            }
            let points = Score::from(matches.len()).saturating_mul(self.tile_reward);
            self.score = self.score.saturating_add(points);

            self.board.collapse();
            self.board.refill(&mut self.generator);

            report.record_pass(matches.len(), points);
            log::debug!(
                "cascade pass {}: cleared {} cells for {} points",
                report.passes,
                matches.len(),
                points
            );
        }

        report
    }

    /// A neighbour swap that would form a match right now, if any.
    pub fn find_move(&self) -> Option<(Coord2, Coord2)> {
        let mut scratch = self.board.clone();
        first_move(&mut scratch)
    }

    pub fn has_move(&self) -> bool {
        self.find_move().is_some()
    }
}
