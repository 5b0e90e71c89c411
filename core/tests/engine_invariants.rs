use match3_core::*;
use rand::prelude::*;

const SEEDS: u64 = 48;
const MOVES_PER_GAME: usize = 60;

fn assert_stable(board: &Board, context: &str) {
    assert!(!has_any_match(board), "{context}: board still has a run");
    assert_eq!(board.empty_count(), 0, "{context}: board has empty cells");
}

fn random_pair(rng: &mut SmallRng, size: Coord2) -> (Coord2, Coord2) {
    let a = (rng.random_range(0..size.0), rng.random_range(0..size.1));
    let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    let b = direction.step(a, size).unwrap_or(a);
    (a, b)
}

#[test]
fn fresh_boards_have_no_runs_and_a_move() {
    for seed in 0..SEEDS {
        let engine = MatchEngine::new(EngineConfig::classic(seed));

        assert_stable(engine.board(), &format!("seed {seed}"));
        assert!(engine.has_move(), "seed {seed}: no opening move");
        assert_eq!(engine.score(), 0);
    }
}

#[test]
fn non_square_boards_start_fair() {
    for (seed, size) in [(1, (5, 9)), (2, (12, 4)), (3, (3, 3)), (4, (16, 16))] {
        let engine = MatchEngine::new(EngineConfig::new(size, 6, seed));

        assert_eq!(engine.size(), size);
        assert_stable(engine.board(), &format!("size {size:?}"));
    }
}

#[test]
fn random_play_keeps_board_stable_and_score_exact() {
    for seed in 0..SEEDS {
        let mut engine = MatchEngine::new(EngineConfig::classic(seed));
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);

        for turn in 0..MOVES_PER_GAME {
            let (a, b) = random_pair(&mut rng, engine.size());
            let before = engine.score();

            let outcome = engine.attempt_swap(a, b).unwrap();

            let context = format!("seed {seed} turn {turn}");
            assert_stable(engine.board(), &context);
            match outcome {
                SwapOutcome::Rejected => {
                    assert_eq!(a, b, "{context}: neighbour swap was rejected");
                    assert_eq!(engine.score(), before);
                }
                SwapOutcome::Committed(report) => {
                    assert_eq!(report.points, TILE_REWARD * Score::from(report.cleared));
                    assert_eq!(engine.score(), before + report.points, "{context}");
                }
            }
        }
    }
}

#[test]
fn hinted_move_always_scores() {
    for seed in 0..SEEDS {
        let mut engine = MatchEngine::new(EngineConfig::classic(seed));
        let (a, b) = engine.find_move().expect("fresh board offers a move");

        let report = engine.attempt_swap(a, b).unwrap().report().unwrap();

        assert!(report.cleared >= 3, "seed {seed}");
        assert_eq!(engine.score(), report.points);
    }
}

#[test]
fn rejected_swaps_change_nothing() {
    let mut engine = MatchEngine::new(EngineConfig::classic(11));
    let board = engine.board().clone();

    for (a, b) in [
        ((0, 0), (1, 1)),
        ((0, 0), (0, 2)),
        ((4, 4), (4, 4)),
        ((7, 0), (0, 7)),
    ] {
        assert_eq!(engine.attempt_swap(a, b), Ok(SwapOutcome::Rejected));
    }
    assert_eq!(engine.attempt_swap((0, 0), (0, 8)), Err(GameError::OutOfBounds));
    assert_eq!(engine.attempt_swap((8, 0), (7, 0)), Err(GameError::OutOfBounds));

    assert_eq!(engine.board(), &board);
    assert_eq!(engine.score(), 0);
}

#[test]
fn engines_are_independent() {
    let mut a = MatchEngine::new(EngineConfig::classic(5));
    let b = MatchEngine::new(EngineConfig::classic(5));
    let (first, second) = a.find_move().unwrap();

    a.attempt_swap(first, second).unwrap();

    assert!(a.score() > 0);
    assert_eq!(b.score(), 0);
    assert_ne!(a.board(), b.board());
}

#[test]
fn collapse_keeps_surviving_order_per_column() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut generator = RandomCellGenerator::new(77, Palette::CLASSIC);

    for _ in 0..32 {
        let mut board = Board::generate((8, 6), &mut generator);
        for row in 0..8 {
            for col in 0..6 {
                if rng.random_bool(0.4) {
                    board.set((row, col), Cell::Empty).unwrap();
                }
            }
        }
        let survivors = |board: &Board, col: Coord| -> Vec<Cell> {
            (0..board.rows())
                .map(|row| board[(row, col)])
                .filter(|cell| !cell.is_empty())
                .collect()
        };
        let before: Vec<_> = (0..6).map(|col| survivors(&board, col)).collect();
        let empties = board.empty_count();

        board.collapse();

        assert_eq!(board.empty_count(), empties);
        for col in 0..6 {
            assert_eq!(survivors(&board, col), before[col as usize]);
            let gap = board.rows() as usize - before[col as usize].len();
            for row in 0..board.rows() {
                assert_eq!(board[(row, col)].is_empty(), (row as usize) < gap);
            }
        }
    }
}

#[test]
fn single_row_scenario_scores_thirty() {
    let red = Cell::Gem(Gem::RED);
    let blue = Cell::Gem(Gem::BLUE);
    let board = Board::from_rows(&[[red, red, blue, blue, blue]]).unwrap();

    assert_eq!(
        find_matches(&board).iter().collect::<Vec<_>>(),
        [(0, 2), (0, 3), (0, 4)]
    );

    let refill = ScriptedCellGenerator::new([Gem::YELLOW, Gem::GREEN, Gem::ORANGE]);
    let mut engine = MatchEngine::from_board(board, refill, TILE_REWARD);
    let report = engine.resolve();

    assert_eq!(report.cleared, 3);
    assert_eq!(engine.score(), 30);
    assert_eq!(engine.cell_at((0, 0)), Ok(red));
    assert_eq!(engine.cell_at((0, 1)), Ok(red));
    assert_eq!(engine.generator().drawn(), 3);
    assert_stable(engine.board(), "single row");
}
