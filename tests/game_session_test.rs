//! Integration test: full game sessions over the public engine API.
//!
//! Exercises grid generation, guess dispatch, win/loss detection, timing
//! and score recording the way the binary drives them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use minefield::game::{Game, GameStatus};
use minefield::grid::Grid;
use minefield::scores::{ScoreBoard, ScoreEntry};
use minefield::square::SquareKind;

fn seeded_grid(width: usize, height: usize, mines: usize, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::new(width, height, mines, &mut rng).expect("valid config")
}

/// Coordinates of every square matching the predicate.
fn find_squares(grid: &Grid, pred: impl Fn(SquareKind) -> bool) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if pred(grid.get(x, y).kind()) {
                found.push((x, y));
            }
        }
    }
    found
}

#[test]
fn test_generated_grids_hold_their_invariants() {
    for (seed, (w, h, m)) in [(1, (9, 9, 10)), (2, (25, 25, 99)), (3, (4, 7, 5)), (4, (1, 1, 1))] {
        let grid = seeded_grid(w, h, m, seed);

        let bombs = find_squares(&grid, |k| k == SquareKind::Bomb);
        assert_eq!(bombs.len(), m, "seed {}: exactly {} mines", seed, m);
        assert_eq!(grid.nonmine_count(), w * h - m);
        assert_eq!(grid.revealed_count(), 0);

        // Every Number square carries a count matching its neighborhood.
        for y in 0..h {
            for x in 0..w {
                let adjacent = bombs
                    .iter()
                    .filter(|&&(bx, by)| {
                        (bx, by) != (x, y)
                            && bx.abs_diff(x) <= 1
                            && by.abs_diff(y) <= 1
                    })
                    .count() as u8;

                match grid.get(x, y).kind() {
                    SquareKind::Bomb => {}
                    SquareKind::Empty => assert_eq!(adjacent, 0),
                    SquareKind::Number(n) => assert_eq!(n, adjacent),
                }
            }
        }
    }
}

#[test]
fn test_session_played_to_a_win() {
    let grid = seeded_grid(9, 9, 10, 42);
    let safe = find_squares(&grid, |k| k != SquareKind::Bomb);
    let mut game = Game::new(grid);
    game.start_timer();

    // Guess every safe square; the session must end Won and never Lost.
    for (x, y) in safe {
        assert_ne!(game.status(), GameStatus::Lost);
        if game.status() == GameStatus::Won {
            break;
        }
        game.guess(x, y);
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.grid().revealed_count(), game.grid().nonmine_count());

    game.stop_timer();
    let elapsed = game.elapsed().expect("both timer bounds recorded");
    let score = game.score().expect("score available after stop");
    let expected = (1.0 / elapsed) * game.grid().size() as f64 * game.grid().mine_count() as f64;
    assert_eq!(score, expected);
    assert!(game.started_on().is_some());
}

#[test]
fn test_session_lost_on_a_mine() {
    let grid = seeded_grid(9, 9, 10, 7);
    let &(bx, by) = find_squares(&grid, |k| k == SquareKind::Bomb)
        .first()
        .expect("grid has mines");
    let mut game = Game::new(grid);

    game.guess(bx, by);
    assert_eq!(game.status(), GameStatus::Lost);

    // End-of-game display reveals the whole board without touching the
    // gameplay counter.
    let counted = game.grid().revealed_count();
    game.game_over();
    for y in 0..game.grid().height() {
        for x in 0..game.grid().width() {
            assert!(game.grid().get(x, y).is_revealed());
        }
    }
    assert_eq!(game.grid().revealed_count(), counted);

    // Terminal state is frozen: further guesses change nothing.
    game.guess(bx, by);
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_winning_score_lands_on_the_board() {
    let path = std::env::temp_dir().join(format!(
        "minefield-session-scores-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let board = ScoreBoard::at_path(path);

    let grid = seeded_grid(3, 3, 1, 11);
    let safe = find_squares(&grid, |k| k != SquareKind::Bomb);
    let mut game = Game::new(grid);
    game.start_timer();
    for (x, y) in safe {
        if game.status() != GameStatus::InProgress {
            break;
        }
        game.guess(x, y);
    }
    game.stop_timer();
    assert_eq!(game.status(), GameStatus::Won);

    board
        .record(ScoreEntry {
            player: "tester".to_string(),
            score: game.score().unwrap(),
            date: game.started_on().unwrap(),
        })
        .unwrap();

    let top = board.top(15).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].player, "tester");
    assert!(top[0].score > 0.0);
}
