//! One play session over a grid: guess dispatch, win/loss tracking,
//! timing and scoring.

use std::time::Instant;

use chrono::{DateTime, Local};

use crate::constants::MIN_ELAPSED_SECS;
use crate::grid::Grid;
use crate::square::SquareKind;

/// Session state. Lost and Won are terminal and mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Lost,
    Won,
}

/// A single minesweeper session.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    status: GameStatus,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    started_on: Option<DateTime<Local>>,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            status: GameStatus::InProgress,
            started_at: None,
            finished_at: None,
            started_on: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Reveal a square and update the session state.
    ///
    /// A mine loses the game on the spot (the mine is revealed for display,
    /// nothing else changes). A Number square reveals just itself; an Empty
    /// square floods its connected region. The game is won once every
    /// non-mine square is revealed.
    ///
    /// Callers must stop guessing once the game is over; a guess after a
    /// terminal state does nothing.
    pub fn guess(&mut self, x: usize, y: usize) {
        if self.status != GameStatus::InProgress {
            return;
        }

        match self.grid.get(x, y).kind() {
            SquareKind::Bomb => {
                // Loss short-circuits before any counted reveal, so the win
                // check below can never also fire.
                self.status = GameStatus::Lost;
                return;
            }
            SquareKind::Number(_) => self.grid.reveal(x, y),
            SquareKind::Empty => self.grid.flood_reveal(x, y),
        }

        if self.grid.revealed_count() == self.grid.nonmine_count() {
            self.status = GameStatus::Won;
        }
    }

    /// Record the wall-clock start and the calendar date of the session.
    pub fn start_timer(&mut self) {
        self.started_at = Some(Instant::now());
        self.started_on = Some(Local::now());
    }

    pub fn stop_timer(&mut self) {
        self.finished_at = Some(Instant::now());
    }

    /// Elapsed game time in seconds, once both timer bounds are recorded.
    /// Floored at one millisecond.
    pub fn elapsed(&self) -> Option<f64> {
        let start = self.started_at?;
        let end = self.finished_at?;
        Some((end - start).as_secs_f64().max(MIN_ELAPSED_SECS))
    }

    /// Final score, once the timer has been stopped: faster games on bigger,
    /// denser grids score higher.
    pub fn score(&self) -> Option<f64> {
        self.elapsed()
            .map(|secs| score_for(secs, self.grid.size(), self.grid.mine_count()))
    }

    /// Calendar date the session started on.
    pub fn started_on(&self) -> Option<DateTime<Local>> {
        self.started_on
    }

    /// Reveal the whole board for the end-of-game display. Only meaningful
    /// after the game is over; the revealed counter is left untouched.
    pub fn game_over(&mut self) {
        self.grid.reveal_all();
    }
}

/// (1 / elapsed) * grid size * mine count.
fn score_for(elapsed_secs: f64, size: usize, mines: usize) -> f64 {
    (1.0 / elapsed_secs) * size as f64 * mines as f64
}
