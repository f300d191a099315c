//! Shared limits for grid setup, player names and scoring.

/// Maximum grid width. Larger boards overflow the row/column labels
/// and the usual terminal window.
pub const MAX_GRID_WIDTH: usize = 25;

/// Maximum grid height.
pub const MAX_GRID_HEIGHT: usize = 25;

/// Maximum player name length for score entries.
pub const MAX_PLAYER_NAME_LEN: usize = 16;

/// Number of entries shown on the high score screen.
pub const SCORE_DISPLAY_COUNT: usize = 15;

/// Floor for elapsed game time when computing the score, so a
/// sub-millisecond win never divides by zero.
pub const MIN_ELAPSED_SECS: f64 = 0.001;
