//! The minefield grid: mine placement, adjacency numbering and reveals.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH};
use crate::error::GridError;
use crate::square::{Square, SquareKind};

/// The playable minefield.
///
/// Owns every [`Square`] exclusively; callers address cells by coordinate
/// through [`Grid::get`] and the reveal methods, never by reference.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    mines: usize,
    /// Row-major, indexed as squares[y * width + x].
    squares: Vec<Square>,
    /// Number of squares revealed through [`Grid::reveal`].
    revealed_count: usize,
    /// width * height - mines, fixed at construction.
    nonmine_count: usize,
}

impl Grid {
    /// Build a grid with `mines` mines at distinct random coordinates and
    /// every non-mine square numbered from its 8-neighborhood.
    ///
    /// Fails with [`GridError::InvalidConfig`] unless
    /// 1 <= width <= 25, 1 <= height <= 25 and 1 <= mines <= width * height.
    pub fn new<R: Rng>(
        width: usize,
        height: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if width == 0
            || height == 0
            || width > MAX_GRID_WIDTH
            || height > MAX_GRID_HEIGHT
            || mines == 0
            || mines > width * height
        {
            return Err(GridError::InvalidConfig {
                width,
                height,
                mines,
            });
        }

        let mut squares = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                squares.push(Square::new(x, y, SquareKind::Empty));
            }
        }

        let mut grid = Self {
            width,
            height,
            mines,
            squares,
            revealed_count: 0,
            nonmine_count: width * height - mines,
        };
        grid.place_mines(rng);
        grid.number_squares();
        Ok(grid)
    }

    /// Place mines by sampling coordinates without replacement: shuffle the
    /// full coordinate list and take the first `mines` entries.
    fn place_mines<R: Rng>(&mut self, rng: &mut R) {
        let mut positions: Vec<(usize, usize)> = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                positions.push((x, y));
            }
        }

        positions.shuffle(rng);
        for &(x, y) in positions.iter().take(self.mines) {
            self.squares[y * self.width + x].set_kind(SquareKind::Bomb);
        }
    }

    /// Turn every empty square with adjacent mines into a Number square.
    fn number_squares(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y).kind() == SquareKind::Bomb {
                    continue;
                }

                let mut count = 0u8;
                for (nx, ny) in self.neighbors(x, y) {
                    if self.get(nx, ny).kind() == SquareKind::Bomb {
                        count += 1;
                    }
                }

                if count > 0 {
                    self.squares[y * self.width + x].set_kind(SquareKind::Number(count));
                }
            }
        }
    }

    /// Valid neighbor coordinates of (x, y): up to 8, clipped at the edges.
    fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(8);

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && nx < self.width as i32 && ny >= 0 && ny < self.height as i32 {
                    neighbors.push((nx as usize, ny as usize));
                }
            }
        }

        neighbors
    }

    /// The square at (x, y).
    ///
    /// Coordinates must be inside the grid; the input layer validates them.
    pub fn get(&self, x: usize, y: usize) -> &Square {
        assert!(
            x < self.width && y < self.height,
            "coordinates ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.squares[y * self.width + x]
    }

    /// Reveal the square at (x, y), bumping the revealed counter exactly
    /// once per square. Revealing an already-revealed square is a no-op.
    pub fn reveal(&mut self, x: usize, y: usize) {
        if !self.get(x, y).is_revealed() {
            self.revealed_count += 1;
        }
        self.squares[y * self.width + x].reveal();
    }

    /// Reveal the connected region around an empty square.
    ///
    /// Two phases: first every reachable unrevealed Empty square (8-connected)
    /// is revealed while the unrevealed Number squares bordering the region
    /// are collected; then the collected Number squares are revealed without
    /// propagating further. Mines are never touched.
    ///
    /// The starting square must not be a mine. Starting on a Number square
    /// reveals just that square.
    pub fn flood_reveal(&mut self, x: usize, y: usize) {
        match self.get(x, y).kind() {
            SquareKind::Empty => {}
            SquareKind::Number(_) => {
                self.reveal(x, y);
                return;
            }
            SquareKind::Bomb => unreachable!("flood_reveal called on a mine"),
        }

        let mut empties: Vec<(usize, usize)> = vec![(x, y)];
        let mut numbers: Vec<(usize, usize)> = Vec::new();

        while let Some((ex, ey)) = empties.pop() {
            self.reveal(ex, ey);

            for (nx, ny) in self.neighbors(ex, ey) {
                let neighbor = self.get(nx, ny);
                if neighbor.is_revealed() {
                    continue;
                }
                match neighbor.kind() {
                    SquareKind::Empty => empties.push((nx, ny)),
                    SquareKind::Number(_) => numbers.push((nx, ny)),
                    SquareKind::Bomb => {}
                }
            }
        }

        for (nx, ny) in numbers {
            self.reveal(nx, ny);
        }
    }

    /// Reveal every square for the end-of-game display.
    ///
    /// Bypasses the revealed counter on purpose: this is not a gameplay
    /// reveal and must not disturb the win condition.
    pub fn reveal_all(&mut self) {
        for square in &mut self.squares {
            square.reveal();
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of squares.
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn nonmine_count(&self) -> usize {
        self.nonmine_count
    }

    /// Build a grid from a string layout for tests: 'M' is a mine, '.' is
    /// anything else. Numbering runs as in normal construction.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &[&str]) -> Self {
        let height = layout.len();
        let width = layout[0].len();
        let mut squares = Vec::with_capacity(width * height);
        let mut mines = 0;

        for (y, row) in layout.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let kind = if ch == 'M' {
                    mines += 1;
                    SquareKind::Bomb
                } else {
                    SquareKind::Empty
                };
                squares.push(Square::new(x, y, kind));
            }
        }

        let mut grid = Self {
            width,
            height,
            mines,
            squares,
            revealed_count: 0,
            nonmine_count: width * height - mines,
        };
        grid.number_squares();
        grid
    }
}
