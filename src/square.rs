//! Minefield squares.
//!
//! A square is one cell of the minefield: a mine, a numbered border cell,
//! or an empty cell, plus a revealed flag.

/// What a square contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareKind {
    /// No mine here and no mine in the 8-neighborhood.
    Empty,
    /// A mine.
    Bomb,
    /// No mine here, but 1-8 mines in the 8-neighborhood.
    Number(u8),
}

/// A single cell of the minefield.
///
/// The position is fixed at creation. The revealed flag only ever goes
/// from false to true.
#[derive(Debug, Clone, Copy)]
pub struct Square {
    x: usize,
    y: usize,
    kind: SquareKind,
    revealed: bool,
}

impl Square {
    pub(crate) fn new(x: usize, y: usize, kind: SquareKind) -> Self {
        Self {
            x,
            y,
            kind,
            revealed: false,
        }
    }

    /// Position of this square as (x, y).
    pub fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    /// Adjacent-mine count for a Number square, None otherwise.
    pub fn count(&self) -> Option<u8> {
        match self.kind {
            SquareKind::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Mark this square revealed. Repeated calls are no-ops.
    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Replace the contents during grid generation. Only valid before
    /// anything is revealed.
    pub(crate) fn set_kind(&mut self, kind: SquareKind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_square_is_hidden() {
        let sq = Square::new(3, 7, SquareKind::Empty);
        assert_eq!(sq.pos(), (3, 7));
        assert_eq!(sq.kind(), SquareKind::Empty);
        assert!(!sq.is_revealed());
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut sq = Square::new(0, 0, SquareKind::Bomb);
        sq.reveal();
        assert!(sq.is_revealed());
        sq.reveal();
        assert!(sq.is_revealed());
    }

    #[test]
    fn test_count_only_for_numbers() {
        assert_eq!(Square::new(0, 0, SquareKind::Number(3)).count(), Some(3));
        assert_eq!(Square::new(0, 0, SquareKind::Empty).count(), None);
        assert_eq!(Square::new(0, 0, SquareKind::Bomb).count(), None);
    }
}
