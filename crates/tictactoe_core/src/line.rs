//! The eight winning lines of the board.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// One of the eight triples whose uniform occupation wins the game.
///
/// Reported in [`crate::GameStatus::Won`] so the front-end can highlight
/// the winning cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinLine {
    /// Top row (positions 0, 1, 2).
    TopRow,
    /// Middle row (positions 3, 4, 5).
    MiddleRow,
    /// Bottom row (positions 6, 7, 8).
    BottomRow,
    /// Left column (positions 0, 3, 6).
    LeftColumn,
    /// Middle column (positions 1, 4, 7).
    MiddleColumn,
    /// Right column (positions 2, 5, 8).
    RightColumn,
    /// Top-left to bottom-right diagonal (positions 0, 4, 8).
    MainDiagonal,
    /// Top-right to bottom-left diagonal (positions 2, 4, 6).
    AntiDiagonal,
}

impl WinLine {
    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            WinLine::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            WinLine::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            WinLine::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            WinLine::LeftColumn => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            WinLine::MiddleColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            WinLine::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            WinLine::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            WinLine::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// Checks whether this line passes through the given position.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}
