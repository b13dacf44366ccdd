//! Win detection logic for tic-tac-toe.

use crate::line::WinLine;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the line they completed, or `None`.
/// The first matching line in iteration order is reported; by the game
/// rules at most one player can hold a completed line.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    for line in WinLine::iter() {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some((Player::X, WinLine::TopRow)));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(
            check_winner(&board),
            Some((Player::O, WinLine::MainDiagonal))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detectable() {
        for line in WinLine::iter() {
            let mut board = Board::new();
            for pos in line.positions() {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert_eq!(check_winner(&board), Some((Player::O, line)));
        }
    }
}
