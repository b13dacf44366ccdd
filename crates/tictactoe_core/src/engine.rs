//! The game engine: state machine and move application.

use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot handed back to the front-end after every operation.
///
/// While the game is in progress, `turn` is the player entitled to move
/// next; once the game ends it stays on the player who moved last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    status: GameStatus,
    turn: Player,
}

impl Report {
    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the current turn.
    pub fn turn(&self) -> Player {
        self.turn
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the [`GameState`] exclusively; the hosting front-end drives it
/// through [`apply_move`](Self::apply_move), [`reset`](Self::reset), and
/// [`evaluate`](Self::evaluate), one discrete event at a time.
///
/// Invalid moves (occupied square, out-of-range index, game already over)
/// are silent no-ops rather than errors: the front-end disables cells in
/// those situations, so there is nothing to recover from.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new engine with an empty in-progress game, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move at the given cell index (0-8, row-major).
    ///
    /// Places the current player's mark, evaluates win then tie, and
    /// advances the turn only if the game continues. The win check runs
    /// against the mover's mark before the turn changes hands.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Report {
        if !self.state.status().is_in_progress() {
            debug!("move ignored: game is over");
            return self.evaluate();
        }

        let Some(pos) = Position::from_index(index) else {
            debug!("move ignored: index out of range");
            return self.evaluate();
        };

        if !self.state.board().is_empty(pos) {
            debug!(%pos, "move ignored: square occupied");
            return self.evaluate();
        }

        let mover = self.state.current_player();
        self.state.place(pos, mover);

        if let Some((winner, line)) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner, line));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Tied);
        } else {
            self.state.advance_turn();
        }

        self.evaluate()
    }

    /// Pure query: current status and turn, no mutation.
    pub fn evaluate(&self) -> Report {
        Report {
            status: *self.state.status(),
            turn: self.state.current_player(),
        }
    }

    /// Starts a new game: empty board, in progress, X to move, no matter
    /// what state the previous game was in.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Report {
        self.state = GameState::new();
        self.evaluate()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::WinLine;
    use crate::types::Square;

    #[test]
    fn test_new_game_report() {
        let engine = GameEngine::new();
        let report = engine.evaluate();
        assert_eq!(report.status(), &GameStatus::InProgress);
        assert_eq!(report.turn(), Player::X);
    }

    #[test]
    fn test_turn_alternates() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(4).turn(), Player::O);
        assert_eq!(engine.apply_move(0).turn(), Player::X);
        assert_eq!(engine.apply_move(8).turn(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut engine = GameEngine::new();
        engine.apply_move(0);

        // Same cell again: board and turn unchanged.
        let report = engine.apply_move(0);
        assert_eq!(
            engine.state().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(report.turn(), Player::O);
        assert_eq!(report.status(), &GameStatus::InProgress);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut engine = GameEngine::new();
        let report = engine.apply_move(9);
        assert_eq!(report.status(), &GameStatus::InProgress);
        assert_eq!(report.turn(), Player::X);
        assert!(engine.state().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_win_declared_for_mover() {
        // X takes the top row: [0, 3, 1, 4, 2] alternating X, O, X, O, X.
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4] {
            assert_eq!(engine.apply_move(index).status(), &GameStatus::InProgress);
        }

        let report = engine.apply_move(2);
        assert_eq!(report.status(), &GameStatus::Won(Player::X, WinLine::TopRow));
        // Turn stays on the winner once the game ends.
        assert_eq!(report.turn(), Player::X);
    }

    #[test]
    fn test_win_with_empty_cells_remaining() {
        // O wins the left column while three cells are still empty.
        let mut engine = GameEngine::new();
        for index in [1, 0, 2, 3, 4, 6] {
            engine.apply_move(index);
        }
        assert_eq!(
            engine.evaluate().status(),
            &GameStatus::Won(Player::O, WinLine::LeftColumn)
        );
    }

    #[test]
    fn test_tie_on_full_board() {
        // [0, 1, 2, 4, 3, 5, 7, 6, 8] alternating X, O fills the board
        // with no completed line.
        let mut engine = GameEngine::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(engine.apply_move(index).status(), &GameStatus::InProgress);
        }
        assert_eq!(engine.apply_move(8).status(), &GameStatus::Tied);
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        // The ninth mark both fills the board and completes a line:
        // X O O / O X X / X O X, last move X at 8 completes the main
        // diagonal on a full board.
        let mut engine = GameEngine::new();
        for index in [0, 1, 4, 2, 5, 3, 6, 7] {
            engine.apply_move(index);
        }
        let report = engine.apply_move(8);
        assert_eq!(
            report.status(),
            &GameStatus::Won(Player::X, WinLine::MainDiagonal)
        );
    }

    #[test]
    fn test_moves_after_win_are_noops() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }
        let before = engine.state().clone();

        let report = engine.apply_move(5);
        assert_eq!(engine.state(), &before);
        assert_eq!(report.status(), &GameStatus::Won(Player::X, WinLine::TopRow));
    }

    #[test]
    fn test_reset_mid_game_returns_turn_to_x() {
        let mut engine = GameEngine::new();
        engine.apply_move(4);
        // O is mid-turn; reset hands the game back to X regardless.
        assert_eq!(engine.evaluate().turn(), Player::O);

        let report = engine.reset();
        assert_eq!(report.status(), &GameStatus::InProgress);
        assert_eq!(report.turn(), Player::X);
        assert!(engine.state().board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_reset_after_terminal_state() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }

        engine.reset();
        let report = engine.apply_move(4);
        assert_eq!(report.status(), &GameStatus::InProgress);
        assert_eq!(report.turn(), Player::O);
    }
}
