//! Application state and logic.

use tictactoe_core::{GameEngine, GameStatus, Report};
use tracing::debug;

const NEW_GAME_MESSAGE: &str = "Player X's turn. Press 1-9 to place a mark.";

/// Main application state.
pub struct App {
    engine: GameEngine,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            status_message: NEW_GAME_MESSAGE.to_string(),
        }
    }

    /// Gets the current engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Selects the cell at the given index (0-8).
    ///
    /// The engine ignores selections on occupied cells or after the game
    /// has ended, so this just re-renders whatever it reports back.
    pub fn select_cell(&mut self, index: usize) {
        let report = self.engine.apply_move(index);
        debug!(index, board = %self.engine.state().board(), "cell selected");
        self.status_message = Self::describe(&report);
    }

    /// Starts a new game with X to move.
    pub fn new_game(&mut self) {
        debug!("starting new game");
        self.engine.reset();
        self.status_message = NEW_GAME_MESSAGE.to_string();
    }

    fn describe(report: &Report) -> String {
        match report.status() {
            GameStatus::InProgress => format!("Player {}'s turn", report.turn()),
            GameStatus::Won(winner, _) => {
                format!("Player {} won! Press 'n' for a new game.", winner)
            }
            GameStatus::Tied => "Game tied! Press 'n' for a new game.".to_string(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_follows_turns() {
        let mut app = App::new();
        app.select_cell(4);
        assert_eq!(app.status_message(), "Player O's turn");
        app.select_cell(0);
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_win_message() {
        let mut app = App::new();
        for index in [0, 3, 1, 4, 2] {
            app.select_cell(index);
        }
        assert_eq!(
            app.status_message(),
            "Player X won! Press 'n' for a new game."
        );
    }

    #[test]
    fn test_selection_after_win_keeps_result_message() {
        let mut app = App::new();
        for index in [0, 3, 1, 4, 2] {
            app.select_cell(index);
        }
        app.select_cell(8);
        assert_eq!(
            app.status_message(),
            "Player X won! Press 'n' for a new game."
        );
    }

    #[test]
    fn test_new_game_resets_message() {
        let mut app = App::new();
        app.select_cell(4);
        app.new_game();
        assert_eq!(app.status_message(), NEW_GAME_MESSAGE);
        assert!(app.engine().evaluate().status().is_in_progress());
    }
}
