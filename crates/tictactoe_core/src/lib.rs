//! Pure tic-tac-toe game logic.
//!
//! The [`GameEngine`] owns the complete game state and exposes three
//! operations to whatever front-end hosts it: [`GameEngine::apply_move`]
//! for cell selection, [`GameEngine::reset`] for starting a new game, and
//! [`GameEngine::evaluate`] for refreshing display state. Each returns a
//! [`Report`] snapshot of the game status and current turn.
//!
//! The win and tie checks are pure functions over [`Board`] values, so
//! they are unit-testable without any UI harness.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Player, WinLine};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! // X filled the top row.
//! assert_eq!(
//!     engine.evaluate().status(),
//!     &GameStatus::Won(Player::X, WinLine::TopRow),
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod line;
mod position;
mod rules;
mod types;

pub use engine::{GameEngine, Report};
pub use line::WinLine;
pub use position::Position;
pub use rules::{check_winner, is_full};
pub use types::{Board, GameState, GameStatus, Player, Square};
