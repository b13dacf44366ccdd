//! Pure rule checks over board values.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;
