pub mod board;
pub mod error;
pub mod evaluation;
pub mod game_state;
pub mod move_gen;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::{GameError, GameResult};
pub use evaluation::evaluate;
pub use game_state::*;
pub use move_gen::*;
pub use perft::{perft, perft_divide};
pub use types::*;
