mod boards;
mod field;
mod game;
mod game_data;
mod r#move;
mod outcome;
mod player;

pub use boards::{check_board, Board, Line, MoveError, WINNING_LINES};
pub use field::Field;
pub use game::{Game, GameSetupError};
pub use game_data::GameSnapshot;
pub use outcome::Outcome;
pub use player::{Player, Seat};
pub use r#move::{Coordinates, Move};
