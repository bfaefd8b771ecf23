mod board;
mod line_checker;

pub use board::{Board, MoveError};
pub use line_checker::{check_board, Line, WINNING_LINES};
