use std::fmt::Display;
use std::io;

use crate::{Game, MoveError, Outcome};

mod args;
pub mod input;
pub mod render;
mod session;

pub use args::{ConsoleArgs, RenderFormat, UnknownRenderFormat};
pub use session::{Session, SessionError};

/// Where the positions typed by the players come from.
///
/// A source only hands out raw lines; parsing them and asking again after a
/// rejection is up to the [`Session`].
pub trait MoveSource {
    type ErrorKind: std::error::Error + 'static;

    /// Shows `prompt` and returns the next line, or `None` once the input is
    /// closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::ErrorKind>;
}

/// Draws the game for the players.
pub trait Renderer {
    fn render_board(&mut self, game: &Game) -> io::Result<()>;

    fn render_rejection(&mut self, rejection: &Rejection) -> io::Result<()>;

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()>;
}

/// Why a line typed by a player did not lead to a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Unparsable { input: String },
    Move(MoveError),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Unparsable { .. } => write!(f, "invalid number"),
            Rejection::Move(error) => write!(f, "Invalid move ({})", error),
        }
    }
}
