use log::{debug, info};

use crate::{Board, Game, MoveSource, Outcome, Player, Rejection, Renderer};

#[derive(Debug, thiserror::Error)]
pub enum SessionError<E: std::error::Error + 'static> {
    #[error("failed to read input: {0}")]
    Input(#[source] E),
    #[error("failed to render: {0}")]
    Output(#[from] std::io::Error),
    #[error("input closed before the game ended")]
    Closed,
}

/// Drives one game: asks for a position, applies it, evaluates the board and
/// renders it, until the game is won or drawn.
pub struct Session<S, R> {
    game: Game,
    source: S,
    renderer: R,
}

impl<S: MoveSource, R: Renderer> Session<S, R> {
    pub fn new(game: Game, source: S, renderer: R) -> Self {
        Self {
            game,
            source,
            renderer,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (Game, S, R) {
        (self.game, self.source, self.renderer)
    }

    /// Plays until a terminal outcome and returns it. No move is requested
    /// once the game is won or drawn.
    pub fn run(&mut self) -> Result<Outcome, SessionError<S::ErrorKind>> {
        info!("Starting session for game {}", self.game.game_id());
        loop {
            let player = self.game.current_player().clone();
            let position = self.read_position(&player)?;

            if let Err(e) = self.game.apply_move(&player, position) {
                debug!("game {}: rejected move: {}", self.game.game_id(), e);
                self.renderer.render_rejection(&Rejection::Move(e))?;
                continue;
            }

            let outcome = self.game.evaluate();
            self.renderer.render_board(&self.game)?;

            if outcome.is_terminal() {
                info!("game {} ended: {}", self.game.game_id(), outcome);
                self.renderer.render_outcome(&outcome)?;
                return Ok(outcome);
            }
        }
    }

    /// Asks `player` until a line parses as an integer. The range is left to
    /// the game.
    fn read_position(&mut self, player: &Player) -> Result<i64, SessionError<S::ErrorKind>> {
        let prompt = format!(
            "Player {:?} - select a position from 0-{}: ",
            player.as_str(),
            Board::CELLS - 1
        );
        loop {
            let line = self
                .source
                .read_line(&prompt)
                .map_err(SessionError::Input)?
                .ok_or(SessionError::Closed)?;
            match line.trim().parse::<i64>() {
                Ok(position) => return Ok(position),
                Err(e) => {
                    debug!("could not parse {:?}: {}", line, e);
                    self.renderer
                        .render_rejection(&Rejection::Unparsable { input: line })?;
                }
            }
        }
    }
}
