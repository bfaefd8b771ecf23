use std::io::{self, Write};

use serde::Serialize;

use crate::{Game, GameSnapshot, Outcome, Rejection, Renderer};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Board { game: GameSnapshot },
    Rejection { message: String },
    Outcome { outcome: &'a Outcome },
}

/// Writes every event as one line of JSON, for frontends driving the game
/// through a pipe.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render_board(&mut self, game: &Game) -> io::Result<()> {
        self.emit(&Event::Board {
            game: game.snapshot(),
        })
    }

    fn render_rejection(&mut self, rejection: &Rejection) -> io::Result<()> {
        self.emit(&Event::Rejection {
            message: rejection.to_string(),
        })
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.emit(&Event::Outcome { outcome })
    }
}
