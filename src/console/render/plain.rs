use std::io::{self, Write};

use itertools::Itertools;

use crate::{Field, Game, Outcome, Rejection, Renderer};

/// Prints the board as three rows of glyphs and the result as plain text.
pub struct PlainRenderer<W: Write> {
    out: W,
    empty_glyph: String,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W, empty_glyph: impl Into<String>) -> Self {
        Self {
            out,
            empty_glyph: empty_glyph.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph<'a>(&'a self, game: &'a Game, field: &Field) -> &'a str {
        match field {
            Field::Vacant => self.empty_glyph.as_str(),
            Field::Occupied { seat } => game.player(*seat).as_str(),
        }
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render_board(&mut self, game: &Game) -> io::Result<()> {
        let rows: Vec<String> = game
            .board()
            .matrix()
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|field| self.glyph(game, field)).join(""))
            .collect();
        for row in rows {
            writeln!(self.out, "{}", row)?;
        }
        self.out.flush()
    }

    fn render_rejection(&mut self, rejection: &Rejection) -> io::Result<()> {
        writeln!(self.out, "{}, try again", rejection)?;
        self.out.flush()
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        if let Outcome::InProgress { next_player } = outcome {
            writeln!(self.out, "Game is in progress, {} to move", next_player)?;
            return self.out.flush();
        }
        writeln!(self.out, "Game is complete")?;
        match outcome.winner() {
            Some(winner) => writeln!(self.out, "Winner is {}", winner)?,
            None => writeln!(self.out, "The game was drawn")?,
        }
        self.out.flush()
    }
}
