use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Coordinates, Field, Player, Seat};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveError {
    #[error("position {position} is outside of 0-8")]
    InvalidPosition { position: i64 },
    #[error("{player} is not playing this game")]
    InvalidPlayer { player: Player },
    #[error("position {position} is already occupied")]
    AlreadyOccupied { position: usize },
}

/// The 3x3 grid. Cells are addressed by their row-major position 0-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    data: Array2<Field>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: usize = 3;
    pub const CELLS: usize = Self::SIZE * Self::SIZE;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE, Self::SIZE), Field::Vacant),
        }
    }

    /// Maps a position to its cell, or `None` when it is off the board.
    /// Example: 5 -> (1, 2)
    pub fn coordinates(position: usize) -> Option<Coordinates> {
        (position < Self::CELLS).then(|| (position / Self::SIZE, position % Self::SIZE))
    }

    pub fn field(&self, position: usize) -> Option<Field> {
        Self::coordinates(position).map(|coordinates| self.data[coordinates])
    }

    /// All fields in row-major order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.data.iter().copied()
    }

    pub fn matrix(&self) -> &Array2<Field> {
        &self.data
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|field| !field.is_vacant())
    }

    /// Marks a vacant cell for `seat`. The board is left untouched on error.
    pub fn place(&mut self, position: usize, seat: Seat) -> Result<(), MoveError> {
        let coordinates = Self::coordinates(position).ok_or(MoveError::InvalidPosition {
            position: i64::try_from(position).unwrap_or(i64::MAX),
        })?;
        if !self.data[coordinates].is_vacant() {
            return Err(MoveError::AlreadyOccupied { position });
        }
        debug!("placing {:?} at {:?}", seat, coordinates);
        self.data[coordinates] = Field::Occupied { seat };
        Ok(())
    }
}
