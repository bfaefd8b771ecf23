use crate::Seat;
use serde::{Deserialize, Serialize};

/// Row and column of a cell, both in `0..Board::SIZE`.
pub type Coordinates = (usize, usize);

/// An accepted move. Rejected moves are never recorded.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: usize,
    pub seat: Seat,
}

impl Move {
    pub fn new(position: usize, seat: Seat) -> Self {
        Self { position, seat }
    }
}
