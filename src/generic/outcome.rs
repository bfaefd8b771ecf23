use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    Won { winner: Player },
    Draw,
    InProgress { next_player: Player },
}

impl Outcome {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress { .. })
    }

    /// Won and Draw are terminal; no further move is meaningful.
    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Won { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { winner } => write!(f, "won by {}", winner),
            Outcome::Draw => write!(f, "drawn"),
            Outcome::InProgress { next_player } => {
                write!(f, "in progress, {} to move", next_player)
            }
        }
    }
}
