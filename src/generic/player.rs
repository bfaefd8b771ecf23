use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The label a human plays under, e.g. `X` or `alice`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Player(String);

impl Player {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Player {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Which of the two registered players a mark belongs to.
///
/// The board only ever stores seats, so a label that was never registered
/// can not end up on it.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Seats in the order the winner search visits them.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    pub fn other(&self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::First.other().other(), Seat::First);
    }

    #[test]
    fn player_serializes_as_plain_label() {
        let player = Player::new("alice");
        assert_eq!(serde_json::to_string(&player).unwrap(), "\"alice\"");
        assert_eq!(player.to_string(), "alice");
    }
}
