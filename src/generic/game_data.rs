use crate::{Outcome, Player};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A read-only picture of a game, taken after a move, for renderers that
/// want the whole state in one value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub players: [Player; 2],
    /// The nine cells in row-major order, `None` for vacant ones.
    pub cells: Vec<Option<Player>>,
    pub current_player: Player,
    pub outcome: Outcome,
    pub move_count: usize,
}
