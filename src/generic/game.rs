use log::{debug, info};
use uuid::Uuid;

use crate::{check_board, Board, GameSnapshot, Move, MoveError, Outcome, Player, Seat};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameSetupError {
    #[error("both players are called {player}")]
    DuplicatePlayer { player: Player },
}

/// One game between two players, from the empty board to its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    game_id: Uuid,
    board: Board,
    players: [Player; 2],
    current: Seat,
    moves: Vec<Move>,
}

impl Game {
    /// Starts a game on an empty board. `player_one` moves first.
    pub fn new(player_one: Player, player_two: Player) -> Result<Self, GameSetupError> {
        Self::new_with_id(Uuid::new_v4(), player_one, player_two)
    }

    pub fn new_with_id(
        game_id: Uuid,
        player_one: Player,
        player_two: Player,
    ) -> Result<Self, GameSetupError> {
        if player_one == player_two {
            return Err(GameSetupError::DuplicatePlayer { player: player_one });
        }
        info!(
            "Created game {} between {} and {}",
            game_id, player_one, player_two
        );
        Ok(Self {
            game_id,
            board: Board::new(),
            players: [player_one, player_two],
            current: Seat::First,
            moves: Vec::new(),
        })
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn seat_of(&self, player: &Player) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|seat| self.player(*seat) == player)
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Places `player`'s mark at `position` and hands the turn to the other
    /// player.
    ///
    /// The position is checked first, then the player, then the cell. A
    /// rejected move changes nothing.
    ///
    /// The acting player is taken as given and the game is not locked once
    /// it reached a terminal outcome: callers stop moving as soon as
    /// [`Game::evaluate`] reports one. Moves made after that are applied by
    /// the same rules, but the resulting outcome is not meaningful.
    pub fn apply_move(&mut self, player: &Player, position: i64) -> Result<(), MoveError> {
        let position = usize::try_from(position)
            .ok()
            .filter(|position| Board::coordinates(*position).is_some())
            .ok_or(MoveError::InvalidPosition { position })?;
        let seat = self
            .seat_of(player)
            .ok_or_else(|| MoveError::InvalidPlayer {
                player: player.clone(),
            })?;

        self.board.place(position, seat)?;
        self.moves.push(Move::new(position, seat));
        self.current = seat.other();
        debug!(
            "game {}: {} took position {}, {} to move",
            self.game_id,
            player,
            position,
            self.current_player()
        );
        Ok(())
    }

    /// Computes the outcome from the board; nothing is cached.
    pub fn evaluate(&self) -> Outcome {
        if let Some(seat) = check_board(&self.board) {
            Outcome::Won {
                winner: self.player(seat).clone(),
            }
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress {
                next_player: self.current_player().clone(),
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.game_id,
            players: self.players.clone(),
            cells: self
                .board
                .fields()
                .map(|field| field.seat().map(|seat| self.player(seat).clone()))
                .collect(),
            current_player: self.current_player().clone(),
            outcome: self.evaluate(),
            move_count: self.moves.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Field;

    fn players() -> (Player, Player) {
        (Player::new("player_one"), Player::new("player_two"))
    }

    fn new_game() -> Game {
        let (one, two) = players();
        Game::new(one, two).unwrap()
    }

    /// Plays `positions` alternately, starting with player one.
    fn play(positions: &[i64]) -> Game {
        let mut game = new_game();
        for position in positions {
            let player = game.current_player().clone();
            game.apply_move(&player, *position)
                .unwrap_or_else(|e| panic!("move to {} was rejected: {}", position, e));
        }
        game
    }

    #[test]
    fn creates_game() {
        let _ = env_logger::builder().is_test(true).try_init();
        let (one, two) = players();
        let game = Game::new(one.clone(), two.clone()).unwrap();
        assert_eq!(game.current_player(), &one);
        assert_eq!(game.players(), &[one, two]);
        assert!(game.moves().is_empty());
        assert!(game.board().fields().all(|field| field.is_vacant()));
    }

    #[test]
    fn players_must_differ() {
        let result = Game::new(Player::new("X"), Player::new("X"));
        assert_eq!(
            result,
            Err(GameSetupError::DuplicatePlayer {
                player: Player::new("X")
            })
        );
    }

    #[test]
    fn apply_move() {
        // things to test:
        // MoveError::InvalidPosition;
        // MoveError::InvalidPlayer;
        // MoveError::AlreadyOccupied;
        let (one, two) = players();
        let stranger = Player::new("random_guy");

        let tests: Vec<Vec<(&Player, i64, Option<MoveError>)>> = vec![
            vec![
                (&one, 0, None),
                (&two, 3, None),
                (&one, 3, Some(MoveError::AlreadyOccupied { position: 3 })),
                (&one, 8, None),
            ],
            vec![
                (&one, 9, Some(MoveError::InvalidPosition { position: 9 })),
                (&one, 10, Some(MoveError::InvalidPosition { position: 10 })),
                (&one, -1, Some(MoveError::InvalidPosition { position: -1 })),
                (&one, i64::MIN, Some(MoveError::InvalidPosition { position: i64::MIN })),
                (&one, 4, None),
            ],
            vec![
                (
                    &stranger,
                    2,
                    Some(MoveError::InvalidPlayer {
                        player: stranger.clone(),
                    }),
                ),
                (&two, 2, None),
            ],
            // the position is checked before the player, the player before the cell
            vec![
                (&one, 0, None),
                (&stranger, 42, Some(MoveError::InvalidPosition { position: 42 })),
                (
                    &stranger,
                    0,
                    Some(MoveError::InvalidPlayer {
                        player: stranger.clone(),
                    }),
                ),
                (&two, 0, Some(MoveError::AlreadyOccupied { position: 0 })),
            ],
        ];

        for (test_index, moves) in tests.iter().enumerate() {
            let mut game = new_game();
            for (move_index, (player, position, expected_error)) in moves.iter().enumerate() {
                let before = game.clone();
                let result = game.apply_move(player, *position);
                match expected_error {
                    Some(expected_error) => {
                        assert_eq!(
                            result,
                            Err(expected_error.clone()),
                            "Test {} failed: got {:?} instead of {:?} (move {})",
                            test_index,
                            result,
                            expected_error,
                            move_index
                        );
                        assert_eq!(
                            game, before,
                            "Test {} failed: rejected move {} changed the game",
                            test_index, move_index
                        );
                    }
                    None => assert_eq!(
                        result,
                        Ok(()),
                        "Test {} failed: got {:?} instead of Ok(()) (move {})",
                        test_index,
                        result,
                        move_index
                    ),
                }
            }
        }
    }

    #[test]
    fn turn_passes_to_the_other_player() {
        let (one, two) = players();
        let mut game = new_game();

        game.apply_move(&one, 4).unwrap();
        assert_eq!(game.current_player(), &two);
        game.apply_move(&two, 0).unwrap();
        assert_eq!(game.current_player(), &one);

        // the actor is explicit, so the same player may move twice in a row
        game.apply_move(&two, 1).unwrap();
        assert_eq!(game.current_player(), &one);

        assert_eq!(
            game.moves(),
            &[
                Move::new(4, Seat::First),
                Move::new(0, Seat::Second),
                Move::new(1, Seat::Second)
            ]
        );
        assert_eq!(game.board().field(1), Some(Field::Occupied { seat: Seat::Second }));
    }

    #[test]
    fn evaluate_empty_board() {
        let (one, _) = players();
        let game = new_game();
        assert_eq!(game.evaluate(), Outcome::InProgress { next_player: one });
    }

    #[test]
    fn evaluate_top_row() {
        let (one, two) = players();
        let mut game = new_game();
        game.apply_move(&one, 0).unwrap();
        game.apply_move(&two, 3).unwrap();
        game.apply_move(&one, 1).unwrap();
        game.apply_move(&two, 4).unwrap();
        assert!(game.evaluate().is_in_progress());
        game.apply_move(&one, 2).unwrap();
        assert_eq!(game.evaluate().winner(), Some(&one));
        assert_eq!(game.evaluate(), Outcome::Won { winner: one });
    }

    #[test]
    fn evaluate_without_turn_order() {
        let (one, _) = players();
        let mut game = new_game();
        for position in [0, 1, 2] {
            game.apply_move(&one, position).unwrap();
        }
        assert_eq!(game.evaluate(), Outcome::Won { winner: one });
    }

    #[test]
    fn evaluate_main_diagonal() {
        let (one, _) = players();
        let mut game = new_game();
        for position in [0, 4, 8] {
            game.apply_move(&one, position).unwrap();
        }
        assert_eq!(game.evaluate(), Outcome::Won { winner: one });
    }

    #[test]
    fn evaluate_column_for_player_two() {
        // X O X
        // _ O _
        // X O _
        let (_, two) = players();
        let game = play(&[0, 1, 2, 4, 6, 7]);
        assert_eq!(game.evaluate(), Outcome::Won { winner: two });
    }

    #[test]
    fn evaluate_draw() {
        // A B B
        // B A A
        // A A B
        let (one, two) = players();
        let mut game = new_game();
        for position in [0, 4, 5, 6, 7] {
            game.apply_move(&one, position).unwrap();
        }
        for position in [1, 2, 3, 8] {
            game.apply_move(&two, position).unwrap();
        }
        assert!(game.board().is_full());
        assert_eq!(game.evaluate().winner(), None);
        assert_eq!(game.evaluate(), Outcome::Draw);
    }

    #[test]
    fn evaluate_is_idempotent() {
        let game = play(&[4, 0, 8]);
        let first = game.evaluate();
        assert_eq!(game.evaluate(), first);
        assert_eq!(game.evaluate(), first);

        let game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(game.evaluate(), game.evaluate());
    }

    #[test]
    fn invalid_position_leaves_evaluate_unaffected() {
        let (one, _) = players();
        let mut game = play(&[4, 0]);
        let board = game.board().clone();
        let outcome = game.evaluate();

        assert_eq!(
            game.apply_move(&one, 10),
            Err(MoveError::InvalidPosition { position: 10 })
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.evaluate(), outcome);
    }

    #[test]
    fn moves_after_the_end_are_still_applied() {
        let (_, two) = players();
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert!(game.evaluate().is_terminal());

        game.apply_move(&two, 5).unwrap();
        assert_eq!(game.moves().len(), 6);
        assert!(game.evaluate().is_terminal());
    }

    #[test]
    fn snapshot() {
        let (one, two) = players();
        let game = play(&[4, 0]);
        let snapshot = game.snapshot();

        assert_eq!(snapshot.game_id, game.game_id());
        assert_eq!(snapshot.cells.len(), Board::CELLS);
        assert_eq!(snapshot.cells[0], Some(two));
        assert_eq!(snapshot.cells[4], Some(one.clone()));
        assert_eq!(snapshot.cells.iter().filter(|cell| cell.is_none()).count(), 7);
        assert_eq!(snapshot.current_player, one);
        assert_eq!(snapshot.move_count, 2);
        assert!(snapshot.outcome.is_in_progress());
    }
}
