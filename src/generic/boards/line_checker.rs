use crate::{Board, Field, Seat};

/// Three row-major positions that win when held by one seat.
pub type Line = [usize; 3];

/// Every winning line, in the order they are searched: both diagonals, then
/// row and column of each index in turn.
pub static WINNING_LINES: [Line; 8] = [
    [0, 4, 8],
    [2, 4, 6],
    [0, 1, 2],
    [0, 3, 6],
    [3, 4, 5],
    [1, 4, 7],
    [6, 7, 8],
    [2, 5, 8],
];

/// Groups of lines that are searched for both seats before moving on. The
/// diagonals form one group, every row and column is a group of its own.
fn line_groups() -> impl Iterator<Item = &'static [Line]> {
    std::iter::once(&WINNING_LINES[..2]).chain(WINNING_LINES[2..].chunks(1))
}

/// Checks if a board contains a winner
///
/// For each group of lines, the first seat is tested before the second one;
/// the first seat found holding a whole line is returned. Both seats can
/// only hold a line at once on a board that was not played by the rules.
///
/// Usage:
/// ```
/// use tictactoe::{check_board, Board, Seat};
///
/// // X X X <-- X wins
/// // O O _
/// // _ _ _
/// let mut board = Board::new();
/// for (position, seat) in [(0, Seat::First), (3, Seat::Second), (1, Seat::First), (4, Seat::Second), (2, Seat::First)] {
///     board.place(position, seat).unwrap();
/// }
///
/// assert_eq!(check_board(&board), Some(Seat::First));
/// ```
pub fn check_board(board: &Board) -> Option<Seat> {
    line_groups().find_map(|group| {
        Seat::ALL
            .into_iter()
            .find(|seat| group.iter().any(|line| holds_line(board, line, *seat)))
    })
}

/// Whether all three cells of `line` carry `seat`'s mark.
fn holds_line(board: &Board, line: &Line, seat: Seat) -> bool {
    line.iter()
        .all(|position| board.field(*position) == Some(Field::Occupied { seat }))
}
