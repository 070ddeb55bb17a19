//! Win detection by brute-force scan.
//!
//! Every cell is tried as the start of a run in each of four directions. Only
//! "forward" directions are needed: a run that goes left or up is the same
//! run started from its other end.

use super::board::{Board, Cell};
use super::player::Ordinal;

/// Number of aligned pieces that wins the game.
pub const RUN_LENGTH: usize = 4;

/// `(d_row, d_col)` steps: right, down, down-right, down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether the run of [`RUN_LENGTH`] cells starting at `(row, col)` and
/// stepping by `(d_row, d_col)` is entirely on the board and owned by `player`.
pub fn run_matches(
    board: &Board,
    row: isize,
    col: isize,
    d_row: isize,
    d_col: isize,
    player: Ordinal,
) -> bool {
    (0..RUN_LENGTH as isize).all(|step| {
        let r = row + d_row * step;
        let c = col + d_col * step;
        board.in_bounds(r, c) && board.get(r as usize, c as usize) == Cell::Occupied(player)
    })
}

/// Whether `player` owns any complete run anywhere on the board.
pub fn has_win(board: &Board, player: Ordinal) -> bool {
    find_win(board, player).is_some()
}

/// First winning run for `player` in scan order, as its start cell and direction.
pub fn find_win(board: &Board, player: Ordinal) -> Option<WinningRun> {
    for row in 0..board.height() as isize {
        for col in 0..board.width() as isize {
            for &(d_row, d_col) in &DIRECTIONS {
                if run_matches(board, row, col, d_row, d_col, player) {
                    return Some(WinningRun {
                        start: (row as usize, col as usize),
                        direction: (d_row, d_col),
                    });
                }
            }
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningRun {
    pub start: (usize, usize),
    pub direction: (isize, isize),
}

impl WinningRun {
    /// The cells of the run, from its start
    pub fn cells(&self) -> [(usize, usize); RUN_LENGTH] {
        let (row, col) = (self.start.0 as isize, self.start.1 as isize);
        let (d_row, d_col) = self.direction;
        std::array::from_fn(|step| {
            let step = step as isize;
            ((row + d_row * step) as usize, (col + d_col * step) as usize)
        })
    }
}
