use std::collections::HashSet;

use tracing::{debug, info, trace};

use super::board::Board;
use super::player::{Ordinal, Player};
use super::win;
use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won(Ordinal),
    Tied,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// End-of-game announcement; `None` while the game is still running
    pub fn message(self) -> Option<String> {
        match self {
            Status::InProgress => None,
            Status::Won(ordinal) => Some(format!("Player {} won!", ordinal)),
            Status::Tied => Some("Tie!".to_string()),
        }
    }
}

/// A piece that was just dropped, and the status it left the game in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Ordinal,
    pub status: Status,
}

/// Output boundary for a running game.
///
/// For every accepted move `piece_placed` is called first, followed by
/// `game_over` if that move ended the game. Rejected moves call nothing.
pub trait GameObserver {
    fn piece_placed(&mut self, placement: &Placement, player: &Player);

    fn game_over(&mut self, status: Status);
}

/// One match: the board, the turn order, and whose turn it is.
///
/// The only mutation is [`GameState::attempt_move`]. Illegal moves (game
/// already decided, column full, column off the board) are no-ops rather
/// than errors, mirroring a click on a full column doing nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    current: usize,
    status: Status,
    moves: usize,
}

impl GameState {
    /// Create a new match with an empty board; `players` is the turn order
    pub fn new(height: usize, width: usize, players: Vec<Player>) -> Result<Self, SetupError> {
        let board = Board::new(height, width)?;
        if players.len() < 2 {
            return Err(SetupError::NotEnoughPlayers(players.len()));
        }
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.ordinal()) {
                return Err(SetupError::DuplicateOrdinal(player.ordinal().0));
            }
        }

        Ok(GameState {
            board,
            players,
            current: 0,
            status: Status::InProgress,
            moves: 0,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player of this match by ordinal
    pub fn player(&self, ordinal: Ordinal) -> Option<&Player> {
        self.players.iter().find(|p| p.ordinal() == ordinal)
    }

    /// The player whose turn it is (the last mover once the game is over)
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of accepted moves so far
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Columns that would accept a piece right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns `None`, leaving the state untouched, if the game is over or the
    /// column cannot take a piece.
    pub fn attempt_move(&mut self, column: usize) -> Option<Placement> {
        if self.is_terminal() {
            trace!(column, status = ?self.status, "move ignored, game is over");
            return None;
        }
        if column >= self.board.width() {
            trace!(column, width = self.board.width(), "move ignored, column off the board");
            return None;
        }
        let Some(row) = self.board.landing_row(column) else {
            trace!(column, "move ignored, column is full");
            return None;
        };

        let mover = self.current_player().ordinal();
        self.board.place(row, column, mover);
        self.moves += 1;
        debug!(row, column, player = %mover, moves = self.moves, "piece placed");

        // Win is checked before fill so a last-cell winner is never a tie
        if win::has_win(&self.board, mover) {
            self.status = Status::Won(mover);
            info!(player = %mover, moves = self.moves, "game won");
        } else if self.board.is_full() {
            self.status = Status::Tied;
            info!(moves = self.moves, "game tied");
        } else {
            self.current = (self.current + 1) % self.players.len();
        }

        Some(Placement {
            row,
            column,
            player: mover,
            status: self.status,
        })
    }

    /// [`GameState::attempt_move`], reporting the result to `observer`
    pub fn attempt_move_observed<O: GameObserver + ?Sized>(
        &mut self,
        column: usize,
        observer: &mut O,
    ) -> Option<Placement> {
        let placement = self.attempt_move(column)?;
        if let Some(player) = self.player(placement.player) {
            observer.piece_placed(&placement, player);
        }
        if placement.status.is_terminal() {
            observer.game_over(placement.status);
        }
        Some(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::game::PlayerFactory;
    use proptest::prelude::*;

    fn two_player(height: usize, width: usize) -> GameState {
        let players = PlayerFactory::default().roster(["red", "yellow"]);
        GameState::new(height, width, players).unwrap()
    }

    fn play(state: &mut GameState, columns: &[usize]) -> Vec<Option<Placement>> {
        columns.iter().map(|&col| state.attempt_move(col)).collect()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl GameObserver for Recorder {
        fn piece_placed(&mut self, placement: &Placement, player: &Player) {
            self.events.push(format!(
                "placed {} {} {}",
                placement.row,
                placement.column,
                player.color()
            ));
        }

        fn game_over(&mut self, status: Status) {
            self.events.push(status.message().unwrap_or_default());
        }
    }

    #[test]
    fn test_initial_state() {
        let state = two_player(6, 7);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.current_player().ordinal(), Ordinal(1));
        assert_eq!(state.legal_columns(), (0..7).collect::<Vec<_>>());
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_setup_validation() {
        let mut factory = PlayerFactory::default();
        assert_eq!(
            GameState::new(6, 7, factory.roster(["red"])),
            Err(SetupError::NotEnoughPlayers(1))
        );
        assert_eq!(
            GameState::new(3, 7, factory.roster(["red", "yellow"])),
            Err(SetupError::BoardTooSmall {
                height: 3,
                width: 7
            })
        );
        let twins = vec![Player::new(Ordinal(1), "red"), Player::new(Ordinal(1), "blue")];
        assert_eq!(
            GameState::new(6, 7, twins),
            Err(SetupError::DuplicateOrdinal(1))
        );
    }

    #[test]
    fn test_placement_advances_turn() {
        let mut state = two_player(6, 7);
        let placement = state.attempt_move(3).unwrap();
        assert_eq!(
            placement,
            Placement {
                row: 5,
                column: 3,
                player: Ordinal(1),
                status: Status::InProgress,
            }
        );
        assert_eq!(state.board().get(5, 3), Cell::Occupied(Ordinal(1)));
        assert_eq!(state.current_player().ordinal(), Ordinal(2));
    }

    #[test]
    fn test_vertical_win_in_first_column() {
        // Yellow plays column 1 in between so Red's pieces stack alone in column 0
        let mut state = two_player(6, 7);
        let results = play(&mut state, &[0, 1, 0, 1, 0, 1, 0]);
        assert!(results.iter().all(Option::is_some));
        assert_eq!(state.status(), Status::Won(Ordinal(1)));
        for row in [5, 4, 3, 2] {
            assert_eq!(state.board().get(row, 0), Cell::Occupied(Ordinal(1)));
        }
        assert_eq!(state.move_count(), 7);
    }

    #[test]
    fn test_horizontal_win_on_seventh_move() {
        let mut state = two_player(6, 7);
        let results = play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(results[..6]
            .iter()
            .all(|p| p.unwrap().status == Status::InProgress));
        assert_eq!(results[6].unwrap().status, Status::Won(Ordinal(1)));
        for col in 0..4 {
            assert_eq!(state.board().get(5, col), Cell::Occupied(Ordinal(1)));
        }
        // The winner stays the current player
        assert_eq!(state.current_player().ordinal(), Ordinal(1));
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_full_small_board_ties() {
        // Columns fill bottom-up as A,B,A,B / A,B,A,B / B,A,B,A / B,A,B,A
        let mut state = two_player(4, 4);
        let results = play(&mut state, &[0, 2, 2, 0, 1, 3, 3, 1, 0, 2, 2, 0, 1, 3, 3, 1]);
        assert!(results.iter().all(Option::is_some));
        assert!(state.board().is_full());
        assert_eq!(state.status(), Status::Tied);
        assert_eq!(state.status().message().as_deref(), Some("Tie!"));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        // The 16th move fills the board and completes the top row for player 2
        let mut state = two_player(4, 4);
        let results = play(&mut state, &[0, 1, 0, 2, 1, 0, 2, 0, 3, 3, 1, 1, 2, 2, 3, 3]);
        assert!(results[..15]
            .iter()
            .all(|p| p.unwrap().status == Status::InProgress));
        assert!(state.board().is_full());
        assert_eq!(state.status(), Status::Won(Ordinal(2)));
    }

    #[test]
    fn test_full_column_is_a_no_op() {
        let mut state = two_player(6, 7);
        play(&mut state, &[0, 0, 0, 0, 0, 0]);
        let before = state.clone();

        assert_eq!(state.attempt_move(0), None);
        assert_eq!(state, before);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.current_player().ordinal(), Ordinal(1));
        assert!(!state.legal_columns().contains(&0));
    }

    #[test]
    fn test_out_of_range_column_is_a_no_op() {
        let mut state = two_player(6, 7);
        let before = state.clone();
        assert_eq!(state.attempt_move(7), None);
        assert_eq!(state.attempt_move(usize::MAX), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut state = two_player(6, 7);
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        let decided = state.clone();
        for col in 0..7 {
            assert_eq!(state.attempt_move(col), None);
        }
        assert_eq!(state, decided);
    }

    #[test]
    fn test_three_players_rotate_cyclically() {
        let players = PlayerFactory::default().roster(["red", "yellow", "green"]);
        let mut state = GameState::new(6, 7, players).unwrap();
        let movers: Vec<u32> = play(&mut state, &[0, 1, 2, 3, 4])
            .into_iter()
            .map(|p| p.unwrap().player.0)
            .collect();
        assert_eq!(movers, vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_observer_sees_placement_before_result() {
        let mut state = two_player(6, 7);
        let mut recorder = Recorder::default();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            state.attempt_move_observed(col, &mut recorder);
        }
        // Rejected move reports nothing
        assert_eq!(state.attempt_move_observed(4, &mut recorder), None);

        assert_eq!(recorder.events.len(), 8);
        assert_eq!(recorder.events[0], "placed 5 0 red");
        assert_eq!(recorder.events[1], "placed 4 0 yellow");
        assert_eq!(recorder.events[6], "placed 5 3 red");
        assert_eq!(recorder.events[7], "Player 1 won!");
    }

    proptest! {
        /// While nobody has won, movers strictly alternate and every accepted
        /// move lands on a previously empty cell.
        #[test]
        fn prop_turns_alternate(columns in prop::collection::vec(0usize..7, 1..60)) {
            let mut state = two_player(6, 7);
            let mut last_mover = None;
            for col in columns {
                if state.is_terminal() {
                    break;
                }
                let landing = state.board().landing_row(col);
                let before = state.clone();
                match state.attempt_move(col) {
                    Some(placement) => {
                        prop_assert_eq!(Some(placement.row), landing);
                        prop_assert!(before.board().get(placement.row, col).is_empty());
                        prop_assert_eq!(
                            state.board().get(placement.row, col),
                            Cell::Occupied(placement.player)
                        );
                        prop_assert_ne!(Some(placement.player), last_mover);
                        last_mover = Some(placement.player);
                    }
                    None => {
                        prop_assert!(landing.is_none());
                        prop_assert_eq!(&state, &before);
                    }
                }
            }
        }

        /// Once decided, no further move changes anything.
        #[test]
        fn prop_terminal_state_is_frozen(columns in prop::collection::vec(0usize..4, 16..80)) {
            let mut state = two_player(4, 4);
            for &col in &columns {
                state.attempt_move(col);
                if state.is_terminal() {
                    break;
                }
            }
            if state.is_terminal() {
                let decided = state.clone();
                for &col in &columns {
                    prop_assert_eq!(state.attempt_move(col), None);
                }
                prop_assert_eq!(&state, &decided);
            }
        }
    }
}
