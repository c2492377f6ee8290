use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{generic::boards::check_matrix, Coordinates, Field, GameData, GameState, Move, Player};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds,
    CellOccupied,
    GameAlreadyOver,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfBounds => write!(f, "that position is outside of the board"),
            InvalidMove::CellOccupied => write!(f, "that position is already taken"),
            InvalidMove::GameAlreadyOver => write!(f, "the game has already ended"),
        }
    }
}

impl std::error::Error for InvalidMove {}

/// Why a recorded game could not be replayed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGameData {
    /// The move is attributed to the player who was not on turn.
    NotYourTurn { move_index: usize, player: Player },
    Rejected { move_index: usize, reason: InvalidMove },
}

impl Display for InvalidGameData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGameData::NotYourTurn { move_index, player } => {
                write!(f, "move {} was made by {} out of turn", move_index, player)
            }
            InvalidGameData::Rejected { move_index, reason } => {
                write!(f, "move {} is invalid: {}", move_index, reason)
            }
        }
    }
}

impl std::error::Error for InvalidGameData {}

/// A single game of tic-tac-toe.
///
/// The board owns the 3x3 grid, the player whose turn it is and the moves
/// accepted so far. It only changes through [`Board::apply_move`] and stops
/// accepting moves once somebody won or the grid is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    data: Array2<Field>,
    moves: Vec<Move>,
    active_player: Player,
    state: GameState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<GameData> for Board {
    type Error = InvalidGameData;

    /// Replays the recorded moves on a fresh board.
    fn try_from(game_data: GameData) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (move_index, m) in game_data.moves.into_iter().enumerate() {
            // a finished game rejects every further move, whoever made it
            if board.get_state().is_in_progress() && m.player != board.get_active_player() {
                return Err(InvalidGameData::NotYourTurn {
                    move_index,
                    player: m.player,
                });
            }
            board
                .apply_move(m.coordinates)
                .map_err(|reason| InvalidGameData::Rejected { move_index, reason })?;
        }
        Ok(board)
    }
}

impl From<&Board> for GameData {
    fn from(board: &Board) -> Self {
        GameData {
            moves: board.moves.clone(),
        }
    }
}

impl From<Board> for GameData {
    fn from(board: Board) -> Self {
        GameData { moves: board.moves }
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    pub const MAX_MOVES: usize = Self::SIZE.0 * Self::SIZE.1;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Field::Vacant),
            moves: Vec::new(),
            active_player: Player::FIRST,
            state: GameState::InProgress {
                next_player: Player::FIRST,
            },
        }
    }

    /// The player whose mark the next accepted move places. After the game
    /// was won this stays the winner.
    pub fn get_active_player(&self) -> Player {
        self.active_player
    }

    pub fn get_state(&self) -> GameState {
        self.state
    }

    pub fn get_moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns `None` for coordinates outside of the board.
    pub fn get_field(&self, coordinates: Coordinates) -> Option<Field> {
        self.data.get(coordinates).copied()
    }

    /// All vacant coordinates in row-major order. Empty once the game ended.
    pub fn get_allowed_moves(&self) -> Vec<Coordinates> {
        if !self.state.is_in_progress() {
            return Vec::new();
        }

        let allowed_moves: Vec<Coordinates> = (0..Self::SIZE.0)
            .cartesian_product(0..Self::SIZE.1)
            .filter(|coordinates| self.data[*coordinates].is_vacant())
            .collect();

        debug!("allowed moves: {}", allowed_moves.len());
        allowed_moves
    }

    /// Picks one of the allowed moves, each with the same probability.
    pub fn get_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinates> {
        self.get_allowed_moves().choose(rng).copied()
    }

    pub fn is_valid_move(&self, coordinates: Coordinates) -> bool {
        self.validate_move(coordinates).is_ok()
    }

    pub fn validate_move(&self, coordinates: Coordinates) -> Result<(), InvalidMove> {
        // GameAlreadyOver
        if !self.state.is_in_progress() {
            return Err(InvalidMove::GameAlreadyOver);
        }
        // OutOfBounds
        let field = self
            .get_field(coordinates)
            .ok_or(InvalidMove::OutOfBounds)?;
        // CellOccupied
        if !field.is_vacant() {
            return Err(InvalidMove::CellOccupied);
        }
        Ok(())
    }

    /// Places the active player's mark at `coordinates`.
    ///
    /// Nothing changes when the move is rejected. A winning move leaves the
    /// active player untouched, every other accepted move hands the turn to
    /// the opponent.
    pub fn apply_move(&mut self, coordinates: Coordinates) -> Result<(), InvalidMove> {
        self.validate_move(coordinates)?;

        let player = self.active_player;
        self.data[coordinates] = Field::Occupied { player };
        self.moves.push(Move::new(coordinates, player));
        debug!("{} played {:?}", player, coordinates);

        self.state = match check_matrix(&self.data, player.other()) {
            GameState::InProgress { next_player } => {
                self.active_player = next_player;
                GameState::InProgress { next_player }
            }
            terminal => {
                debug!("game over after {} moves: {}", self.moves.len(), terminal);
                terminal
            }
        };
        Ok(())
    }
}

impl Display for Board {
    //  | |
    // -----
    //  | |
    // -----
    //  | |
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .data
            .rows()
            .into_iter()
            .map(|row| row.iter().join("|"))
            .join("\n-----\n");
        write!(f, "{}", rendered)
    }
}
