use crate::{Field, GameState, Player};
use log::trace;
use ndarray::{s, Array2, ArrayView1};

/// Evaluates a 3x3 grid.
///
/// A player has won when one of the eight lines (rows, columns and both
/// diagonals) holds only their mark. Without a winner a grid without vacant
/// fields is a draw, anything else is still in progress with `next_player`
/// to move. The order in which lines are checked does not matter.
///
/// ```
/// use ndarray::array;
/// use tictactoe::{check_matrix, Field, GameState, Player};
///
/// let x = Field::Occupied { player: Player::X };
/// let o = Field::Occupied { player: Player::O };
/// let v = Field::Vacant;
///
/// // X O .
/// // O X .
/// // . . X
/// let matrix = array![[x, o, v], [o, x, v], [v, v, x]];
/// assert_eq!(check_matrix(&matrix, Player::O), GameState::Won { winner: Player::X });
/// ```
pub fn check_matrix(matrix: &Array2<Field>, next_player: Player) -> GameState {
    let flipped = matrix.slice(s![..;-1, ..]);
    let winner = matrix
        .rows()
        .into_iter()
        .chain(matrix.columns())
        .chain([matrix.diag(), flipped.diag()])
        .find_map(get_line_owner);

    if let Some(winner) = winner {
        trace!("found a complete line for {}", winner);
        GameState::Won { winner }
    } else if matrix.iter().all(|field| !field.is_vacant()) {
        GameState::Draw
    } else {
        GameState::InProgress { next_player }
    }
}

/// The player holding every field of `line`, if any.
fn get_line_owner(line: ArrayView1<'_, Field>) -> Option<Player> {
    let player = line.get(0)?.get_player()?;
    line.iter()
        .all(|field| *field == Field::Occupied { player })
        .then_some(player)
}
