mod boards;
mod field;
mod game_data;
mod gamestate;
mod r#move;
mod player;

pub use boards::{check_matrix, Board, InvalidGameData, InvalidMove};
pub use field::Field;
pub use game_data::GameData;
pub use gamestate::GameState;
pub use player::Player;
pub use r#move::{Coordinates, Move};
