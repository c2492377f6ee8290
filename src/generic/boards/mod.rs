mod board;
mod matrix_checker;

pub use board::{Board, InvalidGameData, InvalidMove};
pub use matrix_checker::check_matrix;
