use crate::Move;
use serde::{Deserialize, Serialize};

/// The record of a game: every accepted move in the order it was played.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GameData {
    pub moves: Vec<Move>,
}

impl GameData {
    pub fn new() -> Self {
        Self { moves: vec![] }
    }

    pub fn add_move(&mut self, m: Move) {
        self.moves.push(m);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Player;

    #[test]
    fn serialized_layout() {
        let mut game_data = GameData::new();
        game_data.add_move(Move::new((1, 2), Player::X));

        let serialized = serde_json::to_string(&game_data).unwrap();
        assert_eq!(
            serialized,
            r#"{"moves":[{"coordinates":[1,2],"player":"X"}]}"#
        );
        assert_eq!(
            serde_json::from_str::<GameData>(&serialized).unwrap(),
            game_data
        );
    }
}
