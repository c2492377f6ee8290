use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Vacant,
    Occupied {
        player: Player,
    },
}

impl Field {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }

    pub fn get_player(&self) -> Option<Player> {
        match self {
            Field::Occupied { player } => Some(*player),
            Field::Vacant => None,
        }
    }
}

// a vacant field renders as a single blank so the grid keeps its shape
impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Vacant => write!(f, " "),
            Field::Occupied { player } => write!(f, "{}", player),
        }
    }
}
