use log::warn;

use crate::{Participant, ParticipantKind};

/// Settings of a console session, usually loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionArgs {
    pub player_x: Participant,
    pub player_o: Participant,

    /// Seed for the computer players. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How many games to play when nobody is there to answer "play again".
    pub games: usize,
}

impl Default for SessionArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionArgs {
    const DEFAULT_PLAYER_X_NAME: &'static str = "Player X";
    const DEFAULT_PLAYER_O_NAME: &'static str = "Computer";
    const DEFAULT_PLAYER_X_KIND: ParticipantKind = ParticipantKind::Human;
    const DEFAULT_PLAYER_O_KIND: ParticipantKind = ParticipantKind::Computer;
    const DEFAULT_GAMES: usize = 1;

    pub fn new() -> Self {
        Self {
            player_x: Participant::new(Self::DEFAULT_PLAYER_X_NAME, Self::DEFAULT_PLAYER_X_KIND),
            player_o: Participant::new(Self::DEFAULT_PLAYER_O_NAME, Self::DEFAULT_PLAYER_O_KIND),
            seed: None,
            games: Self::DEFAULT_GAMES,
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_kind = |key: &str, default: ParticipantKind| {
            lookup(key)
                .map(|value| {
                    value.parse::<ParticipantKind>().unwrap_or_else(|err| {
                        warn!("{}: {}, using {:?}", key, err, default);
                        default
                    })
                })
                .unwrap_or(default)
        };

        let player_x = Participant::new(
            lookup("TICTACTOE_PLAYER_X").unwrap_or_else(|| Self::DEFAULT_PLAYER_X_NAME.to_string()),
            parse_kind("TICTACTOE_X_KIND", Self::DEFAULT_PLAYER_X_KIND),
        );
        let player_o = Participant::new(
            lookup("TICTACTOE_PLAYER_O").unwrap_or_else(|| Self::DEFAULT_PLAYER_O_NAME.to_string()),
            parse_kind("TICTACTOE_O_KIND", Self::DEFAULT_PLAYER_O_KIND),
        );
        let seed = lookup("TICTACTOE_SEED").and_then(|value| {
            value
                .parse::<u64>()
                .map_err(|err| warn!("TICTACTOE_SEED: {:?}: {}, seeding from the OS", value, err))
                .ok()
        });
        let games = lookup("TICTACTOE_GAMES")
            .map(|value| {
                value.parse::<usize>().unwrap_or_else(|err| {
                    warn!(
                        "TICTACTOE_GAMES: {:?}: {}, using {}",
                        value,
                        err,
                        Self::DEFAULT_GAMES
                    );
                    Self::DEFAULT_GAMES
                })
            })
            .unwrap_or(Self::DEFAULT_GAMES);

        Self {
            player_x,
            player_o,
            seed,
            games,
        }
    }
}
