use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use rand::Rng;

use crate::{Board, Coordinates, GameData, GameState, Participant, Player, SessionArgs};

/// Reads `row col` from a line of console input.
///
/// Rows and columns may be separated by whitespace or a comma. Anything else
/// than exactly two non-negative whole numbers yields `None`; whether the
/// numbers are on the board is up to [`Board::validate_move`].
pub fn parse_coordinates(line: &str) -> Option<Coordinates> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let row: usize = parts.next()?.parse().ok()?;
    let column: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, column))
}

/// A console session: plays games between two participants until the
/// humans decline another round or the input ends.
pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    player_x: Participant,
    player_o: Participant,
    games: usize,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, rng: G, args: SessionArgs) -> Self {
        Self {
            input,
            output,
            rng,
            player_x: args.player_x,
            player_o: args.player_o,
            games: args.games,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn get_participant(&self, player: Player) -> &Participant {
        match player {
            Player::X => &self.player_x,
            Player::O => &self.player_o,
        }
    }

    fn has_human(&self) -> bool {
        self.player_x.is_human() || self.player_o.is_human()
    }

    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_for_move(&mut self, player: Player) -> io::Result<()> {
        let name = self.get_participant(player).name.clone();
        writeln!(
            self.output,
            "{}, it's your move and you're {}s.",
            name, player
        )?;
        writeln!(
            self.output,
            "Please choose your move by typing row col where row is 0, 1, or 2 and col is 0, 1, or 2."
        )?;
        self.output.flush()
    }

    fn receive_move(&mut self, player: Player) -> io::Result<Option<Coordinates>> {
        loop {
            self.ask_for_move(player)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_coordinates(&line) {
                Some(coordinates) => return Ok(Some(coordinates)),
                None => {
                    debug!("could not parse {:?} as a move", line);
                    writeln!(self.output, "Please type two whole numbers, e.g. 1 2.")?;
                }
            }
        }
    }

    fn generate_move(&mut self, board: &Board) -> io::Result<Option<Coordinates>> {
        let player = board.get_active_player();
        let coordinates = board.get_random_move(&mut self.rng);
        if let Some((row, column)) = coordinates {
            let name = self.get_participant(player).name.clone();
            writeln!(self.output, "{} ({}) plays {} {}.", name, player, row, column)?;
        }
        Ok(coordinates)
    }

    fn next_move(&mut self, board: &Board) -> io::Result<Option<Coordinates>> {
        let player = board.get_active_player();
        if self.get_participant(player).is_human() {
            self.receive_move(player)
        } else {
            self.generate_move(board)
        }
    }

    fn celebrate(&mut self, board: &Board) -> io::Result<()> {
        match board.get_state() {
            GameState::Won { winner } => {
                let name = self.get_participant(winner).name.clone();
                writeln!(self.output, "That was a winning move!")?;
                writeln!(self.output, "{} ({}) wins!", name, winner)?;
            }
            GameState::Draw => writeln!(self.output, "It's a draw!")?,
            GameState::InProgress { .. } => {}
        }
        Ok(())
    }

    /// Plays one game from a fresh board.
    ///
    /// Returns the finished board, or `None` if the input ended before the
    /// game did.
    pub fn play_game(&mut self) -> io::Result<Option<Board>> {
        let mut board = Board::new();
        info!(
            "new game: {} (X) against {} (O)",
            self.player_x.name, self.player_o.name
        );
        writeln!(self.output, "{}", board)?;

        while board.get_state().is_in_progress() {
            let Some(coordinates) = self.next_move(&board)? else {
                info!("input closed, abandoning the game");
                return Ok(None);
            };
            match board.apply_move(coordinates) {
                Ok(()) => writeln!(self.output, "{}", board)?,
                Err(err) => {
                    debug!("rejected {:?}: {}", coordinates, err);
                    writeln!(self.output, "Invalid move: {}.", err)?;
                }
            }
        }

        self.celebrate(&board)?;
        info!("game finished: {}", board.get_state());
        match serde_json::to_string(&GameData::from(&board)) {
            Ok(record) => debug!("game record: {}", record),
            Err(err) => warn!("could not serialize the game record: {}", err),
        }
        Ok(Some(board))
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Play again? (y/n)")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Runs games until nobody wants to continue. Returns how many games
    /// were played to the end.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut finished = 0;
        loop {
            // without a human the configured number of games is played
            if !self.has_human() && finished >= self.games {
                break;
            }
            if self.play_game()?.is_none() {
                break;
            }
            finished += 1;

            if self.has_human() && !self.ask_play_again()? {
                break;
            }
        }
        info!("session over after {} games", finished);
        Ok(finished)
    }
}
