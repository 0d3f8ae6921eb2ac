//! Interactive play over line-based text input and output.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::error::{ActionError, DealError, DealerError, FinishError};
use crate::game::Game;

mod round;

pub use round::Command;

/// The only answer to "play again?" that starts another round.
const AFFIRMATIVE: &str = "y";

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended while the player still had to choose.
    #[error("input closed during the player's turn")]
    InputClosed,
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer could not finish their turn.
    #[error("dealer turn failed: {0}")]
    Dealer(#[from] DealerError),
    /// The round could not be finished.
    #[error("finishing the round failed: {0}")]
    Finish(#[from] FinishError),
}

/// A game session: rounds are played until the user declines another.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that reads answers from `input` and writes the
    /// table to `output`.
    pub const fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Runs rounds until the answer to "play again?" is anything but `y`.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends mid-turn, or the
    /// deck loses track of its cards.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        writeln!(self.output, "=== Welcome to Blackjack ===")?;

        let mut rounds = 0;
        loop {
            self.play_round()?;
            rounds += 1;

            let answer = self.prompt("\nPlay another round? (y/n): ")?;
            if answer.as_deref() != Some(AFFIRMATIVE) {
                break;
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;
        log::info!("session over after {rounds} round(s)");
        Ok(rounds)
    }

    /// Writes `text` without a newline and reads one trimmed, lowercased
    /// line. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the game mutably, e.g. to stack the deck between rounds.
    pub const fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Consumes the session, returning the game, input, and output.
    pub fn into_parts(self) -> (Game, R, W) {
        (self.game, self.input, self.output)
    }
}
