use core::str::FromStr;
use std::io::{BufRead, Write};

use crate::game::RoundState;
use crate::result::RoundSummary;

use super::{Session, SessionError};

/// A choice during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Command {
    type Err = ();

    /// Parses `h`/`hit` or `s`/`stand`, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Self::Hit),
            "s" | "stand" => Ok(Self::Stand),
            _ => Err(()),
        }
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Plays one full round and prints its results.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, input ends during the
    /// player's turn, or the deck runs out of cards.
    pub fn play_round(&mut self) -> Result<RoundSummary, SessionError> {
        self.game.deal()?;
        self.player_turn()?;

        if self.game.state() == RoundState::DealerTurn {
            self.game.dealer_play()?;
        }

        let summary = self.game.finish()?;
        self.print_results(&summary)?;
        Ok(summary)
    }

    fn player_turn(&mut self) -> Result<(), SessionError> {
        loop {
            self.print_table()?;
            if self.game.state() != RoundState::PlayerTurn {
                return Ok(());
            }

            let Some(answer) = self.prompt("Hit or stand? (h/s): ")? else {
                return Err(SessionError::InputClosed);
            };

            match answer.parse::<Command>() {
                Ok(Command::Hit) => {
                    self.game.hit()?;
                }
                Ok(Command::Stand) => {
                    self.game.stand()?;
                    return Ok(());
                }
                Err(()) => {
                    writeln!(self.output, "Invalid input, please type 'h' or 's'.")?;
                }
            }
        }
    }

    fn print_table(&mut self) -> Result<(), SessionError> {
        let player = self.game.player();
        let dealer = self.game.dealer();
        writeln!(self.output, "\nYour hand: {}", player.render(false))?;
        writeln!(self.output, "Your score: {}", player.score())?;
        writeln!(
            self.output,
            "Dealer's visible card(s): {}",
            dealer.render(true)
        )?;
        Ok(())
    }

    fn print_results(&mut self, summary: &RoundSummary) -> Result<(), SessionError> {
        writeln!(self.output, "\n=== Round Results ===")?;
        for message in &summary.messages {
            writeln!(self.output, "{message}")?;
        }
        writeln!(
            self.output,
            "Cards moved to discard pile: {} (discard pile now {})",
            summary.discarded, summary.discard_pile
        )?;
        Ok(())
    }
}
