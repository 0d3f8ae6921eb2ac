extern crate alloc;

use alloc::format;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Game, RoundState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the player over 21 the round is decided
    /// immediately and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck cannot
    /// supply a card.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);
        self.log.push(format!("Player hits and draws: {card}"));

        if self.player.is_busted() {
            let score = self.player.score();
            self.log.push(format!("Player busted with {score}"));
            self.decide(RoundState::PlayerBusted, Outcome::PlayerBusted);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Returns the score the player stands on.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<u8, ActionError> {
        self.ensure_player_turn()?;

        let score = self.player.score();
        self.log.push(format!("Player stands with {score}"));
        self.state = RoundState::DealerTurn;

        Ok(score)
    }
}
