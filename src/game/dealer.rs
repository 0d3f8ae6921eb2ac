extern crate alloc;

use alloc::format;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::DealerError;
use crate::result::Outcome;

use super::{Game, RoundState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until [`GameOptions::dealer_stands`] holds for their
    /// hand. A dealer bust decides the round; otherwise the scores are
    /// compared and the round moves to showdown.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// [`GameOptions::dealer_stands`]: crate::GameOptions::dealer_stands
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck cannot
    /// supply a card.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        loop {
            let score = self.dealer.score();
            if self.options.dealer_stands(score, self.dealer.is_soft()) {
                break;
            }

            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            self.log.push(format!(
                "Dealer hits and draws: {card} (score now {})",
                self.dealer.score()
            ));
        }

        self.log
            .push(format!("Dealer stands with {}", self.dealer.score()));

        if self.dealer.is_busted() {
            self.decide(RoundState::DealerBusted, Outcome::DealerBusted);
        } else {
            self.showdown();
        }

        Ok(drawn_cards)
    }

    /// Compares final scores; the higher one wins, equal scores tie.
    fn showdown(&mut self) {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        self.log
            .push(format!("Final Player score: {player_score}"));
        self.log
            .push(format!("Final Dealer score: {dealer_score}"));

        let outcome = match player_score.cmp(&dealer_score) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::DealerWins,
            Ordering::Equal => Outcome::Tie,
        };
        self.decide(RoundState::Showdown, outcome);
    }
}
