//! Round engine and state management.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DeckError, FinishError};
use crate::hand::{Hand, Role};
use crate::messages::MessageLog;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundSummary};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A blackjack table with one player and the dealer.
///
/// The game owns the deck, both hands, and the round's message log. A round
/// is driven by calling [`deal`](Self::deal), then [`hit`](Self::hit) /
/// [`stand`](Self::stand), [`dealer_play`](Self::dealer_play), and finally
/// [`finish`](Self::finish). Calls made in the wrong state are rejected
/// without side effects.
#[derive(Debug, Clone)]
pub struct Game {
    /// Draw and discard piles.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Messages recorded this round.
    log: MessageLog,
    /// Current round state.
    state: RoundState,
    /// How the current round ended, once decided.
    outcome: Option<Outcome>,
    /// Game options.
    options: GameOptions,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), RoundState::Waiting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game around an existing deck.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(Role::Player),
            dealer: Hand::new(Role::Dealer),
            log: MessageLog::new(),
            state: RoundState::Waiting,
            outcome: None,
            options,
        }
    }

    /// Draws a card, noting a reshuffle in the round log if one happened.
    fn draw(&mut self) -> Result<Card, DeckError> {
        let before = self.deck.reshuffles();
        let card = self.deck.draw()?;
        if self.deck.reshuffles() != before {
            self.log.push("Deck empty - reshuffled the discard pile.");
        }
        Ok(card)
    }

    fn log_hands(&mut self, conceal_dealer: bool) {
        self.log.push(format!(
            "Player hand: {} (score {})",
            self.player.render(false),
            self.player.score()
        ));
        if conceal_dealer {
            self.log
                .push(format!("Dealer hand: {}", self.dealer.render(true)));
        } else {
            self.log.push(format!(
                "Dealer hand: {} (score {})",
                self.dealer.render(false),
                self.dealer.score()
            ));
        }
    }

    fn decide(&mut self, state: RoundState, outcome: Outcome) {
        self.log.push(outcome.verdict());
        self.state = state;
        self.outcome = Some(outcome);
        log::info!(
            "round decided: {outcome:?} (player {}, dealer {})",
            self.player.score(),
            self.dealer.score()
        );
    }

    /// Deals a new round: two cards each, alternating player and dealer.
    ///
    /// Clears both hands and the message log first, and records the opening
    /// hands with the dealer's first card concealed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the deck cannot supply
    /// four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if !self.state.can_deal() {
            return Err(DealError::InvalidState);
        }

        self.state = RoundState::Dealing;
        self.player.clear();
        self.dealer.clear();
        self.log.clear();
        self.outcome = None;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        self.log.push("--- Initial deal ---");
        self.log_hands(true);

        self.state = RoundState::PlayerTurn;
        log::debug!("dealt round, player on {}", self.player.score());
        Ok(())
    }

    /// Ends a decided round.
    ///
    /// Records both hands in full, drains the message log, and moves the
    /// player's cards and then the dealer's cards to the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has no outcome yet.
    pub fn finish(&mut self) -> Result<RoundSummary, FinishError> {
        let outcome = match (self.state.is_decided(), self.outcome) {
            (true, Some(outcome)) => outcome,
            _ => return Err(FinishError::InvalidState),
        };

        self.log_hands(false);
        let messages = self.log.drain();
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        let mut discarded = 0;
        let cards: Vec<Card> = self
            .player
            .take_cards()
            .into_iter()
            .chain(self.dealer.take_cards())
            .collect();
        for card in cards {
            self.deck.discard(card);
            discarded += 1;
        }

        self.state = RoundState::Cleanup;
        log::debug!(
            "round cleaned up, {discarded} cards discarded, {} in the draw pile",
            self.deck.remaining()
        );

        Ok(RoundSummary {
            outcome,
            player_score,
            dealer_score,
            messages,
            discarded,
            discard_pile: self.deck.discarded(),
        })
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome of the current round, once decided.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck mutably, e.g. to stack it between rounds.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the messages recorded so far this round.
    #[must_use]
    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}
