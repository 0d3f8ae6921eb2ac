//! The draw pile and discard pile.

extern crate alloc;

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single 52-card deck with a discard pile.
///
/// The front of the draw pile is the end of the underlying vector, so
/// drawing is a `pop`. The discard pile is only ever reshuffled as a whole,
/// so its order carries no meaning beyond "last pushed is on top".
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undealt cards; the next card to draw is last.
    draw_pile: Vec<Card>,
    /// Cards returned at the end of a round.
    discard_pile: Vec<Card>,
    /// Number of reshuffles from the discard pile so far.
    reshuffles: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds and shuffles a full deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            draw_pile: Self::build(),
            discard_pile: Vec::with_capacity(DECK_SIZE),
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// One card per suit and rank, suit-major.
    fn build() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Shuffles the draw pile in place (Fisher-Yates).
    pub fn shuffle(&mut self) {
        for i in (1..self.draw_pile.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.draw_pile.swap(i, j);
        }
    }

    /// Draws the front card, reshuffling the discard pile in first if the
    /// draw pile is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if both piles are empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.draw_pile.is_empty() {
            self.reshuffle_from_discard()?;
        }
        let card = self.draw_pile.pop().ok_or(DeckError::Exhausted)?;
        log::debug!("drew {card} ({} left)", self.draw_pile.len());
        Ok(card)
    }

    /// Puts a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    fn reshuffle_from_discard(&mut self) -> Result<(), DeckError> {
        if self.discard_pile.is_empty() {
            return Err(DeckError::Exhausted);
        }
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle();
        self.reshuffles += 1;
        log::info!(
            "deck empty, reshuffled {} cards from the discard pile",
            self.draw_pile.len()
        );
        Ok(())
    }

    /// Moves the given cards to the front of the draw pile so the next
    /// draws return them in order.
    ///
    /// Cards are moved, never copied, so the deck still holds each card once.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotInDrawPile`] if a card is not in the draw pile
    /// (already dealt, discarded, or listed twice). The deck is left
    /// unchanged in that case.
    pub fn stack(&mut self, order: &[Card]) -> Result<(), DeckError> {
        let mut rest = self.draw_pile.clone();
        for card in order {
            let index = rest
                .iter()
                .position(|c| c == card)
                .ok_or(DeckError::NotInDrawPile(*card))?;
            rest.remove(index);
        }
        rest.extend(order.iter().rev());
        self.draw_pile = rest;
        Ok(())
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns the draw pile; the next card to draw is last.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// Returns the discard pile; the most recent discard is last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns how many times the discard pile has been reshuffled in.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
