//! Player and dealer hand representations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use core::mem;

use crate::card::Card;

/// Placeholder shown instead of the dealer's concealed card.
pub const HIDDEN_CARD: &str = "[Hidden Card]";

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}

impl Role {
    /// Returns the display name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }
}

/// The cards dealt to one participant.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Owner of the hand.
    role: Role,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            cards: Vec::new(),
            role,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Removes and returns all cards in hand order.
    pub fn take_cards(&mut self) -> Vec<Card> {
        mem::take(&mut self.cards)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the owner of the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Calculates the score of the hand.
    ///
    /// Aces start at 11; while the total is over 21, one ace at a time is
    /// recounted as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > 21
    }

    /// Renders the cards as a comma-separated list.
    ///
    /// With `conceal_first`, a dealer hand shows [`HIDDEN_CARD`] in place of
    /// its first card. Player hands are always shown in full.
    #[must_use]
    pub fn render(&self, conceal_first: bool) -> String {
        let mut out = String::new();
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if i == 0 && conceal_first && self.role == Role::Dealer {
                out.push_str(HIDDEN_CARD);
            } else {
                let _ = write!(out, "{card}");
            }
        }
        out
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
