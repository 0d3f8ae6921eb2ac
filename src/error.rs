//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Both the draw pile and the discard pile are empty.
    ///
    /// Cards in play always live in exactly one of the piles or a hand, so
    /// this only happens when cards have been lost.
    #[error("deck exhausted: draw and discard piles are both empty")]
    Exhausted,
    /// A card to stack is not in the draw pile.
    #[error("{0} is not in the draw pile")]
    NotInDrawPile(Card),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// It is not the dealer's turn.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when finishing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The round has not reached an outcome yet.
    #[error("round has no outcome yet")]
    InvalidState,
}
