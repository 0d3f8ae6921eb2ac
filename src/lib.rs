//! A single-player text blackjack game against a rule-bound dealer.
//!
//! The crate provides a [`Game`] type that runs one round at a time
//! (dealing, the player's turn, the dealer's turn, and the showdown) over a
//! single 52-card [`Deck`] that refills itself from its discard pile. With
//! the `std` feature, [`Session`] drives rounds interactively over any
//! line-based input and text output.
//!
//! # Example
//!
//! ```
//! use blackjack::{Game, GameOptions, RoundState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), RoundState::PlayerTurn);
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! let summary = game.finish().unwrap();
//! assert_eq!(summary.discarded, game.deck().discarded());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod messages;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DealerError, DeckError, FinishError};
pub use game::{Game, RoundState};
pub use hand::{HIDDEN_CARD, Hand, Role};
pub use messages::MessageLog;
pub use options::GameOptions;
pub use result::{Outcome, RoundSummary};
#[cfg(feature = "std")]
pub use session::{Command, Session, SessionError};
