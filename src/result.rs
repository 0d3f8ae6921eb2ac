//! Round outcome types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the dealer never played.
    PlayerBusted,
    /// Dealer went over 21.
    DealerBusted,
    /// Player had the higher score at showdown.
    PlayerWins,
    /// Dealer had the higher score at showdown.
    DealerWins,
    /// Both scores were equal at showdown.
    Tie,
}

impl Outcome {
    /// Returns the verdict line for this outcome.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::PlayerBusted => "Player busted! Dealer wins.",
            Self::DealerBusted => "Dealer busted! Player wins.",
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBusted | Self::PlayerWins)
    }

    /// Returns whether the dealer won the round.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::PlayerBusted | Self::DealerWins)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verdict())
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Every message recorded during the round, oldest first.
    pub messages: Vec<String>,
    /// Cards moved to the discard pile by this round.
    pub discarded: usize,
    /// Size of the deck's discard pile afterwards.
    pub discard_pile: usize,
}
