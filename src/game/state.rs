//! Round state types.

/// Where a round currently stands.
///
/// A round runs `Dealing -> PlayerTurn`, then ends in `PlayerBusted`, or
/// continues to `DealerTurn` and ends in `DealerBusted` or `Showdown`. All
/// three endings go to `Cleanup` once the round is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been dealt yet.
    Waiting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player went over 21.
    PlayerBusted,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The dealer went over 21.
    DealerBusted,
    /// Scores have been compared.
    Showdown,
    /// Cards are back in the discard pile; a new round can be dealt.
    Cleanup,
}

impl RoundState {
    /// Returns whether the round has an outcome and can be finished.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        matches!(
            self,
            Self::PlayerBusted | Self::DealerBusted | Self::Showdown
        )
    }

    /// Returns whether a new round can be dealt.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, Self::Waiting | Self::Cleanup)
    }
}
