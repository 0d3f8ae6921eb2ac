//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(17)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer stops drawing once their score reaches this value.
    pub dealer_stands_at: u8,
    /// Whether the dealer stands on a soft total equal to
    /// `dealer_stands_at`. When false the dealer draws once more on it.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u8) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Returns whether the dealer should stop drawing with the given score.
    #[must_use]
    pub const fn dealer_stands(&self, score: u8, is_soft: bool) -> bool {
        if score > self.dealer_stands_at {
            return true;
        }
        score == self.dealer_stands_at && (!is_soft || self.stand_on_soft_17)
    }
}
