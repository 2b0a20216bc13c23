//! Round result types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Natural 21 on the initial deal, paid 3:2.
    Blackjack,
    /// Player has the higher value.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer has the higher value.
    Lose,
    /// Player went over 21.
    Bust,
    /// Push (tie).
    Push,
}

impl HandOutcome {
    /// Returns whether the player won money.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win | Self::DealerBust)
    }

    /// Returns whether the player lost the bet.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: HandOutcome,
    /// The final bet, including any double down.
    pub bet: f64,
    /// Money won (positive) or lost (negative) this round.
    pub net: f64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The running bankroll after this round.
    pub bankroll: f64,
}
