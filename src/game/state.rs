//! Game state types.

/// Position of the current round in the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the player's bet.
    AwaitingBet,
    /// Bet accepted, initial cards not dealt yet.
    InitialDeal,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and the round can be settled.
    Payout,
    /// Round is settled; cards can be cleared to the discard pile.
    RoundComplete,
}
