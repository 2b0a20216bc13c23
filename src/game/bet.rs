use alloc::vec::Vec;

use crate::error::{BetError, DealError, RoundError};
use crate::hand::BLACKJACK;
use crate::result::HandOutcome;

use super::{Draw, Game, GameState};

/// Cards dealt at the start of a round: one to the dealer, two to the player.
const INITIAL_CARDS: usize = 3;

impl Game {
    /// Places the bet for the next round.
    ///
    /// A bet of zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a bet, or the amount is
    /// negative or not finite.
    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        if !amount.is_finite() {
            return Err(BetError::NotFinite);
        }

        if amount < 0.0 {
            return Err(BetError::Negative);
        }

        self.bet = amount;
        self.result = None;
        self.state = GameState::InitialDeal;
        log::debug!("bet placed: {amount}");

        Ok(())
    }

    /// Deals one card to the dealer and two to the player.
    ///
    /// The shoe is checked for a refill after every single card. If the player
    /// is dealt a natural 21, the round is settled on the spot at 3:2 and the
    /// game moves to [`GameState::RoundComplete`]; otherwise it moves to
    /// [`GameState::PlayerTurn`].
    ///
    /// Returns the cards in the order they were dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, or the shoe and discard
    /// pile together hold fewer than three cards.
    pub fn deal(&mut self) -> Result<Vec<Draw>, DealError> {
        if self.state != GameState::InitialDeal {
            return Err(DealError::InvalidState);
        }

        if self.cards_available() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut draws = Vec::with_capacity(INITIAL_CARDS);

        // Dealer's up card
        let draw = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.dealer_hand.add_card(draw.card);
        draws.push(draw);

        for _ in 0..2 {
            let draw = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.player_hand.add_card(draw.card);
            draws.push(draw);
        }

        if self.player_hand.value() == BLACKJACK {
            log::debug!("player dealt a natural");
            self.resolve(HandOutcome::Blackjack);
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(draws)
    }

    /// Places a bet and deals the opening cards.
    ///
    /// Check [`Game::state`] afterwards: a natural leaves the round already
    /// settled in [`GameState::RoundComplete`].
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is rejected or the deal fails.
    pub fn start_round(&mut self, bet: f64) -> Result<Vec<Draw>, RoundError> {
        self.place_bet(bet)?;
        Ok(self.deal()?)
    }
}
