use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::ShowdownError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::{HandOutcome, RoundResult};

use super::{Draw, Game, GameState};

/// The dealer stands on this value unless it is soft.
pub const DEALER_STAND_VALUE: u8 = 17;

/// Returns whether the dealer must take another card.
///
/// The dealer draws below 17 and on soft 17, and stands on hard 17 or more.
///
/// ```
/// use bjsim::{Card, Hand, Rank, Suit, dealer_must_draw};
///
/// let mut soft_17 = Hand::new();
/// soft_17.add_card(Card::new(Suit::Clubs, Rank::Ace));
/// soft_17.add_card(Card::new(Suit::Clubs, Rank::Six));
/// assert!(dealer_must_draw(&soft_17));
/// ```
#[must_use]
pub const fn dealer_must_draw(hand: &Hand) -> bool {
    let value = hand.value();
    value < DEALER_STAND_VALUE || (value == DEALER_STAND_VALUE && hand.is_soft())
}

impl Game {
    /// Dealer plays their hand according to the house rules.
    ///
    /// Returns the cards drawn by the dealer, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Draw>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn = Vec::new();

        while dealer_must_draw(&self.dealer_hand) {
            let draw = self.draw().ok_or(ShowdownError::NoCards)?;
            self.dealer_hand.add_card(draw.card);
            drawn.push(draw);
        }

        log::debug!(
            "dealer stands on {} after {} card(s)",
            self.dealer_hand.value(),
            drawn.len()
        );
        self.state = GameState::Payout;

        Ok(drawn)
    }

    /// Compares the final hands and pays out.
    ///
    /// A dealer bust pays the bet, a higher dealer value takes it, a lower one
    /// pays it, and equal values push.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in payout state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Payout {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer_hand.value();
        let player_value = self.player_hand.value();

        let outcome = if dealer_value > BLACKJACK {
            HandOutcome::DealerBust
        } else {
            match dealer_value.cmp(&player_value) {
                Ordering::Greater => HandOutcome::Lose,
                Ordering::Less => HandOutcome::Win,
                Ordering::Equal => HandOutcome::Push,
            }
        };

        Ok(self.resolve(outcome))
    }
}
