use crate::action::Action;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::HandOutcome;

use super::{Draw, Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Ends the player's turn on a bust, or hands over to the dealer.
    fn finish_player_turn(&mut self) {
        if self.player_hand.is_bust() {
            log::debug!("player busts with {}", self.player_hand.value());
            self.resolve(HandOutcome::Bust);
        } else {
            self.state = GameState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 loses the bet immediately and the dealer does not play.
    /// Reaching exactly 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Draw, ActionError> {
        self.ensure_player_turn()?;

        let draw = self.draw().ok_or(ActionError::NoCards)?;
        self.player_hand.add_card(draw.card);

        if self.player_hand.value() >= BLACKJACK {
            self.finish_player_turn();
        }

        Ok(draw)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// The turn ends after the card whatever its value; a bust loses the
    /// doubled bet.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn double_down(&mut self) -> Result<Draw, ActionError> {
        self.ensure_player_turn()?;

        let draw = self.draw().ok_or(ActionError::NoCards)?;
        self.bet *= 2.0;
        self.player_hand.add_card(draw.card);
        log::debug!("player doubles down, bet now {}", self.bet);

        self.finish_player_turn();

        Ok(draw)
    }

    /// Dispatches a player decision.
    ///
    /// Returns the card drawn, if the action drew one.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn act(&mut self, action: Action) -> Result<Option<Draw>, ActionError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(|()| None),
            Action::DoubleDown => self.double_down().map(Some),
        }
    }
}
