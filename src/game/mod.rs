//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::card::Card;
use crate::discard::DiscardPile;
use crate::error::{OptionsError, RoundError, ShowdownError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{HandOutcome, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STAND_VALUE, dealer_must_draw};
pub use state::GameState;

/// Payout ratio for a natural blackjack.
pub const BLACKJACK_PAYS: f64 = 1.5;

/// A card taken from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card that was drawn.
    pub card: Card,
    /// Whether the shoe was refilled from the discard pile around this draw.
    pub reshuffled: bool,
}

/// A single-player blackjack session.
///
/// The game owns the shoe, the discard pile, the running bankroll and the
/// random source, plus the state of the round in progress. Several games can
/// live side by side; nothing is shared between them.
///
/// A round runs through [`Game::place_bet`], [`Game::deal`], player actions,
/// [`Game::dealer_play`], [`Game::settle`] and [`Game::clear_round`]. Check
/// [`Game::state`] between steps, since a natural or a bust skips ahead to
/// [`GameState::RoundComplete`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Cards from finished rounds.
    pub discard: DiscardPile,
    /// Net amount won or lost over all settled rounds.
    bankroll: f64,
    /// Current game state.
    state: GameState,
    /// Bet for the current round.
    bet: f64,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Result of the current round once settled.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(2), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 104);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(options.decks);
        shoe.shuffle(&mut rng);
        log::debug!("new game with {} deck(s)", options.decks);

        Ok(Self {
            options,
            shoe,
            discard: DiscardPile::new(),
            bankroll: 0.0,
            state: GameState::AwaitingBet,
            bet: 0.0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            result: None,
            rng,
        })
    }

    /// Draws a card, refilling the shoe from the discard pile whenever it is
    /// empty, both before and after the draw.
    fn draw(&mut self) -> Option<Draw> {
        let refilled_before = self
            .shoe
            .refill_if_empty(&mut self.discard, &mut self.rng);
        let card = self.shoe.draw()?;
        let refilled_after = self
            .shoe
            .refill_if_empty(&mut self.discard, &mut self.rng);
        log::debug!("drew {card}");
        Some(Draw {
            card,
            reshuffled: refilled_before || refilled_after,
        })
    }

    /// Cards the shoe can still supply this round, counting the discard pile.
    fn cards_available(&self) -> usize {
        self.shoe.count() + self.discard.len()
    }

    /// Records the outcome of the round and updates the bankroll.
    fn resolve(&mut self, outcome: HandOutcome) -> RoundResult {
        let net = match outcome {
            HandOutcome::Blackjack => self.bet * BLACKJACK_PAYS,
            HandOutcome::Win | HandOutcome::DealerBust => self.bet,
            HandOutcome::Lose | HandOutcome::Bust => -self.bet,
            HandOutcome::Push => 0.0,
        };
        self.bankroll += net;

        let result = RoundResult {
            outcome,
            bet: self.bet,
            net,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            bankroll: self.bankroll,
        };
        self.result = Some(result);
        self.state = GameState::RoundComplete;
        log::info!(
            "round settled: {outcome:?}, net {net}, bankroll {}",
            self.bankroll
        );

        result
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the bet for the current round.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Returns the net amount won or lost so far.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the result of the current round once it has been settled.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.count()
    }

    /// Moves both hands to the discard pile and gets ready for the next bet.
    ///
    /// The dealer's cards go to the pile first, then the player's.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn clear_round(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundComplete {
            return Err(ShowdownError::InvalidState);
        }
        let result = self.result.take().ok_or(ShowdownError::InvalidState)?;

        let dealer_cards = self.dealer_hand.take_cards();
        let player_cards = self.player_hand.take_cards();
        self.discard.extend(dealer_cards);
        self.discard.extend(player_cards);

        self.bet = 0.0;
        self.state = GameState::AwaitingBet;
        log::debug!("round cleared, {} card(s) in discard pile", self.discard.len());

        Ok(result)
    }

    /// Plays a complete round, asking `decide` for every player decision.
    ///
    /// `decide` receives the player's hand and the dealer's hand. The round is
    /// cleared before returning, so its cards are already in the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is rejected, the game is not waiting for a
    /// bet, or the shoe runs out of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Action, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// let result = game
    ///     .play_round(10.0, |player, _dealer| {
    ///         if player.value() < 17 { Action::Hit } else { Action::Stand }
    ///     })
    ///     .unwrap();
    /// assert_eq!(game.bankroll(), result.bankroll);
    /// ```
    pub fn play_round<F>(&mut self, bet: f64, mut decide: F) -> Result<RoundResult, RoundError>
    where
        F: FnMut(&Hand, &Hand) -> Action,
    {
        self.start_round(bet)?;

        while self.state == GameState::PlayerTurn {
            let action = decide(&self.player_hand, &self.dealer_hand);
            self.act(action)?;
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }

        if self.state == GameState::Payout {
            self.settle()?;
        }

        Ok(self.clear_round()?)
    }
}
