//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against a
//! dealer with fixed house rules: the dealer hits soft 17, a natural pays 3:2,
//! and the player may hit, stand, or double down. Finished hands go to a
//! discard pile that is shuffled back into the shoe when it runs dry.
//!
//! # Example
//!
//! ```
//! use bjsim::{Action, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default().with_decks(6), 42).unwrap();
//! game.place_bet(10.0).unwrap();
//! game.deal().unwrap();
//!
//! while game.state() == GameState::PlayerTurn {
//!     let action = if game.player_hand().value() < 17 { Action::Hit } else { Action::Stand };
//!     game.act(action).unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//!     game.settle().unwrap();
//! }
//!
//! let result = game.clear_round().unwrap();
//! assert_eq!(game.bankroll(), result.net);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod discard;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use action::Action;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use discard::DiscardPile;
pub use error::{
    ActionError, BetError, DealError, OptionsError, ParseActionError, RoundError, ShowdownError,
};
pub use game::{BLACKJACK_PAYS, DEALER_STAND_VALUE, Draw, Game, GameState, dealer_must_draw};
pub use hand::{BLACKJACK, Hand, evaluate_cards};
pub use options::GameOptions;
pub use result::{HandOutcome, RoundResult};
pub use shoe::Shoe;
