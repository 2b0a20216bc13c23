//! Game configuration options.

use crate::error::OptionsError;

/// Configuration options for a blackjack game.
///
/// House rules are fixed: the dealer hits soft 17 and a natural pays 3:2.
/// Only the size of the shoe is configurable.
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default().with_decks(6);
/// assert_eq!(options.decks, 6);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { decks: 1 }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::NoDecks`] if the deck count is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        Ok(())
    }
}
