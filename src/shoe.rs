//! The shoe of undealt cards.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::discard::DiscardPile;

/// One or more decks of undealt cards.
///
/// The top of the shoe is the end of the underlying sequence, so drawing is a
/// cheap `pop`. The shoe only regains cards through [`Shoe::refill_if_empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds an unshuffled shoe of `num_decks` decks in ascending deck order.
    ///
    /// The caller is responsible for `num_decks` being at least one; see
    /// [`GameOptions::validate`](crate::GameOptions::validate). A zero count
    /// yields an empty shoe.
    ///
    /// ```
    /// use bjsim::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::new(6);
    /// assert_eq!(shoe.count(), 6 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(num_decks: u8) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for index in 1..=DECK_SIZE as u8 {
                if let Some(card) = Card::from_index(index) {
                    cards.push(card);
                }
            }
        }

        Self { cards }
    }

    /// Creates a shoe holding exactly `cards`. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Walks from the first position to the second-to-last, swapping each
    /// position with a uniformly chosen position at or after it.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        if len < 2 {
            return;
        }

        for i in 0..len - 1 {
            let j = rng.random_range(i..len);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top card, or `None` if the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Refills an empty shoe from the discard pile and shuffles it.
    ///
    /// Does nothing while the shoe still holds cards. Returns `true` if the
    /// shoe was refilled, which the caller should report as a reshuffle.
    pub fn refill_if_empty<R: Rng>(&mut self, discard: &mut DiscardPile, rng: &mut R) -> bool {
        if !self.cards.is_empty() {
            return false;
        }

        if discard.is_empty() {
            log::warn!("shoe is empty and there are no discarded cards to refill it");
            return false;
        }

        self.cards = discard.take();
        self.shuffle(rng);
        log::info!("reshuffled {} discarded cards into the shoe", self.cards.len());
        true
    }
}
