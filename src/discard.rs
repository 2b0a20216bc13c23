//! Cards from finished rounds waiting to go back into the shoe.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The discard pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds cards to the pile, keeping their order.
    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Returns the cards in the pile, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns every card, leaving the pile empty.
    pub fn take(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}
