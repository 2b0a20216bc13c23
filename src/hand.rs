//! Hand representation and blackjack valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// The best possible hand value.
pub const BLACKJACK: u8 = 21;

/// Evaluates a set of cards, returning `(total, is_soft)`.
///
/// Every ace first counts as 1. Aces are then upgraded to 11 one at a time
/// while the total is 11 or less, so at most one ace ends up worth 11 and the
/// hand is soft exactly when that happened.
///
/// ```
/// use bjsim::{Card, Rank, Suit, evaluate_cards};
///
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// assert_eq!(evaluate_cards(&[ace, ace]), (12, true));
/// ```
#[must_use]
pub fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.point_value());
    }

    let mut is_soft = false;
    for _ in 0..aces {
        if total > BLACKJACK - 10 {
            break;
        }
        total += 10;
        is_soft = true;
    }

    (total, is_soft)
}

/// A hand of cards held by the player or the dealer.
///
/// The value and softness are recomputed from the full card list on every
/// added card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Best value of the cards.
    total: u8,
    /// Whether an ace is counted as 11.
    soft: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        (self.total, self.soft) = evaluate_cards(&self.cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the value of the hand. Values above 21 mean the hand is bust.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand, returning its cards in the order they were dealt.
    pub fn take_cards(&mut self) -> Vec<Card> {
        self.total = 0;
        self.soft = false;
        core::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
