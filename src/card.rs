//! Card types and deck utilities.

use core::fmt;

/// Card suit, listed in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank. The discriminant is the rank number (Ace = 1, King = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank for a number in `1..=13`.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if matches!(number, 1..=13) {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the rank number (Ace = 1, King = 13).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the blackjack point value. Aces count 1 here; the hand
    /// decides when an ace is worth 11.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            other => other as u8,
        }
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates the card at position `index` of a fresh deck.
    ///
    /// Indices run from 1 to 52: Spades take 1..=13, Hearts 14..=26,
    /// Diamonds 27..=39 and Clubs 40..=52, each block ordered Ace to King.
    /// Returns `None` outside that range.
    ///
    /// ```
    /// use bjsim::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_index(14), Some(Card::new(Suit::Hearts, Rank::Ace)));
    /// assert_eq!(Card::from_index(0), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index == 0 || index as usize > DECK_SIZE {
            return None;
        }

        let suit = Suit::ALL[((index - 1) / 13) as usize];
        match Rank::from_number((index - 1) % 13 + 1) {
            Some(rank) => Some(Self::new(suit, rank)),
            None => None,
        }
    }

    /// Returns the deck position of this card, the inverse of [`Card::from_index`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit as u8 * 13 + self.rank.number()
    }

    /// Returns the blackjack point value (Ace = 1, face cards = 10).
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self.rank.point_value()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
