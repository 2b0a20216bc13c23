//! Player decisions.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// A decision the player can make during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, take exactly one card, and end the turn.
    DoubleDown,
}

impl Action {
    /// Returns the literal token for this action.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DoubleDown => "double down",
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses one of the tokens `hit`, `stand` or `double down`.
    ///
    /// ```
    /// use bjsim::Action;
    ///
    /// assert_eq!("double down".parse(), Ok(Action::DoubleDown));
    /// assert!("split".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            "double down" => Ok(Self::DoubleDown),
            _ => Err(ParseActionError),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
