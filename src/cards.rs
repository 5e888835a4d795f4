use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank value from 2 (deuce) to 14 (ace).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// High-card points: A=4, K=3, Q=2, J=1, everything else 0.
    pub const fn hcp(self) -> u8 {
        match self {
            Rank::Ace => 4,
            Rank::King => 3,
            Rank::Queen => 2,
            Rank::Jack => 1,
            _ => 0,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t {
            "10" => Ok(Rank::Ten),
            _ => {
                let mut chars = t.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rank::try_from(c),
                    _ => Err(RankParseError::Invalid(s.to_string())),
                }
            }
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// The four suits in bidding order: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Display and tie-break priority: Spades, Hearts, Diamonds, Clubs.
    pub const BY_PRIORITY: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' | 'C' | '♣' => Ok(Suit::Clubs),
            'd' | 'D' | '♦' => Ok(Suit::Diamonds),
            'h' | 'H' | '♥' => Ok(Suit::Hearts),
            's' | 'S' | '♠' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card. Two cards are equal iff suit and rank match.
///
/// Cards order by suit first, then rank, which groups a sorted hand by suit.
///
/// ```
/// use bridge_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "AS");
/// assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Shorthand for `self.rank().value()`.
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // rank is everything but the last char; suit is the last char
        let Some(suit_ch) = t.chars().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use bridge_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, KD 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("11").is_err());
    }

    #[test]
    fn rank_values_and_points() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        let total: u8 = Rank::ALL.iter().map(|r| r.hcp()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("♥").unwrap(), Suit::Hearts);
        assert_eq!(Suit::from_str("Diamonds").unwrap(), Suit::Diamonds);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "AS");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("Q♣").unwrap(), Card::new(Rank::Queen, Suit::Clubs));
        assert!(Card::from_str("S").is_err());
        assert!(Card::from_str("").is_err());
    }

    #[test]
    fn ordering_is_suit_then_rank() {
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        let ace_hearts = Card::new(Rank::Ace, Suit::Hearts);
        let king_hearts = Card::new(Rank::King, Suit::Hearts);
        assert!(two_spades > ace_hearts);
        assert!(ace_hearts > king_hearts);
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("AS, KD 10c").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[2], Card::new(Rank::Ten, Suit::Clubs));
    }
}
