use crate::cards::{parse_cards, Card, Suit};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card not in hand: {0}")]
    NotInHand(Card),
    #[error("expected {expected} cards, got {got}")]
    WrongSize { expected: usize, got: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The cards held by one seat.
///
/// Cards are kept ordered by suit then rank so queries are deterministic.
/// Cards enter at deal time and leave one at a time during play.
///
/// ```
/// use bridge_rs::cards::{Card, Rank, Suit};
/// use bridge_rs::hand::Hand;
///
/// let mut hand: Hand = "AS KS 2H".parse().unwrap();
/// assert_eq!(hand.hcp(), 7);
/// hand.remove(Card::new(Rank::Ace, Suit::Spades)).unwrap();
/// assert!(hand.remove(Card::new(Rank::Ace, Suit::Spades)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from distinct cards.
    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut hand = Hand::new();
        for card in cards {
            if !hand.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(hand)
    }

    /// Build a full 13-card hand.
    pub fn try_full(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != 13 {
            return Err(HandError::WrongSize { expected: 13, got: cards.len() });
        }
        Self::try_from_cards(cards)
    }

    /// Add a card; returns `false` if it was already held.
    pub fn insert(&mut self, card: Card) -> bool {
        match self.cards.binary_search(&card) {
            Ok(_) => false,
            Err(pos) => {
                self.cards.insert(pos, card);
                true
            }
        }
    }

    pub fn remove(&mut self, card: Card) -> Result<(), HandError> {
        match self.cards.binary_search(&card) {
            Ok(pos) => {
                self.cards.remove(pos);
                Ok(())
            }
            Err(_) => Err(HandError::NotInHand(card)),
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, ascending by suit then rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one suit, lowest first.
    pub fn cards_in(&self, suit: Suit) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit() == suit)
    }

    pub fn suit_length(&self, suit: Suit) -> usize {
        self.cards_in(suit).count()
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit() == suit)
    }

    pub fn highest_in(&self, suit: Suit) -> Option<Card> {
        self.cards_in(suit).next_back()
    }

    pub fn lowest_in(&self, suit: Suit) -> Option<Card> {
        self.cards_in(suit).next()
    }

    /// High-card points (A=4, K=3, Q=2, J=1).
    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank().hcp()).sum()
    }

    /// Suit lengths indexed by suit order (C, D, H, S).
    pub fn distribution(&self) -> Distribution {
        let mut lengths = [0u8; 4];
        for c in &self.cards {
            lengths[c.suit().index()] += 1;
        }
        Distribution(lengths)
    }

    /// Cards in display order: Spades, Hearts, Diamonds, Clubs; high to low.
    pub fn sorted_for_display(&self) -> Vec<Card> {
        Suit::BY_PRIORITY.iter().flat_map(|&s| self.cards_in(s).rev()).collect()
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_from_cards(cards)
    }
}

impl fmt::Display for Hand {
    /// Renders `S: A K 2  H: ...` in display order; voids render as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, suit) in Suit::BY_PRIORITY.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{}:", suit.symbol())?;
            let mut any = false;
            for c in self.cards_in(*suit).rev() {
                write!(f, " {}", c.rank())?;
                any = true;
            }
            if !any {
                f.write_str(" -")?;
            }
        }
        Ok(())
    }
}

/// Suit lengths of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution([u8; 4]);

impl Distribution {
    pub fn length(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    pub fn longest(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn shortest(&self) -> u8 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// Longest suit ≤ 5 cards and shortest suit ≥ 2 cards.
    pub fn is_balanced(&self) -> bool {
        self.longest() <= 5 && self.shortest() >= 2
    }

    /// Longest suit; ties go to the higher-priority suit (S > H > D > C).
    pub fn longest_suit(&self) -> Suit {
        let mut best = Suit::Spades;
        for suit in Suit::BY_PRIORITY {
            if self.length(suit) > self.length(best) {
                best = suit;
            }
        }
        best
    }
}
