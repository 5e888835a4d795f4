use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use crate::seat::Seat;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck, consumed from the top after a shuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use bridge_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Shuffle with a caller-supplied random source.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal the whole deck one card at a time, North first, leaving it empty.
    ///
    /// ```
    /// use bridge_rs::deck::Deck;
    /// use bridge_rs::seat::Seat;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(1);
    /// let hands = deck.deal();
    /// assert!(deck.is_empty());
    /// assert_eq!(hands[Seat::West.index()].len(), 13);
    /// ```
    pub fn deal(&mut self) -> [Hand; 4] {
        let mut hands: [Hand; 4] = Default::default();
        let mut seat = Seat::North;
        while let Some(card) = self.draw() {
            hands[seat.index()].insert(card);
            seat = seat.next();
        }
        hands
    }
}
