use crate::bidding::{Auction, BidError, BidOutcome, Call, Contract};
use crate::cards::{Card, Suit};
use crate::deck::Deck;
use crate::hand::{Hand, HandError};
use crate::play::{Cardplay, CompletedTrick, PlayError, PlayOutcome, Trick, EMPTY_TRICK};
use crate::scoring::{DealScore, Vulnerability};
use crate::seat::{Partnership, Seat};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Bidding,
    Playing,
    /// All thirteen tricks played and scored.
    Complete,
    /// Passed out; a new deal is required.
    Void,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Bidding => "Bidding",
            Phase::Playing => "Playing",
            Phase::Complete => "Complete",
            Phase::Void => "Passed out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealEvent {
    Call(Call),
    Play(Card),
    TakeTrick,
}

impl fmt::Display for DealEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealEvent::Call(call) => write!(f, "calls {call}"),
            DealEvent::Play(card) => write!(f, "plays {card}"),
            DealEvent::TakeTrick => f.write_str("takes the trick"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DealHistoryEntry {
    pub seat: Seat,
    pub event: DealEvent,
    pub phase: Phase,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error(transparent)]
    Bid(#[from] BidError),
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error("the auction is over")]
    NotBidding,
    #[error("card play has not started or is over")]
    NotPlaying,
    #[error("the deal was passed out; redeal")]
    VoidAuction,
}

/// Per-deal settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealConfig {
    /// Base seed; deal `n` shuffles with `seed + n - 1`. `None` shuffles randomly.
    pub seed: Option<u64>,
    pub vulnerability: Vulnerability,
    pub dealer: Seat,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self { seed: None, vulnerability: Vulnerability::NONE, dealer: Seat::North }
    }
}

impl DealConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerability = vulnerability;
        self
    }

    pub fn with_dealer(mut self, dealer: Seat) -> Self {
        self.dealer = dealer;
        self
    }
}

/// One deal of bridge from shuffle to score.
///
/// `Game` owns the four hands for the whole deal. During the auction they are
/// read-only; once a contract is reached they move into the card-play state
/// machine and leave only through [`Game::play_card`].
///
/// ```
/// use bridge_rs::game::{DealConfig, Game, Phase};
/// use bridge_rs::seat::Seat;
///
/// let game = Game::new(DealConfig::default().with_seed(42));
/// assert_eq!(game.phase(), Phase::Bidding);
/// assert_eq!(game.to_act(), Some(Seat::North));
/// assert!(Seat::ALL.iter().all(|&s| game.hand(s).len() == 13));
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    config: DealConfig,
    deal_number: u32,
    seed: u64,
    vulnerability: Vulnerability,
    dealt: [Hand; 4],
    auction: Auction,
    cardplay: Option<Cardplay>,
    phase: Phase,
    score: Option<DealScore>,
    history: Vec<DealHistoryEntry>,
}

impl Game {
    /// Create a game and shuffle the first deal.
    pub fn new(config: DealConfig) -> Self {
        let mut game = Self::empty(config);
        game.new_deal(None);
        game
    }

    fn empty(config: DealConfig) -> Self {
        Self {
            config,
            deal_number: 0,
            seed: 0,
            vulnerability: config.vulnerability,
            dealt: Default::default(),
            auction: Auction::new(config.dealer),
            cardplay: None,
            phase: Phase::Bidding,
            score: None,
            history: Vec::new(),
        }
    }

    /// Start from a prearranged deal instead of a shuffle.
    pub fn with_hands(hands: [Hand; 4], config: DealConfig) -> Result<Self, HandError> {
        let mut seen = Hand::new();
        for hand in &hands {
            if hand.len() != 13 {
                return Err(HandError::WrongSize { expected: 13, got: hand.len() });
            }
            for &card in hand.cards() {
                if !seen.insert(card) {
                    return Err(HandError::DuplicateCard(card));
                }
            }
        }
        let mut game = Self::empty(config);
        game.deal_number = 1;
        game.start(hands, config.seed.unwrap_or(0));
        Ok(game)
    }

    /// Shuffle and deal a fresh board. With `seed` the deal is reproducible;
    /// otherwise the configured base seed (or a random one) is used.
    /// Returns the seat that calls first.
    pub fn new_deal(&mut self, seed: Option<u64>) -> Seat {
        self.deal_number += 1;
        let seed = seed
            .or_else(|| self.config.seed.map(|base| base.wrapping_add(u64::from(self.deal_number - 1))))
            .unwrap_or_else(|| rand::rng().random());
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let hands = deck.deal();
        self.start(hands, seed);
        self.config.dealer
    }

    fn start(&mut self, hands: [Hand; 4], seed: u64) {
        self.seed = seed;
        self.vulnerability = self.config.vulnerability;
        self.dealt = hands;
        self.auction = Auction::new(self.config.dealer);
        self.cardplay = None;
        self.phase = Phase::Bidding;
        self.score = None;
        self.history.clear();
        log::info!(
            "deal {}: seed {seed}, dealer {}, vulnerable {}",
            self.deal_number,
            self.config.dealer,
            self.vulnerability.label()
        );
    }

    pub fn config(&self) -> DealConfig {
        self.config
    }

    /// Vulnerability for deals started after this call.
    pub fn set_vulnerability(&mut self, vulnerability: Vulnerability) {
        self.config.vulnerability = vulnerability;
    }

    pub fn deal_number(&self) -> u32 {
        self.deal_number
    }

    /// Seed the current deal was shuffled with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Vulnerability of the current deal.
    pub fn vulnerability(&self) -> Vulnerability {
        self.vulnerability
    }

    pub fn dealer(&self) -> Seat {
        self.config.dealer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The seat that must call or play next.
    pub fn to_act(&self) -> Option<Seat> {
        match (self.phase, &self.cardplay) {
            (Phase::Bidding, _) => self.auction.to_act(),
            (Phase::Playing, Some(cardplay)) => cardplay.to_act(),
            _ => None,
        }
    }

    /// Cards `seat` holds right now.
    pub fn hand(&self, seat: Seat) -> &Hand {
        match &self.cardplay {
            Some(cardplay) => cardplay.hand(seat),
            None => &self.dealt[seat.index()],
        }
    }

    /// The thirteen cards `seat` was dealt.
    pub fn dealt_hand(&self, seat: Seat) -> &Hand {
        &self.dealt[seat.index()]
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    pub fn is_auction_complete(&self) -> bool {
        self.auction.is_complete()
    }

    pub fn contract(&self) -> Option<Contract> {
        self.auction.contract()
    }

    pub fn final_contract(&self) -> Result<Contract, ActionError> {
        match self.phase {
            Phase::Void => Err(ActionError::VoidAuction),
            _ => self.auction.final_contract().map_err(ActionError::from),
        }
    }

    pub fn trump(&self) -> Option<Suit> {
        self.contract().and_then(Contract::trump)
    }

    pub fn submit_bid(&mut self, seat: Seat, call: Call) -> Result<BidOutcome, ActionError> {
        match self.phase {
            Phase::Bidding => {}
            Phase::Void => return Err(ActionError::VoidAuction),
            _ => return Err(ActionError::NotBidding),
        }
        let outcome = self.auction.submit(seat, call)?;
        self.record(seat, DealEvent::Call(call));
        match outcome {
            BidOutcome::Contract(contract) => {
                self.cardplay = Some(Cardplay::new(
                    self.dealt.clone(),
                    contract.trump(),
                    contract.opening_leader(),
                ));
                self.phase = Phase::Playing;
            }
            BidOutcome::Void => self.phase = Phase::Void,
            _ => {}
        }
        Ok(outcome)
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, ActionError> {
        let cardplay = match (self.phase, self.cardplay.as_mut()) {
            (Phase::Playing, Some(cardplay)) => cardplay,
            (Phase::Void, _) => return Err(ActionError::VoidAuction),
            _ => return Err(ActionError::NotPlaying),
        };
        let outcome = cardplay.play(seat, card)?;
        self.record(seat, DealEvent::Play(card));
        match &outcome {
            PlayOutcome::TrickComplete { winner, .. } => self.record(*winner, DealEvent::TakeTrick),
            PlayOutcome::HandComplete { winner, .. } => {
                self.record(*winner, DealEvent::TakeTrick);
                self.finish();
            }
            _ => {}
        }
        Ok(outcome)
    }

    fn finish(&mut self) {
        self.phase = Phase::Complete;
        if let (Some(contract), Some(cardplay)) = (self.contract(), &self.cardplay) {
            let tricks = cardplay.tricks_won(contract.declarer().partnership());
            self.score = Some(DealScore::new(contract, tricks, self.vulnerability));
        }
    }

    pub fn current_trick(&self) -> &Trick {
        match &self.cardplay {
            Some(cardplay) => cardplay.current_trick(),
            None => &EMPTY_TRICK,
        }
    }

    pub fn completed_tricks(&self) -> &[CompletedTrick] {
        match &self.cardplay {
            Some(cardplay) => cardplay.completed_tricks(),
            None => &[],
        }
    }

    pub fn last_trick(&self) -> Option<&CompletedTrick> {
        self.completed_tricks().last()
    }

    pub fn tricks_won(&self, side: Partnership) -> u8 {
        self.cardplay.as_ref().map_or(0, |c| c.tricks_won(side))
    }

    /// Cards `seat` may play now; empty outside the play phase.
    pub fn legal_cards(&self, seat: Seat) -> Vec<Card> {
        match (&self.cardplay, self.phase) {
            (Some(cardplay), Phase::Playing) => cardplay.legal_cards(seat),
            _ => Vec::new(),
        }
    }

    /// All 52 cards have been played.
    pub fn is_hand_complete(&self) -> bool {
        self.cardplay.as_ref().is_some_and(Cardplay::is_complete)
    }

    /// Dummy's hand goes face up once the opening lead is made.
    pub fn dummy_visible(&self) -> bool {
        self.cardplay
            .as_ref()
            .is_some_and(|c| !c.current_trick().is_empty() || !c.completed_tricks().is_empty())
    }

    /// The seat whose player chooses `seat`'s action: declarer plays for dummy.
    pub fn controller_of(&self, seat: Seat) -> Seat {
        match (self.phase, self.contract()) {
            (Phase::Playing, Some(contract)) if contract.dummy() == seat => contract.declarer(),
            _ => seat,
        }
    }

    pub fn score(&self) -> Option<DealScore> {
        self.score
    }

    pub fn history_recent(&self, n: usize) -> Vec<DealHistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let start = self.history.len().saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<DealHistoryEntry> {
        let len = self.history.len();
        if n == 0 || len == 0 {
            return Vec::new();
        }
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn record(&mut self, seat: Seat, event: DealEvent) {
        self.history.push(DealHistoryEntry { seat, event, phase: self.phase });
    }
}
