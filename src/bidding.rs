//! The auction: calls, bid ordering, and the bidding state machine.
//!
//! Bids are totally ordered by level, then denomination
//! (C < D < H < S < NT). A bid is accepted only if it strictly outranks the
//! current highest bid. The auction closes after three consecutive passes
//! that follow at least one earlier call; if every call was a pass the deal
//! is void and must be redealt.

use crate::cards::Suit;
use crate::seat::Seat;
use std::fmt;
use std::str::FromStr;

/// What a contract is played in: one of the four suits or no trumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Denomination {
    pub const ALL: [Denomination; 5] = [
        Denomination::Clubs,
        Denomination::Diamonds,
        Denomination::Hearts,
        Denomination::Spades,
        Denomination::NoTrump,
    ];

    /// The trump suit, or `None` for no trumps.
    pub const fn trump(self) -> Option<Suit> {
        match self {
            Denomination::Clubs => Some(Suit::Clubs),
            Denomination::Diamonds => Some(Suit::Diamonds),
            Denomination::Hearts => Some(Suit::Hearts),
            Denomination::Spades => Some(Suit::Spades),
            Denomination::NoTrump => None,
        }
    }

    pub const fn is_minor(self) -> bool {
        matches!(self, Denomination::Clubs | Denomination::Diamonds)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Denomination::Clubs => "C",
            Denomination::Diamonds => "D",
            Denomination::Hearts => "H",
            Denomination::Spades => "S",
            Denomination::NoTrump => "NT",
        }
    }
}

impl From<Suit> for Denomination {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Denomination::Clubs,
            Suit::Diamonds => Denomination::Diamonds,
            Suit::Hearts => Denomination::Hearts,
            Suit::Spades => Denomination::Spades,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidParseError {
    #[error("invalid call: '{0}'")]
    Invalid(String),
    #[error("bid level must be 1..=7, got {0}")]
    Level(u8),
}

/// A non-pass bid: a level and a denomination.
///
/// The derived ordering compares level first, then denomination, which is
/// exactly the auction ranking.
///
/// ```
/// use bridge_rs::bidding::{Bid, Denomination};
///
/// let one_nt: Bid = "1NT".parse().unwrap();
/// let two_c = Bid::try_new(2, Denomination::Clubs).unwrap();
/// assert!(two_c > one_nt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bid {
    level: u8,
    denomination: Denomination,
}

impl Bid {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 7;

    pub fn try_new(level: u8, denomination: Denomination) -> Result<Self, BidParseError> {
        if !(Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            return Err(BidParseError::Level(level));
        }
        Ok(Self { level, denomination })
    }

    pub const fn level(self) -> u8 {
        self.level
    }

    pub const fn denomination(self) -> Denomination {
        self.denomination
    }

    /// The cheapest bid in `denomination` that outranks `self`, if any.
    pub fn cheapest_above_in(self, denomination: Denomination) -> Option<Bid> {
        let level = if denomination > self.denomination { self.level } else { self.level + 1 };
        Bid::try_new(level, denomination).ok()
    }

    /// All 35 bids in ascending order.
    pub fn all() -> impl Iterator<Item = Bid> {
        (Self::MIN_LEVEL..=Self::MAX_LEVEL)
            .flat_map(|level| Denomination::ALL.into_iter().map(move |denomination| Bid { level, denomination }))
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.denomination)
    }
}

impl FromStr for Bid {
    type Err = BidParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| BidParseError::Invalid(s.to_string()))? as u8;
        let denomination = match chars.as_str().to_ascii_uppercase().as_str() {
            "C" | "♣" => Denomination::Clubs,
            "D" | "♦" => Denomination::Diamonds,
            "H" | "♥" => Denomination::Hearts,
            "S" | "♠" => Denomination::Spades,
            "NT" | "N" => Denomination::NoTrump,
            _ => return Err(BidParseError::Invalid(s.to_string())),
        };
        Bid::try_new(level, denomination)
    }
}

/// One call in the auction: a pass or a bid. Doubles are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Pass,
    Bid(Bid),
}

impl Call {
    pub const fn is_pass(self) -> bool {
        matches!(self, Call::Pass)
    }

    pub const fn bid(self) -> Option<Bid> {
        match self {
            Call::Pass => None,
            Call::Bid(b) => Some(b),
        }
    }
}

impl From<Bid> for Call {
    fn from(bid: Bid) -> Self {
        Call::Bid(bid)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Pass => f.write_str("Pass"),
            Call::Bid(b) => write!(f, "{b}"),
        }
    }
}

impl FromStr for Call {
    type Err = BidParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s.trim().to_ascii_lowercase().as_str(), "p" | "pass") {
            return Ok(Call::Pass);
        }
        Bid::from_str(s).map(Call::Bid)
    }
}

/// The final bid of a completed auction together with the seat that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    bid: Bid,
    declarer: Seat,
}

impl Contract {
    pub const fn new(bid: Bid, declarer: Seat) -> Self {
        Self { bid, declarer }
    }

    pub const fn bid(self) -> Bid {
        self.bid
    }

    pub const fn level(self) -> u8 {
        self.bid.level
    }

    pub const fn denomination(self) -> Denomination {
        self.bid.denomination
    }

    pub const fn trump(self) -> Option<Suit> {
        self.bid.denomination.trump()
    }

    pub const fn declarer(self) -> Seat {
        self.declarer
    }

    /// Declarer's partner, whose hand is laid open.
    pub const fn dummy(self) -> Seat {
        self.declarer.partner()
    }

    /// The seat to declarer's left makes the opening lead.
    pub const fn opening_leader(self) -> Seat {
        self.declarer.next()
    }

    /// Tricks the declaring side committed to: six plus the level.
    pub const fn tricks_needed(self) -> u8 {
        6 + self.bid.level
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.bid, self.declarer.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidError {
    #[error("not {got}'s turn to call; {expected} is on turn")]
    WrongTurn { expected: Seat, got: Seat },
    #[error("illegal bid {bid}: must outrank {highest}")]
    IllegalBid { bid: Bid, highest: Bid },
    #[error("the auction is already complete")]
    AuctionComplete,
    #[error("the auction is still in progress")]
    AuctionInProgress,
    #[error("all four players passed; the deal must be redealt")]
    VoidAuction,
}

/// A recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionEntry {
    pub seat: Seat,
    pub call: Call,
}

/// Where the auction stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionState {
    AwaitingCall(Seat),
    Complete(Contract),
    Void,
}

/// Result of an accepted call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidOutcome {
    /// The auction continues with this seat.
    Next(Seat),
    /// The auction closed with a contract.
    Contract(Contract),
    /// Four passes: no contract.
    Void,
}

/// The bidding state machine. Append-only until complete, then frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    dealer: Seat,
    entries: Vec<AuctionEntry>,
    highest: Option<(Bid, Seat)>,
    trailing_passes: u8,
    state: AuctionState,
}

impl Auction {
    /// Start an auction; `dealer` makes the first call.
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            entries: Vec::new(),
            highest: None,
            trailing_passes: 0,
            state: AuctionState::AwaitingCall(dealer),
        }
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn state(&self) -> AuctionState {
        self.state
    }

    /// The seat due to call, or `None` once the auction is over.
    pub fn to_act(&self) -> Option<Seat> {
        match self.state {
            AuctionState::AwaitingCall(seat) => Some(seat),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[AuctionEntry] {
        &self.entries
    }

    /// Current highest bid and its bidder.
    pub fn highest(&self) -> Option<(Bid, Seat)> {
        self.highest
    }

    pub fn trailing_passes(&self) -> u8 {
        self.trailing_passes
    }

    pub fn is_complete(&self) -> bool {
        !matches!(self.state, AuctionState::AwaitingCall(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self.state, AuctionState::Void)
    }

    /// The contract, if the auction closed with one.
    pub fn contract(&self) -> Option<Contract> {
        match self.state {
            AuctionState::Complete(c) => Some(c),
            _ => None,
        }
    }

    /// The contract, or why there is none.
    pub fn final_contract(&self) -> Result<Contract, BidError> {
        match self.state {
            AuctionState::Complete(c) => Ok(c),
            AuctionState::Void => Err(BidError::VoidAuction),
            AuctionState::AwaitingCall(_) => Err(BidError::AuctionInProgress),
        }
    }

    /// Whether `call` would be accepted on its merits (turn order aside).
    pub fn is_legal(&self, call: Call) -> bool {
        match (call, self.highest) {
            (Call::Pass, _) => true,
            (Call::Bid(_), None) => true,
            (Call::Bid(bid), Some((highest, _))) => bid > highest,
        }
    }

    /// Every bid that would currently be accepted, ascending.
    pub fn legal_bids(&self) -> impl Iterator<Item = Bid> + '_ {
        Bid::all().filter(move |b| self.is_legal(Call::Bid(*b)))
    }

    /// Record a call. On error nothing changes.
    pub fn submit(&mut self, seat: Seat, call: Call) -> Result<BidOutcome, BidError> {
        let expected = self.to_act().ok_or(BidError::AuctionComplete)?;
        if seat != expected {
            return Err(BidError::WrongTurn { expected, got: seat });
        }
        if let (Call::Bid(bid), Some((highest, _))) = (call, self.highest) {
            if bid <= highest {
                return Err(BidError::IllegalBid { bid, highest });
            }
        }

        self.entries.push(AuctionEntry { seat, call });
        match call {
            Call::Pass => self.trailing_passes += 1,
            Call::Bid(bid) => {
                self.highest = Some((bid, seat));
                self.trailing_passes = 0;
            }
        }
        log::debug!("auction: {seat} {call}");

        let closed = self.trailing_passes >= 3 && self.entries.len() > 3;
        self.state = match (closed, self.highest) {
            (false, _) => AuctionState::AwaitingCall(seat.next()),
            (true, Some((bid, declarer))) => AuctionState::Complete(Contract::new(bid, declarer)),
            (true, None) => AuctionState::Void,
        };
        Ok(match self.state {
            AuctionState::AwaitingCall(next) => BidOutcome::Next(next),
            AuctionState::Complete(contract) => {
                log::info!("auction complete: {contract}");
                BidOutcome::Contract(contract)
            }
            AuctionState::Void => {
                log::info!("auction passed out");
                BidOutcome::Void
            }
        })
    }
}
