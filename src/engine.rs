// Engine API boundary. This trait exposes the turn-validated entry points of a
// deal and the public state needed to choose an action, so frontends and bots
// can drive a game without reaching into its internals. Implemented for
// `Game`.

use crate::bidding::{Auction, BidOutcome, Call, Contract};
use crate::cards::{Card, Suit};
use crate::game::{ActionError, Phase};
use crate::hand::Hand;
use crate::play::{PlayOutcome, Trick};
use crate::seat::Seat;

pub trait BridgeEngine {
    // Deal lifecycle
    fn new_deal(&mut self, seed: Option<u64>) -> Seat;

    // Seat actions
    fn submit_bid(&mut self, seat: Seat, call: Call) -> Result<BidOutcome, ActionError>;
    fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, ActionError>;

    // Queries
    fn phase(&self) -> Phase;
    fn to_act(&self) -> Option<Seat>;
    fn controller_of(&self, seat: Seat) -> Seat;
    fn hand(&self, seat: Seat) -> &Hand;
    fn auction(&self) -> &Auction;
    fn is_auction_complete(&self) -> bool;
    fn contract(&self) -> Option<Contract>;
    fn trump(&self) -> Option<Suit>;
    fn current_trick(&self) -> &Trick;
    fn legal_cards(&self, seat: Seat) -> Vec<Card>;
    fn is_hand_complete(&self) -> bool;
}

impl BridgeEngine for crate::game::Game {
    fn new_deal(&mut self, seed: Option<u64>) -> Seat {
        self.new_deal(seed)
    }

    fn submit_bid(&mut self, seat: Seat, call: Call) -> Result<BidOutcome, ActionError> {
        self.submit_bid(seat, call)
    }
    fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, ActionError> {
        self.play_card(seat, card)
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn to_act(&self) -> Option<Seat> {
        self.to_act()
    }
    fn controller_of(&self, seat: Seat) -> Seat {
        self.controller_of(seat)
    }
    fn hand(&self, seat: Seat) -> &Hand {
        self.hand(seat)
    }
    fn auction(&self) -> &Auction {
        self.auction()
    }
    fn is_auction_complete(&self) -> bool {
        self.is_auction_complete()
    }
    fn contract(&self) -> Option<Contract> {
        self.contract()
    }
    fn trump(&self) -> Option<Suit> {
        self.trump()
    }
    fn current_trick(&self) -> &Trick {
        self.current_trick()
    }
    fn legal_cards(&self, seat: Seat) -> Vec<Card> {
        self.legal_cards(seat)
    }
    fn is_hand_complete(&self) -> bool {
        self.is_hand_complete()
    }
}
