//! Card play: tricks, the follow-suit rule, and trick resolution.

use crate::cards::{Card, Suit};
use crate::hand::Hand;
use crate::seat::{Partnership, Seat};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("{0} is not in that hand")]
    NotInHand(Card),
    #[error("not {got}'s turn to play; {expected} is on turn")]
    WrongTurn { expected: Seat, got: Seat },
    #[error("must follow suit: {lead} was led")]
    MustFollowSuit { lead: Suit },
    #[error("all thirteen tricks have been played")]
    HandComplete,
}

/// A card laid on the table by a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

/// Up to four plays, one per seat, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trick {
    plays: Vec<PlayedCard>,
}

pub(crate) static EMPTY_TRICK: Trick = Trick { plays: Vec::new() };

impl Trick {
    pub fn new() -> Self {
        Self { plays: Vec::with_capacity(4) }
    }

    pub fn plays(&self) -> &[PlayedCard] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn leader(&self) -> Option<Seat> {
        self.plays.first().map(|p| p.seat)
    }

    /// Suit of the first card played.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit())
    }

    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.plays.iter().find(|p| p.seat == seat).map(|p| p.card)
    }

    /// The play currently winning the trick under `trump`.
    pub fn winning_play(&self, trump: Option<Suit>) -> Option<PlayedCard> {
        let (first, rest) = self.plays.split_first()?;
        let mut best = *first;
        for play in rest {
            if beats(play.card, best.card, trump) {
                best = *play;
            }
        }
        Some(best)
    }

    pub(crate) fn push(&mut self, seat: Seat, card: Card) {
        self.plays.push(PlayedCard { seat, card });
    }
}

/// Whether `challenger` takes the trick from the current `winner`.
///
/// A trump beats any non-trump; otherwise only a higher card of the winner's
/// own suit wins. Cards of a suit that is neither led nor trump never win.
pub fn beats(challenger: Card, winner: Card, trump: Option<Suit>) -> bool {
    if let Some(t) = trump {
        if challenger.suit() == t && winner.suit() != t {
            return true;
        }
    }
    challenger.suit() == winner.suit() && challenger.value() > winner.value()
}

/// A resolved trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTrick {
    pub trick: Trick,
    pub winner: Seat,
}

/// Result of an accepted play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayOutcome {
    /// The trick continues with this seat.
    Next(Seat),
    /// The fourth card landed; `winner` leads the next trick.
    TrickComplete { winner: Seat, trick: Trick },
    /// The thirteenth trick landed; play is over.
    HandComplete { winner: Seat, trick: Trick },
}

/// The play-phase state machine. Owns the four hands and only accepts cards
/// through [`Cardplay::play`], which enforces turn order and follow-suit.
#[derive(Debug, Clone)]
pub struct Cardplay {
    hands: [Hand; 4],
    trump: Option<Suit>,
    to_act: Seat,
    current: Trick,
    completed: Vec<CompletedTrick>,
    tricks_won: [u8; 2],
}

impl Cardplay {
    /// Start play with `leader` on lead.
    pub fn new(hands: [Hand; 4], trump: Option<Suit>, leader: Seat) -> Self {
        Self {
            hands,
            trump,
            to_act: leader,
            current: Trick::new(),
            completed: Vec::with_capacity(13),
            tricks_won: [0; 2],
        }
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    /// Seat on turn, or `None` once every card is played.
    pub fn to_act(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            Some(self.to_act)
        }
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current
    }

    pub fn completed_tricks(&self) -> &[CompletedTrick] {
        &self.completed
    }

    pub fn tricks_won(&self, side: Partnership) -> u8 {
        self.tricks_won[side.index()]
    }

    /// All 52 cards have been played.
    pub fn is_complete(&self) -> bool {
        self.hands.iter().all(Hand::is_empty)
    }

    /// Cards `seat` may legally play right now.
    pub fn legal_cards(&self, seat: Seat) -> Vec<Card> {
        let hand = self.hand(seat);
        match self.current.lead_suit() {
            Some(lead) if hand.has_suit(lead) => hand.cards_in(lead).collect(),
            _ => hand.cards().to_vec(),
        }
    }

    /// Check a play without applying it.
    pub fn validate(&self, seat: Seat, card: Card) -> Result<(), PlayError> {
        if self.is_complete() {
            return Err(PlayError::HandComplete);
        }
        let hand = self.hand(seat);
        if !hand.contains(card) {
            return Err(PlayError::NotInHand(card));
        }
        if seat != self.to_act {
            return Err(PlayError::WrongTurn { expected: self.to_act, got: seat });
        }
        if let Some(lead) = self.current.lead_suit() {
            if card.suit() != lead && hand.has_suit(lead) {
                return Err(PlayError::MustFollowSuit { lead });
            }
        }
        Ok(())
    }

    /// Play a card. On error nothing changes.
    pub fn play(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        self.validate(seat, card)?;
        self.hands[seat.index()].remove(card).map_err(|_| PlayError::NotInHand(card))?;
        self.current.push(seat, card);
        log::debug!("play: {seat} {card}");

        if !self.current.is_full() {
            self.to_act = seat.next();
            return Ok(PlayOutcome::Next(self.to_act));
        }

        let trick = std::mem::take(&mut self.current);
        let winner = match trick.winning_play(self.trump) {
            Some(p) => p.seat,
            None => seat,
        };
        self.tricks_won[winner.partnership().index()] += 1;
        self.to_act = winner;
        self.completed.push(CompletedTrick { trick: trick.clone(), winner });
        log::info!("trick {} won by {winner}", self.completed.len());

        if self.is_complete() {
            Ok(PlayOutcome::HandComplete { winner, trick })
        } else {
            Ok(PlayOutcome::TrickComplete { winner, trick })
        }
    }
}
