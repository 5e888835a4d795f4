use crate::cards::{Card, Suit};
use crate::hand::Hand;
use crate::play::Trick;
use crate::seat::Seat;

/// Pick a legal card for `seat` to add to `trick`.
///
/// Returns `None` only for an empty hand.
pub fn select_card(
    seat: Seat,
    hand: &Hand,
    trick: &Trick,
    trump: Option<Suit>,
    declaring_side: bool,
) -> Option<Card> {
    let Some(lead) = trick.lead_suit() else {
        let suit = hand.distribution().longest_suit();
        return hand.highest_in(suit);
    };

    if hand.has_suit(lead) {
        if declaring_side {
            if let Some(card) = overtake_opponent(seat, hand, trick, lead, trump) {
                return Some(card);
            }
        }
        return hand.lowest_in(lead);
    }

    if declaring_side {
        if let Some(card) = trump.and_then(|t| ruff(hand, trick, t)) {
            return Some(card);
        }
    }
    discard(hand)
}

/// Cheapest card of the led suit that takes the trick back from an opponent.
fn overtake_opponent(seat: Seat, hand: &Hand, trick: &Trick, lead: Suit, trump: Option<Suit>) -> Option<Card> {
    let winning = trick.winning_play(trump)?;
    if winning.seat.is_partner_of(seat) || winning.card.suit() != lead {
        return None;
    }
    hand.cards_in(lead).find(|c| c.value() > winning.card.value())
}

fn ruff(hand: &Hand, trick: &Trick, trump: Suit) -> Option<Card> {
    let top_trump = trick
        .plays()
        .iter()
        .map(|p| p.card)
        .filter(|c| c.suit() == trump)
        .max_by_key(|c| c.value());
    match top_trump {
        Some(top) => hand.cards_in(trump).find(|c| c.value() > top.value()),
        None => hand.lowest_in(trump),
    }
}

/// Lowest card of the shortest non-empty suit; ties go to S, H, D, C.
fn discard(hand: &Hand) -> Option<Card> {
    let suit = Suit::BY_PRIORITY
        .into_iter()
        .filter(|&s| hand.has_suit(s))
        .fold(None, |best: Option<Suit>, s| match best {
            Some(b) if hand.suit_length(b) <= hand.suit_length(s) => Some(b),
            _ => Some(s),
        })?;
    hand.lowest_in(suit)
}
