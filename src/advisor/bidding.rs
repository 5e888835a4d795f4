use crate::bidding::{AuctionEntry, Bid, Call, Denomination};
use crate::cards::Suit;
use crate::hand::{Distribution, Hand};
use crate::seat::Seat;

/// The numbers the bidding heuristics look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandEvaluation {
    pub hcp: u8,
    pub distribution: Distribution,
    pub balanced: bool,
}

impl HandEvaluation {
    pub fn of(hand: &Hand) -> Self {
        let distribution = hand.distribution();
        Self { hcp: hand.hcp(), distribution, balanced: distribution.is_balanced() }
    }

    fn len(&self, suit: Suit) -> u8 {
        self.distribution.length(suit)
    }

    /// Longest suit, ties resolved toward the lower-ranking suit.
    fn longest_low_first(&self) -> (Suit, u8) {
        let mut best = (Suit::Clubs, self.len(Suit::Clubs));
        for suit in [Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            if self.len(suit) > best.1 {
                best = (suit, self.len(suit));
            }
        }
        best
    }
}

/// Suggest a call for `seat` holding `hand`, given the calls so far.
///
/// Opening bids follow a strong-club style table keyed on high-card points
/// and shape; later calls respond to partner or compete against the
/// opponents. The result is always legal against `history`.
///
/// ```
/// use bridge_rs::advisor::suggest_bid;
/// use bridge_rs::bidding::Call;
/// use bridge_rs::hand::Hand;
/// use bridge_rs::seat::Seat;
///
/// // 17 points, 4-3-3-3
/// let hand: Hand = "AS KS 5S 2S AH 7H 3H QD JD 4D KC 9C 6C".parse().unwrap();
/// let call = suggest_bid(Seat::North, &hand, &[], Seat::South);
/// assert_eq!(call, "1NT".parse::<Call>().unwrap());
/// ```
pub fn suggest_bid(seat: Seat, hand: &Hand, history: &[AuctionEntry], partner: Seat) -> Call {
    let eval = HandEvaluation::of(hand);
    let last_bid = history.iter().rev().find_map(|e| e.call.bid().map(|b| (b, e.seat)));

    let suggestion = match last_bid {
        None if !history.iter().any(|e| e.seat == seat && !e.call.is_pass()) => opening(&eval),
        None => None,
        Some((bid, bidder)) if bidder == partner => respond_to_partner(bid, &eval),
        Some((bid, _)) => overcall(bid, &eval),
    };

    match (suggestion, last_bid) {
        (None, _) => Call::Pass,
        (Some(bid), None) => Call::Bid(bid),
        (Some(bid), Some((highest, _))) if bid > highest => Call::Bid(bid),
        (Some(bid), Some((highest, _))) => {
            highest.cheapest_above_in(bid.denomination()).map_or(Call::Pass, Call::Bid)
        }
    }
}

fn bid(level: u8, denomination: Denomination) -> Option<Bid> {
    Bid::try_new(level, denomination).ok()
}

fn opening(eval: &HandEvaluation) -> Option<Bid> {
    let hcp = eval.hcp;
    let (s, h, d, c) =
        (eval.len(Suit::Spades), eval.len(Suit::Hearts), eval.len(Suit::Diamonds), eval.len(Suit::Clubs));

    if eval.balanced && (20..=22).contains(&hcp) {
        return bid(2, Denomination::NoTrump);
    }
    if hcp >= 18 {
        return bid(2, Denomination::Clubs);
    }
    if eval.balanced && (15..=17).contains(&hcp) {
        return bid(1, Denomination::NoTrump);
    }
    if (6..=10).contains(&hcp) {
        if d >= 6 || (d >= 5 && (h >= 4 || s >= 4)) {
            return bid(2, Denomination::Diamonds);
        }
        if h >= 6 {
            return bid(2, Denomination::Hearts);
        }
        if s >= 6 {
            return bid(2, Denomination::Spades);
        }
    }
    if (12..=14).contains(&hcp) {
        if s >= 5 {
            return bid(1, Denomination::Spades);
        }
        if h >= 5 {
            return bid(1, Denomination::Hearts);
        }
        if d >= 4 || eval.balanced {
            return bid(1, Denomination::Diamonds);
        }
        if c >= 4 || eval.balanced {
            return bid(1, Denomination::Clubs);
        }
    }
    None
}

fn respond_to_partner(partner_bid: Bid, eval: &HandEvaluation) -> Option<Bid> {
    let hcp = eval.hcp;
    match (partner_bid.level(), partner_bid.denomination()) {
        (1, Denomination::NoTrump) => (hcp >= 8).then(|| bid(2, Denomination::NoTrump)).flatten(),
        (1, _) => {
            if hcp < 6 {
                return None;
            }
            if eval.len(Suit::Spades) >= 4 {
                return bid(1, Denomination::Spades);
            }
            if eval.len(Suit::Hearts) >= 4 {
                return bid(1, Denomination::Hearts);
            }
            let (suit, len) = eval.longest_low_first();
            (len >= 4).then(|| bid(1, suit.into())).flatten()
        }
        // Forcing once responder has values: name a four-card suit or relay 2D.
        (2, Denomination::Clubs) => {
            if hcp < 8 {
                return None;
            }
            let (suit, len) = eval.longest_low_first();
            if len >= 4 {
                bid(2, suit.into())
            } else {
                bid(2, Denomination::Diamonds)
            }
        }
        // No raise of 2NT: notrump has no trump length to support.
        (2, denomination) => {
            let support = denomination.trump().map_or(0, |s| eval.len(s));
            (hcp >= 8 && support >= 3).then(|| bid(3, denomination)).flatten()
        }
        _ => None,
    }
}

fn overcall(opponent_bid: Bid, eval: &HandEvaluation) -> Option<Bid> {
    if eval.hcp < 10 || opponent_bid.level() >= 3 {
        return None;
    }
    let (suit, len) = eval.longest_low_first();
    (len >= 4).then(|| bid(opponent_bid.level() + 1, suit.into())).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        let h: Hand = s.parse().unwrap();
        assert_eq!(h.len(), 13, "test hand must hold 13 cards: {s}");
        h
    }

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    fn history(calls: &[(Seat, &str)]) -> Vec<AuctionEntry> {
        calls.iter().map(|(seat, c)| AuctionEntry { seat: *seat, call: call(c) }).collect()
    }

    fn open(s: &str) -> Call {
        suggest_bid(Seat::North, &hand(s), &[], Seat::South)
    }

    #[test]
    fn strong_balanced_opens_two_notrump() {
        assert_eq!(open("AS KS 5S 2S AH KH 3H AD 7D 4D KC 5C 6C"), call("2NT"));
    }

    #[test]
    fn eighteen_plus_unbalanced_opens_two_clubs() {
        assert_eq!(open("AS KS QS JS 9S 8S AH KH 2H QD 4D 5C 6C"), call("2C"));
        // 25 balanced is above the 2NT range
        assert_eq!(open("AS KS QS 2S AH KH 3H AD QD 4D KC 5C 6C"), call("2C"));
    }

    #[test]
    fn fifteen_to_seventeen_balanced_opens_one_notrump() {
        assert_eq!(open("AS KS 5S 2S AH 7H 3H QD JD 4D KC 9C 6C"), call("1NT"));
    }

    #[test]
    fn weak_two_bids() {
        assert_eq!(open("AD KD 9D 8D 7D 6D 5S 4S 3S QH 2H 3C 4C"), call("2D"));
        assert_eq!(open("AD KD 9D 8D 7D QS 5S 4S 3S 2H 3H 3C 4C"), call("2D"));
        assert_eq!(open("AH KH 9H 8H 7H 6H 5S 4S 3S QD 2D 3C 4C"), call("2H"));
        assert_eq!(open("AS KS 9S 8S 7S 6S 5H 4H 3H QD 2D 3C 4C"), call("2S"));
    }

    #[test]
    fn one_level_openings() {
        assert_eq!(open("AS KS 9S 8S 7S AH 5H 4H QD 2D 3D 3C 4C"), call("1S"));
        assert_eq!(open("AH KH 9H 8H 7H AS 5S 4S QD 2D 3D 3C 4C"), call("1H"));
        assert_eq!(open("AS KS 4S 3S AH 5H 4H 3H QD 2D 3D 3C 4C"), call("1D"));
        assert_eq!(open("AS KS 4S 3S AH 5H 4H 3H QC JC 2C 3C 4C"), call("1C"));
    }

    #[test]
    fn weak_hands_pass() {
        assert_eq!(open("QS 9S 4S 3S JH 5H 4H 3H 9D 2D 3D 3C 4C"), Call::Pass);
        // 11 points, no weak-two suit
        assert_eq!(open("AS KS 4S 3S AH 5H 4H 3H 9D 2D 3D 3C 4C"), Call::Pass);
    }

    #[test]
    fn strong_hand_overcalls_an_opening() {
        let hist = history(&[(Seat::North, "1C")]);
        let strong = hand("AS KS 5S 2S AH KH 3H AD 7D 4D KC 5C 6C");
        assert_eq!(suggest_bid(Seat::East, &strong, &hist, Seat::West), call("2S"));
    }

    #[test]
    fn respond_in_a_major_after_one_of_a_suit() {
        let hist = history(&[(Seat::North, "1D"), (Seat::East, "pass")]);
        let h = hand("KS QS 4S 3S 9H 5H 4H JD 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &h, &hist, Seat::North), call("1S"));
    }

    #[test]
    fn response_is_lifted_to_a_legal_level() {
        let hist = history(&[(Seat::North, "1S"), (Seat::East, "pass")]);
        let h = hand("KH QH 4H 3H 9S 5S 4S JD 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &h, &hist, Seat::North), call("2H"));

        let hist = history(&[(Seat::North, "1H"), (Seat::East, "pass")]);
        let clubs = hand("KC QC 4C 3C 2C 5S 4S JD 2D 3D 9H 8H 7H");
        assert_eq!(suggest_bid(Seat::South, &clubs, &hist, Seat::North), call("2C"));
    }

    #[test]
    fn weak_responder_passes() {
        let hist = history(&[(Seat::North, "1H"), (Seat::East, "pass")]);
        let h = hand("QS 9S 4S 3S 9H 5H 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &h, &hist, Seat::North), Call::Pass);
    }

    #[test]
    fn raise_one_notrump_with_eight() {
        let hist = history(&[(Seat::North, "1NT"), (Seat::East, "pass")]);
        let eight = hand("KS QS 4S 3S KH 5H 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &eight, &hist, Seat::North), call("2NT"));
        let six = hand("KS 9S 4S 3S JH 5H 4H 8D 2D 3D QC 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &six, &hist, Seat::North), Call::Pass);
    }

    #[test]
    fn two_clubs_is_forcing_with_eight() {
        let hist = history(&[(Seat::North, "2C"), (Seat::East, "pass")]);
        let spades = hand("KS QS 4S 3S 2S KH 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &spades, &hist, Seat::North), call("2S"));
        let clubs = hand("KC QC 4C 3C 2C KH 4H 8D 2D 3D 3S 4S 5S");
        assert_eq!(suggest_bid(Seat::South, &clubs, &hist, Seat::North), call("3C"));
    }

    #[test]
    fn weak_hand_passes_two_clubs() {
        let hist = history(&[(Seat::North, "2C"), (Seat::East, "pass")]);
        let bust = hand("9S 8S 4S 3S 2S 5H 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &bust, &hist, Seat::North), Call::Pass);
        // 7 points
        let seven = hand("KS QS 4S 3S 2S QH 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &seven, &hist, Seat::North), Call::Pass);
    }

    #[test]
    fn two_notrump_is_not_raised() {
        let hist = history(&[(Seat::North, "2NT"), (Seat::East, "pass")]);
        let eight = hand("KS QS 4S 3S KH 5H 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &eight, &hist, Seat::North), Call::Pass);
        let strong = hand("AS KS 4S 3S KH QH 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &strong, &hist, Seat::North), Call::Pass);
    }

    #[test]
    fn raise_a_weak_two_with_support() {
        let hist = history(&[(Seat::North, "2H"), (Seat::East, "pass")]);
        let h = hand("KS QS 4S 3S KH 5H 4H 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &h, &hist, Seat::North), call("3H"));
        let short = hand("KS QS 4S 3S KH 5H 6S 8D 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::South, &short, &hist, Seat::North), Call::Pass);
    }

    #[test]
    fn overcall_one_level_higher_with_ten_points() {
        let hist = history(&[(Seat::North, "1D")]);
        let h = hand("AS KS 9S 8S 7S 5H 4H QD 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::East, &h, &hist, Seat::West), Call::Pass);
        let h = hand("AS KS 9S 8S 7S AH 4H QD 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::East, &h, &hist, Seat::West), call("2S"));
    }

    #[test]
    fn no_overcall_at_the_three_level() {
        let hist = history(&[(Seat::North, "3C")]);
        let h = hand("AS KS 9S 8S 7S AH 4H QD 2D 3D 3C 4C 5C");
        assert_eq!(suggest_bid(Seat::East, &h, &hist, Seat::West), Call::Pass);
    }
}
