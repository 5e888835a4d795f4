use bridge_rs::bidding::Call;
use bridge_rs::cards::{Card, Rank, Suit};
use bridge_rs::game::{ActionError, DealConfig, Game, Phase};
use bridge_rs::hand::Hand;
use bridge_rs::play::{PlayError, PlayOutcome};
use bridge_rs::seat::{Partnership, Seat};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

fn suit_hand(suit: Suit) -> Hand {
    Hand::try_full(Rank::ALL.iter().map(|&r| Card::new(r, suit)).collect()).unwrap()
}

/// North holds every spade, East every heart, South every diamond, West every club.
fn one_suit_each() -> [Hand; 4] {
    [
        suit_hand(Suit::Spades),
        suit_hand(Suit::Hearts),
        suit_hand(Suit::Diamonds),
        suit_hand(Suit::Clubs),
    ]
}

fn with_contract(hands: [Hand; 4], opening: &str) -> Game {
    let mut g = Game::with_hands(hands, DealConfig::default()).unwrap();
    g.submit_bid(Seat::North, opening.parse::<Call>().unwrap()).unwrap();
    for seat in [Seat::East, Seat::South, Seat::West] {
        g.submit_bid(seat, Call::Pass).unwrap();
    }
    assert_eq!(g.phase(), Phase::Playing);
    g
}

fn play_lowest_to_end(g: &mut Game) {
    let mut guard = 0;
    while let Some(seat) = g.to_act() {
        let card = g.legal_cards(seat)[0];
        g.play_card(seat, card).unwrap();
        guard += 1;
        assert!(guard <= 52);
    }
}

#[test]
fn trump_wins_over_the_led_suit() {
    let mut g = with_contract(one_suit_each(), "1S");
    assert_eq!(g.to_act(), Some(Seat::East));
    g.play_card(Seat::East, c("AH")).unwrap();
    g.play_card(Seat::South, c("2D")).unwrap();
    g.play_card(Seat::West, c("2C")).unwrap();
    let out = g.play_card(Seat::North, c("2S")).unwrap();
    match out {
        PlayOutcome::TrickComplete { winner, trick } => {
            assert_eq!(winner, Seat::North);
            assert_eq!(trick.len(), 4);
            assert_eq!(trick.leader(), Some(Seat::East));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(g.to_act(), Some(Seat::North), "trick winner leads next");
    assert_eq!(g.tricks_won(Partnership::NorthSouth), 1);
    assert!(g.current_trick().is_empty());
}

#[test]
fn without_trumps_only_the_led_suit_wins() {
    let mut g = with_contract(one_suit_each(), "1NT");
    g.play_card(Seat::East, c("2H")).unwrap();
    g.play_card(Seat::South, c("AD")).unwrap();
    g.play_card(Seat::West, c("AC")).unwrap();
    g.play_card(Seat::North, c("AS")).unwrap();
    assert_eq!(g.last_trick().map(|t| t.winner), Some(Seat::East));
    assert_eq!(g.to_act(), Some(Seat::East));
}

#[test]
fn play_errors_leave_the_deal_unchanged() {
    let mut g = with_contract(one_suit_each(), "1S");
    // East does not hold spades.
    assert_eq!(g.play_card(Seat::East, c("AS")), Err(ActionError::Play(PlayError::NotInHand(c("AS")))));
    // South holds the card but is not on turn.
    assert_eq!(
        g.play_card(Seat::South, c("2D")),
        Err(ActionError::Play(PlayError::WrongTurn { expected: Seat::East, got: Seat::South }))
    );
    assert_eq!(g.hand(Seat::East).len(), 13);
    assert!(g.current_trick().is_empty());
    assert!(!g.dummy_visible());
    assert_eq!(g.history_len(), 4);
}

#[test]
fn must_follow_suit_when_able() {
    for seed in 0..64u64 {
        let mut g = Game::new(DealConfig::default().with_seed(seed));
        g.submit_bid(Seat::North, "1NT".parse::<Call>().unwrap()).unwrap();
        for seat in [Seat::East, Seat::South, Seat::West] {
            g.submit_bid(seat, Call::Pass).unwrap();
        }
        let lead = g.hand(Seat::East).cards()[0];
        g.play_card(Seat::East, lead).unwrap();

        let south = g.hand(Seat::South).clone();
        let off_suit = south.cards().iter().copied().find(|card| card.suit() != lead.suit());
        if !south.has_suit(lead.suit()) {
            continue;
        }
        let Some(off_suit) = off_suit else { continue };
        assert_eq!(
            g.play_card(Seat::South, off_suit),
            Err(ActionError::Play(PlayError::MustFollowSuit { lead: lead.suit() }))
        );
        assert!(g.legal_cards(Seat::South).iter().all(|card| card.suit() == lead.suit()));
        return;
    }
    panic!("no seed produced a follow-suit situation");
}

#[test]
fn void_hand_may_discard_anything() {
    let mut g = with_contract(one_suit_each(), "1NT");
    g.play_card(Seat::East, c("KH")).unwrap();
    assert_eq!(g.legal_cards(Seat::South).len(), 13);
}

#[test]
fn declarer_runs_all_thirteen_tricks() {
    let mut g = with_contract(one_suit_each(), "1S");
    play_lowest_to_end(&mut g);

    assert_eq!(g.phase(), Phase::Complete);
    assert!(g.is_hand_complete());
    assert_eq!(g.completed_tricks().len(), 13);
    assert_eq!(g.tricks_won(Partnership::NorthSouth), 13);
    assert_eq!(g.tricks_won(Partnership::EastWest), 0);
    assert!(Seat::ALL.iter().all(|&s| g.hand(s).is_empty()));
    assert!(Seat::ALL.iter().all(|&s| g.dealt_hand(s).len() == 13));

    // 1S making seven: 30 + 50 part-score bonus + 6 overtricks at 30.
    let score = g.score().unwrap();
    assert_eq!(score.points(Partnership::NorthSouth), 260);
    assert_eq!(score.points(Partnership::EastWest), 0);
    assert_eq!(score.result(), 6);

    let card = g.dealt_hand(Seat::North).cards()[0];
    assert_eq!(g.play_card(Seat::North, card), Err(ActionError::NotPlaying));
}

#[test]
fn defenders_take_every_trick_against_seven_notrump() {
    let mut g = with_contract(one_suit_each(), "7NT");
    play_lowest_to_end(&mut g);

    assert_eq!(g.tricks_won(Partnership::EastWest), 13);
    // Down thirteen, not vulnerable: 150 + 10 * 100.
    let score = g.score().unwrap();
    assert_eq!(score.points(Partnership::NorthSouth), -1150);
    assert_eq!(score.points(Partnership::EastWest), 1150);
    assert_eq!(score.result(), -13);
}

#[test]
fn dummy_is_played_by_declarer() {
    let mut g = with_contract(one_suit_each(), "1S");
    assert_eq!(g.controller_of(Seat::South), Seat::North);
    assert_eq!(g.controller_of(Seat::East), Seat::East);
    assert!(!g.dummy_visible());
    g.play_card(Seat::East, c("3H")).unwrap();
    assert!(g.dummy_visible());
    assert_eq!(g.to_act(), Some(Seat::South));
}
