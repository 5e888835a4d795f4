use bridge_rs::bidding::{Bid, Contract};
use bridge_rs::scoring::{compute_score, score, DealScore, ScoreLine, Vulnerability};
use bridge_rs::seat::{Partnership, Seat};

fn contract(bid: &str, declarer: Seat) -> Contract {
    Contract::new(bid.parse::<Bid>().unwrap(), declarer)
}

#[test]
fn game_in_a_major() {
    let c = contract("4S", Seat::South);
    assert_eq!(score(c, 10, true), ScoreLine { declaring: 620, defending: 0 });
    assert_eq!(score(c, 10, false), ScoreLine { declaring: 420, defending: 0 });
}

#[test]
fn part_score_notrump() {
    assert_eq!(score(contract("1NT", Seat::West), 7, false).declaring, 90);
    // Two overtricks at 30 each.
    assert_eq!(score(contract("1NT", Seat::West), 9, false).declaring, 150);
}

#[test]
fn three_notrump_is_game() {
    assert_eq!(score(contract("3NT", Seat::North), 9, false).declaring, 400);
    assert_eq!(score(contract("3NT", Seat::North), 9, true).declaring, 600);
}

#[test]
fn minor_suit_game_needs_five() {
    assert_eq!(score(contract("4D", Seat::East), 10, false).declaring, 130);
    assert_eq!(score(contract("5D", Seat::East), 11, false).declaring, 400);
    assert_eq!(score(contract("2C", Seat::East), 9, false).declaring, 110);
}

#[test]
fn defeated_vulnerable_notrump() {
    let line = score(contract("3NT", Seat::North), 7, true);
    assert_eq!(line, ScoreLine { declaring: -300, defending: 300 });
}

#[test]
fn undertrick_schedule() {
    let c = contract("7S", Seat::North);
    let down = |tricks: u8, vul: bool| score(c, tricks, vul).defending;
    assert_eq!([down(12, false), down(11, false), down(10, false), down(9, false)], [50, 100, 150, 250]);
    assert_eq!([down(12, true), down(11, true), down(10, true), down(9, true)], [100, 300, 500, 800]);
}

#[test]
fn slam_bonuses() {
    // 180 trick score + 500 game + 750 small slam.
    assert_eq!(score(contract("6S", Seat::North), 12, true).declaring, 1430);
    assert_eq!(score(contract("6S", Seat::North), 12, false).declaring, 980);
    assert_eq!(score(contract("7NT", Seat::North), 13, false).declaring, 1520);
    assert_eq!(score(contract("7NT", Seat::North), 13, true).declaring, 2220);
}

#[test]
fn vulnerability_follows_the_declaring_side() {
    let c = contract("4H", Seat::East);
    assert_eq!(compute_score(c, 10, Vulnerability::NORTH_SOUTH).declaring, 420);
    assert_eq!(compute_score(c, 10, Vulnerability::EAST_WEST).declaring, 620);
}

#[test]
fn deal_score_from_each_side() {
    let s = DealScore::new(contract("4S", Seat::West), 8, Vulnerability::NONE);
    assert_eq!(s.declaring_side, Partnership::EastWest);
    assert_eq!(s.points(Partnership::EastWest), -100);
    assert_eq!(s.points(Partnership::NorthSouth), 100);
    assert_eq!(s.result(), -2);
    assert_eq!(s.summary(), "NS: +100 - EW: -100");
}

#[test]
fn board_vulnerability_cycle() {
    let cycle: Vec<&str> = (1..=4).map(|b| Vulnerability::for_board(b).label()).collect();
    assert_eq!(cycle, ["None", "NS", "EW", "Both"]);
    assert_eq!(Vulnerability::for_board(17), Vulnerability::for_board(1));
    assert_eq!(Vulnerability::for_board(8), Vulnerability::NONE);
}
