use bridge_rs::agents::{
    suggested_action, Action, AgentKind, AgentTable, BotAgent, BotProfile, HumanAgent, PlayerAgent,
};
use bridge_rs::bidding::Call;
use bridge_rs::game::{DealConfig, Game, Phase};
use bridge_rs::hand::Hand;
use bridge_rs::seat::{Partnership, Seat};

fn hand(s: &str) -> Hand {
    Hand::try_full(bridge_rs::cards::parse_cards(s).unwrap()).unwrap()
}

/// North 17 balanced, South 9, East and West 7 each.
fn notrump_deal() -> Game {
    let hands = [
        hand("AS KS 5S 2S AH 7H 3H QD JD 4D KC 9C 6C"),
        hand("QS 8S 7S JH 8H 6H AD 7D 6D 5D 7C 5C 4C"),
        hand("JS TS 9S KH QH TH 9H KD TD 9D 8D TC 8C"),
        hand("6S 4S 3S 5H 4H 2H 3D 2D AC QC JC 3C 2C"),
    ];
    Game::with_hands(hands, DealConfig::default()).unwrap()
}

fn bot_table() -> AgentTable {
    let mut agents = AgentTable::new();
    for seat in Seat::ALL {
        agents.set_agent(seat, Some(Box::new(BotAgent::new(BotProfile::default()))));
    }
    agents
}

fn run_to_end(agents: &mut AgentTable, g: &mut Game) {
    let mut guard = 0;
    while g.to_act().is_some() {
        assert_eq!(agents.on_turn(g), Ok(true));
        guard += 1;
        assert!(guard < 200, "deal did not terminate");
    }
}

#[test]
fn bots_raise_one_notrump_and_stop() {
    let mut g = notrump_deal();
    let mut agents = bot_table();
    while g.phase() == Phase::Bidding {
        assert_eq!(agents.on_turn(&mut g), Ok(true));
    }
    let calls: Vec<String> = g.auction().entries().iter().map(|e| e.call.to_string()).collect();
    // Opener has no rule to bid on over 2NT.
    assert_eq!(calls, ["1NT", "Pass", "2NT", "Pass", "Pass", "Pass"]);
    let contract = g.contract().unwrap();
    assert_eq!(contract.to_string(), "2NT by South");
    assert_eq!(g.to_act(), Some(Seat::West));
}

#[test]
fn bots_finish_and_score_the_deal() {
    let mut g = notrump_deal();
    let mut agents = bot_table();
    run_to_end(&mut agents, &mut g);
    assert_eq!(g.phase(), Phase::Complete);
    let ns = g.tricks_won(Partnership::NorthSouth);
    let ew = g.tricks_won(Partnership::EastWest);
    assert_eq!(ns + ew, 13);
    let score = g.score().unwrap();
    assert_eq!(score.tricks_won, ns);
    if score.result() >= 0 {
        assert!(score.points(Partnership::NorthSouth) >= 120);
        assert_eq!(score.points(Partnership::EastWest), 0);
    } else {
        assert_eq!(score.points(Partnership::NorthSouth), -score.points(Partnership::EastWest));
    }
}

#[test]
fn bots_play_out_seeded_deals() {
    for seed in 0..25u64 {
        let mut g = Game::new(DealConfig::default().with_seed(seed));
        let mut agents = bot_table();
        run_to_end(&mut agents, &mut g);
        match g.phase() {
            Phase::Complete => {
                assert!(g.score().is_some());
                assert_eq!(g.completed_tricks().len(), 13);
            }
            Phase::Void => assert!(g.auction().entries().iter().all(|e| e.call.is_pass())),
            other => panic!("seed {seed}: deal stopped in {other:?}"),
        }
    }
}

#[test]
fn non_bot_seat_noop() {
    let mut g = notrump_deal();
    let mut bot = BotAgent::new(BotProfile::default());
    assert_eq!(bot.on_turn(&mut g, Seat::South), Ok(false));
    assert!(g.auction().entries().is_empty());
    assert_eq!(bot.kind(), AgentKind::Bot);
}

#[test]
fn human_acts_only_with_a_queued_action() {
    let mut g = notrump_deal();
    let mut agents = bot_table();
    agents.set_agent(Seat::South, Some(Box::new(HumanAgent::new())));
    assert_eq!(agents.human_seat(), Some(Seat::South));

    assert_eq!(agents.on_turn(&mut g), Ok(true)); // North 1NT
    assert_eq!(agents.on_turn(&mut g), Ok(true)); // East pass
    assert_eq!(agents.on_turn(&mut g), Ok(false));
    assert_eq!(g.to_act(), Some(Seat::South));

    let hint = suggested_action(&g, Seat::South);
    assert_eq!(hint, Some(Action::Call("2NT".parse::<Call>().unwrap())));
    assert!(agents.receive(Seat::South, Action::Call(Call::Pass)));
    assert_eq!(agents.on_turn(&mut g), Ok(true));
    assert_eq!(g.auction().entries()[2].call, Call::Pass);
}

#[test]
fn declarer_agent_plays_dummy() {
    let mut g = notrump_deal();
    let mut agents = bot_table();
    while g.phase() == Phase::Bidding {
        agents.on_turn(&mut g).unwrap();
    }
    // Opening lead by West, then North is dummy and South's agent plays it.
    agents.set_agent(Seat::North, None);
    assert_eq!(agents.on_turn(&mut g), Ok(true));
    assert_eq!(g.to_act(), Some(Seat::North));
    assert_eq!(g.controller_of(Seat::North), Seat::South);
    assert_eq!(agents.on_turn(&mut g), Ok(true));
    assert_eq!(g.current_trick().len(), 2);
}
