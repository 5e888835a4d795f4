use crate::advisor::{select_card, suggest_bid};
use crate::bidding::Call;
use crate::engine::BridgeEngine;
use crate::game::{ActionError, Phase};
use crate::seat::Seat;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};

use super::{apply, Action, AgentKind, PlayerAgent};

/// Pacing for an automated seat. Decisions themselves are deterministic; the
/// RNG only jitters the delay between `min_delay_ms` and `max_delay_ms`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct BotProfile {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Fixed delay before every action.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.min_delay_ms = delay_ms;
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn with_delay_range_ms(mut self, min: u64, max: u64) -> Self {
        self.min_delay_ms = min;
        self.max_delay_ms = max;
        self
    }

    /// Set a deterministic RNG seed for reproducible pacing.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Plays a seat with the bidding and card-play advisors.
#[derive(Debug)]
pub struct BotAgent {
    profile: BotProfile,
    rng: StdRng,
    next_action_at: Option<Instant>,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let rng = match profile.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { profile, rng, next_action_at: None }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }

    fn choose_delay_ms(&mut self) -> u64 {
        let min = self.profile.min_delay_ms;
        let max = self.profile.max_delay_ms.max(min);
        if max == min {
            min
        } else {
            self.rng.random_range(min..=max)
        }
    }
}

/// What the advisors would do for `seat` right now.
pub fn suggested_action(engine: &dyn BridgeEngine, seat: Seat) -> Option<Action> {
    match engine.phase() {
        Phase::Bidding => {
            let call = suggest_bid(seat, engine.hand(seat), engine.auction().entries(), seat.partner());
            let call = if engine.auction().is_legal(call) { call } else { Call::Pass };
            Some(Action::Call(call))
        }
        Phase::Playing => {
            let contract = engine.contract()?;
            let declaring = seat.partnership() == contract.declarer().partnership();
            let legal = engine.legal_cards(seat);
            let card = select_card(seat, engine.hand(seat), engine.current_trick(), engine.trump(), declaring)
                .filter(|c| legal.contains(c))
                .or_else(|| legal.first().copied())?;
            Some(Action::Play(card))
        }
        _ => None,
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn on_turn(&mut self, engine: &mut dyn BridgeEngine, seat: Seat) -> Result<bool, ActionError> {
        if matches!(engine.phase(), Phase::Complete | Phase::Void) {
            self.next_action_at = None;
            return Ok(false);
        }
        if engine.to_act() != Some(seat) {
            return Ok(false);
        }
        let now = Instant::now();
        let delay = self.choose_delay_ms();
        if delay > 0 {
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + Duration::from_millis(delay));
                    return Ok(false);
                }
                Some(next) if now < next => return Ok(false),
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        match suggested_action(engine, seat) {
            Some(action) => apply(engine, seat, action).map(|_| true),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DealConfig, Game};
    use std::thread;

    fn game(seed: u64) -> Game {
        Game::new(DealConfig::default().with_seed(seed))
    }

    #[test]
    fn delay_defers_the_first_tick() {
        let mut g = game(7);
        let mut bot = BotAgent::new(BotProfile::default().with_delay_ms(15).with_seed(7));
        assert_eq!(bot.on_turn(&mut g, Seat::North), Ok(false));
        assert_eq!(g.to_act(), Some(Seat::North), "no action before the delay");
        thread::sleep(Duration::from_millis(20));
        assert_eq!(bot.on_turn(&mut g, Seat::North), Ok(true));
        assert_eq!(g.to_act(), Some(Seat::East));
    }

    #[test]
    fn idle_when_not_on_turn_or_deal_over() {
        let mut g = game(8);
        let mut bot = BotAgent::new(BotProfile::default());
        assert_eq!(bot.on_turn(&mut g, Seat::West), Ok(false));
        assert!(g.auction().entries().is_empty());

        for seat in Seat::ALL {
            g.submit_bid(seat, Call::Pass).unwrap();
        }
        assert_eq!(bot.on_turn(&mut g, Seat::North), Ok(false));
    }

    #[test]
    fn bot_calls_match_the_advisor() {
        let mut g = game(9);
        let expected = suggest_bid(Seat::North, g.hand(Seat::North), &[], Seat::South);
        let mut bot = BotAgent::new(BotProfile::default());
        assert_eq!(bot.on_turn(&mut g, Seat::North), Ok(true));
        assert_eq!(g.auction().entries()[0].call, expected);
    }

    #[test]
    fn four_bots_finish_a_deal() {
        let mut g = game(10);
        let mut bots: Vec<BotAgent> = (0..4).map(|_| BotAgent::new(BotProfile::default())).collect();
        let mut guard = 0;
        while let Some(seat) = g.to_act() {
            let controller = g.controller_of(seat);
            assert_eq!(bots[controller.index()].on_turn(&mut g, seat), Ok(true));
            guard += 1;
            assert!(guard < 200, "deal did not terminate");
        }
        assert!(matches!(g.phase(), Phase::Complete | Phase::Void));
    }

    #[test]
    fn delay_range_is_respected() {
        let mut bot = BotAgent::new(BotProfile::default().with_delay_range_ms(10, 20).with_seed(3));
        for _ in 0..50 {
            let d = bot.choose_delay_ms();
            assert!((10..=20).contains(&d));
        }
    }

    #[test]
    fn suggested_plays_are_legal_cards() {
        let mut g = game(12);
        g.submit_bid(Seat::North, "2H".parse().unwrap()).unwrap();
        for seat in [Seat::East, Seat::South, Seat::West] {
            g.submit_bid(seat, Call::Pass).unwrap();
        }
        while let Some(seat) = g.to_act() {
            let Some(Action::Play(card)) = suggested_action(&g, seat) else {
                panic!("no card suggested for {seat}");
            };
            assert!(g.legal_cards(seat).contains(&card), "{seat} {card}");
            g.play_card(seat, card).unwrap();
        }
        assert_eq!(g.phase(), Phase::Complete);
        assert_eq!(suggested_action(&g, Seat::North), None);
    }
}
