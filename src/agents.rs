//! Agents: pluggable players for the four seats.
//!
//! A `PlayerAgent` acts for a seat when the engine puts that seat on turn.
//! `AgentTable` owns one optional agent per seat and routes each turn to the
//! right one; while the dummy is on turn, the declarer's agent plays for it.
//! This lives in the library so frontends stay thin.

use crate::bidding::{Call, Contract};
use crate::cards::Card;
use crate::engine::BridgeEngine;
use crate::game::{ActionError, Phase};
use crate::scoring::DealScore;
use crate::seat::{Partnership, Seat};
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level action intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Call(Call),
    Play(Card),
}

/// A seat controller that can act when it is its turn.
pub trait PlayerAgent {
    /// Called when `seat` is on turn and this agent controls it. `seat` may be
    /// the dummy when this agent sits in the declarer's chair.
    fn on_turn(&mut self, engine: &mut dyn BridgeEngine, seat: Seat) -> Result<bool, ActionError>;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat-intent action; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

mod bots;

pub use bots::{suggested_action, BotAgent, BotProfile};

fn apply(engine: &mut dyn BridgeEngine, seat: Seat, action: Action) -> Result<(), ActionError> {
    match action {
        Action::Call(call) => engine.submit_bid(seat, call).map(|_| ()),
        Action::Play(card) => engine.play_card(seat, card).map(|_| ()),
    }
}

/// Executes user-intended actions when it is their turn.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn BridgeEngine, seat: Seat) -> Result<bool, ActionError> {
        if matches!(engine.phase(), Phase::Complete | Phase::Void) {
            self.pending = None;
            return Ok(false);
        }
        if engine.to_act() != Some(seat) {
            return Ok(false);
        }
        match self.pending.take() {
            Some(action) => apply(engine, seat, action).map(|_| true),
            None => Ok(false),
        }
    }
}

/// Which seat the human plays from once the contract is known.
///
/// The human bids from `home`. When their side declares, the human takes the
/// declarer's chair and so also plays the dummy; otherwise the human defends
/// from `home`.
pub fn human_seat_for_play(contract: Contract, home: Seat) -> Seat {
    let declarer = contract.declarer();
    if declarer.is_partner_of(home) {
        declarer
    } else {
        home
    }
}

/// Owns an optional agent per seat and drives the one on turn.
pub struct AgentTable {
    seats: [Option<Box<dyn PlayerAgent>>; 4],
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Bot) => 'B',
                Some(AgentKind::Human) => 'H',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl Default for AgentTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentTable {
    /// A table with all four seats empty.
    pub fn new() -> Self {
        Self { seats: [None, None, None, None], min_action_delay: Duration::ZERO, next_action_at: None }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: Seat, agent: Option<Box<dyn PlayerAgent>>) {
        self.seats[seat.index()] = agent;
    }

    pub fn agent(&self, seat: Seat) -> Option<&dyn PlayerAgent> {
        self.seats[seat.index()].as_deref()
    }

    pub fn agent_kind(&self, seat: Seat) -> Option<AgentKind> {
        self.agent(seat).map(|ag| ag.kind())
    }

    /// The seat holding the human agent, if any.
    pub fn human_seat(&self) -> Option<Seat> {
        Seat::ALL.into_iter().find(|&s| self.agent_kind(s) == Some(AgentKind::Human))
    }

    /// Exchange the agents of two seats.
    pub fn swap(&mut self, a: Seat, b: Seat) {
        self.seats.swap(a.index(), b.index());
    }

    /// Send an action intent to a seat's agent, if any.
    pub fn receive(&mut self, seat: Seat, action: Action) -> bool {
        match self.seats[seat.index()].as_mut() {
            Some(agent) => agent.receive(action),
            None => false,
        }
    }

    /// Set a global minimum delay between any actions at the table.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the agent controlling the seat on turn, if any.
    pub fn on_turn(&mut self, engine: &mut dyn BridgeEngine) -> Result<bool, ActionError> {
        let Some(seat) = engine.to_act() else {
            return Ok(false);
        };
        let controller = engine.controller_of(seat);
        let Some(agent) = self.seats[controller.index()].as_mut() else {
            return Ok(false);
        };
        let now = Instant::now();
        if matches!(agent.kind(), AgentKind::Bot) {
            if let Some(next) = self.next_action_at {
                if now < next {
                    return Ok(false);
                }
            }
        }
        let acted = agent.on_turn(engine, seat).map_err(|err| {
            log::warn!("{controller} acting for {seat}: {err}");
            err
        })?;
        if acted && self.min_action_delay > Duration::ZERO {
            self.next_action_at = Some(now + self.min_action_delay);
        }
        Ok(acted)
    }

    /// Remove all agents.
    pub fn clear(&mut self) {
        self.seats = [None, None, None, None];
        self.next_action_at = None;
    }
}

/// Running totals per partnership across deals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    totals: [i64; 2],
    deals: u32,
}

impl Scoreboard {
    pub fn record(&mut self, score: &DealScore) {
        for side in Partnership::BOTH {
            self.totals[side.index()] += i64::from(score.points(side));
        }
        self.deals += 1;
    }

    pub fn total(&self, side: Partnership) -> i64 {
        self.totals[side.index()]
    }

    pub fn deals(&self) -> u32 {
        self.deals
    }
}
