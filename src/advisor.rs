//! Advisors: deterministic heuristics that pick a call or a card.
//!
//! These are pure functions over a hand and the public state of the deal.
//! They never touch the engine; callers decide whether to submit what they
//! suggest. Every suggestion is legal for the state it was computed from.

mod bidding;
mod play;

pub use bidding::{suggest_bid, HandEvaluation};
pub use play::select_card;
