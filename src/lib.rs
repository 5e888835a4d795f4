//! bridge-rs: contract bridge rules engine
//!
//! Goals:
//! - One deal at a time: shuffle, auction, thirteen tricks, duplicate score
//! - Every rule checked at the engine boundary; invalid actions return `Err`
//!   and leave the deal untouched
//! - Deterministic deals and robot decisions from a seed
//!
//! ## Quick start: bid and open a deal
//! ```
//! use bridge_rs::bidding::Call;
//! use bridge_rs::game::{DealConfig, Game, Phase};
//! use bridge_rs::seat::Seat;
//!
//! let mut game = Game::new(DealConfig::default().with_seed(42));
//! assert_eq!(game.to_act(), Some(Seat::North));
//!
//! game.submit_bid(Seat::North, "1NT".parse::<Call>().unwrap()).unwrap();
//! for seat in [Seat::East, Seat::South, Seat::West] {
//!     game.submit_bid(seat, Call::Pass).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! let contract = game.contract().unwrap();
//! assert_eq!(contract.declarer(), Seat::North);
//! // The seat left of declarer leads.
//! assert_eq!(game.to_act(), Some(Seat::East));
//! let lead = game.legal_cards(Seat::East)[0];
//! game.play_card(Seat::East, lead).unwrap();
//! assert!(game.dummy_visible());
//! ```
//!
//! ## TUI
//! Play South against three robots with:
//! ```sh
//! cargo run --bin bridge-rs
//! ```

pub mod advisor;
pub mod agents;
pub mod bidding;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod play;
pub mod scoring;
pub mod seat;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
