//! Duplicate scoring for undoubled contracts.
//!
//! ```
//! use bridge_rs::bidding::{Bid, Contract};
//! use bridge_rs::scoring::score;
//! use bridge_rs::seat::Seat;
//!
//! let four_spades = Contract::new("4S".parse::<Bid>().unwrap(), Seat::South);
//! assert_eq!(score(four_spades, 10, true).declaring, 620);
//! assert_eq!(score(four_spades, 10, false).declaring, 420);
//! ```

use crate::bidding::{Contract, Denomination};
use crate::seat::{Partnership, Seat};

/// Which partnerships are vulnerable on a deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vulnerability {
    pub north_south: bool,
    pub east_west: bool,
}

impl Vulnerability {
    pub const NONE: Vulnerability = Vulnerability { north_south: false, east_west: false };
    pub const BOTH: Vulnerability = Vulnerability { north_south: true, east_west: true };
    pub const NORTH_SOUTH: Vulnerability = Vulnerability { north_south: true, east_west: false };
    pub const EAST_WEST: Vulnerability = Vulnerability { north_south: false, east_west: true };

    pub const fn of(self, side: Partnership) -> bool {
        match side {
            Partnership::NorthSouth => self.north_south,
            Partnership::EastWest => self.east_west,
        }
    }

    /// Vulnerability of duplicate board `board` (1-based), repeating every 16.
    pub fn for_board(board: u32) -> Self {
        const CYCLE: [Vulnerability; 16] = [
            Vulnerability::NONE,
            Vulnerability::NORTH_SOUTH,
            Vulnerability::EAST_WEST,
            Vulnerability::BOTH,
            Vulnerability::NORTH_SOUTH,
            Vulnerability::EAST_WEST,
            Vulnerability::BOTH,
            Vulnerability::NONE,
            Vulnerability::EAST_WEST,
            Vulnerability::BOTH,
            Vulnerability::NONE,
            Vulnerability::NORTH_SOUTH,
            Vulnerability::BOTH,
            Vulnerability::NONE,
            Vulnerability::NORTH_SOUTH,
            Vulnerability::EAST_WEST,
        ];
        CYCLE[(board.max(1) as usize - 1) % 16]
    }

    pub fn label(self) -> &'static str {
        match (self.north_south, self.east_west) {
            (false, false) => "None",
            (true, false) => "NS",
            (false, true) => "EW",
            (true, true) => "Both",
        }
    }
}

/// Points for one deal, signed from each side's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreLine {
    pub declaring: i32,
    pub defending: i32,
}

/// Trick score of the contracted tricks, before bonuses.
pub fn contract_points(contract: Contract) -> i32 {
    let level = i32::from(contract.level());
    let notrump = if contract.denomination() == Denomination::NoTrump { 10 } else { 0 };
    level * trick_value(contract.denomination()) + notrump
}

fn trick_value(denomination: Denomination) -> i32 {
    if denomination.is_minor() {
        20
    } else {
        30
    }
}

/// Penalty the defenders collect for `undertricks`.
pub fn undertrick_penalty(undertricks: u8, vulnerable: bool) -> i32 {
    let n = i32::from(undertricks);
    match (n, vulnerable) {
        (0, _) => 0,
        (1, false) => 50,
        (2, false) => 100,
        (3, false) => 150,
        (n, false) => 150 + (n - 3) * 100,
        (1, true) => 100,
        (2, true) => 300,
        (3, true) => 500,
        (n, true) => 500 + (n - 3) * 300,
    }
}

/// Score a played contract given the tricks the declaring side took.
pub fn score(contract: Contract, tricks_won: u8, vulnerable: bool) -> ScoreLine {
    let needed = contract.tricks_needed();
    if tricks_won < needed {
        let penalty = undertrick_penalty(needed - tricks_won, vulnerable);
        return ScoreLine { declaring: -penalty, defending: penalty };
    }

    let base = contract_points(contract);
    let game = match (base >= 100, vulnerable) {
        (false, _) => 50,
        (true, false) => 300,
        (true, true) => 500,
    };
    let slam = match (contract.level(), vulnerable) {
        (6, false) => 500,
        (6, true) => 750,
        (7, false) => 1000,
        (7, true) => 1500,
        _ => 0,
    };
    // Overtricks are worth the same whether vulnerable or not.
    let overtricks = i32::from(tricks_won - needed) * trick_value(contract.denomination());
    ScoreLine { declaring: base + game + slam + overtricks, defending: 0 }
}

/// Score a contract using the declaring partnership's vulnerability.
pub fn compute_score(contract: Contract, tricks_won: u8, vulnerability: Vulnerability) -> ScoreLine {
    score(contract, tricks_won, vulnerability.of(contract.declarer().partnership()))
}

/// The outcome of a finished deal, keyed by partnership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealScore {
    pub contract: Contract,
    pub declaring_side: Partnership,
    pub tricks_won: u8,
    pub line: ScoreLine,
}

impl DealScore {
    pub fn new(contract: Contract, tricks_won: u8, vulnerability: Vulnerability) -> Self {
        let declaring_side = contract.declarer().partnership();
        let line = compute_score(contract, tricks_won, vulnerability);
        log::info!("{contract}: {tricks_won} tricks, {} for declarer", line.declaring);
        Self { contract, declaring_side, tricks_won, line }
    }

    /// Points for `side`.
    pub fn points(&self, side: Partnership) -> i32 {
        if side == self.declaring_side {
            self.line.declaring
        } else {
            self.line.defending
        }
    }

    pub fn declarer(&self) -> Seat {
        self.contract.declarer()
    }

    /// Tricks over (positive) or under (negative) the contract.
    pub fn result(&self) -> i8 {
        self.tricks_won as i8 - self.contract.tricks_needed() as i8
    }

    /// One-line summary such as `NS: +420 - EW: 0`.
    pub fn summary(&self) -> String {
        let ns = self.points(Partnership::NorthSouth);
        let ew = self.points(Partnership::EastWest);
        format!("NS: {} - EW: {}", signed(ns), signed(ew))
    }
}

fn signed(points: i32) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}
