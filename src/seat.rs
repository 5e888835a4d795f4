//! Seats around the table and the partnerships they form.
//!
//! Rotation is clockwise N → E → S → W → N. Turn order for bidding and play,
//! partner lookup, and the opening leader all derive from [`Seat::next`].

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// All seats in rotation order starting from North.
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// The seat to this seat's left, i.e. next in rotation.
    pub const fn next(self) -> Seat {
        self.offset(1)
    }

    /// The seat `n` places further along the rotation.
    pub const fn offset(self, n: usize) -> Seat {
        Seat::ALL[(self as usize + n) % 4]
    }

    pub const fn partner(self) -> Seat {
        self.offset(2)
    }

    pub const fn partnership(self) -> Partnership {
        match self {
            Seat::North | Seat::South => Partnership::NorthSouth,
            Seat::East | Seat::West => Partnership::EastWest,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }

    /// Whether `other` sits in the same partnership.
    pub const fn is_partner_of(self, other: Seat) -> bool {
        self as usize % 2 == other as usize % 2
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeatParseError {
    #[error("invalid seat: '{0}'")]
    Invalid(String),
}

impl FromStr for Seat {
    type Err = SeatParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Seat::North),
            "e" | "east" => Ok(Seat::East),
            "s" | "south" => Ok(Seat::South),
            "w" | "west" => Ok(Seat::West),
            _ => Err(SeatParseError::Invalid(s.to_string())),
        }
    }
}

/// One of the two fixed partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partnership {
    NorthSouth,
    EastWest,
}

impl Partnership {
    pub const BOTH: [Partnership; 2] = [Partnership::NorthSouth, Partnership::EastWest];

    pub const fn opponents(self) -> Partnership {
        match self {
            Partnership::NorthSouth => Partnership::EastWest,
            Partnership::EastWest => Partnership::NorthSouth,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Partnership::NorthSouth => [Seat::North, Seat::South],
            Partnership::EastWest => [Seat::East, Seat::West],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Partnership::NorthSouth => "NS",
            Partnership::EastWest => "EW",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_clockwise_and_wraps() {
        assert_eq!(Seat::North.next(), Seat::East);
        assert_eq!(Seat::East.next(), Seat::South);
        assert_eq!(Seat::South.next(), Seat::West);
        assert_eq!(Seat::West.next(), Seat::North);
        assert_eq!(Seat::West.offset(6), Seat::East);
    }

    #[test]
    fn partners_share_a_partnership() {
        for seat in Seat::ALL {
            assert_eq!(seat.partner().partner(), seat);
            assert_eq!(seat.partnership(), seat.partner().partnership());
            assert_ne!(seat.partnership(), seat.next().partnership());
            assert!(seat.is_partner_of(seat.partner()));
            assert!(!seat.is_partner_of(seat.next()));
        }
    }

    #[test]
    fn parse_seats() {
        assert_eq!("n".parse::<Seat>().unwrap(), Seat::North);
        assert_eq!("West".parse::<Seat>().unwrap(), Seat::West);
        assert!("x".parse::<Seat>().is_err());
    }
}
