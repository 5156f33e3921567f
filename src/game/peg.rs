use std::fmt;
use std::str::FromStr;

use crate::error::ParsePegError;

/// One of the three fixed peg positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Position from the left, 0..3
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Get peg label for display
    pub fn label(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }

    /// Map a key or label character to a peg. Accepts the labels in either
    /// case and the digit keys `1`..`3`.
    pub fn from_char(ch: char) -> Result<Peg, ParsePegError> {
        match ch {
            'A' | 'a' | '1' => Ok(Peg::A),
            'B' | 'b' | '2' => Ok(Peg::B),
            'C' | 'c' | '3' => Ok(Peg::C),
            other => Err(ParsePegError(other.to_string())),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Peg {
    type Err = ParsePegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Peg::from_char(ch),
            _ => Err(ParsePegError(s.to_string())),
        }
    }
}
