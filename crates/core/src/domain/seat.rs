use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First cabin row that can be requested.
pub const MIN_ROW: u8 = 1;
/// Last cabin row that can be requested.
pub const MAX_ROW: u8 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatLetter {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl SeatLetter {
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// Seats A and F sit at the windows.
    pub fn is_window(self) -> bool {
        matches!(self, Self::A | Self::F)
    }
}

impl std::fmt::Display for SeatLetter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SeatError {
    #[error("seat row {row} is outside the cabin range 1..=30")]
    RowOutOfRange { row: i64 },
}

/// A requested seat. The row bound is enforced at construction and at
/// deserialization, so a `SeatPreference` in hand is always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeatPreference")]
pub struct SeatPreference {
    row: u8,
    seat: SeatLetter,
}

impl SeatPreference {
    pub fn new(row: i64, seat: SeatLetter) -> Result<Self, SeatError> {
        if row < i64::from(MIN_ROW) || row > i64::from(MAX_ROW) {
            return Err(SeatError::RowOutOfRange { row });
        }
        Ok(Self { row: row as u8, seat })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn seat(&self) -> SeatLetter {
        self.seat
    }

    /// Cabin label, e.g. `1A`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.seat)
    }
}

#[derive(Debug, Deserialize)]
struct RawSeatPreference {
    row: i64,
    seat: SeatLetter,
}

impl TryFrom<RawSeatPreference> for SeatPreference {
    type Error = SeatError;

    fn try_from(raw: RawSeatPreference) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.seat)
    }
}

/// Result of one seat-preference parse: a concrete choice or the
/// distinguished "could not parse" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatOutcome {
    Seat(SeatPreference),
    Failed,
}
