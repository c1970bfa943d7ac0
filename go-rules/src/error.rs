use serde::Serialize;
use std::fmt;

/// Why a placement was refused. Checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalMove {
    OutOfBounds,
    Occupied,
    KoViolation,
    Suicide,
}

impl IllegalMove {
    /// Stable snake_case code, the same string the serde form uses.
    pub fn code(self) -> &'static str {
        match self {
            IllegalMove::OutOfBounds => "out_of_bounds",
            IllegalMove::Occupied => "occupied",
            IllegalMove::KoViolation => "ko_violation",
            IllegalMove::Suicide => "suicide",
        }
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfBounds => write!(f, "out of bounds"),
            IllegalMove::Occupied => write!(f, "occupied"),
            IllegalMove::KoViolation => write!(f, "ko violation"),
            IllegalMove::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for IllegalMove {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    Illegal(IllegalMove),
    InvalidColor(i8),
    InvalidSize(u8),
    Config(String),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::Illegal(reason) => write!(f, "illegal move: {reason}"),
            GoError::InvalidColor(v) => write!(f, "invalid color {v}, expected 1 or -1"),
            GoError::InvalidSize(n) => write!(f, "invalid board size {n}"),
            GoError::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for GoError {}

impl From<IllegalMove> for GoError {
    fn from(reason: IllegalMove) -> Self {
        GoError::Illegal(reason)
    }
}

impl From<serde_json::Error> for GoError {
    fn from(e: serde_json::Error) -> Self {
        GoError::Config(e.to_string())
    }
}
