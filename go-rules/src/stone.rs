use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

use crate::error::GoError;

/// Stone color. The discriminants are the markers stored on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Read a grid cell. `0` is empty.
    pub(crate) fn from_cell(v: i8) -> Option<Self> {
        match v {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Stone::Black => "B",
            Stone::White => "W",
        }
    }
}

/// Strict conversion from a caller-supplied color marker.
impl TryFrom<i8> for Stone {
    type Error = GoError;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        Stone::from_cell(v).ok_or(GoError::InvalidColor(v))
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_exact_markers() {
        assert_eq!(Stone::try_from(1), Ok(Stone::Black));
        assert_eq!(Stone::try_from(-1), Ok(Stone::White));
        assert_eq!(Stone::try_from(0), Err(GoError::InvalidColor(0)));
        assert_eq!(Stone::try_from(2), Err(GoError::InvalidColor(2)));
        assert_eq!(Stone::try_from(-5), Err(GoError::InvalidColor(-5)));
    }

    #[test]
    fn opponent() {
        assert_eq!(Stone::Black.opp(), Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
        assert_eq!(-Stone::Black, Stone::White);
    }

    #[test]
    fn serializes_as_marker() {
        assert_eq!(serde_json::to_string(&Stone::White).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<Stone>("1").unwrap(), Stone::Black);
    }

    #[test]
    fn display() {
        assert_eq!(Stone::Black.to_string(), "Black");
        assert_eq!(Stone::White.to_string(), "White");
    }
}
