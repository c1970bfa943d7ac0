use serde::{Deserialize, Serialize};

use crate::Point;
use crate::goban::Placement;
use crate::stone::Stone;

/// A locked point and the color whose stone was just taken there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}

/// One-ply ko restriction. Replaced after every committed move or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KoState {
    #[default]
    Clear,
    Armed(Ko),
}

impl KoState {
    /// Arms on a single-stone capture that leaves the capturing group in atari.
    pub fn after_move(placement: &Placement) -> Self {
        match placement.captured() {
            [taken] if placement.liberties() == 1 => KoState::Armed(Ko {
                pos: *taken,
                illegal: placement.stone().opp(),
            }),
            _ => KoState::Clear,
        }
    }

    pub fn after_pass() -> Self {
        KoState::Clear
    }

    pub fn forbids(&self, point: Point) -> bool {
        matches!(self, KoState::Armed(ko) if ko.pos == point)
    }

    pub fn ko(&self) -> Option<&Ko> {
        match self {
            KoState::Armed(ko) => Some(ko),
            KoState::Clear => None,
        }
    }
}
