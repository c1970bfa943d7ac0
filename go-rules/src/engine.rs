use serde::Serialize;

use crate::Point;
use crate::config::BoardConfig;
use crate::error::{GoError, IllegalMove};
use crate::goban::{Captures, Goban, Placement};
use crate::hoshi;
use crate::ko::{Ko, KoState};
use crate::stone::Stone;
use crate::territory::{self, Score, Territory};
use crate::turn::Turn;

/// Outcome of a legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub legal: bool,
    pub captured: u32,
    pub reason: Option<IllegalMove>,
}

impl Verdict {
    fn legal(captured: u32) -> Self {
        Verdict {
            legal: true,
            captured,
            reason: None,
        }
    }

    fn illegal(reason: IllegalMove) -> Self {
        Verdict {
            legal: false,
            captured: 0,
            reason: Some(reason),
        }
    }
}

/// Read-only copy of the position for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub size: u8,
    pub board: Vec<i8>,
    pub captures: Captures,
    pub ko: Option<Ko>,
    pub star_points: Vec<Point>,
}

/// One game's board, capture tally and ko state.
///
/// Turn order and end of game belong to the caller: every call names the
/// color it plays for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    goban: Goban,
    ko: KoState,
}

impl Engine {
    pub fn new(size: u8) -> Result<Self, GoError> {
        Ok(Self::from_goban(Goban::new(size)?))
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, GoError> {
        config.validate()?;
        Self::new(config.size)
    }

    /// Start from an existing position with no ko.
    pub fn from_goban(goban: Goban) -> Self {
        Engine {
            goban,
            ko: KoState::Clear,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.ko()
    }

    // -- Game actions --

    /// Check a move without applying it.
    pub fn probe(&self, x: i32, y: i32, stone: Stone) -> Verdict {
        match self.resolve(x, y, stone) {
            Ok(placement) => Verdict::legal(placement.captured().len() as u32),
            Err(reason) => Verdict::illegal(reason),
        }
    }

    /// Check a move and, if legal, apply it and update the ko state.
    pub fn try_move(&mut self, x: i32, y: i32, stone: Stone) -> Verdict {
        let placement = match self.resolve(x, y, stone) {
            Ok(placement) => placement,
            Err(reason) => {
                tracing::trace!(x, y, %stone, %reason, "move rejected");
                return Verdict::illegal(reason);
            }
        };

        self.goban.commit(&placement);
        self.ko = KoState::after_move(&placement);

        let captured = placement.captured().len() as u32;
        tracing::debug!(x, y, %stone, captured, "stone placed");
        if let Some(ko) = self.ko.ko() {
            tracing::debug!(pos = ?ko.pos, illegal = %ko.illegal, "ko armed");
        }

        Verdict::legal(captured)
    }

    /// Apply a move given a raw color marker (`1` Black, `-1` White) and
    /// return the number of stones captured.
    pub fn place(&mut self, x: i32, y: i32, color: i8) -> Result<u32, GoError> {
        let stone = Stone::try_from(color)?;
        let verdict = self.try_move(x, y, stone);
        match verdict.reason {
            Some(reason) => Err(reason.into()),
            None => Ok(verdict.captured),
        }
    }

    /// A pass places nothing but lifts any ko restriction.
    pub fn pass(&mut self, stone: Stone) {
        tracing::debug!(%stone, "pass");
        self.ko = KoState::after_pass();
    }

    /// Apply a driver turn. A pass reports zero captures.
    pub fn apply(&mut self, turn: &Turn) -> Result<u32, GoError> {
        match *turn {
            Turn::Play { stone, x, y } => {
                let verdict = self.try_move(x, y, stone);
                match verdict.reason {
                    Some(reason) => Err(reason.into()),
                    None => Ok(verdict.captured),
                }
            }
            Turn::Pass { stone } => {
                self.pass(stone);
                Ok(0)
            }
        }
    }

    fn resolve(&self, x: i32, y: i32, stone: Stone) -> Result<Placement, IllegalMove> {
        let point = self.goban.point(x, y).ok_or(IllegalMove::OutOfBounds)?;
        self.goban.probe(point, stone, &self.ko)
    }

    // -- Read-only views --

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.goban.size(),
            board: self.goban.board().to_vec(),
            captures: *self.goban.captures(),
            ko: self.ko.ko().copied(),
            star_points: hoshi::star_points(self.goban.size()),
        }
    }

    pub fn territory(&self) -> Vec<Territory> {
        territory::classify(&self.goban)
    }

    pub fn score(&self) -> Score {
        territory::score(&self.goban)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_from_layout(layout: &[&str]) -> Engine {
        Engine::from_goban(Goban::from_layout(layout).unwrap())
    }

    // -- Initialization --

    #[test]
    fn starts_with_empty_board() {
        let engine = Engine::new(9).unwrap();
        assert_eq!(engine.size(), 9);
        assert!(engine.board().iter().all(|&s| s == 0));
        assert_eq!(*engine.captures(), Captures::new());
        assert!(engine.ko().is_none());
    }

    #[test]
    fn builds_from_config() {
        let engine = Engine::from_config(&BoardConfig::default()).unwrap();
        assert_eq!(engine.size(), 19);
        assert_eq!(
            Engine::from_config(&BoardConfig { size: 0 }),
            Err(GoError::InvalidSize(0))
        );
    }

    // -- Placement --

    #[test]
    fn place_reports_captures() {
        let mut engine = engine_from_layout(&["+B++", "BWB+", "++++", "++++"]);
        assert_eq!(engine.place(1, 2, 1), Ok(1));
        assert_eq!(engine.stone_at((1, 1)), None);
        assert_eq!(engine.captures().black, 1);
    }

    #[test]
    fn place_rejects_invalid_color() {
        let mut engine = Engine::new(5).unwrap();
        assert_eq!(engine.place(0, 0, 0), Err(GoError::InvalidColor(0)));
        assert_eq!(engine.place(0, 0, 2), Err(GoError::InvalidColor(2)));
        // Color is checked before the point.
        assert_eq!(engine.place(-1, 0, 3), Err(GoError::InvalidColor(3)));
        assert!(engine.goban().is_empty());
    }

    #[test]
    fn place_reports_each_reason() {
        let mut engine = engine_from_layout(&["+B+", "B++", "+++"]);
        assert_eq!(
            engine.place(3, 0, 1),
            Err(GoError::Illegal(IllegalMove::OutOfBounds))
        );
        assert_eq!(
            engine.place(0, -1, 1),
            Err(GoError::Illegal(IllegalMove::OutOfBounds))
        );
        assert_eq!(
            engine.place(1, 0, -1),
            Err(GoError::Illegal(IllegalMove::Occupied))
        );
        assert_eq!(
            engine.place(0, 0, -1),
            Err(GoError::Illegal(IllegalMove::Suicide))
        );
    }

    #[test]
    fn probe_does_not_commit() {
        let engine = engine_from_layout(&["+B++", "BWB+", "++++", "++++"]);
        let before = engine.clone();
        let verdict = engine.probe(1, 2, Stone::Black);
        assert_eq!(
            verdict,
            Verdict {
                legal: true,
                captured: 1,
                reason: None
            }
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn illegal_try_move_leaves_state() {
        let mut engine = engine_from_layout(&["+B++", "B+++", "++++", "++++"]);
        let before = engine.clone();
        let verdict = engine.try_move(0, 0, Stone::White);
        assert!(!verdict.legal);
        assert_eq!(verdict.reason, Some(IllegalMove::Suicide));
        assert_eq!(verdict.captured, 0);
        assert_eq!(engine, before);
    }

    // -- Ko --

    #[test]
    fn ko_blocks_immediate_recapture() {
        let mut engine = engine_from_layout(&["+BW+", "BW+W", "+BW+", "++++"]);
        assert_eq!(engine.place(2, 1, 1), Ok(1));
        assert_eq!(
            engine.ko(),
            Some(&Ko {
                pos: (1, 1),
                illegal: Stone::White
            })
        );
        assert_eq!(
            engine.place(1, 1, -1),
            Err(GoError::Illegal(IllegalMove::KoViolation))
        );
    }

    #[test]
    fn ko_lifts_after_one_move() {
        let mut engine = engine_from_layout(&["+BW+", "BW+W", "+BW+", "++++"]);
        engine.place(2, 1, 1).unwrap();
        engine.place(3, 3, -1).unwrap();
        engine.place(0, 3, 1).unwrap();
        assert!(engine.ko().is_none());
        assert_eq!(engine.place(1, 1, -1), Ok(1));
    }

    #[test]
    fn pass_clears_ko() {
        let mut engine = engine_from_layout(&["+BW+", "BW+W", "+BW+", "++++"]);
        engine.place(2, 1, 1).unwrap();
        assert!(engine.ko().is_some());
        engine.pass(Stone::White);
        assert!(engine.ko().is_none());
    }

    // -- Turns --

    #[test]
    fn applies_turns() {
        let mut engine = Engine::new(5).unwrap();
        let black = |x, y| Turn::Play {
            stone: Stone::Black,
            x,
            y,
        };
        assert_eq!(engine.apply(&black(2, 2)), Ok(0));
        assert_eq!(engine.apply(&Turn::Pass { stone: Stone::White }), Ok(0));
        assert_eq!(
            engine.apply(&black(2, 2)),
            Err(GoError::Illegal(IllegalMove::Occupied))
        );
        assert_eq!(
            engine.apply(&black(-1, 7)),
            Err(GoError::Illegal(IllegalMove::OutOfBounds))
        );
    }

    #[test]
    fn applied_pass_lifts_ko() {
        let mut engine = engine_from_layout(&["+BW+", "BW+W", "+BW+", "++++"]);
        let turn: Turn = serde_json::from_str(r#"{"kind":"play","stone":1,"x":2,"y":1}"#).unwrap();
        assert_eq!(engine.apply(&turn), Ok(1));
        assert!(engine.ko().is_some());
        engine.apply(&Turn::Pass { stone: Stone::White }).unwrap();
        assert!(engine.ko().is_none());
    }

    // -- Views --

    #[test]
    fn snapshot_reflects_position() {
        let mut engine = Engine::new(9).unwrap();
        engine.place(4, 4, 1).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.size, 9);
        assert_eq!(snap.board[4 * 9 + 4], 1);
        assert_eq!(snap.star_points.len(), 5);
        assert_eq!(snap.ko, None);
        assert_eq!(snap, engine.snapshot());
    }

    #[test]
    fn snapshot_serializes() {
        let mut engine = engine_from_layout(&["+BW+", "BW+W", "+BW+", "++++"]);
        engine.place(2, 1, 1).unwrap();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["size"], 4);
        assert_eq!(json["captures"]["black"], 1);
        assert_eq!(json["ko"]["pos"], serde_json::json!([1, 1]));
        assert_eq!(json["ko"]["illegal"], -1);
    }

    #[test]
    fn score_is_repeatable() {
        let engine = engine_from_layout(&["+B+W+", "+B+W+", "+B+W+", "+B+W+", "+B+W+"]);
        let first = engine.score();
        assert_eq!(first.areas(), (10.0, 16.5));
        assert_eq!(first, engine.score());
        assert_eq!(engine.territory(), engine.territory());
    }
}
