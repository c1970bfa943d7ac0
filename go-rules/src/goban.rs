use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::{GoError, IllegalMove};
use crate::ko::KoState;
use crate::stone::Stone;

/// Largest supported board edge.
pub const MAX_SIZE: u8 = 25;

/// Stones removed from the opponent, credited to the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stones taken by `stone`.
    pub fn of(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    /// Stones taken by both sides.
    pub fn total(&self) -> u32 {
        self.black + self.white
    }

    /// Credit a committed placement's captures to the color that played it.
    fn credit(&mut self, placement: &Placement) {
        let taken = placement.captured.len() as u32;
        let tally = match placement.stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        };
        *tally += taken;
    }
}

/// Liberty count of a group, plus its members when it has none left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Liberties {
    pub count: usize,
    pub group: Option<Vec<Point>>,
}

/// A legal placement worked out by [`Goban::probe`], not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    point: Point,
    stone: Stone,
    captured: Vec<Point>,
    liberties: usize,
}

impl Placement {
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Every opponent stone removed by this move.
    pub fn captured(&self) -> &[Point] {
        &self.captured
    }

    /// Liberties of the placed stone's group once captures are resolved.
    pub fn liberties(&self) -> usize {
        self.liberties
    }
}

/// Square Go board stored as a flat row-major array of `0`, `1` and `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    captures: Captures,
}

impl Goban {
    /// Create an empty `size` x `size` board.
    pub fn new(size: u8) -> Result<Self, GoError> {
        if size == 0 || size > MAX_SIZE {
            return Err(GoError::InvalidSize(size));
        }

        Ok(Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
            captures: Captures::new(),
        })
    }

    /// Build a position from rows of `'B'`, `'W'` and anything else for empty.
    pub fn from_layout(layout: &[&str]) -> Result<Self, GoError> {
        let size = u8::try_from(layout.len()).map_err(|_| GoError::InvalidSize(u8::MAX))?;
        let mut goban = Goban::new(size)?;

        for (y, row) in layout.iter().enumerate() {
            if row.chars().count() != layout.len() {
                return Err(GoError::Config(format!(
                    "layout row {y} has {} points, expected {size}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let i = y * size as usize + x;
                goban.board[i] = match c {
                    'B' => Stone::Black.to_int(),
                    'W' => Stone::White.to_int(),
                    _ => 0,
                };
            }
        }

        Ok(goban)
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    /// Convert driver coordinates, which may be negative or too large.
    pub fn point(&self, x: i32, y: i32) -> Option<Point> {
        let p = (u8::try_from(x).ok()?, u8::try_from(y).ok()?);
        self.on_board(p).then_some(p)
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    /// Number of `stone` stones on the board.
    pub fn count(&self, stone: Stone) -> u32 {
        self.board.iter().filter(|&&s| s == stone.to_int()).count() as u32
    }

    // -- Adjacency --

    /// In-bounds 4-neighbors, in the order left, right, up, down.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    // -- Group analysis --

    /// Liberty count of the group at `point`. The members are returned only
    /// when the count is zero, since that is exactly the set a capture removes.
    pub fn analyze(&self, point: Point) -> Liberties {
        let group = self.chain(point);
        let count = self.chain_liberties(&group);
        Liberties {
            count,
            group: (count == 0 && !group.is_empty()).then_some(group),
        }
    }

    /// Flood-fill connected group of same-colored stones.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let mut visited = vec![false; self.board.len()];
        self.chain_from(point, &mut visited)
    }

    /// Distinct empty points adjacent to any member of `chain`.
    pub fn chain_liberties(&self, chain: &[Point]) -> usize {
        let mut seen = vec![false; self.board.len()];
        let mut count = 0;
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.board[ni] == 0 {
                    seen[ni] = true;
                    count += 1;
                }
            }
        }
        count
    }

    /// Chain flood-fill using a shared visited bitset.
    fn chain_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    /// Distinct opponent chains touching `point`, each found once.
    fn opponent_neighbor_chains(&self, point: Point, stone: Stone) -> Vec<Vec<Point>> {
        let opponent = stone.opp();
        let mut chains = Vec::new();
        let mut visited = vec![false; self.board.len()];

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) || visited[self.idx(n)] {
                continue;
            }
            chains.push(self.chain_from(n, &mut visited));
        }

        chains
    }

    // -- Legality and capture --

    /// Work out what playing `stone` at `point` would do, without touching
    /// this board. Captures are resolved before suicide is checked, so a move
    /// that takes stones is never suicide.
    pub fn probe(
        &self,
        point: Point,
        stone: Stone,
        ko: &KoState,
    ) -> Result<Placement, IllegalMove> {
        if !self.on_board(point) {
            return Err(IllegalMove::OutOfBounds);
        }
        if self.stone_at(point).is_some() {
            return Err(IllegalMove::Occupied);
        }
        if ko.forbids(point) {
            return Err(IllegalMove::KoViolation);
        }

        let mut scratch = self.clone();
        scratch.set_stone(point, stone);

        let mut captured = Vec::new();
        for chain in scratch.opponent_neighbor_chains(point, stone) {
            if scratch.chain_liberties(&chain) == 0 {
                captured.extend(chain);
            }
        }
        for &p in &captured {
            scratch.clear_stone(p);
        }

        let liberties = scratch.analyze(point).count;
        if liberties == 0 && captured.is_empty() {
            return Err(IllegalMove::Suicide);
        }

        Ok(Placement {
            point,
            stone,
            captured,
            liberties,
        })
    }

    /// Apply a placement from [`Goban::probe`] on this same position.
    pub(crate) fn commit(&mut self, placement: &Placement) {
        self.set_stone(placement.point, placement.stone);
        for &p in &placement.captured {
            self.clear_stone(p);
        }
        self.captures.credit(placement);
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn set_stone(&mut self, point: Point, stone: Stone) {
        let i = self.idx(point);
        self.board[i] = stone.to_int();
    }

    fn clear_stone(&mut self, point: Point) {
        let i = self.idx(point);
        self.board[i] = 0;
    }
}
