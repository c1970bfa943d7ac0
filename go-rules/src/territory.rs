use serde::Serialize;

use crate::KOMI;
use crate::goban::Goban;
use crate::stone::Stone;

/// Classification of one point at scoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Territory {
    Black,
    White,
    Neutral,
    Stone,
}

impl Territory {
    fn owned_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => Territory::Black,
            Stone::White => Territory::White,
        }
    }

    /// Grid-style marker: `1` Black, `-1` White, `0` neutral, `2` occupied.
    pub fn to_int(self) -> i8 {
        match self {
            Territory::Black => 1,
            Territory::White => -1,
            Territory::Neutral => 0,
            Territory::Stone => 2,
        }
    }
}

/// Classify every point of the board, row-major.
///
/// Each maximal empty region belongs to a color only when that color is the
/// only one bordering it. Regions touching both colors, or no stones at all,
/// are neutral.
pub fn classify(goban: &Goban) -> Vec<Territory> {
    let size = goban.size() as usize;
    let board = goban.board();
    let mut map = vec![Territory::Stone; board.len()];
    let mut visited = vec![false; board.len()];

    for start in 0..board.len() {
        if board[start] != 0 || visited[start] {
            continue;
        }

        let mut region = Vec::new();
        let mut borders_black = false;
        let mut borders_white = false;
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(i) = stack.pop() {
            region.push(i);
            let point = ((i % size) as u8, (i / size) as u8);
            for n in goban.neighbors(point) {
                match goban.stone_at(n) {
                    Some(Stone::Black) => borders_black = true,
                    Some(Stone::White) => borders_white = true,
                    None => {
                        let ni = n.1 as usize * size + n.0 as usize;
                        if !visited[ni] {
                            visited[ni] = true;
                            stack.push(ni);
                        }
                    }
                }
            }
        }

        let owner = match (borders_black, borders_white) {
            (true, false) => Territory::owned_by(Stone::Black),
            (false, true) => Territory::owned_by(Stone::White),
            _ => Territory::Neutral,
        };
        for i in region {
            map[i] = owner;
        }
    }

    map
}

/// Per-color area: owned empty points plus stones on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerPoints {
    pub territory: u32,
    pub stones: u32,
}

impl PlayerPoints {
    pub fn total(&self) -> u32 {
        self.territory + self.stones
    }
}

/// Full score breakdown for both players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub black: PlayerPoints,
    pub white: PlayerPoints,
    pub komi: f64,
}

impl Score {
    pub fn black_total(&self) -> f64 {
        self.black.total() as f64
    }

    pub fn white_total(&self) -> f64 {
        self.white.total() as f64 + self.komi
    }

    /// `(black_area, white_area)`, komi included for White.
    pub fn areas(&self) -> (f64, f64) {
        (self.black_total(), self.white_total())
    }

    pub fn result(&self) -> String {
        format_result(self.black_total(), self.white_total())
    }
}

/// Area scoring: territory + stones, with [`KOMI`] added to White.
pub fn score(goban: &Goban) -> Score {
    let map = classify(goban);
    let owned = |t: Territory| map.iter().filter(|&&o| o == t).count() as u32;

    Score {
        black: PlayerPoints {
            territory: owned(Territory::Black),
            stones: goban.count(Stone::Black),
        },
        white: PlayerPoints {
            territory: owned(Territory::White),
            stones: goban.count(Stone::White),
        },
        komi: KOMI,
    }
}

/// Format the game result string from final scores.
///
/// Returns "B+{diff}", "W+{diff}", or "Draw".
pub fn format_result(black_score: f64, white_score: f64) -> String {
    let diff = black_score - white_score;
    if diff > 0.0 {
        format!("{}+{}", Stone::Black.letter(), diff)
    } else if diff < 0.0 {
        format!("{}+{}", Stone::White.letter(), -diff)
    } else {
        "Draw".to_string()
    }
}
