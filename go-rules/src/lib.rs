pub mod config;
pub mod engine;
pub mod error;
pub mod goban;
pub mod hoshi;
pub mod ko;
pub mod stone;
pub mod territory;
pub mod turn;

/// `(x, y)`: column, then row.
pub type Point = (u8, u8);

/// Compensation added to White's area.
pub const KOMI: f64 = 6.5;

pub use config::BoardConfig;
pub use engine::{Engine, Snapshot, Verdict};
pub use error::{GoError, IllegalMove};
pub use goban::{Captures, Goban, Liberties, Placement};
pub use ko::{Ko, KoState};
pub use stone::Stone;
pub use territory::{Score, Territory};
pub use turn::Turn;
