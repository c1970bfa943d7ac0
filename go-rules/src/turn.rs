use serde::{Deserialize, Serialize};

use crate::stone::Stone;

/// One already-decided driver action.
///
/// JSON: `{"kind":"play","stone":1,"x":3,"y":4}` or `{"kind":"pass","stone":-1}`.
/// Coordinates are raw driver input and are bounds-checked on apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Turn {
    Play { stone: Stone, x: i32, y: i32 },
    Pass { stone: Stone },
}

impl Turn {
    pub fn stone(&self) -> Stone {
        match *self {
            Turn::Play { stone, .. } | Turn::Pass { stone } => stone,
        }
    }
}
