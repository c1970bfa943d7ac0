use serde::Deserialize;

use crate::error::GoError;
use crate::goban::MAX_SIZE;

/// Board setup supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub size: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { size: 19 }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, GoError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if (1..=MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(GoError::InvalidSize(self.size))
        }
    }
}
