use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u16);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    /// Empty when the catalog carries no front sprite for this creature.
    pub sprite_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSlot {
    A,
    B,
}

impl PlayerSlot {
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::A => PlayerSlot::B,
            PlayerSlot::B => PlayerSlot::A,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::A => f.write_str("A"),
            PlayerSlot::B => f.write_str("B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Normal,
    NoDuplicate,
}

impl GameMode {
    pub fn allows_duplicates(self) -> bool {
        matches!(self, GameMode::Normal)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Normal => f.write_str("normal"),
            GameMode::NoDuplicate => f.write_str("no_duplicate"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unrecognized game mode '{input}' (expected 'normal' or 'no_duplicate')")]
pub struct ParseGameModeError {
    pub input: String,
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(GameMode::Normal),
            "no_duplicate" | "no-duplicate" | "nodup" => Ok(GameMode::NoDuplicate),
            _ => Err(ParseGameModeError {
                input: s.to_string(),
            }),
        }
    }
}
