use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredPlayer {
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl RegisteredPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            games_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("player {0} is already registered")]
    PlayerExists(String),
    #[error("player {0} is not registered")]
    PlayerMissing(String),
}

/// Players known across sessions. Sessions only borrow names from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<RegisteredPlayer>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) -> Result<(), RegistryError> {
        if self.get(name).is_some() {
            return Err(RegistryError::PlayerExists(name.to_string()));
        }
        self.players.push(RegisteredPlayer::new(name));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredPlayer> {
        self.players.iter().find(|player| player.name == name)
    }

    pub fn ensure_registered<S: AsRef<str>>(&self, names: &[S]) -> Result<(), RegistryError> {
        match names.iter().find(|name| self.get(name.as_ref()).is_none()) {
            Some(missing) => Err(RegistryError::PlayerMissing(missing.as_ref().to_string())),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players ordered by wins (most first), then by name.
    pub fn ranked(&self) -> Vec<&RegisteredPlayer> {
        let mut ranked: Vec<&RegisteredPlayer> = self.players.iter().collect();
        ranked.sort_by_key(|player| (Reverse(player.wins), player.name.as_str()));
        ranked
    }
}
