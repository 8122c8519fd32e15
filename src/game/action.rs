use serde::{Deserialize, Serialize};

use crate::types::ActionType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GameAction {
    pub player: String,
    pub action_type: ActionType,
    pub payload: ActionPayload,
}

impl GameAction {
    pub fn new(player: impl Into<String>, action_type: ActionType) -> Self {
        Self {
            player: player.into(),
            action_type,
            payload: ActionPayload::None,
        }
    }

    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = payload;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionPayload {
    #[default]
    None,
    Dice(i32, i32),
    CardRoll(u8),
    Tile(String),
}
