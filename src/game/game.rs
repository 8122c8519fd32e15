use tracing::info;
use uuid::Uuid;

use crate::game::action::GameAction;
use crate::game::snapshot::BoardSnapshot;
use crate::game::{GameConfig, GameError, GameState, StepOutcome};

/// A running session together with its identity.
#[derive(Debug, Clone)]
pub struct Game {
    pub seed: u64,
    pub id: Uuid,
    pub state: GameState,
}

impl Game {
    pub fn new<S: AsRef<str>>(config: GameConfig, names: &[S]) -> Result<Self, GameError> {
        let seed = config.seed;
        let state = GameState::new(config, names)?;
        let id = Uuid::new_v4();
        info!(%id, seed, "game created");
        Ok(Self { seed, id, state })
    }

    pub fn execute(&mut self, action: GameAction) -> Result<StepOutcome, GameError> {
        self.state.step(action)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }
}
