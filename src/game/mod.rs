pub mod action;
pub mod bank;
pub mod cards;
pub mod dice;
pub mod economy;
pub mod game;
pub mod players;
pub mod snapshot;
pub mod state;

pub use action::{ActionPayload, GameAction};
pub use bank::RestPool;
pub use cards::{CardEffect, card_for};
pub use economy::{house_price, rent_for};
pub use game::Game;
pub use players::PlayerState;
pub use snapshot::{BoardSnapshot, TileSnapshot};
pub use state::{GameConfig, GameError, GameEvent, GameState, PrisonReason, StepOutcome};
