#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod coords;
pub mod game;
pub mod registry;
pub mod types;

pub use board::{Board, Tile};
pub use coords::Coord;
pub use game::{BoardSnapshot, Game, GameConfig, GameError, GameEvent, GameState, StepOutcome};
pub use registry::PlayerRegistry;
pub use types::{CardDeck, ColorGroup, TileKind};
