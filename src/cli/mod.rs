pub mod board_display;
pub mod commands;
pub mod session;

pub use board_display::render_board_to_string;
pub use commands::{CLI_COMMANDS, Command, CommandCode, print_command_help};
pub use session::CommandProcessor;

use crate::game::GameError;
use crate::registry::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid instruction")]
    InvalidInstruction,
    #[error("no game in progress")]
    NoGameInProgress,
    #[error("a game is already in progress")]
    GameInProgress,
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("could not render snapshot: {0}")]
    Render(String),
}
