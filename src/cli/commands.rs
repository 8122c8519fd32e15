use std::str::FromStr;

use strum::{Display, EnumString};

use super::CommandError;

pub struct CliCommand {
    pub code: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const CLI_COMMANDS: &[CliCommand] = &[
    CliCommand {
        code: "RJ",
        usage: "RJ <player>",
        description: "Register a player.",
    },
    CliCommand {
        code: "LJ",
        usage: "LJ",
        description: "List registered players by wins, then name.",
    },
    CliCommand {
        code: "IJ",
        usage: "IJ <p1> <p2> <p3> <p4>",
        description: "Start a game with four registered players.",
    },
    CliCommand {
        code: "LD",
        usage: "LD <player>",
        description: "Roll the dice.",
    },
    CliCommand {
        code: "CE",
        usage: "CE <player>",
        description: "Buy the tile the player stands on.",
    },
    CliCommand {
        code: "DJ",
        usage: "DJ",
        description: "Show the board and the current player.",
    },
    CliCommand {
        code: "TT",
        usage: "TT <player>",
        description: "End the turn.",
    },
    CliCommand {
        code: "PA",
        usage: "PA <player>",
        description: "Pay the rent owed on the current tile.",
    },
    CliCommand {
        code: "CC",
        usage: "CC <player> <tile>",
        description: "Build a house on a tile of a fully owned color group.",
    },
    CliCommand {
        code: "TC",
        usage: "TC <player>",
        description: "Draw a chance or community card.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum CommandCode {
    #[strum(serialize = "RJ")]
    Register,
    #[strum(serialize = "LJ")]
    List,
    #[strum(serialize = "IJ")]
    Start,
    #[strum(serialize = "LD")]
    Roll,
    #[strum(serialize = "CE")]
    Buy,
    #[strum(serialize = "DJ")]
    Details,
    #[strum(serialize = "TT")]
    EndTurn,
    #[strum(serialize = "PA")]
    PayRent,
    #[strum(serialize = "CC")]
    BuildHouse,
    #[strum(serialize = "TC")]
    DrawCard,
}

impl CommandCode {
    /// Number of whitespace-separated arguments after the code.
    pub fn arity(self) -> usize {
        match self {
            CommandCode::List | CommandCode::Details => 0,
            CommandCode::Start => 4,
            CommandCode::BuildHouse => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RegisterPlayer(String),
    ListPlayers,
    StartGame([String; 4]),
    RollDice(String),
    BuyTile(String),
    ShowDetails,
    EndTurn(String),
    PayRent(String),
    BuildHouse { player: String, tile: String },
    DrawCard(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let code = parts
            .next()
            .and_then(|code| CommandCode::from_str(code).ok())
            .ok_or(CommandError::InvalidInstruction)?;
        let args: Vec<String> = parts.map(str::to_string).collect();
        if args.len() != code.arity() {
            return Err(CommandError::InvalidInstruction);
        }
        let mut args = args.into_iter();
        let mut next = || args.next().ok_or(CommandError::InvalidInstruction);

        let command = match code {
            CommandCode::Register => Command::RegisterPlayer(next()?),
            CommandCode::List => Command::ListPlayers,
            CommandCode::Start => Command::StartGame([next()?, next()?, next()?, next()?]),
            CommandCode::Roll => Command::RollDice(next()?),
            CommandCode::Buy => Command::BuyTile(next()?),
            CommandCode::Details => Command::ShowDetails,
            CommandCode::EndTurn => Command::EndTurn(next()?),
            CommandCode::PayRent => Command::PayRent(next()?),
            CommandCode::BuildHouse => Command::BuildHouse {
                player: next()?,
                tile: next()?,
            },
            CommandCode::DrawCard => Command::DrawCard(next()?),
        };
        Ok(command)
    }
}

pub fn print_command_help() {
    println!("Commands:");
    println!("{:<5} {:<25} {}", "CODE", "USAGE", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for command in CLI_COMMANDS {
        println!("{:<5} {:<25} {}", command.code, command.usage, command.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_code_with_its_arguments() {
        assert_eq!(
            "RJ Ana".parse::<Command>(),
            Ok(Command::RegisterPlayer("Ana".into()))
        );
        assert_eq!("LJ".parse::<Command>(), Ok(Command::ListPlayers));
        assert_eq!(
            "IJ A B C D".parse::<Command>(),
            Ok(Command::StartGame(["A".into(), "B".into(), "C".into(), "D".into()]))
        );
        assert_eq!(
            "CC Ana  Brown1".parse::<Command>(),
            Ok(Command::BuildHouse {
                player: "Ana".into(),
                tile: "Brown1".into()
            })
        );
        assert_eq!("TC Ana".parse::<Command>(), Ok(Command::DrawCard("Ana".into())));
    }

    #[test]
    fn wrong_arity_or_code_is_invalid() {
        for line in ["", "RJ", "RJ a b", "LJ x", "IJ A B C", "CC Ana", "XX Ana", "ld Ana"] {
            assert_eq!(
                line.parse::<Command>(),
                Err(CommandError::InvalidInstruction),
                "{line:?}"
            );
        }
    }

    #[test]
    fn help_table_covers_every_code() {
        for command in CLI_COMMANDS {
            assert!(CommandCode::from_str(command.code).is_ok(), "{}", command.code);
        }
        assert_eq!(CLI_COMMANDS.len(), 10);
    }
}
