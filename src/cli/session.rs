use tracing::{debug, warn};

use crate::board::Board;
use crate::game::cards::CardEffect;
use crate::game::{Game, GameConfig, GameError, GameEvent, PrisonReason, StepOutcome};
use crate::registry::{PlayerRegistry, RegistryError};

use super::board_display::render_board_to_string;
use super::{Command, CommandError};

/// Owns the registry and the running game; turns text commands into output lines.
pub struct CommandProcessor {
    pub registry: PlayerRegistry,
    pub game: Option<Game>,
    config: GameConfig,
    games_started: u64,
    json: bool,
}

impl CommandProcessor {
    pub fn new(config: GameConfig) -> Self {
        Self {
            registry: PlayerRegistry::new(),
            game: None,
            config,
            games_started: 0,
            json: false,
        }
    }

    /// Print `DJ` snapshots as JSON instead of the text grid.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn execute(&mut self, line: &str) -> Vec<String> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => return vec![error_message(None, &err)],
        };
        debug!(?command, "executing");
        match self.run(&command) {
            Ok(lines) => lines,
            Err(err) => {
                if let CommandError::Render(reason) = &err {
                    warn!(%reason, "snapshot rendering failed");
                }
                vec![error_message(Some(&command), &err)]
            }
        }
    }

    fn game_mut(&mut self) -> Result<&mut Game, CommandError> {
        self.game.as_mut().ok_or(CommandError::NoGameInProgress)
    }

    pub fn run(&mut self, command: &Command) -> Result<Vec<String>, CommandError> {
        match command {
            Command::RegisterPlayer(name) => {
                self.registry.register(name)?;
                Ok(vec!["Player registered successfully.".into()])
            }
            Command::ListPlayers => {
                if self.registry.is_empty() {
                    return Ok(vec!["No players registered.".into()]);
                }
                Ok(self
                    .registry
                    .ranked()
                    .into_iter()
                    .map(|p| {
                        format!(
                            "{} {} {} {} {}",
                            p.name, p.games_played, p.wins, p.draws, p.losses
                        )
                    })
                    .collect())
            }
            Command::StartGame(names) => {
                if self.game.is_some() {
                    return Err(CommandError::GameInProgress);
                }
                self.registry.ensure_registered(names)?;
                let config = GameConfig {
                    seed: self.config.seed.wrapping_add(self.games_started),
                    ..self.config.clone()
                };
                self.game = Some(Game::new(config, names)?);
                self.games_started += 1;
                Ok(vec!["Game started successfully.".into()])
            }
            Command::ShowDetails => {
                let json = self.json;
                let snapshot = self.game_mut()?.snapshot();
                if json {
                    let rendered = serde_json::to_string_pretty(&snapshot)
                        .map_err(|err| CommandError::Render(err.to_string()))?;
                    Ok(vec![rendered])
                } else {
                    Ok(vec![String::new(), render_board_to_string(&snapshot), String::new()])
                }
            }
            Command::RollDice(player) => {
                let game = self.game_mut()?;
                let outcome = game.state.roll_dice(player)?;
                Ok(vec![describe_roll(&game.state.board, &outcome)])
            }
            Command::BuyTile(player) => {
                self.game_mut()?.state.buy_current_tile(player)?;
                Ok(vec!["Tile bought.".into()])
            }
            Command::PayRent(player) => {
                self.game_mut()?.state.pay_rent(player)?;
                Ok(vec!["Rent paid.".into()])
            }
            Command::BuildHouse { player, tile } => {
                self.game_mut()?.state.build_house(player, tile)?;
                Ok(vec!["House built.".into()])
            }
            Command::DrawCard(player) => {
                let game = self.game_mut()?;
                let outcome = game.state.draw_card(player)?;
                Ok(vec![describe_card(&game.state.board, &outcome)])
            }
            Command::EndTurn(player) => {
                let game = self.game_mut()?;
                game.state.end_turn(player)?;
                Ok(vec![format!(
                    "Turn ended. Next turn: {}.",
                    game.state.current().name
                )])
            }
        }
    }
}

fn error_message(command: Option<&Command>, err: &CommandError) -> String {
    let text = match err {
        CommandError::InvalidInstruction | CommandError::Render(_) => "Invalid instruction.",
        CommandError::NoGameInProgress => "No game in progress.",
        CommandError::GameInProgress => "A game is already in progress.",
        CommandError::Registry(RegistryError::PlayerExists(_)) => "Player already exists.",
        CommandError::Registry(RegistryError::PlayerMissing(_)) => "Player does not exist.",
        CommandError::Game(err) => return game_error_message(command, err),
    };
    text.to_string()
}

fn game_error_message(command: Option<&Command>, err: &GameError) -> String {
    let text = match err {
        GameError::PlayerNotFound(_) => "Player is not part of the current game.",
        GameError::NotCurrentPlayer { .. } => "It is not the player's turn.",
        GameError::InvalidStateForOperation(_) => match command {
            Some(Command::PayRent(_)) => "No rent is owed.",
            Some(Command::DrawCard(_)) => "The card has already been drawn.",
            Some(Command::RollDice(_)) => "The player cannot roll the dice now.",
            _ => "The player still has actions to take.",
        },
        GameError::TileNotPurchasable(_) => "This tile is not for sale.",
        GameError::TileAlreadyOwned(_) => "The tile is already owned.",
        GameError::InsufficientFunds { .. } => "The player does not have enough money.",
        GameError::TileNotFound(_) | GameError::NotOwner(_) | GameError::HouseLimitReached(_) => {
            "A house cannot be built on that tile."
        }
        GameError::MissingColorGroupOrMonopoly(_) => {
            "The player does not own every tile of that color."
        }
        GameError::WrongTileKindForCardDraw(_) => "A card cannot be drawn on this tile.",
        GameError::InvalidPlayerCount(_)
        | GameError::DuplicatePlayer(_)
        | GameError::InvalidPayload(_) => "Invalid instruction.",
    };
    text.to_string()
}

fn describe_roll(board: &Board, outcome: &StepOutcome) -> String {
    let mut dice = (0, 0);
    let mut tile = String::new();
    let mut detail = String::new();
    let mut extra_roll = false;

    for event in &outcome.events {
        match event {
            GameEvent::DiceRolled { dice: rolled, .. } => dice = *rolled,
            GameEvent::StillImprisoned { .. } => {
                tile = "Prison".into();
                detail = "Player is imprisoned.".into();
            }
            GameEvent::Moved { to, .. } => tile = board.tile_at(*to).name.clone(),
            GameEvent::Imprisoned { reason, .. } => {
                if *reason == PrisonReason::ConsecutiveDoubles {
                    tile = "Police".into();
                }
                detail = "Player is imprisoned.".into();
            }
            GameEvent::Teleported { to, .. } => {
                detail = format!("Piece placed on {}.", board.tile_at(*to).name);
            }
            GameEvent::VisitedPrison { .. } => detail = "Just visiting.".into(),
            GameEvent::RestCollected { amount, .. } | GameEvent::OriginBonus { amount, .. } => {
                detail = format!("Player receives {amount}.");
            }
            GameEvent::CardRequired { .. } => detail = "Special tile, draw a card.".into(),
            GameEvent::UnownedTile { .. } => detail = "Tile has no owner.".into(),
            GameEvent::OwnTile { .. } => detail = "Tile already owned by the player.".into(),
            GameEvent::RentOwed { amount, .. } => {
                detail = format!("Tile owned by another player. Rent of {amount} is due.");
            }
            GameEvent::ExtraRollGranted { .. } => extra_roll = true,
            _ => {}
        }
    }

    let mut line = format!("Rolled {}/{} - {} tile. {}", dice.0, dice.1, tile, detail);
    if extra_roll {
        line.push_str(" Roll again.");
    }
    line.trim_end().to_string()
}

fn describe_card(board: &Board, outcome: &StepOutcome) -> String {
    let Some(effect) = outcome.events.iter().find_map(|event| match event {
        GameEvent::CardDrawn { effect, .. } => Some(*effect),
        _ => None,
    }) else {
        return String::new();
    };
    match effect {
        CardEffect::Gain(amount) => format!("The player receives {amount}."),
        CardEffect::Pay(amount) => format!("The player has to pay {amount}."),
        CardEffect::AdvanceToOrigin { .. } => "The player moves to Start.".into(),
        CardEffect::GoToPrison => "The player moves to Police.".into(),
        CardEffect::AdvanceToRest => "The player moves to FreePark.".into(),
        CardEffect::PayPerHouse(per_house) => {
            let paid = outcome
                .events
                .iter()
                .find_map(|event| match event {
                    GameEvent::FundsPaid { amount, .. } => Some(*amount),
                    _ => None,
                })
                .unwrap_or(0);
            format!("The player pays {paid} for their houses ({per_house} each).")
        }
        CardEffect::CollectFromEachPlayer(_) => {
            let total = outcome
                .events
                .iter()
                .rev()
                .find_map(|event| match event {
                    GameEvent::FundsReceived { amount, .. } => Some(*amount),
                    _ => None,
                })
                .unwrap_or(0);
            format!("The player receives {total} from the other players.")
        }
        CardEffect::Teleport(coord) => {
            format!("The player moves to {}.", board.tile_at(coord).name)
        }
    }
}
