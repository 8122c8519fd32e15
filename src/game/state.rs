use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    board::{Board, ORIGIN},
    coords::Coord,
    types::{ActionType, CardDeck, TileKind},
};

use super::{
    action::{ActionPayload, GameAction},
    bank::RestPool,
    cards::CardEffect,
    dice::{is_valid_die, roll_die},
    economy::rent_for,
    players::{MAX_TURNS_IN_PRISON, PlayerState, STARTING_FUNDS},
};

pub const NUM_PLAYERS: usize = 4;
pub const ORIGIN_BONUS: i64 = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: u64,
    pub starting_funds: i64,
    pub origin_bonus: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_funds: STARTING_FUNDS,
            origin_bonus: ORIGIN_BONUS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub events: Vec<GameEvent>,
}

impl StepOutcome {
    fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrisonReason {
    ConsecutiveDoubles,
    SendToPrisonTile,
    ChanceCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DiceRolled {
        player: usize,
        dice: (i32, i32),
    },
    StillImprisoned {
        player: usize,
        turns_in_prison: u8,
    },
    ReleasedFromPrison {
        player: usize,
    },
    Moved {
        player: usize,
        to: Coord,
    },
    Imprisoned {
        player: usize,
        reason: PrisonReason,
    },
    VisitedPrison {
        player: usize,
    },
    Teleported {
        player: usize,
        to: Coord,
    },
    RestCollected {
        player: usize,
        amount: i64,
    },
    CardRequired {
        player: usize,
        deck: CardDeck,
    },
    OriginBonus {
        player: usize,
        amount: i64,
    },
    UnownedTile {
        player: usize,
    },
    OwnTile {
        player: usize,
    },
    RentOwed {
        player: usize,
        owner: usize,
        amount: i64,
    },
    ExtraRollGranted {
        player: usize,
    },
    TileBought {
        player: usize,
        tile: String,
        price: i64,
        to_pool: bool,
    },
    RentPaid {
        player: usize,
        owner: usize,
        amount: i64,
    },
    HouseBuilt {
        player: usize,
        tile: String,
        houses: u8,
        price: i64,
    },
    CardDrawn {
        player: usize,
        deck: CardDeck,
        roll: u8,
        effect: CardEffect,
    },
    FundsReceived {
        player: usize,
        amount: i64,
    },
    FundsPaid {
        player: usize,
        amount: i64,
        insolvent: bool,
    },
    TurnAdvanced {
        next_player: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player {0} is not part of this game")]
    PlayerNotFound(String),
    #[error("action by {actual} but it is {expected}'s turn")]
    NotCurrentPlayer { expected: String, actual: String },
    #[error("action not allowed now: {0}")]
    InvalidStateForOperation(&'static str),
    #[error("tile {0} is not for sale")]
    TileNotPurchasable(String),
    #[error("tile {0} already has an owner")]
    TileAlreadyOwned(String),
    #[error("insufficient funds: have {available}, need {required}")]
    InsufficientFunds { available: i64, required: i64 },
    #[error("no tile named {0}")]
    TileNotFound(String),
    #[error("tile {0} is not owned by the acting player")]
    NotOwner(String),
    #[error("tile {0} has no color group or the group is not wholly owned")]
    MissingColorGroupOrMonopoly(String),
    #[error("tile {0} already has the maximum number of houses")]
    HouseLimitReached(String),
    #[error("cards can only be drawn on chance or community tiles, not {0}")]
    WrongTileKindForCardDraw(String),
    #[error("a game needs exactly {NUM_PLAYERS} players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("player {0} appears more than once")]
    DuplicatePlayer(String),
    #[error("missing or invalid payload: {0}")]
    InvalidPayload(&'static str),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<PlayerState>,
    pub current_player: usize,
    pub turn: u32,
    pub pool: RestPool,
    pub last_roll: Option<(i32, i32)>,
    pub actions: Vec<GameAction>,
    pub(crate) rng: StdRng,
}

impl GameState {
    pub fn new<S: AsRef<str>>(config: GameConfig, names: &[S]) -> Result<Self, GameError> {
        if names.len() != NUM_PLAYERS {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_ref()) {
                return Err(GameError::DuplicatePlayer(name.as_ref().to_string()));
            }
        }

        let players = names
            .iter()
            .map(|name| PlayerState::with_funds(name.as_ref(), config.starting_funds))
            .collect();
        info!(seed = config.seed, "starting session");
        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            board: Board::standard(),
            players,
            current_player: 0,
            turn: 0,
            pool: RestPool::new(),
            last_roll: None,
            actions: Vec::new(),
        })
    }

    /// Returns every player to starting funds and position on a fresh board.
    pub fn reset(&mut self) {
        let funds = self.config.starting_funds;
        for player in &mut self.players {
            player.reset(funds);
        }
        self.board = Board::standard();
        self.current_player = 0;
        self.turn = 0;
        self.pool = RestPool::new();
        self.last_roll = None;
        self.actions.clear();
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    pub fn step(&mut self, action: GameAction) -> Result<StepOutcome, GameError> {
        let player = action.player.as_str();
        let outcome = match (action.action_type, &action.payload) {
            (ActionType::Roll, ActionPayload::None) => self.roll_dice(player)?,
            (ActionType::Roll, ActionPayload::Dice(d1, d2)) => {
                self.roll_dice_with(player, *d1, *d2)?
            }
            (ActionType::Roll, _) => return Err(GameError::InvalidPayload("expected dice")),
            (ActionType::BuyTile, _) => self.buy_current_tile(player)?,
            (ActionType::PayRent, _) => self.pay_rent(player)?,
            (ActionType::BuildHouse, ActionPayload::Tile(tile)) => {
                self.build_house(player, tile)?
            }
            (ActionType::BuildHouse, _) => {
                return Err(GameError::InvalidPayload("expected tile name"));
            }
            (ActionType::DrawCard, ActionPayload::None) => self.draw_card(player)?,
            (ActionType::DrawCard, ActionPayload::CardRoll(roll)) => {
                self.draw_card_with(player, *roll)?
            }
            (ActionType::DrawCard, _) => {
                return Err(GameError::InvalidPayload("expected card roll"));
            }
            (ActionType::EndTurn, _) => self.end_turn(player)?,
        };
        self.actions.push(action);
        Ok(outcome)
    }

    pub fn player_index(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|player| player.name == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    pub fn player(&self, name: &str) -> Result<&PlayerState, GameError> {
        self.player_index(name).map(|idx| &self.players[idx])
    }

    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    pub(crate) fn ensure_current_player(&self, name: &str) -> Result<usize, GameError> {
        let idx = self.player_index(name)?;
        if idx != self.current_player {
            return Err(GameError::NotCurrentPlayer {
                expected: self.current().name.clone(),
                actual: name.to_string(),
            });
        }
        Ok(idx)
    }

    fn ensure_can_roll(&self, name: &str) -> Result<usize, GameError> {
        let idx = self.ensure_current_player(name)?;
        let player = &self.players[idx];
        if player.has_pending_obligation() {
            return Err(GameError::InvalidStateForOperation(
                "rent or a card draw is pending",
            ));
        }
        if !player.can_roll() {
            return Err(GameError::InvalidStateForOperation("dice already rolled"));
        }
        Ok(idx)
    }

    pub fn roll_dice(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        let player_idx = self.ensure_can_roll(name)?;
        let dice = (roll_die(&mut self.rng), roll_die(&mut self.rng));
        Ok(self.resolve_roll(player_idx, dice))
    }

    /// Same as [`GameState::roll_dice`] with both dice supplied by the caller.
    pub fn roll_dice_with(&mut self, name: &str, d1: i32, d2: i32) -> Result<StepOutcome, GameError> {
        let player_idx = self.ensure_can_roll(name)?;
        if !is_valid_die(d1) || !is_valid_die(d2) {
            return Err(GameError::InvalidPayload("dice must be one of -3..-1 or 1..3"));
        }
        Ok(self.resolve_roll(player_idx, (d1, d2)))
    }

    fn resolve_roll(&mut self, player_idx: usize, (d1, d2): (i32, i32)) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let is_double = d1 == d2;
        self.last_roll = Some((d1, d2));
        outcome.push(GameEvent::DiceRolled {
            player: player_idx,
            dice: (d1, d2),
        });

        let player = &mut self.players[player_idx];
        player.has_rolled = true;
        player.must_roll_again = false;

        if player.in_prison {
            player.turns_in_prison = player.turns_in_prison.saturating_add(1);
            if is_double || player.turns_in_prison >= MAX_TURNS_IN_PRISON {
                player.release_from_prison();
                debug!(player = %player.name, "released from prison");
                outcome.push(GameEvent::ReleasedFromPrison { player: player_idx });
            } else {
                outcome.push(GameEvent::StillImprisoned {
                    player: player_idx,
                    turns_in_prison: player.turns_in_prison,
                });
                return outcome;
            }
        }

        let destination = player.position.offset(d1, d2);
        player.position = destination;
        debug!(player = %player.name, d1, d2, x = destination.x, y = destination.y, "moved");

        if is_double {
            player.consecutive_doubles += 1;
            if player.consecutive_doubles >= 2 {
                player.send_to_prison();
                outcome.push(GameEvent::Imprisoned {
                    player: player_idx,
                    reason: PrisonReason::ConsecutiveDoubles,
                });
                return outcome;
            }
            player.must_roll_again = true;
        } else {
            player.consecutive_doubles = 0;
        }

        outcome.push(GameEvent::Moved {
            player: player_idx,
            to: destination,
        });
        self.resolve_landing(player_idx, &mut outcome);

        if self.players[player_idx].must_roll_again {
            outcome.push(GameEvent::ExtraRollGranted { player: player_idx });
        }
        outcome
    }

    fn resolve_landing(&mut self, player_idx: usize, outcome: &mut StepOutcome) {
        let tile = self.board.tile_at(self.players[player_idx].position);
        let (kind, owner, price, houses) = (tile.kind, tile.owner, tile.price, tile.houses);
        let player = &mut self.players[player_idx];

        match kind {
            TileKind::ReturnToOrigin => {
                player.teleport(ORIGIN);
                outcome.push(GameEvent::Teleported {
                    player: player_idx,
                    to: ORIGIN,
                });
            }
            TileKind::SendToPrison => {
                player.send_to_prison();
                outcome.push(GameEvent::Imprisoned {
                    player: player_idx,
                    reason: PrisonReason::SendToPrisonTile,
                });
            }
            TileKind::Prison => outcome.push(GameEvent::VisitedPrison { player: player_idx }),
            TileKind::FreeRest => {
                let amount = self.pool.collect();
                player.credit(amount);
                outcome.push(GameEvent::RestCollected {
                    player: player_idx,
                    amount,
                });
            }
            TileKind::Chance | TileKind::Community => {
                player.needs_to_draw_card = true;
                player.has_drawn_card = false;
                let deck = if kind == TileKind::Chance {
                    CardDeck::Chance
                } else {
                    CardDeck::Community
                };
                outcome.push(GameEvent::CardRequired {
                    player: player_idx,
                    deck,
                });
            }
            TileKind::Origin => {
                let amount = self.config.origin_bonus;
                player.credit(amount);
                outcome.push(GameEvent::OriginBonus {
                    player: player_idx,
                    amount,
                });
            }
            TileKind::OrdinaryProperty
            | TileKind::TransitHub
            | TileKind::Utility
            | TileKind::LuxuryTax => match owner {
                None => outcome.push(GameEvent::UnownedTile { player: player_idx }),
                Some(owner) if owner == player_idx => {
                    outcome.push(GameEvent::OwnTile { player: player_idx })
                }
                Some(owner) => {
                    player.needs_to_pay_rent = true;
                    outcome.push(GameEvent::RentOwed {
                        player: player_idx,
                        owner,
                        amount: rent_for(price, houses),
                    });
                }
            },
        }
    }

    pub fn end_turn(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        let player_idx = self.ensure_current_player(name)?;
        let player = &mut self.players[player_idx];
        if !player.has_rolled {
            return Err(GameError::InvalidStateForOperation("dice not rolled yet"));
        }
        if player.has_pending_obligation() {
            return Err(GameError::InvalidStateForOperation(
                "rent or a card draw is pending",
            ));
        }
        if player.must_roll_again {
            return Err(GameError::InvalidStateForOperation("an extra roll is owed"));
        }
        player.reset_for_new_turn();

        self.current_player = (self.current_player + 1) % self.players.len();
        self.turn += 1;
        info!(turn = self.turn, next = %self.current().name, "turn advanced");
        let mut outcome = StepOutcome::default();
        outcome.push(GameEvent::TurnAdvanced {
            next_player: self.current_player,
        });
        Ok(outcome)
    }
}
