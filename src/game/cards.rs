use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{FREE_REST, ORIGIN};
use crate::coords::Coord;
use crate::types::CardDeck;

use super::state::{GameError, GameEvent, GameState, PrisonReason, StepOutcome};

pub const CARD_ROLL_MAX: u8 = 100;

/// Community teleport targets.
pub const PINK1: Coord = Coord::new(0, 5);
pub const TEAL2: Coord = Coord::new(4, 3);
pub const WHITE2: Coord = Coord::new(6, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    Gain(i64),
    /// Paid into the rest pool.
    Pay(i64),
    AdvanceToOrigin { bonus: i64 },
    GoToPrison,
    AdvanceToRest,
    /// Paid into the rest pool for every house the player owns.
    PayPerHouse(i64),
    CollectFromEachPlayer(i64),
    Teleport(Coord),
}

/// `(ceiling, effect)` bands; a roll picks the first band whose ceiling is at least the roll.
pub type CardTable = &'static [(u8, CardEffect)];

pub const CHANCE_TABLE: CardTable = &[
    (20, CardEffect::Gain(150)),
    (30, CardEffect::Gain(200)),
    (40, CardEffect::Pay(70)),
    (60, CardEffect::AdvanceToOrigin { bonus: 200 }),
    (80, CardEffect::GoToPrison),
    (100, CardEffect::AdvanceToRest),
];

pub const COMMUNITY_TABLE: CardTable = &[
    (10, CardEffect::PayPerHouse(20)),
    (20, CardEffect::CollectFromEachPlayer(10)),
    (40, CardEffect::Gain(100)),
    (60, CardEffect::Gain(170)),
    (70, CardEffect::Pay(40)),
    (80, CardEffect::Teleport(PINK1)),
    (90, CardEffect::Teleport(TEAL2)),
    (100, CardEffect::Teleport(WHITE2)),
];

pub fn table(deck: CardDeck) -> CardTable {
    match deck {
        CardDeck::Chance => CHANCE_TABLE,
        CardDeck::Community => COMMUNITY_TABLE,
    }
}

pub fn card_for(deck: CardDeck, roll: u8) -> Option<CardEffect> {
    if roll == 0 {
        return None;
    }
    table(deck)
        .iter()
        .find(|(ceiling, _)| roll <= *ceiling)
        .map(|(_, effect)| *effect)
}

impl GameState {
    fn ensure_can_draw(&self, name: &str) -> Result<(usize, CardDeck), GameError> {
        let player_idx = self.ensure_current_player(name)?;
        let player = &self.players[player_idx];
        if player.has_drawn_card {
            return Err(GameError::InvalidStateForOperation("card already drawn"));
        }
        let tile = self.board.tile_at(player.position);
        let deck = tile
            .kind
            .card_deck()
            .ok_or_else(|| GameError::WrongTileKindForCardDraw(tile.name.clone()))?;
        Ok((player_idx, deck))
    }

    pub fn draw_card(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        let (player_idx, deck) = self.ensure_can_draw(name)?;
        let roll = self.rng.gen_range(1..=CARD_ROLL_MAX);
        let effect = card_for(deck, roll)
            .ok_or(GameError::InvalidPayload("card roll outside 1..=100"))?;
        Ok(self.resolve_card(player_idx, deck, roll, effect))
    }

    /// Same as [`GameState::draw_card`] with the 1..=100 roll supplied by the caller.
    pub fn draw_card_with(&mut self, name: &str, roll: u8) -> Result<StepOutcome, GameError> {
        let (player_idx, deck) = self.ensure_can_draw(name)?;
        let effect = card_for(deck, roll)
            .ok_or(GameError::InvalidPayload("card roll outside 1..=100"))?;
        Ok(self.resolve_card(player_idx, deck, roll, effect))
    }

    fn resolve_card(
        &mut self,
        player_idx: usize,
        deck: CardDeck,
        roll: u8,
        effect: CardEffect,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let player = &mut self.players[player_idx];
        player.has_drawn_card = true;
        player.needs_to_draw_card = false;
        debug!(player = %player.name, %deck, roll, ?effect, "card drawn");
        outcome.events.push(GameEvent::CardDrawn {
            player: player_idx,
            deck,
            roll,
            effect,
        });
        self.apply_card_effect(player_idx, effect, &mut outcome);
        outcome
    }

    fn apply_card_effect(&mut self, player_idx: usize, effect: CardEffect, outcome: &mut StepOutcome) {
        match effect {
            CardEffect::Gain(amount) => self.gain(player_idx, amount, outcome),
            CardEffect::Pay(amount) => self.pay_to_pool(player_idx, amount, outcome),
            CardEffect::AdvanceToOrigin { bonus } => {
                self.teleport(player_idx, ORIGIN, outcome);
                self.gain(player_idx, bonus, outcome);
            }
            CardEffect::GoToPrison => {
                self.players[player_idx].send_to_prison();
                outcome.events.push(GameEvent::Imprisoned {
                    player: player_idx,
                    reason: PrisonReason::ChanceCard,
                });
            }
            CardEffect::AdvanceToRest => {
                self.teleport(player_idx, FREE_REST, outcome);
                let amount = self.pool.collect();
                self.players[player_idx].credit(amount);
                outcome.events.push(GameEvent::RestCollected {
                    player: player_idx,
                    amount,
                });
            }
            CardEffect::PayPerHouse(per_house) => {
                let houses = self.board.houses_owned_by(player_idx) as i64;
                self.pay_to_pool(player_idx, houses * per_house, outcome);
            }
            CardEffect::CollectFromEachPlayer(amount) => {
                let mut total = 0;
                for (idx, other) in self.players.iter_mut().enumerate() {
                    if idx == player_idx {
                        continue;
                    }
                    other.charge(amount);
                    total += amount;
                    outcome.events.push(GameEvent::FundsPaid {
                        player: idx,
                        amount,
                        insolvent: other.is_insolvent(),
                    });
                }
                self.gain(player_idx, total, outcome);
            }
            CardEffect::Teleport(coord) => self.teleport(player_idx, coord, outcome),
        }
    }

    fn gain(&mut self, player_idx: usize, amount: i64, outcome: &mut StepOutcome) {
        self.players[player_idx].credit(amount);
        outcome.events.push(GameEvent::FundsReceived {
            player: player_idx,
            amount,
        });
    }

    fn pay_to_pool(&mut self, player_idx: usize, amount: i64, outcome: &mut StepOutcome) {
        let player = &mut self.players[player_idx];
        player.charge(amount);
        self.pool.receive(amount);
        outcome.events.push(GameEvent::FundsPaid {
            player: player_idx,
            amount,
            insolvent: player.is_insolvent(),
        });
    }

    fn teleport(&mut self, player_idx: usize, coord: Coord, outcome: &mut StepOutcome) {
        self.players[player_idx].teleport(coord);
        outcome.events.push(GameEvent::Teleported {
            player: player_idx,
            to: coord,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    use super::*;

    #[test]
    fn bands_end_at_one_hundred_and_ascend() {
        for deck in [CardDeck::Chance, CardDeck::Community] {
            let bands = table(deck);
            assert_eq!(bands.last().map(|(c, _)| *c), Some(CARD_ROLL_MAX));
            assert!(bands.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }

    #[test]
    fn chance_band_boundaries() {
        assert_eq!(card_for(CardDeck::Chance, 1), Some(CardEffect::Gain(150)));
        assert_eq!(card_for(CardDeck::Chance, 20), Some(CardEffect::Gain(150)));
        assert_eq!(card_for(CardDeck::Chance, 21), Some(CardEffect::Gain(200)));
        assert_eq!(card_for(CardDeck::Chance, 40), Some(CardEffect::Pay(70)));
        assert_eq!(card_for(CardDeck::Chance, 80), Some(CardEffect::GoToPrison));
        assert_eq!(card_for(CardDeck::Chance, 81), Some(CardEffect::AdvanceToRest));
        assert_eq!(card_for(CardDeck::Chance, 0), None);
        assert_eq!(card_for(CardDeck::Chance, 101), None);
    }

    #[test]
    fn community_teleports_land_on_named_tiles() {
        let board = Board::standard();
        assert_eq!(board.coord_of("Pink1"), Some(PINK1));
        assert_eq!(board.coord_of("Teal2"), Some(TEAL2));
        assert_eq!(board.coord_of("White2"), Some(WHITE2));
        assert_eq!(card_for(CardDeck::Community, 100), Some(CardEffect::Teleport(WHITE2)));
    }
}
