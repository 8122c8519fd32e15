use tracing::debug;

use crate::board::MAX_HOUSES;
use crate::types::TileKind;

use super::state::{GameError, GameEvent, GameState, StepOutcome};

/// Rent on a tile: a quarter of the price plus three quarters per house, truncated.
pub fn rent_for(price: i64, houses: u8) -> i64 {
    let price = price as f64;
    (price * 0.25 + price * 0.75 * houses as f64) as i64
}

pub fn house_price(price: i64) -> i64 {
    (price as f64 * 0.6) as i64
}

impl GameState {
    pub fn buy_current_tile(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        let player_idx = self.ensure_current_player(name)?;
        let player = &self.players[player_idx];
        let tile = self.board.tile_at(player.position);
        if !tile.kind.is_purchasable() {
            return Err(GameError::TileNotPurchasable(tile.name.clone()));
        }
        if tile.owner.is_some() {
            return Err(GameError::TileAlreadyOwned(tile.name.clone()));
        }
        if !player.can_afford(tile.price) {
            return Err(GameError::InsufficientFunds {
                available: player.funds,
                required: tile.price,
            });
        }

        let position = player.position;
        let tile = self.board.tile_at_mut(position);
        tile.owner = Some(player_idx);
        let (tile_name, price, to_pool) = (
            tile.name.clone(),
            tile.price,
            tile.kind == TileKind::LuxuryTax,
        );
        self.players[player_idx].funds -= price;
        if to_pool {
            self.pool.receive(price);
        }
        debug!(player = name, tile = %tile_name, price, "tile bought");

        Ok(StepOutcome {
            events: vec![GameEvent::TileBought {
                player: player_idx,
                tile: tile_name,
                price,
                to_pool,
            }],
        })
    }

    pub fn pay_rent(&mut self, name: &str) -> Result<StepOutcome, GameError> {
        let player_idx = self.ensure_current_player(name)?;
        let player = &self.players[player_idx];
        if !player.needs_to_pay_rent {
            return Err(GameError::InvalidStateForOperation("no rent is owed"));
        }
        let tile = self.board.tile_at(player.position);
        let owner = tile
            .owner
            .ok_or(GameError::InvalidStateForOperation("tile has no owner"))?;
        let rent = rent_for(tile.price, tile.houses);
        if !player.can_afford(rent) {
            return Err(GameError::InsufficientFunds {
                available: player.funds,
                required: rent,
            });
        }

        self.players[player_idx].funds -= rent;
        self.players[owner].credit(rent);
        self.players[player_idx].needs_to_pay_rent = false;
        debug!(player = name, owner = %self.players[owner].name, rent, "rent paid");

        Ok(StepOutcome {
            events: vec![GameEvent::RentPaid {
                player: player_idx,
                owner,
                amount: rent,
            }],
        })
    }

    pub fn build_house(&mut self, name: &str, tile_name: &str) -> Result<StepOutcome, GameError> {
        let player_idx = self.ensure_current_player(name)?;
        let tile = self
            .board
            .find(tile_name)
            .ok_or_else(|| GameError::TileNotFound(tile_name.to_string()))?;
        if !tile.is_owned_by(player_idx) {
            return Err(GameError::NotOwner(tile.name.clone()));
        }
        let color = tile
            .color
            .ok_or_else(|| GameError::MissingColorGroupOrMonopoly(tile.name.clone()))?;
        if !self.board.owns_color_group(player_idx, color) {
            return Err(GameError::MissingColorGroupOrMonopoly(tile.name.clone()));
        }
        if tile.houses >= MAX_HOUSES {
            return Err(GameError::HouseLimitReached(tile.name.clone()));
        }
        let price = house_price(tile.price);
        let player = &self.players[player_idx];
        if !player.can_afford(price) {
            return Err(GameError::InsufficientFunds {
                available: player.funds,
                required: price,
            });
        }

        let coord = tile.coord;
        let tile = self.board.tile_at_mut(coord);
        tile.houses += 1;
        let houses = tile.houses;
        let tile_name = tile.name.clone();
        self.players[player_idx].funds -= price;
        debug!(player = name, tile = %tile_name, houses, "house built");

        Ok(StepOutcome {
            events: vec![GameEvent::HouseBuilt {
                player: player_idx,
                tile: tile_name,
                houses,
                price,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_scales_with_houses() {
        assert_eq!(rent_for(100, 0), 25);
        assert_eq!(rent_for(100, 2), 175);
        assert_eq!(rent_for(130, 0), 32);
        assert_eq!(rent_for(190, 4), 617);
    }

    #[test]
    fn house_price_is_sixty_percent_truncated() {
        assert_eq!(house_price(100), 60);
        assert_eq!(house_price(90), 54);
        assert_eq!(house_price(110), 66);
        assert_eq!(house_price(0), 0);
    }
}
