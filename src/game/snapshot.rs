use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::coords::Coord;
use crate::types::TileKind;

use super::state::GameState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub name: String,
    pub kind: TileKind,
    pub coord: Coord,
    pub owner: Option<String>,
    pub houses: u8,
    pub occupants: SmallVec<[String; 4]>,
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub current_player: String,
    pub current_funds: i64,
    pub rest_pool: i64,
    pub turn: u32,
}

impl BoardSnapshot {
    pub fn tile_at(&self, coord: Coord) -> Option<&TileSnapshot> {
        self.tiles.get(coord.index())
    }
}

impl GameState {
    pub fn snapshot(&self) -> BoardSnapshot {
        let tiles = self
            .board
            .tiles()
            .iter()
            .map(|tile| TileSnapshot {
                name: tile.name.clone(),
                kind: tile.kind,
                coord: tile.coord,
                owner: tile.owner.map(|idx| self.players[idx].name.clone()),
                houses: tile.houses,
                occupants: self
                    .players
                    .iter()
                    .filter(|player| player.position == tile.coord)
                    .map(|player| player.name.clone())
                    .collect(),
            })
            .collect();
        let current = self.current();
        BoardSnapshot {
            tiles,
            current_player: current.name.clone(),
            current_funds: current.funds,
            rest_pool: self.pool.balance(),
            turn: self.turn,
        }
    }
}
