use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::coords::{BOARD_SIZE, Coord};
use crate::types::{ColorGroup, TileKind};

pub const MAX_HOUSES: u8 = 4;

pub const ORIGIN: Coord = Coord::new(3, 3);
pub const PRISON: Coord = Coord::new(0, 0);
pub const FREE_REST: Coord = Coord::new(0, 6);

#[derive(Debug, Clone, Copy)]
pub struct TileTemplate {
    pub name: &'static str,
    pub kind: TileKind,
    pub price: i64,
    pub color: Option<ColorGroup>,
}

const fn special(name: &'static str, kind: TileKind) -> TileTemplate {
    TileTemplate {
        name,
        kind,
        price: 0,
        color: None,
    }
}

const fn priced(name: &'static str, kind: TileKind, price: i64) -> TileTemplate {
    TileTemplate {
        name,
        kind,
        price,
        color: None,
    }
}

const fn property(name: &'static str, price: i64, color: ColorGroup) -> TileTemplate {
    TileTemplate {
        name,
        kind: TileKind::OrdinaryProperty,
        price,
        color: Some(color),
    }
}

/// Row-major layout: entry `y * 7 + x` is the tile at `(x, y)`.
pub static LAYOUT: Lazy<Vec<TileTemplate>> = Lazy::new(|| {
    use ColorGroup::*;
    use TileKind::*;
    vec![
        // y = 0
        special("Prison", Prison),
        property("Green3", 160, Green),
        property("Violet1", 150, Violet),
        priced("Train2", TransitHub, 150),
        property("Red3", 160, Red),
        property("White1", 160, White),
        special("BackToStart", ReturnToOrigin),
        // y = 1
        property("Blue3", 170, Blue),
        special("Community1", Community),
        property("Red2", 130, Red),
        property("Violet2", 130, Violet),
        priced("WaterWorks", Utility, 120),
        special("Chance1", Chance),
        property("White2", 180, White),
        // y = 2
        property("Blue2", 140, Blue),
        property("Red1", 130, Red),
        special("Chance2", Chance),
        property("Brown2", 120, Brown),
        special("Community2", Community),
        property("Black1", 110, Black),
        priced("LuxTax", LuxuryTax, 80),
        // y = 3
        priced("Train1", TransitHub, 150),
        property("Green2", 140, Green),
        property("Teal1", 90, Teal),
        special("Start", Origin),
        property("Teal2", 130, Teal),
        property("Black2", 120, Black),
        priced("Train3", TransitHub, 150),
        // y = 4
        property("Blue1", 140, Blue),
        property("Green1", 120, Green),
        special("Community3", Community),
        property("Brown1", 100, Brown),
        special("Chance3", Chance),
        property("Black3", 130, Black),
        property("White3", 190, White),
        // y = 5
        property("Pink1", 160, Pink),
        special("Chance4", Chance),
        property("Orange1", 120, Orange),
        property("Orange2", 120, Orange),
        property("Orange3", 140, Orange),
        special("Community4", Community),
        property("Yellow3", 170, Yellow),
        // y = 6
        special("FreePark", FreeRest),
        property("Pink2", 180, Pink),
        priced("ElectricCompany", Utility, 120),
        priced("Train4", TransitHub, 150),
        property("Yellow1", 140, Yellow),
        property("Yellow2", 140, Yellow),
        special("Police", SendToPrison),
    ]
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub kind: TileKind,
    pub price: i64,
    pub color: Option<ColorGroup>,
    pub coord: Coord,
    pub owner: Option<usize>,
    pub houses: u8,
}

impl Tile {
    fn from_template(template: &TileTemplate, coord: Coord) -> Self {
        Self {
            name: template.name.to_string(),
            kind: template.kind,
            price: template.price,
            color: template.color,
            coord,
            owner: None,
            houses: 0,
        }
    }

    pub fn is_owned_by(&self, player_idx: usize) -> bool {
        self.owner == Some(player_idx)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    by_name: HashMap<String, usize>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn standard() -> Self {
        let tiles: Vec<Tile> = LAYOUT
            .iter()
            .enumerate()
            .map(|(idx, template)| Tile::from_template(template, Coord::from_index(idx)))
            .collect();
        debug_assert_eq!(tiles.len(), (BOARD_SIZE * BOARD_SIZE) as usize);
        let by_name = tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (tile.name.clone(), idx))
            .collect();
        Self { tiles, by_name }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_at(&self, coord: Coord) -> &Tile {
        &self.tiles[coord.index()]
    }

    pub fn tile_at_mut(&mut self, coord: Coord) -> &mut Tile {
        &mut self.tiles[coord.index()]
    }

    pub fn find(&self, name: &str) -> Option<&Tile> {
        self.by_name.get(name).map(|&idx| &self.tiles[idx])
    }

    pub fn coord_of(&self, name: &str) -> Option<Coord> {
        self.find(name).map(|tile| tile.coord)
    }

    pub fn color_group(&self, color: ColorGroup) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.color == Some(color))
    }

    /// True when `player_idx` owns every tile of `color`.
    pub fn owns_color_group(&self, player_idx: usize, color: ColorGroup) -> bool {
        self.color_group(color).all(|tile| tile.is_owned_by(player_idx))
    }

    pub fn houses_owned_by(&self, player_idx: usize) -> u32 {
        self.tiles
            .iter()
            .filter(|tile| tile.is_owned_by(player_idx))
            .map(|tile| tile.houses as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn layout_has_every_cell_with_unique_names() {
        let board = Board::standard();
        assert_eq!(board.tiles().len(), 49);
        let names: HashSet<_> = board.tiles().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), 49);
    }

    #[test]
    fn kind_counts_match_layout() {
        let board = Board::standard();
        let count = |kind| board.tiles().iter().filter(|t| t.kind == kind).count();
        assert_eq!(count(TileKind::TransitHub), 4);
        assert_eq!(count(TileKind::Utility), 2);
        assert_eq!(count(TileKind::Chance), 4);
        assert_eq!(count(TileKind::Community), 4);
        for kind in [
            TileKind::Prison,
            TileKind::SendToPrison,
            TileKind::FreeRest,
            TileKind::ReturnToOrigin,
            TileKind::LuxuryTax,
            TileKind::Origin,
        ] {
            assert_eq!(count(kind), 1, "{kind}");
        }
    }

    #[test]
    fn color_groups_hold_two_or_three_properties() {
        let board = Board::standard();
        for color in ColorGroup::iter() {
            let size = board.color_group(color).count();
            assert!((2..=3).contains(&size), "{color} has {size} tiles");
        }
    }

    #[test]
    fn fixed_coordinates_point_at_their_tiles() {
        let board = Board::standard();
        assert_eq!(board.tile_at(ORIGIN).kind, TileKind::Origin);
        assert_eq!(board.tile_at(PRISON).kind, TileKind::Prison);
        assert_eq!(board.tile_at(FREE_REST).kind, TileKind::FreeRest);
        assert_eq!(board.coord_of("Police"), Some(Coord::new(6, 6)));
        assert_eq!(board.coord_of("BackToStart"), Some(Coord::new(6, 0)));
        assert!(board.find("Atlantis").is_none());
    }
}
