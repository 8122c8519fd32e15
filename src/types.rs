use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TileKind {
    OrdinaryProperty,
    TransitHub,
    Utility,
    Chance,
    Community,
    Prison,
    SendToPrison,
    FreeRest,
    ReturnToOrigin,
    LuxuryTax,
    Origin,
}

impl TileKind {
    /// Kinds that can be bought. `LuxuryTax` is included: buying it pays into the rest pool.
    pub fn is_purchasable(self) -> bool {
        matches!(
            self,
            TileKind::OrdinaryProperty
                | TileKind::TransitHub
                | TileKind::Utility
                | TileKind::LuxuryTax
        )
    }

    pub fn card_deck(self) -> Option<CardDeck> {
        match self {
            TileKind::Chance => Some(CardDeck::Chance),
            TileKind::Community => Some(CardDeck::Community),
            _ => None,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
pub enum ColorGroup {
    Brown,
    Teal,
    Black,
    Orange,
    Red,
    Violet,
    Green,
    Blue,
    Pink,
    Yellow,
    White,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardDeck {
    Chance,
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Roll,
    BuyTile,
    PayRent,
    BuildHouse,
    DrawCard,
    EndTurn,
}
