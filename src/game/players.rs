use serde::{Deserialize, Serialize};

use crate::board::{ORIGIN, PRISON};
use crate::coords::Coord;

pub const STARTING_FUNDS: i64 = 600;
pub const MAX_TURNS_IN_PRISON: u8 = 3;
/// Funds value marking a card payment the player could not cover.
pub const INSOLVENT: i64 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub funds: i64,
    pub position: Coord,
    pub in_prison: bool,
    pub turns_in_prison: u8,
    pub consecutive_doubles: u8,
    pub has_rolled: bool,
    pub must_roll_again: bool,
    pub needs_to_pay_rent: bool,
    pub needs_to_draw_card: bool,
    pub has_drawn_card: bool,
}

impl PlayerState {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_funds(name, STARTING_FUNDS)
    }

    pub fn with_funds(name: impl Into<String>, funds: i64) -> Self {
        Self {
            name: name.into(),
            funds,
            position: ORIGIN,
            in_prison: false,
            turns_in_prison: 0,
            consecutive_doubles: 0,
            has_rolled: false,
            must_roll_again: false,
            needs_to_pay_rent: false,
            needs_to_draw_card: false,
            has_drawn_card: false,
        }
    }

    /// Restores funds, position and every turn flag for a fresh session.
    pub fn reset(&mut self, funds: i64) {
        *self = Self::with_funds(std::mem::take(&mut self.name), funds);
    }

    pub fn reset_for_new_turn(&mut self) {
        self.has_rolled = false;
        self.must_roll_again = false;
        self.has_drawn_card = false;
    }

    pub fn has_pending_obligation(&self) -> bool {
        self.needs_to_pay_rent || self.needs_to_draw_card
    }

    pub fn can_roll(&self) -> bool {
        !self.has_pending_obligation() && (!self.has_rolled || self.must_roll_again)
    }

    pub fn send_to_prison(&mut self) {
        self.in_prison = true;
        self.turns_in_prison = 0;
        self.position = PRISON;
        self.consecutive_doubles = 0;
        self.must_roll_again = false;
    }

    pub fn release_from_prison(&mut self) {
        self.in_prison = false;
        self.turns_in_prison = 0;
        self.position = PRISON;
    }

    pub fn teleport(&mut self, coord: Coord) {
        self.position = coord;
    }

    pub fn credit(&mut self, amount: i64) {
        self.funds += amount;
    }

    /// Debits a card payment; a shortfall leaves the player at [`INSOLVENT`].
    pub fn charge(&mut self, amount: i64) {
        self.funds -= amount;
        if self.funds < 0 {
            self.funds = INSOLVENT;
        }
    }

    pub fn can_afford(&self, amount: i64) -> bool {
        self.funds >= amount
    }

    pub fn is_insolvent(&self) -> bool {
        self.funds == INSOLVENT
    }
}
