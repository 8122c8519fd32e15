use serde::{Deserialize, Serialize};

/// Shared pool of taxes and penalties, paid out whole to whoever lands on the rest tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPool {
    funds: i64,
}

impl RestPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> i64 {
        self.funds
    }

    pub fn receive(&mut self, amount: i64) {
        self.funds += amount;
    }

    /// Empties the pool and returns what it held.
    pub fn collect(&mut self) -> i64 {
        std::mem::take(&mut self.funds)
    }
}
