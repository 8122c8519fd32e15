use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i32 = 7;

/// Position on the board. `x` is the column, `y` the row; both always in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Moves by `(dx, dy)`, wrapping each axis independently around the torus.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Coord::new(wrap(self.x + dx), wrap(self.y + dy))
    }

    pub fn index(self) -> usize {
        (self.y * BOARD_SIZE + self.x) as usize
    }

    pub fn from_index(index: usize) -> Self {
        let index = index as i32;
        Coord::new(index % BOARD_SIZE, index / BOARD_SIZE)
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
}

pub fn wrap(value: i32) -> i32 {
    value.rem_euclid(BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_both_edges() {
        assert_eq!(Coord::new(0, 0).offset(-1, -3), Coord::new(6, 4));
        assert_eq!(Coord::new(6, 5).offset(3, 2), Coord::new(2, 0));
        assert_eq!(Coord::new(3, 3).offset(-70, 71), Coord::new(3, 4));
    }

    #[test]
    fn index_round_trips_every_cell() {
        for (i, coord) in Coord::all().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), coord);
        }
    }
}
