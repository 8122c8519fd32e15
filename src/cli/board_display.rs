use itertools::Itertools;

use crate::coords::{BOARD_SIZE, Coord};
use crate::game::snapshot::{BoardSnapshot, TileSnapshot};

const MIN_COLUMN_WIDTH: usize = 10;

/// Renders the grid followed by the current player's name and funds.
pub fn render_board_to_string(snapshot: &BoardSnapshot) -> String {
    let size = BOARD_SIZE as usize;
    let cells: Vec<String> = snapshot.tiles.iter().map(cell_content).collect();

    let widths: Vec<usize> = (0..size)
        .map(|x| {
            (0..size)
                .map(|y| cells[Coord::new(x as i32, y as i32).index()].chars().count())
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let separator = format!(
        "+{}+",
        widths.iter().map(|w| "-".repeat(w + 2)).join("+")
    );

    let mut lines = vec![separator.clone()];
    for y in 0..size {
        let row = (0..size)
            .map(|x| {
                let cell = &cells[Coord::new(x as i32, y as i32).index()];
                format!(" {:<width$} ", cell, width = widths[x])
            })
            .join("|");
        lines.push(format!("|{row}|"));
        lines.push(separator.clone());
    }
    lines.push(String::new());
    lines.push(format!(
        "{} - {}",
        snapshot.current_player, snapshot.current_funds
    ));
    lines.join("\n")
}

fn cell_content(tile: &TileSnapshot) -> String {
    let mut content = tile.name.clone();
    if let Some(owner) = &tile.owner {
        if tile.houses > 0 {
            content.push_str(&format!(" ({owner} - {})", tile.houses));
        } else {
            content.push_str(&format!(" ({owner})"));
        }
    }
    if !tile.occupants.is_empty() {
        content.push(' ');
        content.push_str(&tile.occupants.iter().join(" "));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameState};

    #[test]
    fn renders_seven_rows_and_current_player() {
        let state = GameState::new(GameConfig::default(), &["A", "B", "C", "D"]).unwrap();
        let rendered = render_board_to_string(&state.snapshot());
        let rows = rendered.lines().filter(|line| line.starts_with('|')).count();
        assert_eq!(rows, 7);
        assert!(rendered.contains("Start A B C D"));
        assert!(rendered.ends_with("A - 600"));
    }

    #[test]
    fn owner_and_houses_are_shown() {
        let mut state = GameState::new(GameConfig::default(), &["A", "B", "C", "D"]).unwrap();
        let coord = state.board.coord_of("Brown1").unwrap();
        let tile = state.board.tile_at_mut(coord);
        tile.owner = Some(1);
        tile.houses = 2;
        let rendered = render_board_to_string(&state.snapshot());
        assert!(rendered.contains("Brown1 (B - 2)"));
    }
}
