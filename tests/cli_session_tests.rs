//! Text command sessions end to end.

use monopolio_rs::cli::CommandProcessor;
use monopolio_rs::game::{GameConfig, GameState};
use monopolio_rs::Coord;

fn started() -> CommandProcessor {
    let mut processor = CommandProcessor::new(GameConfig::default());
    for line in ["RJ Ana", "RJ Bruno", "RJ Carla", "RJ Duarte"] {
        assert_eq!(processor.execute(line), vec!["Player registered successfully."]);
    }
    assert_eq!(
        processor.execute("IJ Ana Bruno Carla Duarte"),
        vec!["Game started successfully."]
    );
    processor
}

fn state(processor: &mut CommandProcessor) -> &mut GameState {
    &mut processor.game.as_mut().unwrap().state
}

#[test]
fn listing_is_ordered_by_name_when_nobody_has_won() {
    let mut processor = CommandProcessor::new(GameConfig::default());
    for line in ["RJ Zeca", "RJ Ana", "RJ Maria"] {
        processor.execute(line);
    }
    assert_eq!(
        processor.execute("LJ"),
        vec!["Ana 0 0 0 0", "Maria 0 0 0 0", "Zeca 0 0 0 0"]
    );
}

#[test]
fn start_needs_four_distinct_registered_players() {
    let mut processor = CommandProcessor::new(GameConfig::default());
    for line in ["RJ A", "RJ B", "RJ C"] {
        processor.execute(line);
    }
    assert_eq!(processor.execute("IJ A B C D"), vec!["Player does not exist."]);
    assert_eq!(processor.execute("IJ A B C A"), vec!["Invalid instruction."]);
    assert_eq!(processor.execute("IJ A B C"), vec!["Invalid instruction."]);
    assert!(processor.game.is_none());
}

#[test]
fn buy_rent_and_end_turn_through_commands() {
    let mut processor = started();
    let orange3 = Coord::new(4, 5);
    state(&mut processor).players[0].position = orange3;
    state(&mut processor).players[0].has_rolled = true;

    assert_eq!(processor.execute("CE Ana"), vec!["Tile bought."]);
    assert_eq!(processor.execute("CE Ana"), vec!["The tile is already owned."]);
    assert_eq!(processor.execute("PA Ana"), vec!["No rent is owed."]);
    assert_eq!(processor.execute("TT Ana"), vec!["Turn ended. Next turn: Bruno."]);

    let bruno = &mut state(&mut processor).players[1];
    bruno.position = orange3;
    bruno.has_rolled = true;
    bruno.needs_to_pay_rent = true;
    assert_eq!(
        processor.execute("TT Bruno"),
        vec!["The player still has actions to take."]
    );
    assert_eq!(processor.execute("PA Bruno"), vec!["Rent paid."]);
    assert_eq!(state(&mut processor).players[1].funds, 565);
    assert_eq!(processor.execute("TT Bruno"), vec!["Turn ended. Next turn: Carla."]);
}

#[test]
fn houses_through_commands() {
    let mut processor = started();
    assert_eq!(
        processor.execute("CC Ana Brown1"),
        vec!["A house cannot be built on that tile."]
    );
    for name in ["Brown1", "Brown2"] {
        let game = state(&mut processor);
        let coord = game.board.coord_of(name).unwrap();
        game.board.tile_at_mut(coord).owner = Some(0);
    }
    assert_eq!(processor.execute("CC Ana Brown1"), vec!["House built."]);
    assert_eq!(state(&mut processor).players[0].funds, 540);
    assert_eq!(
        processor.execute("CC Ana Red1"),
        vec!["A house cannot be built on that tile."]
    );
}

#[test]
fn card_draw_through_commands() {
    let mut processor = started();
    assert_eq!(
        processor.execute("TC Ana"),
        vec!["A card cannot be drawn on this tile."]
    );
    state(&mut processor).players[0].position = Coord::new(5, 1);
    let drawn = processor.execute("TC Ana");
    assert!(drawn[0].starts_with("The player "), "{drawn:?}");
    assert_eq!(
        processor.execute("TC Ana"),
        vec!["The card has already been drawn."]
    );
}

#[test]
fn details_show_owner_and_pieces() {
    let mut processor = started();
    state(&mut processor).players[0].position = Coord::new(4, 5);
    state(&mut processor).players[0].has_rolled = true;
    processor.execute("CE Ana");
    let board = processor.execute("DJ").join("\n");
    assert!(board.contains("Orange3 (Ana) Ana"), "{board}");
    assert!(board.contains("Start Bruno Carla Duarte"), "{board}");
    assert!(board.contains("Ana - 460"), "{board}");
}
