//! Randomized checks on movement, dice and prison rules.

use proptest::prelude::*;

use monopolio_rs::board::PRISON;
use monopolio_rs::coords::BOARD_SIZE;
use monopolio_rs::game::dice::DIE_FACES;
use monopolio_rs::game::{GameConfig, GameState};
use monopolio_rs::Coord;

fn new_state(seed: u64) -> GameState {
    let config = GameConfig {
        seed,
        ..GameConfig::default()
    };
    GameState::new(config, &["A", "B", "C", "D"]).unwrap()
}

fn die() -> impl Strategy<Value = i32> {
    prop::sample::select(DIE_FACES.to_vec())
}

fn coord() -> impl Strategy<Value = Coord> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(x, y)| Coord::new(x, y))
}

fn on_board(coord: Coord) -> bool {
    (0..BOARD_SIZE).contains(&coord.x) && (0..BOARD_SIZE).contains(&coord.y)
}

proptest! {
    #[test]
    fn offset_stays_on_board(start in coord(), dx in -1000i32..1000, dy in -1000i32..1000) {
        let end = start.offset(dx, dy);
        prop_assert!(on_board(end));
        prop_assert_eq!((end.x - start.x - dx).rem_euclid(BOARD_SIZE), 0);
        prop_assert_eq!((end.y - start.y - dy).rem_euclid(BOARD_SIZE), 0);
    }

    #[test]
    fn any_roll_leaves_player_on_board(start in coord(), d1 in die(), d2 in die()) {
        let mut state = new_state(1);
        state.players[0].position = start;
        state.roll_dice_with("A", d1, d2).unwrap();
        prop_assert!(on_board(state.players[0].position));
    }

    #[test]
    fn seeded_rolls_are_legal_dice(seed in any::<u64>()) {
        let mut state = new_state(seed);
        state.roll_dice("A").unwrap();
        let (d1, d2) = state.last_roll.unwrap();
        prop_assert!(DIE_FACES.contains(&d1));
        prop_assert!(DIE_FACES.contains(&d2));
    }

    #[test]
    fn third_prison_turn_always_releases(d1 in die(), d2 in die()) {
        let mut state = new_state(1);
        state.players[0].send_to_prison();
        state.players[0].turns_in_prison = 2;
        state.roll_dice_with("A", d1, d2).unwrap();
        let player = &state.players[0];
        prop_assert!(player.turns_in_prison == 0);
        // Landing on Police puts them straight back.
        prop_assert!(!player.in_prison || player.position == PRISON);
    }

    #[test]
    fn second_doubles_always_imprison(start in coord(), first in die(), second in die()) {
        let mut state = new_state(1);
        state.players[0].position = start;
        state.roll_dice_with("A", first, first).unwrap();
        prop_assume!(!state.players[0].in_prison);
        state.players[0].needs_to_pay_rent = false;
        state.players[0].needs_to_draw_card = false;

        state.roll_dice_with("A", second, second).unwrap();
        let player = &state.players[0];
        prop_assert!(player.in_prison);
        prop_assert_eq!(player.position, PRISON);
        prop_assert_eq!(player.consecutive_doubles, 0);
        prop_assert!(!player.must_roll_again);
    }

    #[test]
    fn non_doubles_reset_the_doubles_counter(start in coord(), d1 in die(), d2 in die()) {
        prop_assume!(d1 != d2);
        let mut state = new_state(1);
        state.players[0].position = start;
        state.players[0].consecutive_doubles = 1;
        state.roll_dice_with("A", d1, d2).unwrap();
        prop_assert_eq!(state.players[0].consecutive_doubles, 0);
        prop_assert!(!state.players[0].must_roll_again);
    }
}
