//! Property tests over random move sequences.

use proptest::prelude::*;
use tictactoe_core::invariants::{GameInvariants, InvariantSet};
use tictactoe_core::{GameState, Position, play, start};

/// Plays `choices` from the opening state, each choice indexing into the
/// current available positions. Returns every state reached.
fn legal_game(choices: &[usize]) -> Vec<GameState> {
    let mut states = vec![start()];
    for choice in choices {
        let current = states[states.len() - 1].clone();
        if current.is_over() {
            break;
        }
        let available = current.available_positions();
        let position = available[choice % available.len()];
        states.push(play(&current, position).expect("available positions are legal"));
    }
    states
}

fn any_token() -> impl Strategy<Value = i64> {
    prop_oneof![-5i64..15, any::<i64>()]
}

proptest! {
    #[test]
    fn terminal_states_absorb_any_move(
        choices in prop::collection::vec(any::<usize>(), 9),
        token in any_token(),
        float in any::<f64>(),
    ) {
        let states = legal_game(&choices);
        let last = &states[states.len() - 1];
        prop_assert!(last.is_over());

        prop_assert_eq!(&play(last, token).unwrap(), last);
        prop_assert_eq!(&play(last, float).unwrap(), last);
    }

    #[test]
    fn marks_are_write_once(choices in prop::collection::vec(any::<usize>(), 0..12)) {
        let states = legal_game(&choices);
        for pair in states.windows(2) {
            for pos in Position::ALL {
                if let Some(mark) = pair[0].board().mark_at(pos) {
                    prop_assert_eq!(pair[1].board().mark_at(pos), Some(mark));
                }
            }
        }
    }

    #[test]
    fn players_alternate_until_the_end(choices in prop::collection::vec(any::<usize>(), 0..12)) {
        let states = legal_game(&choices);
        for pair in states.windows(2) {
            if pair[1].is_over() {
                prop_assert_eq!(pair[1].current_player(), pair[0].current_player());
            } else {
                prop_assert_ne!(pair[1].current_player(), pair[0].current_player());
            }
        }
    }

    #[test]
    fn win_and_draw_exclude_each_other(choices in prop::collection::vec(any::<usize>(), 0..12)) {
        for state in legal_game(&choices) {
            if state.winner().is_some() {
                prop_assert!(!state.is_draw());
            }
            if state.is_draw() {
                prop_assert!(state.winner().is_none());
            }
            prop_assert_eq!(
                state.is_over(),
                state.winner().is_some() || state.available_positions().is_empty()
            );
        }
    }

    #[test]
    fn every_reachable_state_satisfies_invariants(
        choices in prop::collection::vec(any::<usize>(), 0..12),
    ) {
        for state in legal_game(&choices) {
            prop_assert!(GameInvariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn out_of_range_integers_are_invalid_positions(n in any::<i64>()) {
        prop_assume!(!(1..=9).contains(&n));
        prop_assert_eq!(
            play(&start(), n),
            Err(tictactoe_core::MoveError::InvalidPosition)
        );
    }
}
