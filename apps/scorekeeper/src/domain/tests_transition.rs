use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::domain::command::Command;
use crate::domain::state::{dealer_index_for_round, GameState, Phase};
use crate::domain::test_state_helpers::{entries, ids, play_round, start_names, started_game};
use crate::domain::transition::transition;
use crate::domain::Trump;

#[test]
fn start_game_builds_round_one() {
    let state = started_game(3);

    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.current_round, 1);
    assert_eq!(state.total_rounds, 20);
    assert_eq!(state.dealer_index, 0);
    assert_eq!(state.players.len(), 3);

    let round = state.current_round_record().expect("round 1 must exist");
    assert_eq!(round.round_no, 1);
    assert_eq!(round.dealer_id, state.players[0].id);
    assert_eq!(round.trump, Trump::None);
    assert!(round.bids.is_empty());
    assert!(round.tricks.is_empty());
    assert!(round.scores.is_empty());
}

#[test]
fn start_game_generates_unique_ids() {
    let state = started_game(6);
    let unique: HashSet<_> = ids(&state).into_iter().collect();
    assert_eq!(unique.len(), 6);
}

#[test]
fn start_game_discards_any_running_game() {
    let running = play_round(&started_game(3), &[1, 1, 0], &[1, 0, 0]);
    let restarted = transition(
        &running,
        Command::StartGame {
            names: start_names(4),
        },
    );

    assert_eq!(restarted.players.len(), 4);
    assert_eq!(restarted.total_rounds, 15);
    assert_eq!(restarted.current_round, 1);
    assert_eq!(restarted.rounds.len(), 1);
}

#[test]
fn total_rounds_per_table_size() {
    for (count, expected) in [(3, 20u8), (4, 15), (5, 12), (6, 10)] {
        assert_eq!(started_game(count).total_rounds, expected);
    }
}

#[test]
fn set_trump_overwrites_the_current_round_only() {
    let state = play_round(&started_game(3), &[1, 1, 0], &[1, 0, 0]);
    let with_trump = transition(&state, Command::SetTrump { trump: Trump::Wizard });

    assert_eq!(with_trump.rounds.get(&2).unwrap().trump, Trump::Wizard);
    assert_eq!(with_trump.rounds.get(&1).unwrap().trump, Trump::None);
    assert_eq!(with_trump.phase, state.phase);
}

#[test]
fn set_trump_twice_equals_once() {
    let state = started_game(3);
    let once = transition(&state, Command::SetTrump { trump: Trump::Hearts });
    let twice = transition(&once, Command::SetTrump { trump: Trump::Hearts });
    assert_eq!(once, twice);
}

#[test]
fn set_trump_before_start_is_a_noop() {
    let initial = GameState::initial();
    let after = transition(&initial, Command::SetTrump { trump: Trump::Spades });
    assert_eq!(after, initial);
}

#[test]
fn submit_bids_stores_and_moves_to_results() {
    let state = started_game(3);
    let after = transition(
        &state,
        Command::SubmitBids {
            bids: entries(&state, &[1, 0, 0]),
        },
    );

    assert_eq!(after.phase, Phase::Results);
    assert_eq!(after.current_round, 1);
    assert_eq!(
        after.current_round_record().unwrap().bids,
        entries(&state, &[1, 0, 0])
    );
}

#[test]
fn submit_bids_before_start_is_a_noop() {
    let initial = GameState::initial();
    let after = transition(
        &initial,
        Command::SubmitBids {
            bids: BTreeMap::from([("p0-x".to_string(), 1u8)]),
        },
    );
    assert_eq!(after, initial);
}

#[test]
fn submit_bids_outside_bidding_phase_is_a_noop() {
    let state = started_game(3);
    let in_results = transition(
        &state,
        Command::SubmitBids {
            bids: entries(&state, &[1, 0, 0]),
        },
    );
    let again = transition(
        &in_results,
        Command::SubmitBids {
            bids: entries(&state, &[2, 2, 2]),
        },
    );
    assert_eq!(again, in_results);
}

#[test]
fn submit_results_scores_and_advances() {
    // One full round at a 3-player table: bids 1/0/0, tricks 1/0/0.
    let state = started_game(3);
    let after = play_round(&state, &[1, 0, 0], &[1, 0, 0]);

    let round_one = after.rounds.get(&1).unwrap();
    let [a, b, c] = [&state.players[0].id, &state.players[1].id, &state.players[2].id];
    assert_eq!(round_one.scores.get(a), Some(&30));
    assert_eq!(round_one.scores.get(b), Some(&20));
    assert_eq!(round_one.scores.get(c), Some(&20));

    assert_eq!(after.phase, Phase::Bidding);
    assert_eq!(after.current_round, 2);
    assert_eq!(after.dealer_index, 1);
    let round_two = after.rounds.get(&2).unwrap();
    assert_eq!(round_two.dealer_id, state.players[1].id);
    assert_eq!(round_two.trump, Trump::None);
    assert!(round_two.bids.is_empty());
}

#[test]
fn submit_results_scores_misses_negatively() {
    let state = started_game(3);
    let after = play_round(&state, &[1, 0, 0], &[0, 1, 0]);

    let round_one = after.rounds.get(&1).unwrap();
    let [a, b, c] = [&state.players[0].id, &state.players[1].id, &state.players[2].id];
    assert_eq!(round_one.scores.get(a), Some(&-10));
    assert_eq!(round_one.scores.get(b), Some(&-10));
    assert_eq!(round_one.scores.get(c), Some(&20));
}

#[test]
fn submit_results_missing_entries_read_as_zero() {
    let state = started_game(3);
    let after_bids = transition(
        &state,
        Command::SubmitBids {
            bids: entries(&state, &[2, 0, 0]),
        },
    );
    // Only one player's tricks entered; the others read as 0.
    let partial: BTreeMap<_, _> =
        BTreeMap::from([(state.players[1].id.clone(), 1u8)]);
    let after = transition(&after_bids, Command::SubmitResults { tricks: partial });

    let round_one = after.rounds.get(&1).unwrap();
    assert_eq!(round_one.scores.get(&state.players[0].id), Some(&-20));
    assert_eq!(round_one.scores.get(&state.players[1].id), Some(&-10));
    assert_eq!(round_one.scores.get(&state.players[2].id), Some(&20));
    assert_eq!(round_one.scores.len(), 3);
}

#[test]
fn submit_results_outside_results_phase_is_a_noop() {
    let state = started_game(3);
    let after = transition(
        &state,
        Command::SubmitResults {
            tricks: entries(&state, &[1, 0, 0]),
        },
    );
    assert_eq!(after, state);
}

#[test]
fn dealer_rotates_one_seat_per_completed_round() {
    let mut state = started_game(4);
    for round in 1..=8u8 {
        let expected_dealer = dealer_index_for_round(round, 4);
        assert_eq!(expected_dealer, ((round as usize) - 1) % 4);
        assert_eq!(state.dealer_index, expected_dealer);
        assert_eq!(
            state.current_round_record().unwrap().dealer_id,
            state.players[expected_dealer].id
        );
        state = play_round(&state, &[0, 0, 0, 1], &[1, 0, 0, 0]);
    }
}

#[test]
fn last_round_ends_the_game_without_a_new_round() {
    let mut state = started_game(3);
    for _ in 1..state.total_rounds {
        state = play_round(&state, &[1, 1, 0], &[1, 0, 0]);
    }
    assert_eq!(state.current_round, 20);
    let dealer_before = state.dealer_index;

    let finished = play_round(&state, &[1, 1, 0], &[1, 0, 0]);
    assert_eq!(finished.phase, Phase::GameOver);
    assert_eq!(finished.current_round, 20);
    assert_eq!(finished.dealer_index, dealer_before);
    assert!(finished.rounds.get(&21).is_none());
    assert_eq!(finished.rounds.len(), 20);
}

#[test]
fn end_game_early_keeps_recorded_rounds() {
    let state = play_round(&started_game(3), &[1, 1, 0], &[1, 0, 0]);
    let ended = transition(&state, Command::EndGameEarly);

    assert_eq!(ended.phase, Phase::GameOver);
    assert_eq!(ended.rounds.len(), 2);
    assert_eq!(ended.current_round, 2);
    // The incomplete round 2 is still there, unscored.
    assert!(ended.rounds.get(&2).unwrap().scores.is_empty());
}

#[test]
fn reset_returns_the_canonical_initial_record() {
    let mid_game = play_round(&started_game(5), &[1, 0, 0, 0, 0], &[1, 0, 0, 0, 0]);
    assert_eq!(transition(&mid_game, Command::ResetGame), GameState::initial());

    let finished = transition(&mid_game, Command::EndGameEarly);
    assert_eq!(transition(&finished, Command::ResetGame), GameState::initial());
}

#[test]
fn game_over_is_terminal_except_for_reset() {
    let over = transition(
        &play_round(&started_game(3), &[1, 1, 0], &[1, 0, 0]),
        Command::EndGameEarly,
    );

    let bids_ignored = transition(
        &over,
        Command::SubmitBids {
            bids: entries(&over, &[1, 1, 1]),
        },
    );
    assert_eq!(bids_ignored, over);

    let tricks_ignored = transition(
        &over,
        Command::SubmitResults {
            tricks: entries(&over, &[1, 0, 0]),
        },
    );
    assert_eq!(tricks_ignored, over);

    assert_eq!(transition(&over, Command::ResetGame), GameState::initial());
}

#[test]
fn start_game_with_no_names_collapses_to_initial() {
    let after = transition(
        &GameState::initial(),
        Command::StartGame { names: vec![] },
    );
    assert_eq!(after, GameState::initial());
}
