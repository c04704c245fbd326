//! Property tests for the reducer (pure domain, no persistence).
//!
//! Contract:
//! - The reducer is total: any command against any reachable state yields
//!   a well-formed record, never a panic
//! - Reset always lands on the canonical initial record
//! - Dealer rotation is cyclic with the table size as its period
//! - Stored round scores are always the pure function of bids and tricks

use proptest::prelude::*;

use crate::domain::command::Command;
use crate::domain::scoring::round_score;
use crate::domain::state::{GameState, Phase};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{entries, play_round, started_game};
use crate::domain::transition::transition;

/// Every invariant a reachable record must satisfy.
fn assert_invariants(state: &GameState) {
    match state.phase {
        Phase::Bidding | Phase::Results => {
            assert!(
                state.current_round_record().is_some(),
                "running phases must have a current round"
            );
            assert!(state.current_round >= 1);
            assert!(state.current_round <= state.total_rounds.max(1));
        }
        Phase::Setup | Phase::GameOver => {}
    }
    if !state.players.is_empty() {
        assert!(state.dealer_index < state.players.len());
    }
    for round in state.rounds.values() {
        for (id, score) in &round.scores {
            let bid = round.bids.get(id).copied().unwrap_or(0);
            let tricks = round.tricks.get(id).copied().unwrap_or(0);
            assert_eq!(*score, round_score(bid, tricks), "stored score must match the formula");
        }
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: reset is a left zero — any state resets to the initial
    /// record.
    #[test]
    fn prop_reset_always_yields_the_initial_record(
        commands in prop::collection::vec(test_gens::command(), 0..12),
    ) {
        let mut state = GameState::initial();
        for command in commands {
            state = transition(&state, command);
        }
        prop_assert_eq!(transition(&state, Command::ResetGame), GameState::initial());
    }

    /// Property: the reducer survives arbitrary command sequences with its
    /// invariants intact.
    #[test]
    fn prop_arbitrary_command_sequences_keep_invariants(
        commands in prop::collection::vec(test_gens::command(), 0..24),
    ) {
        let mut state = GameState::initial();
        for command in commands {
            state = transition(&state, command);
            assert_invariants(&state);
        }
    }

    /// Property: total rounds follow deck division for every table size.
    #[test]
    fn prop_total_rounds_follow_deck_division(count in test_gens::player_count()) {
        let state = started_game(count);
        prop_assert_eq!(usize::from(state.total_rounds), 60 / count);
    }

    /// Property: after k completed rounds the dealer has advanced k seats
    /// (mod table size), starting from seat 0 in round 1.
    #[test]
    fn prop_dealer_rotation_is_cyclic(
        count in test_gens::player_count(),
        completed in 0usize..8,
    ) {
        let mut state = started_game(count);
        let bids = vec![0u8; count];
        let tricks = vec![0u8; count];
        for _ in 0..completed {
            state = play_round(&state, &bids, &tricks);
        }
        prop_assert_eq!(state.dealer_index, completed % count);
        let round = state.current_round_record().unwrap();
        prop_assert_eq!(&round.dealer_id, &state.players[completed % count].id);
    }

    /// Property: SetTrump is idempotent for every trump value.
    #[test]
    fn prop_set_trump_is_idempotent(trump in test_gens::trump()) {
        let state = started_game(3);
        let once = transition(&state, Command::SetTrump { trump });
        let twice = transition(&once, Command::SetTrump { trump });
        prop_assert_eq!(once, twice);
    }

    /// Property: a submitted round always ends with one score per player,
    /// whatever the tricks map claimed.
    #[test]
    fn prop_scoring_covers_every_player(
        count in test_gens::player_count(),
        sloppy_tricks in test_gens::entry_map(),
    ) {
        let state = started_game(count);
        let bids = entries(&state, &vec![1u8; count]);
        let after_bids = transition(&state, Command::SubmitBids { bids });
        let after = transition(&after_bids, Command::SubmitResults { tricks: sloppy_tricks });

        let round = after.rounds.get(&1).unwrap();
        prop_assert_eq!(round.scores.len(), count);
        for player in &after.players {
            prop_assert!(round.scores.contains_key(&player.id));
        }
    }
}
