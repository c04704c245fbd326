//! Game session service - bridges the pure reducer with the durable slot.
//!
//! The session owns the current record and the store. Construction reads
//! the slot once; every dispatch runs the reducer and writes the result
//! back. The session is the single writer of its slot: all calls go
//! through `&mut self`, which serializes them by ownership.

use tracing::{debug, info, warn};

use crate::domain::command::Command;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::GameState;
use crate::domain::transition::transition;
use crate::store::slot::GameStore;

pub struct GameSession<S: GameStore> {
    state: GameState,
    store: S,
}

impl<S: GameStore> GameSession<S> {
    /// Start a session from whatever the slot holds. A missing slot starts
    /// a fresh record; an unreadable one is logged and ignored — losing a
    /// save must never make the game unplayable.
    pub fn load(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                info!(
                    phase = ?state.phase,
                    round = state.current_round,
                    players = state.players.len(),
                    "Resuming saved game"
                );
                state
            }
            Ok(None) => GameState::initial(),
            Err(e) => {
                warn!(error = %e, "Could not read saved game, starting fresh");
                GameState::initial()
            }
        };
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.state)
    }

    /// Run one command through the reducer and persist the result.
    ///
    /// A save failure is logged and the session continues in memory: the
    /// game stays playable for the rest of the process, it may just lose
    /// data on reload.
    pub fn dispatch(&mut self, command: Command) -> &GameState {
        let phase_before = self.state.phase;
        let next = transition(&self.state, command);

        if next == self.state {
            debug!(phase = ?phase_before, "Command left the record unchanged");
        } else if next.phase != phase_before {
            info!(from = ?phase_before, to = ?next.phase, round = next.current_round, "Phase changed");
        }
        self.state = next;

        if let Err(e) = self.store.save(&self.state) {
            warn!(error = %e, "Could not save game, continuing in memory");
        }
        &self.state
    }

    /// Hand the store back, consuming the session.
    pub fn into_store(self) -> S {
        self.store
    }
}
