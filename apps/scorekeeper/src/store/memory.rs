//! In-memory store: ephemeral sessions and tests.

use std::cell::{Cell, RefCell};

use crate::domain::state::GameState;
use crate::error::AppError;
use crate::store::slot::GameStore;

/// A `GameStore` that keeps the record in memory. Nothing survives the
/// process; useful for tests and for running without a durable slot.
#[derive(Default)]
pub struct MemoryStore {
    saved: RefCell<Option<GameState>>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a record, as if a previous session had
    /// saved it.
    pub fn with_state(state: GameState) -> Self {
        Self {
            saved: RefCell::new(Some(state)),
            save_count: Cell::new(0),
        }
    }

    /// The record most recently saved, if any.
    pub fn saved(&self) -> Option<GameState> {
        self.saved.borrow().clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, AppError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, state: &GameState) -> Result<(), AppError> {
        *self.saved.borrow_mut() = Some(state.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
