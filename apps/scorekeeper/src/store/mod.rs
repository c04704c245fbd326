//! Persistence adapters for the durable game slot.

pub mod memory;
pub mod slot;

pub use memory::MemoryStore;
pub use slot::{GameStore, JsonSlotStore};
