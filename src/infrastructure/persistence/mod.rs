//! Persistence adapters
//!
//! This module implements the repository ports over an in-memory store. The
//! engine only needs CRUD plus an atomic whole-aggregate swap, which the
//! in-memory adapter provides; a durable backend slots in behind the same
//! ports.

mod memory;

pub use memory::{MemoryCharacterRepository, MemoryItemRepository, MemoryStore};
