//! Per-character operation serialization
//!
//! Every mutating operation (equip, unequip, buy, sell, earn, delete) holds
//! its character's guard from the first read to the final write, so at most
//! one such operation is in flight per character. Read-only listings do not
//! take the lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::value_objects::CharacterId;

/// Registry handing out one async mutex per character
#[derive(Default)]
pub struct CharacterLockRegistry {
    locks: Mutex<HashMap<CharacterId, Arc<Mutex<()>>>>,
}

impl CharacterLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the character's guard, creating the slot on first use.
    ///
    /// The registry-level lock is only held long enough to clone the
    /// per-character mutex; waiting for a busy character never blocks
    /// operations on other characters.
    pub async fn acquire(&self, id: CharacterId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut locks = self.locks.lock().await;
            locks.entry(id).or_default().clone()
        };
        slot.lock_owned().await
    }

    /// Drop the slot of a deleted character.
    pub async fn retire(&self, id: CharacterId) {
        let mut locks = self.locks.lock().await;
        locks.remove(&id);
    }
}
