//! Inventory ledger - stackable item quantities owned by a character
//!
//! One entry per item, always with a positive amount. An entry whose amount
//! would reach zero is deleted instead, so `entries()` never exposes empty
//! stacks and re-acquiring the item later creates a fresh entry.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::ItemId;

/// A stackable count of one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item_id: ItemId,
    pub amount: u32,
}

/// All inventory entries of one character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryLedger {
    entries: Vec<InventoryEntry>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Amount currently held of the given item (0 when there is no entry)
    pub fn amount_of(&self, item_id: ItemId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item_id == item_id)
            .map(|e| e.amount)
            .unwrap_or(0)
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.entries.iter().any(|e| e.item_id == item_id)
    }

    /// Add `count` units, creating the entry on first acquisition.
    ///
    /// Callers guarantee `count > 0` (the validation collaborator rejects
    /// non-positive counts before they reach the engine).
    pub fn add(&mut self, item_id: ItemId, count: u32) {
        match self.entries.iter_mut().find(|e| e.item_id == item_id) {
            Some(entry) => entry.amount += count,
            None => self.entries.push(InventoryEntry {
                item_id,
                amount: count,
            }),
        }
    }

    /// Remove `count` units; deletes the entry when the stack is exhausted.
    pub fn remove(&mut self, item_id: ItemId, count: u32) -> GameResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.item_id == item_id)
            .ok_or_else(|| {
                GameError::bad_request(format!("item {item_id} is not in the inventory"))
            })?;

        let entry = &mut self.entries[pos];
        if entry.amount < count {
            return Err(GameError::bad_request(format!(
                "insufficient quantity of item {item_id}: have {}, need {count}",
                entry.amount
            )));
        }

        if entry.amount == count {
            self.entries.remove(pos);
        } else {
            entry.amount -= count;
        }
        Ok(())
    }
}
