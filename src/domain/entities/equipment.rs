//! Equipment set - the items currently equipped on a character
//!
//! At most one entry per item: an item cannot be equipped twice
//! simultaneously. This uniqueness rule is what lets the stat deltas stay
//! purely additive without drifting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::ItemId;

/// One equipped instance of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub item_id: ItemId,
    pub equipped_at: DateTime<Utc>,
}

/// All equipment entries of one character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentSet {
    entries: Vec<EquipmentEntry>,
}

impl EquipmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[EquipmentEntry] {
        &self.entries
    }

    pub fn is_equipped(&self, item_id: ItemId) -> bool {
        self.entries.iter().any(|e| e.item_id == item_id)
    }

    /// Record the item as equipped; fails if it already is.
    pub fn equip(&mut self, item_id: ItemId) -> GameResult<()> {
        if self.is_equipped(item_id) {
            return Err(GameError::bad_request(format!(
                "item {item_id} is already equipped"
            )));
        }
        self.entries.push(EquipmentEntry {
            item_id,
            equipped_at: Utc::now(),
        });
        Ok(())
    }

    /// Remove the item's equipment entry; fails if it is not equipped.
    pub fn unequip(&mut self, item_id: ItemId) -> GameResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.item_id == item_id)
            .ok_or_else(|| GameError::bad_request(format!("item {item_id} is not equipped")))?;
        self.entries.remove(pos);
        Ok(())
    }
}
