//! Character entity - the aggregate root of the economy engine
//!
//! A character owns its money balance, inventory ledger, and equipment set.
//! Orchestrating services load the aggregate, mutate a working copy, and
//! persist it with a single repository `update`, so every multi-step
//! operation commits all of its effects together or not at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{EquipmentSet, InventoryLedger, Item};
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::{CharacterId, UserId};

/// A player-owned game character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    /// Owning user; mutating operations require the actor to match
    pub user_id: UserId,
    pub name: String,
    /// Effective health: base plus the sum of equipped item bonuses
    pub health: i64,
    /// Effective power: base plus the sum of equipped item bonuses
    pub power: i64,
    /// Money balance; never negative on any code path
    pub money: u64,
    pub inventory: InventoryLedger,
    pub equipment: EquipmentSet,
    pub created_at: DateTime<Utc>,
}

impl Character {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Increase the money balance; there is no upper bound.
    pub fn credit(&mut self, amount: u64) {
        self.money += amount;
    }

    /// Decrease the money balance, failing before any mutation when the
    /// balance would go negative.
    pub fn debit(&mut self, amount: u64) -> GameResult<()> {
        if self.money < amount {
            return Err(GameError::bad_request(format!(
                "not enough money: have {}, need {amount}",
                self.money
            )));
        }
        self.money -= amount;
        Ok(())
    }

    /// Fold an equipped item's bonuses into the effective stats.
    ///
    /// Stats are maintained incrementally, so every call must eventually be
    /// paired with the exact inverse [`apply_unequip`](Self::apply_unequip).
    /// The equipment set's uniqueness rule prevents double application.
    pub fn apply_equip(&mut self, item: &Item) {
        self.health += item.health;
        self.power += item.power;
    }

    /// Exact inverse of [`apply_equip`](Self::apply_equip).
    pub fn apply_unequip(&mut self, item: &Item) {
        self.health -= item.health;
        self.power -= item.power;
    }
}

/// Draft for a character before the store assigns its id
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub user_id: UserId,
    pub name: String,
    pub health: i64,
    pub power: i64,
    pub money: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ItemId;

    fn character(money: u64) -> Character {
        Character {
            id: CharacterId::new(1),
            user_id: UserId::new(),
            name: "Tester".to_string(),
            health: 500,
            power: 100,
            money,
            inventory: InventoryLedger::new(),
            equipment: EquipmentSet::new(),
            created_at: Utc::now(),
        }
    }

    fn item(health: i64, power: i64) -> Item {
        Item {
            id: ItemId::new(1),
            name: "Iron Helm".to_string(),
            health,
            power,
            price: 100,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn debit_rejects_overdraft_without_mutating() {
        let mut c = character(50);

        let err = c.debit(51).unwrap_err();

        assert!(matches!(err, GameError::BadRequest(_)));
        assert_eq!(c.money, 50);
    }

    #[test]
    fn debit_to_zero_is_allowed() {
        let mut c = character(50);
        c.debit(50).unwrap();
        assert_eq!(c.money, 0);
    }

    #[test]
    fn equip_deltas_are_exact_inverses() {
        let mut c = character(0);
        let sword = item(20, 7);

        c.apply_equip(&sword);
        assert_eq!((c.health, c.power), (520, 107));

        c.apply_unequip(&sword);
        assert_eq!((c.health, c.power), (500, 100));
    }
}
