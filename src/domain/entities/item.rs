//! Item entity - shared read-only catalog entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

/// A catalog item definition
///
/// Catalog entries carry no ownership; characters reference them by id from
/// inventory and equipment rows. The id is the "item code" callers use in
/// baskets and equip requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Health bonus granted while equipped
    pub health: i64,
    /// Power bonus granted while equipped
    pub power: i64,
    /// Purchase price in the store
    pub price: u64,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Unit price the store pays when a character sells this item back.
    ///
    /// Integer math floors the result: at the default 60% rate a catalog
    /// price of 101 sells for 60, never 61.
    pub fn sell_price(&self, rate_percent: u64) -> u64 {
        self.price * rate_percent / 100
    }
}

/// Draft for a catalog item before the store assigns its code
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub health: i64,
    pub power: i64,
    pub price: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: u64) -> Item {
        Item {
            id: ItemId::new(1),
            name: "Rusty Sword".to_string(),
            health: 0,
            power: 5,
            price,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn sell_price_floors() {
        assert_eq!(item(101).sell_price(60), 60);
        assert_eq!(item(100).sell_price(60), 60);
        assert_eq!(item(1).sell_price(60), 0);
    }
}
