//! Catalog item payloads

use serde::Serialize;

use crate::domain::entities::Item;
use crate::domain::value_objects::ItemId;

/// Catalog listing row: code, name, and price only
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    pub item_code: ItemId,
    pub item_name: String,
    pub price: u64,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            item_code: item.id,
            item_name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Full catalog entry including stat bonuses
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail {
    pub item_code: ItemId,
    pub item_name: String,
    pub health: i64,
    pub power: i64,
    pub price: u64,
}

impl From<&Item> for ItemDetail {
    fn from(item: &Item) -> Self {
        Self {
            item_code: item.id,
            item_name: item.name.clone(),
            health: item.health,
            power: item.power,
            price: item.price,
        }
    }
}
