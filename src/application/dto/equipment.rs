//! Equipment payloads

use serde::Serialize;

use crate::domain::entities::Character;
use crate::domain::value_objects::ItemId;

/// One equipped item as rendered in the public equipment listing
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentLine {
    pub item_code: ItemId,
    /// Best-effort catalog enrichment; absent when the catalog entry is gone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
}

/// Effective stats after an equip or unequip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatSnapshot {
    pub health: i64,
    pub power: i64,
}

impl From<&Character> for StatSnapshot {
    fn from(character: &Character) -> Self {
        Self {
            health: character.health,
            power: character.power,
        }
    }
}
