//! Character response payloads

use serde::Serialize;

use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

/// Character sheet as rendered to a viewer
///
/// `money` is present only when the viewer owns the character; strangers see
/// name and stats but not the balance.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSheet {
    pub name: String,
    pub health: i64,
    pub power: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money: Option<u64>,
}

impl CharacterSheet {
    pub fn for_viewer(character: &Character, is_owner: bool) -> Self {
        Self {
            name: character.name.clone(),
            health: character.health,
            power: character.power,
            money: is_owner.then_some(character.money),
        }
    }
}

/// Confirmation for a freshly created character
#[derive(Debug, Clone, Serialize)]
pub struct CreatedCharacter {
    pub character_id: CharacterId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EquipmentSet, InventoryLedger};
    use crate::domain::value_objects::UserId;
    use chrono::Utc;

    fn character() -> Character {
        Character {
            id: CharacterId::new(1),
            user_id: UserId::new(),
            name: "Aranya".to_string(),
            health: 500,
            power: 100,
            money: 42,
            inventory: InventoryLedger::new(),
            equipment: EquipmentSet::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stranger_sheet_omits_the_money_key_entirely() {
        let sheet = CharacterSheet::for_viewer(&character(), false);
        let json = serde_json::to_value(&sheet).unwrap();

        assert!(json.get("money").is_none());
        assert_eq!(json["health"], 500);
    }

    #[test]
    fn owner_sheet_carries_the_balance() {
        let sheet = CharacterSheet::for_viewer(&character(), true);
        let json = serde_json::to_value(&sheet).unwrap();

        assert_eq!(json["money"], 42);
    }
}
