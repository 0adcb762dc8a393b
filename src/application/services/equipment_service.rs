//! Equipment Service - Orchestrates equip and unequip
//!
//! Equip moves one inventory unit into the equipment set and folds the item's
//! bonuses into the character's stats; unequip is the exact inverse. Both run
//! under the character's lock and mutate a working copy of the aggregate that
//! is persisted with a single `update`, so a failure at any step leaves no
//! partial state: never a dangling equipment entry without the matching
//! inventory decrement, never a stat delta without its entry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dto::{EquipmentLine, StatSnapshot};
use crate::application::ports::outbound::{CharacterRepositoryPort, ItemRepositoryPort};
use crate::domain::entities::{Character, Item};
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::{CharacterId, ItemId, UserId};
use crate::infrastructure::locks::CharacterLockRegistry;

/// Equipment service trait defining the application use cases
#[async_trait]
pub trait EquipmentService: Send + Sync {
    /// Equip one unit of an owned, unequipped item
    async fn equip(
        &self,
        actor: UserId,
        character_id: CharacterId,
        item_code: ItemId,
    ) -> GameResult<StatSnapshot>;

    /// Unequip an equipped item, returning the unit to the inventory
    async fn unequip(
        &self,
        actor: UserId,
        character_id: CharacterId,
        item_code: ItemId,
    ) -> GameResult<StatSnapshot>;

    /// Public listing of a character's equipped items; no ownership check
    async fn list_equipment(&self, character_id: CharacterId) -> GameResult<Vec<EquipmentLine>>;
}

/// Default implementation of EquipmentService
pub struct EquipmentServiceImpl {
    characters: Arc<dyn CharacterRepositoryPort>,
    items: Arc<dyn ItemRepositoryPort>,
    locks: Arc<CharacterLockRegistry>,
}

impl EquipmentServiceImpl {
    pub fn new(
        characters: Arc<dyn CharacterRepositoryPort>,
        items: Arc<dyn ItemRepositoryPort>,
        locks: Arc<CharacterLockRegistry>,
    ) -> Self {
        Self {
            characters,
            items,
            locks,
        }
    }

    /// Load the character fresh inside the lock and check ownership.
    async fn load_owned(
        &self,
        actor: UserId,
        character_id: CharacterId,
    ) -> GameResult<Character> {
        let character = self.characters.get(character_id).await?.ok_or_else(|| {
            GameError::not_found(format!("character {character_id} does not exist"))
        })?;
        if !character.is_owned_by(actor) {
            return Err(GameError::forbidden(
                "character does not belong to the requesting user",
            ));
        }
        Ok(character)
    }

    async fn load_item(&self, item_code: ItemId) -> GameResult<Item> {
        self.items
            .get(item_code)
            .await?
            .ok_or_else(|| GameError::not_found(format!("item {item_code} does not exist")))
    }
}

#[async_trait]
impl EquipmentService for EquipmentServiceImpl {
    #[instrument(skip(self), fields(character_id = %character_id, item_code = %item_code))]
    async fn equip(
        &self,
        actor: UserId,
        character_id: CharacterId,
        item_code: ItemId,
    ) -> GameResult<StatSnapshot> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self.load_owned(actor, character_id).await?;
        let item = self.load_item(item_code).await?;

        if !character.inventory.contains(item_code) {
            return Err(GameError::bad_request(format!(
                "item {item_code} is not in the inventory"
            )));
        }

        // All three mutations land on the working copy; the update below is
        // the only commit point.
        character.equipment.equip(item_code)?;
        character.apply_equip(&item);
        character.inventory.remove(item_code, 1)?;

        self.characters.update(&character).await?;

        info!(
            character_id = %character_id,
            item_code = %item_code,
            "Equipped {} on {}",
            item.name,
            character.name
        );
        Ok(StatSnapshot::from(&character))
    }

    #[instrument(skip(self), fields(character_id = %character_id, item_code = %item_code))]
    async fn unequip(
        &self,
        actor: UserId,
        character_id: CharacterId,
        item_code: ItemId,
    ) -> GameResult<StatSnapshot> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self.load_owned(actor, character_id).await?;
        let item = self.load_item(item_code).await?;

        character.equipment.unequip(item_code)?;
        character.apply_unequip(&item);
        character.inventory.add(item_code, 1);

        self.characters.update(&character).await?;

        info!(
            character_id = %character_id,
            item_code = %item_code,
            "Unequipped {} from {}",
            item.name,
            character.name
        );
        Ok(StatSnapshot::from(&character))
    }

    #[instrument(skip(self))]
    async fn list_equipment(&self, character_id: CharacterId) -> GameResult<Vec<EquipmentLine>> {
        debug!(character_id = %character_id, "Listing equipment");
        let character = self.characters.get(character_id).await?.ok_or_else(|| {
            GameError::not_found(format!("character {character_id} does not exist"))
        })?;

        let mut lines = Vec::with_capacity(character.equipment.entries().len());
        for entry in character.equipment.entries() {
            // Best-effort name enrichment; a vanished catalog entry renders
            // without a name rather than failing the listing.
            let item_name = self.items.get(entry.item_id).await?.map(|i| i.name);
            lines.push(EquipmentLine {
                item_code: entry.item_id,
                item_name,
            });
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewCharacter, NewItem};
    use crate::infrastructure::persistence::MemoryStore;

    struct Fixture {
        service: EquipmentServiceImpl,
        store: MemoryStore,
        user: UserId,
        character_id: CharacterId,
        item_code: ItemId,
    }

    async fn fixture() -> Fixture {
        let store = MemoryStore::new();
        let service = EquipmentServiceImpl::new(
            Arc::new(store.characters()),
            Arc::new(store.items()),
            Arc::new(CharacterLockRegistry::new()),
        );

        let user = UserId::new();
        let mut character = store
            .characters()
            .create(NewCharacter {
                user_id: user,
                name: "Aranya".to_string(),
                health: 500,
                power: 100,
                money: 1000,
            })
            .await
            .unwrap();
        let item = store
            .items()
            .create(NewItem {
                name: "Iron Helm".to_string(),
                health: 20,
                power: 3,
                price: 100,
            })
            .await
            .unwrap();

        character.inventory.add(item.id, 2);
        store.characters().update(&character).await.unwrap();

        Fixture {
            service,
            store,
            user,
            character_id: character.id,
            item_code: item.id,
        }
    }

    #[tokio::test]
    async fn equip_moves_unit_and_applies_stats() {
        let f = fixture().await;

        let stats = f
            .service
            .equip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();

        assert_eq!(
            stats,
            StatSnapshot {
                health: 520,
                power: 103
            }
        );

        let stored = f.store.characters().get(f.character_id).await.unwrap().unwrap();
        assert!(stored.equipment.is_equipped(f.item_code));
        assert_eq!(stored.inventory.amount_of(f.item_code), 1);
    }

    #[tokio::test]
    async fn equip_then_unequip_restores_everything() {
        let f = fixture().await;

        f.service
            .equip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();
        let stats = f
            .service
            .unequip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();

        assert_eq!(
            stats,
            StatSnapshot {
                health: 500,
                power: 100
            }
        );

        let stored = f.store.characters().get(f.character_id).await.unwrap().unwrap();
        assert!(!stored.equipment.is_equipped(f.item_code));
        assert_eq!(stored.inventory.amount_of(f.item_code), 2);
    }

    #[tokio::test]
    async fn double_equip_fails_with_no_state_change() {
        let f = fixture().await;

        f.service
            .equip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();
        let err = f
            .service
            .equip(f.user, f.character_id, f.item_code)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::BadRequest(_)));

        let stored = f.store.characters().get(f.character_id).await.unwrap().unwrap();
        assert_eq!(stored.health, 520);
        assert_eq!(stored.inventory.amount_of(f.item_code), 1);
        assert_eq!(stored.equipment.entries().len(), 1);
    }

    #[tokio::test]
    async fn equip_requires_inventory_presence() {
        let f = fixture().await;
        let other = f
            .store
            .items()
            .create(NewItem {
                name: "Ghost Blade".to_string(),
                health: 0,
                power: 50,
                price: 500,
            })
            .await
            .unwrap();

        let err = f
            .service
            .equip(f.user, f.character_id, other.id)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::BadRequest(_)));
    }

    #[tokio::test]
    async fn equip_requires_ownership() {
        let f = fixture().await;

        let err = f
            .service
            .equip(UserId::new(), f.character_id, f.item_code)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::Forbidden(_)));
    }

    #[tokio::test]
    async fn unequip_without_equipment_entry_fails() {
        let f = fixture().await;

        let err = f
            .service
            .unequip(f.user, f.character_id, f.item_code)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::BadRequest(_)));
    }

    #[tokio::test]
    async fn unequip_recreates_deleted_inventory_entry() {
        let f = fixture().await;

        // Drain the stack down to the single equipped unit.
        f.service
            .equip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();
        let mut stored = f.store.characters().get(f.character_id).await.unwrap().unwrap();
        stored.inventory.remove(f.item_code, 1).unwrap();
        f.store.characters().update(&stored).await.unwrap();

        f.service
            .unequip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();

        let stored = f.store.characters().get(f.character_id).await.unwrap().unwrap();
        assert_eq!(stored.inventory.amount_of(f.item_code), 1);
    }

    #[tokio::test]
    async fn listing_is_public_and_enriched() {
        let f = fixture().await;
        f.service
            .equip(f.user, f.character_id, f.item_code)
            .await
            .unwrap();

        let lines = f.service.list_equipment(f.character_id).await.unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item_code, f.item_code);
        assert_eq!(lines[0].item_name.as_deref(), Some("Iron Helm"));
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let f = fixture().await;

        let err = f
            .service
            .equip(f.user, f.character_id, ItemId::new(404))
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
    }
}
