//! Inventory Service - Owner-only inventory listing

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::dto::InventoryLine;
use crate::application::ports::outbound::{CharacterRepositoryPort, ItemRepositoryPort};
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::{CharacterId, UserId};

/// Inventory service trait defining the application use cases
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// List a character's inventory; only the owner may look inside the bag
    async fn list_inventory(
        &self,
        actor: UserId,
        character_id: CharacterId,
    ) -> GameResult<Vec<InventoryLine>>;
}

/// Default implementation of InventoryService
pub struct InventoryServiceImpl {
    characters: Arc<dyn CharacterRepositoryPort>,
    items: Arc<dyn ItemRepositoryPort>,
}

impl InventoryServiceImpl {
    pub fn new(
        characters: Arc<dyn CharacterRepositoryPort>,
        items: Arc<dyn ItemRepositoryPort>,
    ) -> Self {
        Self { characters, items }
    }
}

#[async_trait]
impl InventoryService for InventoryServiceImpl {
    #[instrument(skip(self))]
    async fn list_inventory(
        &self,
        actor: UserId,
        character_id: CharacterId,
    ) -> GameResult<Vec<InventoryLine>> {
        debug!(character_id = %character_id, "Listing inventory");
        let character = self.characters.get(character_id).await?.ok_or_else(|| {
            GameError::not_found(format!("character {character_id} does not exist"))
        })?;

        if !character.is_owned_by(actor) {
            return Err(GameError::forbidden(
                "character does not belong to the requesting user",
            ));
        }

        let mut lines = Vec::with_capacity(character.inventory.entries().len());
        for entry in character.inventory.entries() {
            // Best-effort name enrichment; a vanished catalog entry renders
            // without a name rather than failing the listing.
            let item_name = self.items.get(entry.item_id).await?.map(|i| i.name);
            lines.push(InventoryLine {
                item_code: entry.item_id,
                item_name,
                count: entry.amount,
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

    #[tokio::test]
    async fn listing_is_owner_only_and_enriched() {
        let store = MemoryStore::new();
        let service =
            InventoryServiceImpl::new(Arc::new(store.characters()), Arc::new(store.items()));

        let user = UserId::new();
        let mut character = store
            .characters()
            .create(NewCharacter {
                user_id: user,
                name: "Aranya".to_string(),
                health: 500,
                power: 100,
                money: 0,
            })
            .await
            .unwrap();
        let helm = store
            .items()
            .create(NewItem {
                name: "Iron Helm".to_string(),
                health: 20,
                power: 0,
                price: 100,
            })
            .await
            .unwrap();
        character.inventory.add(helm.id, 4);
        store.characters().update(&character).await.unwrap();

        let lines = service.list_inventory(user, character.id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item_name.as_deref(), Some("Iron Helm"));
        assert_eq!(lines[0].count, 4);

        let err = service
            .list_inventory(UserId::new(), character.id)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::Forbidden(_)));
    }

    #[tokio::test]
    async fn missing_character_is_not_found() {
        let store = MemoryStore::new();
        let service =
            InventoryServiceImpl::new(Arc::new(store.characters()), Arc::new(store.items()));

        let err = service
            .list_inventory(UserId::new(), CharacterId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
    }
}
