//! In-memory store implementing the repository ports
//!
//! Characters and catalog items live in maps behind async rwlocks; ids are
//! sequential, matching the positive-integer key contract. `update` swaps the
//! whole aggregate under the write lock, so readers observe either the state
//! before a mutation or after it, never a half-applied mix. Per-character
//! serialization of writers is the lock registry's job, not the store's.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{CharacterRepositoryPort, ItemRepositoryPort};
use crate::domain::entities::{
    Character, EquipmentSet, InventoryLedger, Item, NewCharacter, NewItem,
};
use crate::domain::value_objects::{CharacterId, ItemId, UserId};

#[derive(Default)]
struct StoreInner {
    characters: RwLock<HashMap<CharacterId, Character>>,
    items: RwLock<HashMap<ItemId, Item>>,
    next_character_id: AtomicU64,
    next_item_id: AtomicU64,
}

/// Combined in-memory store providing access to both repositories
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn characters(&self) -> MemoryCharacterRepository {
        MemoryCharacterRepository {
            inner: self.inner.clone(),
        }
    }

    pub fn items(&self) -> MemoryItemRepository {
        MemoryItemRepository {
            inner: self.inner.clone(),
        }
    }
}

/// Repository for Character aggregate operations
#[derive(Clone)]
pub struct MemoryCharacterRepository {
    inner: Arc<StoreInner>,
}

#[async_trait]
impl CharacterRepositoryPort for MemoryCharacterRepository {
    async fn create(&self, draft: NewCharacter) -> Result<Character> {
        let id = self.inner.next_character_id.fetch_add(1, Ordering::Relaxed) + 1;
        let character = Character {
            id: CharacterId::new(id),
            user_id: draft.user_id,
            name: draft.name,
            health: draft.health,
            power: draft.power,
            money: draft.money,
            inventory: InventoryLedger::new(),
            equipment: EquipmentSet::new(),
            created_at: Utc::now(),
        };

        let mut characters = self.inner.characters.write().await;
        characters.insert(character.id, character.clone());
        tracing::debug!(character_id = %character.id, "Stored character: {}", character.name);
        Ok(character)
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>> {
        let characters = self.inner.characters.read().await;
        Ok(characters.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Character>> {
        let characters = self.inner.characters.read().await;
        Ok(characters.values().find(|c| c.name == name).cloned())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Character>> {
        let characters = self.inner.characters.read().await;
        let mut owned: Vec<Character> = characters
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.id);
        Ok(owned)
    }

    async fn update(&self, character: &Character) -> Result<()> {
        let mut characters = self.inner.characters.write().await;
        match characters.get_mut(&character.id) {
            Some(slot) => {
                *slot = character.clone();
                Ok(())
            }
            None => bail!("character {} is not persisted", character.id),
        }
    }

    async fn delete(&self, id: CharacterId) -> Result<()> {
        let mut characters = self.inner.characters.write().await;
        if characters.remove(&id).is_none() {
            bail!("character {id} is not persisted");
        }
        Ok(())
    }

    async fn list_equipping(&self, item_id: ItemId) -> Result<Vec<CharacterId>> {
        let characters = self.inner.characters.read().await;
        Ok(characters
            .values()
            .filter(|c| c.equipment.is_equipped(item_id))
            .map(|c| c.id)
            .collect())
    }
}

/// Repository for catalog Item operations
#[derive(Clone)]
pub struct MemoryItemRepository {
    inner: Arc<StoreInner>,
}

#[async_trait]
impl ItemRepositoryPort for MemoryItemRepository {
    async fn create(&self, draft: NewItem) -> Result<Item> {
        let id = self.inner.next_item_id.fetch_add(1, Ordering::Relaxed) + 1;
        let item = Item {
            id: ItemId::new(id),
            name: draft.name,
            health: draft.health,
            power: draft.power,
            price: draft.price,
            created_at: Utc::now(),
        };

        let mut items = self.inner.items.write().await;
        items.insert(item.id, item.clone());
        tracing::debug!(item_code = %item.id, "Stored catalog item: {}", item.name);
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>> {
        let items = self.inner.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>> {
        let items = self.inner.items.read().await;
        Ok(items.values().find(|i| i.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let items = self.inner.items.read().await;
        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by_key(|i| i.id);
        Ok(all)
    }

    async fn update(&self, item: &Item) -> Result<()> {
        let mut items = self.inner.items.write().await;
        match items.get_mut(&item.id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(())
            }
            None => bail!("item {} is not persisted", item.id),
        }
    }
}
