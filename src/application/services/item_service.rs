//! Item Service - Administration and browsing of the shared item catalog
//!
//! Catalog entries are read-mostly: characters reference them from inventory
//! and equipment rows, so administrative edits are restricted to changes that
//! cannot desynchronize equipped characters' stats. Price is fixed at
//! creation and never editable.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dto::{ItemDetail, ItemSummary};
use crate::application::ports::outbound::{CharacterRepositoryPort, ItemRepositoryPort};
use crate::domain::entities::NewItem;
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::ItemId;

/// Request to create a new catalog item
#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    pub name: String,
    pub health: i64,
    pub power: i64,
    pub price: u64,
}

/// Request to edit an existing catalog item
///
/// Price is deliberately absent: the purchase price of a referenced item
/// never changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub health: Option<i64>,
    pub power: Option<i64>,
}

impl UpdateItemRequest {
    fn changes_stats(&self) -> bool {
        self.health.is_some() || self.power.is_some()
    }
}

/// Item catalog service trait defining the application use cases
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Create a catalog item with a unique name
    async fn create_item(&self, request: CreateItemRequest) -> GameResult<ItemDetail>;

    /// Get the full definition of one item
    async fn get_item(&self, id: ItemId) -> GameResult<ItemDetail>;

    /// List the catalog (code, name, price)
    async fn list_items(&self) -> GameResult<Vec<ItemSummary>>;

    /// Edit name and/or stat bonuses of an item
    async fn update_item(&self, id: ItemId, request: UpdateItemRequest) -> GameResult<ItemDetail>;
}

/// Default implementation of ItemService
pub struct ItemServiceImpl {
    items: Arc<dyn ItemRepositoryPort>,
    characters: Arc<dyn CharacterRepositoryPort>,
}

impl ItemServiceImpl {
    pub fn new(
        items: Arc<dyn ItemRepositoryPort>,
        characters: Arc<dyn CharacterRepositoryPort>,
    ) -> Self {
        Self { items, characters }
    }

    /// Business rules for item names (types were checked at the boundary)
    fn validate_name(name: &str) -> GameResult<()> {
        let trimmed = name.trim();
        if trimmed.len() < 2 || trimmed.len() > 30 {
            return Err(GameError::bad_request(
                "item name must be between 2 and 30 characters",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    #[instrument(skip(self), fields(name = %request.name))]
    async fn create_item(&self, request: CreateItemRequest) -> GameResult<ItemDetail> {
        Self::validate_name(&request.name)?;
        let name = request.name.trim().to_string();

        if self.items.find_by_name(&name).await?.is_some() {
            return Err(GameError::conflict(format!("item {name} already exists")));
        }

        let item = self
            .items
            .create(NewItem {
                name,
                health: request.health,
                power: request.power,
                price: request.price,
            })
            .await?;

        info!(item_code = %item.id, "Created catalog item: {}", item.name);
        Ok(ItemDetail::from(&item))
    }

    #[instrument(skip(self))]
    async fn get_item(&self, id: ItemId) -> GameResult<ItemDetail> {
        debug!(item_code = %id, "Fetching catalog item");
        let item = self
            .items
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found(format!("item {id} does not exist")))?;
        Ok(ItemDetail::from(&item))
    }

    #[instrument(skip(self))]
    async fn list_items(&self) -> GameResult<Vec<ItemSummary>> {
        let items = self.items.list().await?;
        Ok(items.iter().map(ItemSummary::from).collect())
    }

    #[instrument(skip(self), fields(item_code = %id))]
    async fn update_item(&self, id: ItemId, request: UpdateItemRequest) -> GameResult<ItemDetail> {
        let mut item = self
            .items
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found(format!("item {id} does not exist")))?;

        // Stat edits on an equipped item would desynchronize the owners'
        // effective stats from the equipment sum.
        if request.changes_stats() {
            let equipping = self.characters.list_equipping(id).await?;
            if !equipping.is_empty() {
                return Err(GameError::conflict(format!(
                    "item {id} is currently equipped by {} character(s); stats cannot change",
                    equipping.len()
                )));
            }
        }

        if let Some(name) = request.name {
            Self::validate_name(&name)?;
            let name = name.trim().to_string();
            if let Some(existing) = self.items.find_by_name(&name).await? {
                if existing.id != id {
                    return Err(GameError::conflict(format!("item {name} already exists")));
                }
            }
            item.name = name;
        }
        if let Some(health) = request.health {
            item.health = health;
        }
        if let Some(power) = request.power {
            item.power = power;
        }

        self.items.update(&item).await?;

        info!(item_code = %id, "Updated catalog item: {}", item.name);
        Ok(ItemDetail::from(&item))
    }
}
