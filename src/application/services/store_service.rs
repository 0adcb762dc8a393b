//! Store Service - Orchestrates buy and sell baskets
//!
//! Both operations are two-pass: a read-only validation pass that prices the
//! whole basket, then a commit pass applied to a working copy of the
//! character aggregate and persisted with a single `update`. One bad line
//! rejects the whole basket. Repeated item codes in a basket are merged into
//! one cumulative line first, so duplicates never race against a stale
//! snapshot of the same inventory entry.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::dto::{PurchaseReceipt, SaleReceipt};
use crate::application::ports::outbound::{CharacterRepositoryPort, ItemRepositoryPort};
use crate::domain::entities::Character;
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::{CharacterId, ItemId, UserId};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::locks::CharacterLockRegistry;

/// One basket line: an item code and a unit count
///
/// Counts are positive by the time they reach the engine; the validation
/// collaborator rejects zero and negative counts at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct TradeLine {
    pub item_code: ItemId,
    pub count: u32,
}

/// Store service trait defining the application use cases
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Buy a basket of items; debits the total price and fills the inventory
    async fn buy(
        &self,
        actor: UserId,
        character_id: CharacterId,
        basket: Vec<TradeLine>,
    ) -> GameResult<PurchaseReceipt>;

    /// Sell a basket of items back at the configured rate
    async fn sell(
        &self,
        actor: UserId,
        character_id: CharacterId,
        basket: Vec<TradeLine>,
    ) -> GameResult<SaleReceipt>;
}

/// Default implementation of StoreService
pub struct StoreServiceImpl {
    characters: Arc<dyn CharacterRepositoryPort>,
    items: Arc<dyn ItemRepositoryPort>,
    locks: Arc<CharacterLockRegistry>,
    config: AppConfig,
}

impl StoreServiceImpl {
    pub fn new(
        characters: Arc<dyn CharacterRepositoryPort>,
        items: Arc<dyn ItemRepositoryPort>,
        locks: Arc<CharacterLockRegistry>,
        config: AppConfig,
    ) -> Self {
        Self {
            characters,
            items,
            locks,
            config,
        }
    }

    /// Merge repeated item codes into one cumulative count per code.
    fn merge_basket(basket: Vec<TradeLine>) -> GameResult<BTreeMap<ItemId, u32>> {
        if basket.is_empty() {
            return Err(GameError::bad_request("basket is empty"));
        }
        let mut merged: BTreeMap<ItemId, u32> = BTreeMap::new();
        for line in basket {
            *merged.entry(line.item_code).or_insert(0) += line.count;
        }
        Ok(merged)
    }

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
}

#[async_trait]
impl StoreService for StoreServiceImpl {
    #[instrument(skip(self, basket), fields(character_id = %character_id, lines = basket.len()))]
    async fn buy(
        &self,
        actor: UserId,
        character_id: CharacterId,
        basket: Vec<TradeLine>,
    ) -> GameResult<PurchaseReceipt> {
        let merged = Self::merge_basket(basket)?;

        let _guard = self.locks.acquire(character_id).await;
        let mut character = self.load_owned(actor, character_id).await?;

        // Validation pass: price every line before touching anything.
        let mut total_price: u64 = 0;
        for (&item_code, &count) in &merged {
            let item = self
                .items
                .get(item_code)
                .await?
                .ok_or_else(|| GameError::not_found(format!("item {item_code} does not exist")))?;
            total_price += item.price * u64::from(count);
        }

        if character.money < total_price {
            return Err(GameError::bad_request(format!(
                "not enough money: have {}, need {total_price}",
                character.money
            )));
        }

        // Commit pass on the working copy.
        for (&item_code, &count) in &merged {
            character.inventory.add(item_code, count);
        }
        character.debit(total_price)?;

        self.characters.update(&character).await?;

        info!(
            character_id = %character_id,
            total_price,
            money = character.money,
            "Purchased {} line(s)",
            merged.len()
        );
        Ok(PurchaseReceipt {
            money: character.money,
        })
    }

    #[instrument(skip(self, basket), fields(character_id = %character_id, lines = basket.len()))]
    async fn sell(
        &self,
        actor: UserId,
        character_id: CharacterId,
        basket: Vec<TradeLine>,
    ) -> GameResult<SaleReceipt> {
        let merged = Self::merge_basket(basket)?;

        let _guard = self.locks.acquire(character_id).await;
        let mut character = self.load_owned(actor, character_id).await?;

        // Validation pass: every line must be fully covered by the inventory
        // and priced before anything is removed.
        let mut payout: u64 = 0;
        for (&item_code, &count) in &merged {
            if character.inventory.amount_of(item_code) < count {
                return Err(GameError::bad_request(format!(
                    "sell request rejected: not enough of item {item_code}"
                )));
            }
            let item = self
                .items
                .get(item_code)
                .await?
                .ok_or_else(|| GameError::not_found(format!("item {item_code} does not exist")))?;
            payout += item.sell_price(self.config.sell_rate_percent) * u64::from(count);
        }

        // Commit pass on the working copy.
        for (&item_code, &count) in &merged {
            character.inventory.remove(item_code, count)?;
        }
        character.credit(payout);

        self.characters.update(&character).await?;

        info!(
            character_id = %character_id,
            payout,
            money = character.money,
            "Sold {} line(s)",
            merged.len()
        );
        Ok(SaleReceipt {
            money: character.money,
        })
    }
}
