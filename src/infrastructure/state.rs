//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{
    CharacterServiceImpl, EarningsServiceImpl, EquipmentServiceImpl, InventoryServiceImpl,
    ItemServiceImpl, StoreServiceImpl,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::locks::CharacterLockRegistry;
use crate::infrastructure::persistence::MemoryStore;

/// Shared application state
///
/// A transport adapter embeds one `AppState` and calls the services; the
/// store and the lock registry are shared across all of them.
pub struct AppState {
    pub config: AppConfig,
    pub store: MemoryStore,
    pub locks: Arc<CharacterLockRegistry>,
    // Application services
    pub character_service: CharacterServiceImpl,
    pub item_service: ItemServiceImpl,
    pub inventory_service: InventoryServiceImpl,
    pub equipment_service: EquipmentServiceImpl,
    pub store_service: StoreServiceImpl,
    pub earnings_service: EarningsServiceImpl,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let store = MemoryStore::new();
        let locks = Arc::new(CharacterLockRegistry::new());

        let characters = Arc::new(store.characters());
        let items = Arc::new(store.items());

        let character_service =
            CharacterServiceImpl::new(characters.clone(), locks.clone(), config.clone());
        let item_service = ItemServiceImpl::new(items.clone(), characters.clone());
        let inventory_service = InventoryServiceImpl::new(characters.clone(), items.clone());
        let equipment_service =
            EquipmentServiceImpl::new(characters.clone(), items.clone(), locks.clone());
        let store_service = StoreServiceImpl::new(
            characters.clone(),
            items.clone(),
            locks.clone(),
            config.clone(),
        );
        let earnings_service =
            EarningsServiceImpl::new(characters.clone(), locks.clone(), config.clone());

        Ok(Self {
            config,
            store,
            locks,
            character_service,
            item_service,
            inventory_service,
            equipment_service,
            store_service,
            earnings_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{
        CharacterService, CreateItemRequest, EarningsService, EquipmentService, InventoryService,
        ItemService, StoreService, TradeLine,
    };
    use crate::domain::value_objects::UserId;

    /// Full lifecycle: create, earn, buy, equip, sell, unequip.
    #[tokio::test]
    async fn economy_lifecycle_stays_consistent() {
        let state = AppState::new(AppConfig::default()).await.unwrap();
        let user = UserId::new();

        let created = state
            .character_service
            .create_character(user, "Aranya".to_string())
            .await
            .unwrap();
        let character_id = created.character_id;

        let helm = state
            .item_service
            .create_item(CreateItemRequest {
                name: "Iron Helm".to_string(),
                health: 20,
                power: 2,
                price: 2_000,
            })
            .await
            .unwrap();
        let blade = state
            .item_service
            .create_item(CreateItemRequest {
                name: "Iron Blade".to_string(),
                health: 0,
                power: 15,
                price: 3_500,
            })
            .await
            .unwrap();

        // 10_000 starting money + 100 earned
        let earned = state
            .earnings_service
            .earn(user, character_id)
            .await
            .unwrap();
        assert_eq!(earned.money, 10_100);

        // Buy 2 helms and 1 blade: 2*2000 + 3500 = 7500
        let bought = state
            .store_service
            .buy(
                user,
                character_id,
                vec![
                    TradeLine {
                        item_code: helm.item_code,
                        count: 2,
                    },
                    TradeLine {
                        item_code: blade.item_code,
                        count: 1,
                    },
                ],
            )
            .await
            .unwrap();
        assert_eq!(bought.money, 2_600);

        // Equip one helm: stats rise, one unit leaves the bag.
        let stats = state
            .equipment_service
            .equip(user, character_id, helm.item_code)
            .await
            .unwrap();
        assert_eq!(stats.health, 520);
        assert_eq!(stats.power, 102);

        let bag = state
            .inventory_service
            .list_inventory(user, character_id)
            .await
            .unwrap();
        let helm_line = bag
            .iter()
            .find(|l| l.item_code == helm.item_code)
            .unwrap();
        assert_eq!(helm_line.count, 1);

        // Sell the blade back: floor(3500 * 0.6) = 2100
        let sold = state
            .store_service
            .sell(
                user,
                character_id,
                vec![TradeLine {
                    item_code: blade.item_code,
                    count: 1,
                }],
            )
            .await
            .unwrap();
        assert_eq!(sold.money, 4_700);

        // Unequip restores base stats and the bag count.
        let stats = state
            .equipment_service
            .unequip(user, character_id, helm.item_code)
            .await
            .unwrap();
        assert_eq!(stats.health, 500);
        assert_eq!(stats.power, 100);

        let sheet = state
            .character_service
            .get_character(Some(user), character_id)
            .await
            .unwrap();
        assert_eq!(sheet.money, Some(4_700));
        assert_eq!(sheet.health, 500);
    }

    /// Two baskets racing against one character settle as if run one after
    /// the other.
    #[tokio::test]
    async fn concurrent_baskets_serialize_per_character() {
        let state = Arc::new(AppState::new(AppConfig::default()).await.unwrap());
        let user = UserId::new();

        let created = state
            .character_service
            .create_character(user, "Aranya".to_string())
            .await
            .unwrap();
        let character_id = created.character_id;

        let helm = state
            .item_service
            .create_item(CreateItemRequest {
                name: "Iron Helm".to_string(),
                health: 20,
                power: 2,
                price: 100,
            })
            .await
            .unwrap();

        let helm_code = helm.item_code;
        let mut handles = Vec::new();
        for _ in 0..10 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                state
                    .store_service
                    .buy(
                        user,
                        character_id,
                        vec![TradeLine {
                            item_code: helm_code,
                            count: 1,
                        }],
                    )
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let sheet = state
            .character_service
            .get_character(Some(user), character_id)
            .await
            .unwrap();
        assert_eq!(sheet.money, Some(10_000 - 10 * 100));

        let bag = state
            .inventory_service
            .list_inventory(user, character_id)
            .await
            .unwrap();
        assert_eq!(bag.len(), 1);
        assert_eq!(bag[0].count, 10);
    }
}
