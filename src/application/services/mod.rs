//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles: repository ports
//! are injected, inputs arrive as already-type-checked request values, and
//! results are domain entities or DTOs paired with typed errors.
//!
//! Mutating services acquire the per-character lock before their first read,
//! so at most one equip/unequip/buy/sell/earn runs against a character at a
//! time.

pub mod character_service;
pub mod earnings_service;
pub mod equipment_service;
pub mod inventory_service;
pub mod item_service;
pub mod store_service;

pub use character_service::{CharacterService, CharacterServiceImpl};
pub use earnings_service::{EarningsService, EarningsServiceImpl};
pub use equipment_service::{EquipmentService, EquipmentServiceImpl};
pub use inventory_service::{InventoryService, InventoryServiceImpl};
pub use item_service::{CreateItemRequest, ItemService, ItemServiceImpl, UpdateItemRequest};
pub use store_service::{StoreService, StoreServiceImpl, TradeLine};
